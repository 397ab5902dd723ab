//! Distance-banded fares with line surcharges and age discounts.

use tracing::trace;

use super::{FareConfig, Rider};
use crate::domain::Sections;

/// Computes the fare a rider pays for a journey.
///
/// The fare is built in three steps:
///
/// 1. a distance fare: flat up to the base distance, then one step per
///    `middle_step` up to the middle distance, then a flat middle-band
///    amount plus one step per `long_step`;
/// 2. the highest surcharge among the lines the journey uses;
/// 3. an age discount, if the rider is in a discount band.
///
/// Journeys within the base distance pay the base fare with neither
/// surcharge nor discount.
///
/// # Examples
///
/// ```
/// use subway_line::domain::Sections;
/// use subway_line::fare::{FareCalculator, Rider};
///
/// let calculator = FareCalculator::default();
/// let sections = Sections::new();
///
/// assert_eq!(calculator.total_fare(&sections, 10, Rider::Anonymous), 1250);
/// assert_eq!(calculator.total_fare(&sections, 15, Rider::Anonymous), 1450);
/// assert_eq!(calculator.total_fare(&sections, 51, Rider::Anonymous), 2150);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FareCalculator {
    config: FareConfig,
}

impl FareCalculator {
    pub fn new(config: FareConfig) -> Self {
        Self { config }
    }

    /// The distance component of the fare, before surcharge and discount.
    ///
    /// Saturates at `u32::MAX` rather than overflowing.
    pub fn distance_fare(&self, distance: u32) -> u32 {
        let c = &self.config;

        if distance <= c.base_distance {
            return c.base_fare;
        }

        if distance > c.middle_distance {
            let over = distance - (c.middle_distance + 1);
            let steps = over.div_ceil(c.long_step) + 1;
            return c
                .base_fare
                .saturating_add(c.middle_band_fare)
                .saturating_add(steps.saturating_mul(c.step_fare));
        }

        let over = distance - (c.base_distance + 1);
        let steps = over.div_ceil(c.middle_step) + 1;
        c.base_fare.saturating_add(steps.saturating_mul(c.step_fare))
    }

    /// The fare for travelling `distance` over `sections`.
    ///
    /// `distance` is passed separately because a fare is often quoted for
    /// a distance computed elsewhere (e.g. a shortest path).
    pub fn total_fare(&self, sections: &Sections, distance: u32, rider: Rider) -> u32 {
        if distance <= self.config.base_distance {
            return self.config.base_fare;
        }

        let fare = self
            .distance_fare(distance)
            .saturating_add(sections.max_surcharge());
        let discounted = self.apply_discount(fare, rider);
        trace!(distance, fare, discounted, ?rider, "computed fare");
        discounted
    }

    /// The fare for travelling the whole of `sections`.
    pub fn journey_fare(&self, sections: &Sections, rider: Rider) -> u32 {
        self.total_fare(sections, sections.total_distance(), rider)
    }

    /// Applies the rider's age discount to a fare subtotal.
    pub fn apply_discount(&self, fare: u32, rider: Rider) -> u32 {
        let Some(age) = rider.age() else {
            return fare;
        };

        match self.config.discount_for(age) {
            Some(discount) => {
                let payable = u64::from(fare.saturating_sub(self.config.discount_deduction));
                u32::try_from(payable * u64::from(discount.rate_tenths) / 10).unwrap_or(u32::MAX)
            }
            None => fare,
        }
    }
}
