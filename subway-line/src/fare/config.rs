//! Fare table configuration.

/// A discount for riders whose age falls in `[min_age, max_age)`.
///
/// The discounted fare is `(fare - deduction) * rate_tenths / 10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeDiscount {
    pub min_age: u32,
    pub max_age: u32,
    pub rate_tenths: u32,
}

impl AgeDiscount {
    pub const fn new(min_age: u32, max_age: u32, rate_tenths: u32) -> Self {
        Self {
            min_age,
            max_age,
            rate_tenths,
        }
    }

    /// Returns true if `age` is inside this band.
    pub fn applies_to(&self, age: u32) -> bool {
        self.min_age <= age && age < self.max_age
    }
}

/// Configuration parameters for fare calculation.
#[derive(Debug, Clone)]
pub struct FareConfig {
    /// Fare for any journey up to `base_distance`.
    pub base_fare: u32,

    /// Distance covered by the base fare (inclusive).
    pub base_distance: u32,

    /// Upper end of the middle band (inclusive).
    pub middle_distance: u32,

    /// Distance per extra charge step in the middle band.
    pub middle_step: u32,

    /// Distance per extra charge step beyond the middle band.
    pub long_step: u32,

    /// Amount charged per step.
    pub step_fare: u32,

    /// Flat amount added for reaching the long band.
    pub middle_band_fare: u32,

    /// Deducted before an age discount rate is applied.
    pub discount_deduction: u32,

    /// Age discounts, checked in order; the first match applies.
    pub discounts: Vec<AgeDiscount>,
}

impl Default for FareConfig {
    fn default() -> Self {
        Self {
            base_fare: 1250,
            base_distance: 10,
            middle_distance: 50,
            middle_step: 5,
            long_step: 8,
            step_fare: 100,
            middle_band_fare: 800,
            discount_deduction: 350,
            discounts: vec![
                AgeDiscount::new(6, 13, 5),  // children
                AgeDiscount::new(13, 20, 8), // teenagers
            ],
        }
    }
}

impl FareConfig {
    /// Returns the discount band covering `age`, if any.
    pub fn discount_for(&self, age: u32) -> Option<&AgeDiscount> {
        self.discounts.iter().find(|d| d.applies_to(age))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = FareConfig::default();

        assert_eq!(config.base_fare, 1250);
        assert_eq!(config.base_distance, 10);
        assert_eq!(config.middle_distance, 50);
        assert_eq!(config.middle_step, 5);
        assert_eq!(config.long_step, 8);
        assert_eq!(config.step_fare, 100);
        assert_eq!(config.middle_band_fare, 800);
        assert_eq!(config.discount_deduction, 350);
        assert_eq!(config.discounts.len(), 2);
    }

    #[test]
    fn discount_bands_are_half_open() {
        let config = FareConfig::default();

        assert_eq!(config.discount_for(5), None);
        assert_eq!(config.discount_for(6).map(|d| d.rate_tenths), Some(5));
        assert_eq!(config.discount_for(12).map(|d| d.rate_tenths), Some(5));
        assert_eq!(config.discount_for(13).map(|d| d.rate_tenths), Some(8));
        assert_eq!(config.discount_for(19).map(|d| d.rate_tenths), Some(8));
        assert_eq!(config.discount_for(20), None);
    }
}
