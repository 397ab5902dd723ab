//! Shortest journeys across the lines of a network.
//!
//! Every section of every line is an edge that can be travelled in either
//! direction. Dijkstra over those edges gives the cheapest station
//! sequence; the sections along it, turned to face the direction of travel,
//! form a path that the fare calculator can price like any line.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

use chrono::Duration;
use pathfinding::prelude::dijkstra;
use tracing::debug;

use super::Network;
use crate::domain::{Section, Sections, StationId};
use crate::fare::{FareCalculator, Rider};

/// What a journey is shortest by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathKind {
    #[default]
    Distance,
    Duration,
}

impl PathKind {
    fn weight(self, section: &Section) -> u32 {
        match self {
            PathKind::Distance => section.distance(),
            PathKind::Duration => section.duration(),
        }
    }
}

impl fmt::Display for PathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathKind::Distance => f.write_str("distance"),
            PathKind::Duration => f.write_str("duration"),
        }
    }
}

/// Error returned when parsing an unknown path kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid path kind {0:?}: expected \"distance\" or \"duration\"")]
pub struct InvalidPathKind(String);

impl FromStr for PathKind {
    type Err = InvalidPathKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "distance" => Ok(PathKind::Distance),
            "duration" => Ok(PathKind::Duration),
            _ => Err(InvalidPathKind(s.to_string())),
        }
    }
}

/// Errors from journey search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// Origin and destination are the same station
    #[error("origin and destination are both {0}")]
    SameStation(StationId),

    /// The station is not part of the network
    #[error("unknown station {0}")]
    UnknownStation(StationId),

    /// No sequence of sections joins the two stations
    #[error("no route from {from} to {to}")]
    NotConnected { from: StationId, to: StationId },
}

/// A journey found by [`JourneyFinder`].
#[derive(Debug, Clone)]
pub struct Journey {
    stations: Vec<StationId>,
    sections: Sections,
}

impl Journey {
    /// Stations in travel order, origin first.
    pub fn stations(&self) -> &[StationId] {
        &self.stations
    }

    /// The sections travelled, each facing the direction of travel.
    pub fn sections(&self) -> &Sections {
        &self.sections
    }

    pub fn distance(&self) -> u32 {
        self.sections.total_distance()
    }

    /// Travel time in minutes.
    pub fn duration(&self) -> u32 {
        self.sections.total_duration()
    }

    pub fn travel_time(&self) -> Duration {
        self.sections.travel_time()
    }

    /// The fare for this journey.
    pub fn fare(&self, calculator: &FareCalculator, rider: Rider) -> u32 {
        calculator.total_fare(&self.sections, self.distance(), rider)
    }
}

/// Finds cheapest journeys over a snapshot of a network.
///
/// The finder copies the sections it needs, so later edits to the network
/// are not seen; build a new finder after editing.
#[derive(Debug, Clone)]
pub struct JourneyFinder {
    known: HashSet<StationId>,
    /// Sections leaving each station, already facing away from it.
    edges: HashMap<StationId, Vec<Section>>,
}

impl JourneyFinder {
    pub fn new(network: &Network) -> Self {
        let known = network.stations().map(|s| s.id).collect();
        let mut edges: HashMap<StationId, Vec<Section>> = HashMap::new();

        for line in network.lines() {
            for section in line.sections() {
                edges
                    .entry(section.upstream())
                    .or_default()
                    .push(section.clone());
                edges
                    .entry(section.downstream())
                    .or_default()
                    .push(section.reversed());
            }
        }

        Self { known, edges }
    }

    /// Finds the cheapest journey from `from` to `to` by `kind`.
    ///
    /// # Errors
    ///
    /// - `SameStation` if `from == to`
    /// - `UnknownStation` if either station is not in the network
    /// - `NotConnected` if no route exists
    pub fn find(&self, from: StationId, to: StationId, kind: PathKind) -> Result<Journey, RouteError> {
        if from == to {
            return Err(RouteError::SameStation(from));
        }
        for id in [from, to] {
            if !self.known.contains(&id) {
                return Err(RouteError::UnknownStation(id));
            }
        }

        let (stations, cost) = dijkstra(
            &from,
            |station| {
                self.edges
                    .get(station)
                    .into_iter()
                    .flatten()
                    .map(move |s| (s.downstream(), kind.weight(s)))
            },
            |station| *station == to,
        )
        .ok_or(RouteError::NotConnected { from, to })?;

        let sections = stations
            .windows(2)
            .map(|pair| self.cheapest(pair[0], pair[1], kind))
            .collect::<Option<Vec<_>>>()
            .ok_or(RouteError::NotConnected { from, to })?;

        debug!(%from, %to, %kind, cost, hops = sections.len(), "found journey");

        Ok(Journey {
            stations,
            sections: Sections::from_sections(sections),
        })
    }

    /// The cheapest section running directly from `from` to `to`.
    fn cheapest(&self, from: StationId, to: StationId, kind: PathKind) -> Option<Section> {
        self.edges
            .get(&from)?
            .iter()
            .filter(|s| s.downstream() == to)
            .min_by_key(|s| kind.weight(s))
            .cloned()
    }
}
