//! The stations and lines of a subway network.
//!
//! A `Network` is the collaborator that owns lines and checks that the
//! stations their sections name actually exist. It also answers journey
//! questions across lines (see [`JourneyFinder`]).

mod error;
mod file;
mod journey;

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::domain::{Line, LineId, Station, StationId};

pub use error::NetworkError;
pub use file::{LineRecord, NetworkFile, SectionRecord};
pub use journey::{InvalidPathKind, Journey, JourneyFinder, PathKind, RouteError};

/// Stations and lines, keyed by id.
#[derive(Debug, Clone, Default)]
pub struct Network {
    stations: HashMap<StationId, Station>,
    lines: BTreeMap<LineId, Line>,
}

impl Network {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a station.
    pub fn add_station(&mut self, station: Station) -> Result<(), NetworkError> {
        if self.stations.contains_key(&station.id) {
            return Err(NetworkError::DuplicateStation(station.id));
        }
        self.stations.insert(station.id, station);
        Ok(())
    }

    /// Registers a line. Every station it runs through must be known.
    pub fn add_line(&mut self, line: Line) -> Result<(), NetworkError> {
        if self.lines.contains_key(&line.id()) {
            return Err(NetworkError::DuplicateLine(line.id()));
        }
        if let Some(unknown) = line
            .stations()
            .into_iter()
            .find(|id| !self.stations.contains_key(id))
        {
            return Err(NetworkError::UnknownStation(unknown));
        }

        debug!(line = %line.id(), name = line.name(), "added line");
        self.lines.insert(line.id(), line);
        Ok(())
    }

    /// Adds a section to a line after checking both stations exist.
    pub fn add_section(
        &mut self,
        line: LineId,
        upstream: StationId,
        downstream: StationId,
        distance: u32,
        duration: u32,
    ) -> Result<(), NetworkError> {
        for id in [upstream, downstream] {
            if !self.stations.contains_key(&id) {
                return Err(NetworkError::UnknownStation(id));
            }
        }

        self.line_mut(line)?
            .add_section(upstream, downstream, distance, duration)
            .map_err(|source| NetworkError::Section { line, source })
    }

    /// Removes a station from one line.
    pub fn remove_station(&mut self, line: LineId, station: StationId) -> Result<(), NetworkError> {
        self.line_mut(line)?
            .remove_station(station)
            .map_err(|source| NetworkError::Section { line, source })
    }

    fn line_mut(&mut self, id: LineId) -> Result<&mut Line, NetworkError> {
        self.lines.get_mut(&id).ok_or(NetworkError::UnknownLine(id))
    }

    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.stations.get(&id)
    }

    /// Returns all stations, in no particular order.
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.stations.values()
    }

    pub fn line(&self, id: LineId) -> Option<&Line> {
        self.lines.get(&id)
    }

    /// Returns all lines, ordered by id.
    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.lines.values()
    }

    /// Looks up station names for a sequence of ids.
    ///
    /// Unknown ids are shown by their id.
    pub fn station_names(&self, ids: &[StationId]) -> Vec<String> {
        ids.iter()
            .map(|id| match self.station(*id) {
                Some(station) => station.name.clone(),
                None => id.to_string(),
            })
            .collect()
    }
}
