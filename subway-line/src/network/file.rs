//! JSON network files.
//!
//! A network file lists stations and, per line, its sections in the order
//! they should be added:
//!
//! ```json
//! {
//!   "stations": [{"id": 1, "name": "Gangnam"}, {"id": 2, "name": "Yeoksam"}],
//!   "lines": [{
//!     "id": 2, "name": "Line 2", "color": "green", "surcharge": 0,
//!     "sections": [{"upstream": 1, "downstream": 2, "distance": 10, "duration": 5}]
//!   }]
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::{Network, NetworkError};
use crate::domain::{Line, LineId, SplitPolicy, Station, StationId};

/// A section as written in a network file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionRecord {
    pub upstream: StationId,
    pub downstream: StationId,
    pub distance: u32,
    #[serde(default)]
    pub duration: u32,
}

/// A line as written in a network file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRecord {
    pub id: LineId,
    pub name: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub surcharge: u32,
    pub sections: Vec<SectionRecord>,
}

impl LineRecord {
    /// Builds the line, adding the sections in file order.
    fn into_line(self, split_policy: SplitPolicy) -> Result<Line, NetworkError> {
        let id = self.id;
        let section_err = |source| NetworkError::Section { line: id, source };

        let mut records = self.sections.into_iter();
        let first = records.next().ok_or(NetworkError::EmptyLine(id))?;

        let mut line = Line::new(
            id,
            self.name,
            self.color,
            self.surcharge,
            first.upstream,
            first.downstream,
            first.distance,
            first.duration,
        )
        .map_err(section_err)?
        .with_split_policy(split_policy);

        for record in records {
            line.add_section(
                record.upstream,
                record.downstream,
                record.distance,
                record.duration,
            )
            .map_err(section_err)?;
        }

        Ok(line)
    }
}

/// The contents of a network file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkFile {
    pub stations: Vec<Station>,
    #[serde(default)]
    pub lines: Vec<LineRecord>,
}

impl NetworkFile {
    /// Parses a network file from a JSON string.
    pub fn parse(json: &str) -> Result<Self, NetworkError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a network file.
    pub fn read(path: impl AsRef<Path>) -> Result<Self, NetworkError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Writes this file as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), NetworkError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Snapshots a network. Each line's sections are written head to tail.
    pub fn from_network(network: &Network) -> Self {
        let mut stations: Vec<Station> = network.stations().cloned().collect();
        stations.sort_by_key(|s| s.id);

        let lines = network
            .lines()
            .map(|line| {
                let order = line.stations();
                let mut sections: Vec<SectionRecord> = line
                    .sections()
                    .iter()
                    .map(|s| SectionRecord {
                        upstream: s.upstream(),
                        downstream: s.downstream(),
                        distance: s.distance(),
                        duration: s.duration(),
                    })
                    .collect();
                sections.sort_by_key(|s| order.iter().position(|id| *id == s.upstream));

                LineRecord {
                    id: line.id(),
                    name: line.name().to_string(),
                    color: line.color().to_string(),
                    surcharge: line.surcharge(),
                    sections,
                }
            })
            .collect();

        Self { stations, lines }
    }

    /// Builds a network, validating every station and section.
    pub fn into_network(self, split_policy: SplitPolicy) -> Result<Network, NetworkError> {
        let mut network = Network::new();

        for station in self.stations {
            network.add_station(station)?;
        }
        for record in self.lines {
            network.add_line(record.into_line(split_policy)?)?;
        }

        info!(
            stations = network.stations().count(),
            lines = network.lines().count(),
            "loaded network"
        );
        Ok(network)
    }
}

impl Network {
    /// Loads a network from a JSON file.
    pub fn from_file(path: impl AsRef<Path>, split_policy: SplitPolicy) -> Result<Self, NetworkError> {
        NetworkFile::read(path)?.into_network(split_policy)
    }

    /// Loads a network from a JSON string.
    pub fn from_json(json: &str, split_policy: SplitPolicy) -> Result<Self, NetworkError> {
        NetworkFile::parse(json)?.into_network(split_policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SectionError;
    use tempfile::tempdir;

    const SAMPLE: &str = r#"{
        "stations": [
            {"id": 1, "name": "Gangnam"},
            {"id": 2, "name": "Yeoksam"},
            {"id": 3, "name": "Seolleung"}
        ],
        "lines": [{
            "id": 2,
            "name": "Line 2",
            "color": "green",
            "surcharge": 500,
            "sections": [
                {"upstream": 2, "downstream": 3, "distance": 7, "duration": 4},
                {"upstream": 1, "downstream": 2, "distance": 10, "duration": 5}
            ]
        }]
    }"#;

    #[test]
    fn loads_sample() {
        let network = Network::from_json(SAMPLE, SplitPolicy::Overwrite).unwrap();
        let line = network.line(LineId::new(2)).unwrap();

        assert_eq!(
            network.station_names(&line.stations()),
            vec!["Gangnam", "Yeoksam", "Seolleung"]
        );
        assert_eq!(line.surcharge(), 500);
        assert_eq!(line.sections().total_distance(), 17);
    }

    #[test]
    fn optional_fields_default() {
        let json = r#"{
            "stations": [{"id": 1, "name": "A"}, {"id": 2, "name": "B"}],
            "lines": [{"id": 1, "name": "L", "sections": [{"upstream": 1, "downstream": 2, "distance": 3}]}]
        }"#;
        let network = Network::from_json(json, SplitPolicy::Overwrite).unwrap();
        let line = network.line(LineId::new(1)).unwrap();
        assert_eq!(line.surcharge(), 0);
        assert_eq!(line.color(), "");
        assert_eq!(line.sections().total_duration(), 0);
    }

    #[test]
    fn rejects_line_without_sections() {
        let json = r#"{"stations": [], "lines": [{"id": 4, "name": "L", "sections": []}]}"#;
        let err = Network::from_json(json, SplitPolicy::Overwrite).unwrap_err();
        assert!(matches!(err, NetworkError::EmptyLine(id) if id == LineId::new(4)));
    }

    #[test]
    fn rejects_disconnected_section() {
        let json = r#"{
            "stations": [{"id": 1, "name": "A"}, {"id": 2, "name": "B"},
                         {"id": 3, "name": "C"}, {"id": 4, "name": "D"}],
            "lines": [{"id": 1, "name": "L", "sections": [
                {"upstream": 1, "downstream": 2, "distance": 3},
                {"upstream": 3, "downstream": 4, "distance": 3}
            ]}]
        }"#;
        let err = Network::from_json(json, SplitPolicy::Overwrite).unwrap_err();
        assert!(matches!(
            err,
            NetworkError::Section {
                source: SectionError::Disconnected { .. },
                ..
            }
        ));
    }

    #[test]
    fn rejects_unknown_station() {
        let json = r#"{
            "stations": [{"id": 1, "name": "A"}],
            "lines": [{"id": 1, "name": "L", "sections": [{"upstream": 1, "downstream": 2, "distance": 3}]}]
        }"#;
        let err = Network::from_json(json, SplitPolicy::Overwrite).unwrap_err();
        assert!(matches!(err, NetworkError::UnknownStation(id) if id == StationId::new(2)));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = Network::from_json("{ not json", SplitPolicy::Overwrite).unwrap_err();
        assert!(matches!(err, NetworkError::Json(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Network::from_file("/nonexistent/network.json", SplitPolicy::Overwrite)
            .unwrap_err();
        assert!(matches!(err, NetworkError::Io(_)));
    }

    #[test]
    fn loads_bundled_example() {
        let json = include_str!("../../network.example.json");
        let network = Network::from_json(json, SplitPolicy::Overwrite).unwrap();
        assert_eq!(network.lines().count(), 3);
        assert_eq!(
            network.line(LineId::new(3)).unwrap().stations(),
            vec![StationId::new(1), StationId::new(4), StationId::new(3)]
        );
    }

    #[test]
    fn save_writes_sections_head_to_tail() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("network.json");

        let network = Network::from_json(SAMPLE, SplitPolicy::Overwrite).unwrap();
        NetworkFile::from_network(&network).save(&path).unwrap();

        let file = NetworkFile::read(&path).unwrap();
        let sections = &file.lines[0].sections;
        assert_eq!(sections[0].upstream, StationId::new(1));
        assert_eq!(sections[1].upstream, StationId::new(2));
        assert_eq!(file.stations.len(), 3);

        let reloaded = file.into_network(SplitPolicy::Overwrite).unwrap();
        let line = reloaded.line(LineId::new(2)).unwrap();
        assert_eq!(line.sections().total_distance(), 17);
    }
}
