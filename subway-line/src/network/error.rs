//! Network error types.

use crate::domain::{LineId, SectionError, StationId};

/// Errors that can occur when building or loading a network.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// Reading or writing the network file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The network file is not valid JSON for the expected shape
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Two stations share an id
    #[error("duplicate station {0}")]
    DuplicateStation(StationId),

    /// Two lines share an id
    #[error("duplicate {0}")]
    DuplicateLine(LineId),

    /// A section refers to a station the network does not know
    #[error("unknown station {0}")]
    UnknownStation(StationId),

    /// No line with this id
    #[error("unknown {0}")]
    UnknownLine(LineId),

    /// A line was listed without any sections
    #[error("{0} has no sections")]
    EmptyLine(LineId),

    /// A section edit on a line was rejected
    #[error("{line}: {source}")]
    Section {
        line: LineId,
        #[source]
        source: SectionError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = NetworkError::DuplicateStation(StationId::new(4));
        assert_eq!(err.to_string(), "duplicate station #4");

        let err = NetworkError::DuplicateLine(LineId::new(2));
        assert_eq!(err.to_string(), "duplicate line 2");

        let err = NetworkError::UnknownLine(LineId::new(9));
        assert_eq!(err.to_string(), "unknown line 9");

        let err = NetworkError::EmptyLine(LineId::new(3));
        assert_eq!(err.to_string(), "line 3 has no sections");

        let err = NetworkError::Section {
            line: LineId::new(1),
            source: SectionError::MinimumSections,
        };
        assert_eq!(
            err.to_string(),
            "line 1: a line must keep at least one section"
        );
    }
}
