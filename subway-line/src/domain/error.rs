//! Domain error types.
//!
//! These errors represent validation failures when editing the sections of
//! a line. All of them are raised before any state is changed.

use super::StationId;

/// Errors raised while building or editing a line's sections.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SectionError {
    /// Both endpoints of the proposed section are already on the path
    #[error("section {upstream} -> {downstream} is already registered")]
    Duplicate {
        upstream: StationId,
        downstream: StationId,
    },

    /// Neither endpoint of the proposed section touches the path
    #[error("section {upstream} -> {downstream} cannot be registered: it does not touch the line")]
    Disconnected {
        upstream: StationId,
        downstream: StationId,
    },

    /// Removal would leave the line without sections
    #[error("a line must keep at least one section")]
    MinimumSections,

    /// A split would leave a remainder of zero or negative length
    #[error("section of distance {new} cannot split a section of distance {existing}")]
    SplitTooLong { existing: u32, new: u32 },

    /// The section itself is malformed
    #[error("invalid section: {0}")]
    InvalidSection(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let up = StationId::new(1);
        let down = StationId::new(2);

        let err = SectionError::Duplicate {
            upstream: up,
            downstream: down,
        };
        assert_eq!(err.to_string(), "section #1 -> #2 is already registered");

        let err = SectionError::Disconnected {
            upstream: up,
            downstream: down,
        };
        assert_eq!(
            err.to_string(),
            "section #1 -> #2 cannot be registered: it does not touch the line"
        );

        let err = SectionError::MinimumSections;
        assert_eq!(err.to_string(), "a line must keep at least one section");

        let err = SectionError::SplitTooLong {
            existing: 5,
            new: 7,
        };
        assert_eq!(
            err.to_string(),
            "section of distance 7 cannot split a section of distance 5"
        );

        let err = SectionError::InvalidSection("distance must be positive");
        assert_eq!(err.to_string(), "invalid section: distance must be positive");
    }
}
