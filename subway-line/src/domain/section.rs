//! Section types.
//!
//! A `Section` is one directed edge of a line: the track between two
//! adjacent stations, with its length and travel time.

use super::{LineRef, SectionError, StationId};

/// How an existing section is shortened when a new section splits it.
///
/// Inserting `A -> B` into a line that already has `A -> C` rewrites the
/// existing section to `B -> C`. The policy decides what `B -> C` measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitPolicy {
    /// The rewritten section takes the new section's distance and duration.
    #[default]
    Overwrite,
    /// The rewritten section keeps what is left over (`old - new`). The new
    /// section must be strictly shorter than the one it splits.
    Subtract,
}

impl SplitPolicy {
    /// Computes the `(distance, duration)` the split section is left with.
    ///
    /// # Errors
    ///
    /// Under `Subtract`, returns `SplitTooLong` if `new` is not strictly
    /// shorter than `existing`.
    pub fn remainder(self, existing: &Section, new: &Section) -> Result<(u32, u32), SectionError> {
        match self {
            SplitPolicy::Overwrite => Ok((new.distance, new.duration)),
            SplitPolicy::Subtract => {
                if new.distance >= existing.distance {
                    return Err(SectionError::SplitTooLong {
                        existing: existing.distance,
                        new: new.distance,
                    });
                }
                Ok((
                    existing.distance - new.distance,
                    existing.duration.saturating_sub(new.duration),
                ))
            }
        }
    }
}

/// A directed section of track between two stations on one line.
///
/// # Invariants
///
/// - `distance > 0`
/// - `upstream != downstream`
///
/// # Examples
///
/// ```
/// use subway_line::domain::{LineId, LineRef, Section, StationId};
///
/// let line = LineRef::new(LineId::new(2), 0);
/// let section = Section::new(line, StationId::new(1), StationId::new(2), 10, 5).unwrap();
/// assert_eq!(section.distance(), 10);
///
/// // Zero-length sections are rejected
/// assert!(Section::new(line, StationId::new(1), StationId::new(2), 0, 5).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    line: LineRef,
    upstream: StationId,
    downstream: StationId,
    distance: u32,
    duration: u32,
}

impl Section {
    /// Creates a section, validating its endpoints and distance.
    pub fn new(
        line: LineRef,
        upstream: StationId,
        downstream: StationId,
        distance: u32,
        duration: u32,
    ) -> Result<Self, SectionError> {
        if distance == 0 {
            return Err(SectionError::InvalidSection("distance must be positive"));
        }
        if upstream == downstream {
            return Err(SectionError::InvalidSection(
                "upstream and downstream must differ",
            ));
        }

        Ok(Self {
            line,
            upstream,
            downstream,
            distance,
            duration,
        })
    }

    pub fn line(&self) -> LineRef {
        self.line
    }

    pub fn upstream(&self) -> StationId {
        self.upstream
    }

    pub fn downstream(&self) -> StationId {
        self.downstream
    }

    pub fn distance(&self) -> u32 {
        self.distance
    }

    /// Travel time in minutes.
    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// The same track travelled the other way.
    pub fn reversed(&self) -> Self {
        Self {
            line: self.line,
            upstream: self.downstream,
            downstream: self.upstream,
            distance: self.distance,
            duration: self.duration,
        }
    }

    /// Joins `self` (ending at a station) with `next` (starting there).
    ///
    /// The merged section keeps `next`'s line. Lengths saturate at
    /// `u32::MAX`.
    pub(crate) fn merge(&self, next: &Section) -> Self {
        debug_assert_eq!(self.downstream, next.upstream);
        Self {
            line: next.line,
            upstream: self.upstream,
            downstream: next.downstream,
            distance: self.distance.saturating_add(next.distance),
            duration: self.duration.saturating_add(next.duration),
        }
    }

    pub(crate) fn move_upstream(&mut self, upstream: StationId, distance: u32, duration: u32) {
        self.upstream = upstream;
        self.distance = distance;
        self.duration = duration;
    }

    pub(crate) fn move_downstream(&mut self, downstream: StationId, distance: u32, duration: u32) {
        self.downstream = downstream;
        self.distance = distance;
        self.duration = duration;
    }

    pub(crate) fn set_line(&mut self, line: LineRef) {
        self.line = line;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LineId;

    fn line() -> LineRef {
        LineRef::new(LineId::new(1), 0)
    }

    fn section(up: u64, down: u64, distance: u32, duration: u32) -> Section {
        Section::new(line(), StationId::new(up), StationId::new(down), distance, duration).unwrap()
    }

    #[test]
    fn rejects_zero_distance() {
        let err = Section::new(line(), StationId::new(1), StationId::new(2), 0, 3).unwrap_err();
        assert_eq!(err, SectionError::InvalidSection("distance must be positive"));
    }

    #[test]
    fn rejects_loop() {
        let err = Section::new(line(), StationId::new(1), StationId::new(1), 4, 3).unwrap_err();
        assert_eq!(
            err,
            SectionError::InvalidSection("upstream and downstream must differ")
        );
    }

    #[test]
    fn zero_duration_is_allowed() {
        assert!(Section::new(line(), StationId::new(1), StationId::new(2), 4, 0).is_ok());
    }

    #[test]
    fn reversed_swaps_endpoints() {
        let rev = section(1, 2, 10, 5).reversed();
        assert_eq!(rev.upstream(), StationId::new(2));
        assert_eq!(rev.downstream(), StationId::new(1));
        assert_eq!(rev.distance(), 10);
        assert_eq!(rev.duration(), 5);
    }

    #[test]
    fn merge_sums_distance_and_duration() {
        let merged = section(1, 2, 10, 5).merge(&section(2, 3, 7, 4));
        assert_eq!(merged.upstream(), StationId::new(1));
        assert_eq!(merged.downstream(), StationId::new(3));
        assert_eq!(merged.distance(), 17);
        assert_eq!(merged.duration(), 9);
    }

    #[test]
    fn merge_saturates_instead_of_overflowing() {
        let first = section(1, 2, 3_000_000_000, u32::MAX);
        let merged = first.merge(&section(2, 3, 3_000_000_000, 1));
        assert_eq!(merged.distance(), u32::MAX);
        assert_eq!(merged.duration(), u32::MAX);
    }

    #[test]
    fn overwrite_takes_new_values() {
        let existing = section(1, 3, 10, 6);
        let new = section(1, 2, 4, 2);
        assert_eq!(SplitPolicy::Overwrite.remainder(&existing, &new), Ok((4, 2)));
    }

    #[test]
    fn subtract_keeps_remainder() {
        let existing = section(1, 3, 10, 6);
        let new = section(1, 2, 4, 2);
        assert_eq!(SplitPolicy::Subtract.remainder(&existing, &new), Ok((6, 4)));
    }

    #[test]
    fn subtract_duration_saturates() {
        let existing = section(1, 3, 10, 1);
        let new = section(1, 2, 4, 2);
        assert_eq!(SplitPolicy::Subtract.remainder(&existing, &new), Ok((6, 0)));
    }

    #[test]
    fn subtract_rejects_long_split() {
        let existing = section(1, 3, 10, 6);
        let new = section(1, 2, 10, 2);
        assert_eq!(
            SplitPolicy::Subtract.remainder(&existing, &new),
            Err(SectionError::SplitTooLong {
                existing: 10,
                new: 10
            })
        );
    }
}
