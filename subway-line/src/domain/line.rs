//! Line types.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Section, SectionError, Sections, SplitPolicy, StationId};

/// Unique key of a line.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineId(u64);

impl LineId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Debug for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineId({})", self.0)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}", self.0)
    }
}

/// What a section needs to know about the line it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineRef {
    id: LineId,
    surcharge: u32,
}

impl LineRef {
    pub const fn new(id: LineId, surcharge: u32) -> Self {
        Self { id, surcharge }
    }

    pub fn id(&self) -> LineId {
        self.id
    }

    /// Extra fare charged for a journey that uses this line.
    pub fn surcharge(&self) -> u32 {
        self.surcharge
    }
}

/// A transit line and the sections it runs over.
///
/// A line always has at least one section: [`Line::new`] creates the first
/// one, and [`Sections::remove_station`] refuses to remove the last.
///
/// # Examples
///
/// ```
/// use subway_line::domain::{Line, LineId, StationId};
///
/// let (a, b, c) = (StationId::new(1), StationId::new(2), StationId::new(3));
/// let mut line = Line::new(LineId::new(2), "Line 2", "green", 0, a, b, 10, 5).unwrap();
/// line.add_section(b, c, 7, 4).unwrap();
///
/// assert_eq!(line.stations(), vec![a, b, c]);
/// ```
#[derive(Debug, Clone)]
pub struct Line {
    id: LineId,
    name: String,
    color: String,
    surcharge: u32,
    sections: Sections,
}

impl Line {
    /// Creates a line with its first section.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: LineId,
        name: impl Into<String>,
        color: impl Into<String>,
        surcharge: u32,
        upstream: StationId,
        downstream: StationId,
        distance: u32,
        duration: u32,
    ) -> Result<Self, SectionError> {
        let line = LineRef::new(id, surcharge);
        let first = Section::new(line, upstream, downstream, distance, duration)?;
        let sections = Sections::from_sections(vec![first]);

        Ok(Self {
            id,
            name: name.into(),
            color: color.into(),
            surcharge,
            sections,
        })
    }

    /// Sets how splitting inserts shorten the section they split.
    pub fn with_split_policy(mut self, split_policy: SplitPolicy) -> Self {
        self.sections = self.sections.with_split_policy(split_policy);
        self
    }

    pub fn id(&self) -> LineId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn surcharge(&self) -> u32 {
        self.surcharge
    }

    /// The reference stored on each of this line's sections.
    pub fn line_ref(&self) -> LineRef {
        LineRef::new(self.id, self.surcharge)
    }

    pub fn sections(&self) -> &Sections {
        &self.sections
    }

    /// Stations from head to tail.
    pub fn stations(&self) -> Vec<StationId> {
        self.sections.stations()
    }

    /// Adds a section to this line. See [`Sections::add_section`].
    pub fn add_section(
        &mut self,
        upstream: StationId,
        downstream: StationId,
        distance: u32,
        duration: u32,
    ) -> Result<(), SectionError> {
        let section = Section::new(self.line_ref(), upstream, downstream, distance, duration)?;
        self.sections.add_section(section)
    }

    /// Removes a station from this line. See [`Sections::remove_station`].
    pub fn remove_station(&mut self, station: StationId) -> Result<(), SectionError> {
        self.sections.remove_station(station)
    }

    /// Renames the line and changes its colour and surcharge.
    ///
    /// The new surcharge applies to every existing section.
    pub fn update(&mut self, name: impl Into<String>, color: impl Into<String>, surcharge: u32) {
        self.name = name.into();
        self.color = color.into();
        if surcharge != self.surcharge {
            self.surcharge = surcharge;
            self.sections.relabel(self.line_ref());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: StationId = StationId::new(1);
    const B: StationId = StationId::new(2);
    const C: StationId = StationId::new(3);

    fn line() -> Line {
        Line::new(LineId::new(7), "Line 7", "olive", 300, A, B, 10, 5).unwrap()
    }

    #[test]
    fn new_line_has_one_section() {
        let line = line();
        assert_eq!(line.sections().len(), 1);
        assert_eq!(line.stations(), vec![A, B]);
        assert_eq!(line.name(), "Line 7");
        assert_eq!(line.color(), "olive");
    }

    #[test]
    fn new_line_rejects_invalid_section() {
        let err = Line::new(LineId::new(1), "x", "red", 0, A, A, 10, 5).unwrap_err();
        assert!(matches!(err, SectionError::InvalidSection(_)));
    }

    #[test]
    fn sections_carry_line_surcharge() {
        let mut line = line();
        line.add_section(B, C, 7, 4).unwrap();
        assert!(line.sections().iter().all(|s| s.line().surcharge() == 300));
        assert_eq!(line.sections().max_surcharge(), 300);
    }

    #[test]
    fn update_relabels_sections() {
        let mut line = line();
        line.add_section(B, C, 7, 4).unwrap();
        line.update("Line 7 Express", "khaki", 500);

        assert_eq!(line.name(), "Line 7 Express");
        assert_eq!(line.surcharge(), 500);
        assert!(line.sections().iter().all(|s| s.line().surcharge() == 500));
    }

    #[test]
    fn cannot_remove_last_section() {
        let mut line = line();
        assert_eq!(line.remove_station(B), Err(SectionError::MinimumSections));
    }

    #[test]
    fn split_policy_is_applied() {
        let mut line = Line::new(LineId::new(1), "x", "red", 0, A, C, 10, 6)
            .unwrap()
            .with_split_policy(SplitPolicy::Subtract);
        line.add_section(A, B, 4, 2).unwrap();
        assert_eq!(line.sections().total_distance(), 10);
    }

    #[test]
    fn display_line_id() {
        assert_eq!(LineId::new(2).to_string(), "line 2");
    }
}
