//! The ordered path of sections that makes up a line.
//!
//! Sections are stored unordered. The station order is rebuilt from the
//! edges on every read, which is quadratic in the number of sections but a
//! line only has tens of them, and it means there is no cached order to
//! fall out of step with the edges after an edit.

use chrono::Duration;
use tracing::{debug, trace};

use super::{LineId, Section, SectionError, SplitPolicy, StationId};

/// The sections of one line, forming a single directed path.
///
/// # Invariants
///
/// - Each station is the upstream end of at most one section and the
///   downstream end of at most one section; there are no cycles.
/// - Once built by a [`Line`](super::Line), at least one section remains.
/// - Every station on a section is reachable from the head.
///
/// # Examples
///
/// ```
/// use subway_line::domain::{LineId, LineRef, Section, Sections, StationId};
///
/// let line = LineRef::new(LineId::new(1), 0);
/// let (a, b, c) = (StationId::new(1), StationId::new(2), StationId::new(3));
///
/// let mut sections = Sections::new();
/// sections.add_section(Section::new(line, b, c, 7, 4).unwrap()).unwrap();
/// sections.add_section(Section::new(line, a, b, 10, 5).unwrap()).unwrap();
///
/// assert_eq!(sections.stations(), vec![a, b, c]);
/// assert_eq!(sections.total_distance(), 17);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Sections {
    sections: Vec<Section>,
    split_policy: SplitPolicy,
}

impl Sections {
    /// Creates an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps sections that already form a single path.
    ///
    /// The caller is responsible for the path invariants; nothing is
    /// validated here.
    pub fn from_sections(sections: Vec<Section>) -> Self {
        Self {
            sections,
            split_policy: SplitPolicy::default(),
        }
    }

    /// Sets how splitting inserts shorten the section they split.
    pub fn with_split_policy(mut self, split_policy: SplitPolicy) -> Self {
        self.split_policy = split_policy;
        self
    }

    /// Returns the number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Returns the sections in storage order (not path order).
    pub fn as_slice(&self) -> &[Section] {
        &self.sections
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    /// Returns the stations from head to tail.
    pub fn stations(&self) -> Vec<StationId> {
        let Some(head) = self.head() else {
            return Vec::new();
        };

        let mut stations = Vec::with_capacity(self.sections.len() + 1);
        stations.push(head);

        let mut current = head;
        // Bounded so a malformed set handed to `from_sections` cannot spin.
        for _ in 0..self.sections.len() {
            let Some(idx) = self.index_from(current) else {
                break;
            };
            current = self.sections[idx].downstream();
            stations.push(current);
        }

        stations
    }

    /// Walks upstream from an arbitrary section to the first station.
    fn head(&self) -> Option<StationId> {
        let mut current = self.sections.first()?.upstream();
        for _ in 0..self.sections.len() {
            match self.index_into(current) {
                Some(idx) => current = self.sections[idx].upstream(),
                None => break,
            }
        }
        Some(current)
    }

    /// Index of the section leaving `station`.
    fn index_from(&self, station: StationId) -> Option<usize> {
        self.sections.iter().position(|s| s.upstream() == station)
    }

    /// Index of the section arriving at `station`.
    fn index_into(&self, station: StationId) -> Option<usize> {
        self.sections.iter().position(|s| s.downstream() == station)
    }

    /// Adds a section to the path.
    ///
    /// A section sharing its upstream station with an existing section
    /// splits that section: the existing one now starts at the new
    /// section's downstream station. Sharing the downstream station splits
    /// symmetrically. A section attached at either end simply extends the
    /// path.
    ///
    /// # Errors
    ///
    /// - `Duplicate` if both stations are already on the path
    /// - `Disconnected` if the path is non-empty and neither station is on it
    /// - `SplitTooLong` under [`SplitPolicy::Subtract`] if the new section
    ///   is not shorter than the one it splits
    ///
    /// The path is unchanged when an error is returned.
    pub fn add_section(&mut self, section: Section) -> Result<(), SectionError> {
        let stations = self.stations();
        let up_exists = stations.contains(&section.upstream());
        let down_exists = stations.contains(&section.downstream());

        if up_exists && down_exists {
            return Err(SectionError::Duplicate {
                upstream: section.upstream(),
                downstream: section.downstream(),
            });
        }

        if !self.is_empty() && !up_exists && !down_exists {
            return Err(SectionError::Disconnected {
                upstream: section.upstream(),
                downstream: section.downstream(),
            });
        }

        if up_exists {
            if let Some(idx) = self.index_from(section.upstream()) {
                let (distance, duration) =
                    self.split_policy.remainder(&self.sections[idx], &section)?;
                trace!(split = ?self.sections[idx], "splitting at upstream station");
                self.sections[idx].move_upstream(section.downstream(), distance, duration);
            }
        }

        if down_exists {
            if let Some(idx) = self.index_into(section.downstream()) {
                let (distance, duration) =
                    self.split_policy.remainder(&self.sections[idx], &section)?;
                trace!(split = ?self.sections[idx], "splitting at downstream station");
                self.sections[idx].move_downstream(section.upstream(), distance, duration);
            }
        }

        debug!(
            upstream = %section.upstream(),
            downstream = %section.downstream(),
            distance = section.distance(),
            "added section"
        );
        self.sections.push(section);
        Ok(())
    }

    /// Removes a station from the path.
    ///
    /// Removing an interior station merges its two sections into one whose
    /// distance and duration are the sums. Removing an end station drops
    /// its only section. Removing a station that is not on the path does
    /// nothing.
    ///
    /// # Errors
    ///
    /// Returns `MinimumSections` if one or no sections remain.
    pub fn remove_station(&mut self, station: StationId) -> Result<(), SectionError> {
        if self.sections.len() <= 1 {
            return Err(SectionError::MinimumSections);
        }

        let outgoing = self.index_from(station);
        let incoming = self.index_into(station);

        match (incoming, outgoing) {
            (Some(inc), Some(out)) => {
                let merged = self.sections[inc].merge(&self.sections[out]);
                debug!(
                    %station,
                    upstream = %merged.upstream(),
                    downstream = %merged.downstream(),
                    distance = merged.distance(),
                    "merged sections around removed station"
                );
                // Remove the higher index first so the lower one stays valid.
                self.sections.remove(inc.max(out));
                self.sections.remove(inc.min(out));
                self.sections.push(merged);
            }
            (Some(idx), None) | (None, Some(idx)) => {
                let removed = self.sections.remove(idx);
                debug!(%station, ?removed, "removed end section");
            }
            (None, None) => {
                debug!(%station, "station not on path, nothing removed");
            }
        }

        Ok(())
    }

    /// Sum of all section distances, saturating at `u32::MAX`.
    pub fn total_distance(&self) -> u32 {
        self.sections
            .iter()
            .fold(0u32, |total, s| total.saturating_add(s.distance()))
    }

    /// Sum of all section durations in minutes, saturating at `u32::MAX`.
    pub fn total_duration(&self) -> u32 {
        self.sections
            .iter()
            .fold(0u32, |total, s| total.saturating_add(s.duration()))
    }

    /// Total travel time.
    pub fn travel_time(&self) -> Duration {
        Duration::minutes(i64::from(self.total_duration()))
    }

    /// The largest surcharge among the lines this path uses, or 0 if empty.
    pub fn max_surcharge(&self) -> u32 {
        self.sections
            .iter()
            .map(|s| s.line().surcharge())
            .max()
            .unwrap_or(0)
    }

    /// Distinct lines used, in first-seen storage order.
    pub fn lines(&self) -> Vec<LineId> {
        let mut lines = Vec::new();
        for section in &self.sections {
            let id = section.line().id();
            if !lines.contains(&id) {
                lines.push(id);
            }
        }
        lines
    }

    /// Re-points every section at an updated line reference.
    pub(crate) fn relabel(&mut self, line: super::LineRef) {
        for section in &mut self.sections {
            section.set_line(line);
        }
    }
}

impl<'a> IntoIterator for &'a Sections {
    type Item = &'a Section;
    type IntoIter = std::slice::Iter<'a, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.iter()
    }
}
