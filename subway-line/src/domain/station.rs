//! Station identity types.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Unique key of a station.
///
/// Stations are compared by this key only. Two `Station` values loaded
/// separately (or cloned) with the same id are the same station.
///
/// # Examples
///
/// ```
/// use subway_line::domain::StationId;
///
/// let a = StationId::new(1);
/// assert_eq!(a, StationId::new(1));
/// assert_ne!(a, StationId::new(2));
/// assert_eq!(a.to_string(), "#1");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(u64);

impl StationId {
    /// Wraps a raw station key.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A station: an id and a display name.
///
/// Equality and hashing use the id alone, so a renamed copy of a station
/// still compares equal to the one it was copied from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Station {
    pub id: StationId,
    pub name: String,
}

impl Station {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id: StationId(id),
            name: name.into(),
        }
    }
}

impl PartialEq for Station {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Station {}

impl Hash for Station {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
