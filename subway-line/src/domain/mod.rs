//! Domain types for subway lines.
//!
//! This module contains the stations, lines and sections that make up the
//! network. Types enforce their invariants at construction time, and the
//! path of sections enforces its own shape on every edit.

mod error;
mod line;
mod section;
mod sections;
mod station;

pub use error::SectionError;
pub use line::{Line, LineId, LineRef};
pub use section::{Section, SplitPolicy};
pub use sections::Sections;
pub use station::{Station, StationId};
