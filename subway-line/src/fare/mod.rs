//! Fare calculation.
//!
//! Fares depend on the distance travelled, the lines used and the rider's
//! age. The rider is always passed in explicitly.

mod calculator;
mod config;
mod rider;

pub use calculator::FareCalculator;
pub use config::{AgeDiscount, FareConfig};
pub use rider::Rider;
