//! Subway line sections and fares.
//!
//! Keeps the sections of each line in a single ordered path, finds
//! journeys across lines, and prices them by distance, line surcharge and
//! rider age.

pub mod auth;
pub mod config;
pub mod domain;
pub mod fare;
pub mod network;
