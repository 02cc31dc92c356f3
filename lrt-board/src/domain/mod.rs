//! Domain types for the Light Rail arrival board.
//!
//! This module contains the core domain model: validated identifiers
//! and the immutable schedule value types. All types enforce their
//! invariants at construction time, so code that receives these types
//! can trust their validity.

mod schedule;
mod station;

pub use schedule::{Platform, ScheduleSnapshot, Train};
pub use station::{InvalidStationId, StationId};
