//! MTR Light Rail arrival board.
//!
//! Fetches near-real-time schedules for a Light Rail stop from the
//! Hong Kong government open-data API and drives an auto-refreshing
//! per-platform arrival display.

pub mod api;
pub mod controller;
pub mod domain;
pub mod stations;
