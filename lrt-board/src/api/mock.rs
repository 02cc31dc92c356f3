//! Mock schedule source for testing without API access.
//!
//! Serves canned snapshots as if they were live responses. Stations
//! with no canned board behave like a failed fetch, so both controller
//! paths can be exercised offline.

use std::collections::HashMap;

use crate::domain::{ScheduleSnapshot, StationId};

use super::source::ScheduleSource;

/// Mock schedule source backed by an in-memory table of boards.
#[derive(Debug, Clone, Default)]
pub struct MockScheduleSource {
    boards: HashMap<StationId, ScheduleSnapshot>,
}

impl MockScheduleSource {
    /// Create an empty mock. Every fetch fails until boards are added.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the canned board for a station.
    pub fn insert(&mut self, station: StationId, snapshot: ScheduleSnapshot) {
        self.boards.insert(station, snapshot);
    }

    /// Builder-style variant of [`insert`](Self::insert).
    pub fn with_board(mut self, station: StationId, snapshot: ScheduleSnapshot) -> Self {
        self.insert(station, snapshot);
        self
    }

    /// Stations that currently have a canned board.
    pub fn available_stations(&self) -> Vec<StationId> {
        self.boards.keys().copied().collect()
    }
}

impl ScheduleSource for MockScheduleSource {
    async fn fetch(&self, station: &StationId) -> Option<ScheduleSnapshot> {
        match self.boards.get(station) {
            Some(snapshot) => Some(snapshot.clone()),
            None => {
                tracing::warn!(station = %station, "no mock board for station");
                None
            }
        }
    }
}
