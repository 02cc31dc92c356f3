//! The fetch boundary the controller consumes.

use std::future::Future;

use crate::domain::{ScheduleSnapshot, StationId};

/// Something that can produce a schedule snapshot for a station.
///
/// This is the coarse boundary the controller sees: one fetch either
/// yields a snapshot or it doesn't. Transport failures, error statuses
/// and undecodable bodies all collapse to `None`; implementations log
/// the underlying diagnostic before absorbing it. Implementations make
/// at most one outbound call per invocation and hold no state across
/// calls.
pub trait ScheduleSource {
    /// Fetch the current schedule for a station.
    fn fetch(
        &self,
        station: &StationId,
    ) -> impl Future<Output = Option<ScheduleSnapshot>> + Send;
}
