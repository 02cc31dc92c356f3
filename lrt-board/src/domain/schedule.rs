//! Schedule domain types.
//!
//! Immutable value types built fresh on every successful fetch. A
//! `ScheduleSnapshot` fully replaces the previous one; nothing here is
//! ever merged or mutated in place.

/// One upcoming train at a platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Train {
    /// Route number, e.g. "610" or "705".
    pub route_no: String,

    /// Destination name in English.
    pub dest_en: String,

    /// Destination name in Chinese.
    pub dest_ch: String,

    /// Free-text ETA as the API displays it ("2 min", "Arriving").
    /// Not machine-parseable; rendered verbatim.
    pub arrival: String,

    /// Number of coupled cars (1 or 2).
    pub car_count: u8,

    /// Platform this train serves.
    pub platform_id: u32,
}

impl Train {
    /// Human-readable car configuration.
    pub fn car_type(&self) -> &'static str {
        if self.car_count == 2 { "Double" } else { "Single" }
    }
}

/// A boarding platform with its upcoming trains.
///
/// Train order is as returned by the API: earliest arrival first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Platform {
    pub platform_id: u32,
    pub trains: Vec<Train>,
}

/// One complete schedule fetch result for a station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleSnapshot {
    /// Upstream status flag: 1 = normal, 0 = no data / error.
    pub status: i32,

    /// Upstream-generated timestamp, kept as an opaque string.
    pub system_time: String,

    /// Platforms in upstream order.
    pub platforms: Vec<Platform>,
}

impl ScheduleSnapshot {
    /// Trains at the given platform, earliest first.
    ///
    /// Returns an empty slice when the platform does not appear in this
    /// snapshot.
    pub fn platform_trains(&self, platform_id: u32) -> &[Train] {
        self.platforms
            .iter()
            .find(|p| p.platform_id == platform_id)
            .map(|p| p.trains.as_slice())
            .unwrap_or(&[])
    }
}
