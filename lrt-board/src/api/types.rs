//! Light Rail API response DTOs.
//!
//! These types map directly to the `getSchedule` JSON response. Every
//! field carries a default because the API omits fields rather than
//! sending nulls: a missing `platform_list` means no platforms, a
//! missing `status` means no data. Decoding never fails on absent
//! optional fields.

use serde::Deserialize;

/// Response from `getSchedule?station_id={id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleResponse {
    /// 1 = normal service, 0 = no data / error.
    #[serde(default)]
    pub status: i32,

    /// When the upstream generated this response ("YYYY-MM-DD HH:MM:SS",
    /// Hong Kong time). Kept opaque; never parsed.
    #[serde(default)]
    pub system_time: String,

    /// Platforms at the station, each with its upcoming routes.
    #[serde(default)]
    pub platform_list: Vec<PlatformDto>,
}

/// One platform entry in the response.
#[derive(Debug, Clone, Deserialize)]
pub struct PlatformDto {
    #[serde(default)]
    pub platform_id: u32,

    #[serde(default)]
    pub route_list: Vec<RouteDto>,
}

/// One upcoming train on a platform.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteDto {
    /// Route number, e.g. "610".
    #[serde(default)]
    pub route_no: String,

    /// Destination in English.
    #[serde(default)]
    pub dest_en: String,

    /// Destination in Chinese.
    #[serde(default)]
    pub dest_ch: String,

    /// Display ETA in English ("2 min", "Arriving").
    #[serde(default)]
    pub time_en: String,

    /// Display ETA in Chinese.
    #[serde(default)]
    pub time_ch: String,

    /// Number of coupled cars. The API omits this for some departures;
    /// a single car is the fleet default.
    #[serde(default = "default_train_length")]
    pub train_length: u8,

    /// "A" for arrivals, "D" for departures.
    #[serde(default)]
    pub arrival_departure: String,

    /// Whether the train stops at this station.
    #[serde(default)]
    pub stop: i32,
}

fn default_train_length() -> u8 {
    1
}
