//! MTR Light Rail next-train API client.
//!
//! This module talks to the Hong Kong government open-data endpoint for
//! Light Rail schedules.
//!
//! Key characteristics of the API:
//! - Public, unauthenticated; the station id is the only parameter
//! - ETAs are display strings ("2 min", "Arriving"), not durations
//! - Fields are omitted rather than sent as null; decoding defaults
//!   them instead of failing
//! - `status` 0 with an empty `platform_list` means "no data", which is
//!   still a well-formed response

mod client;
mod convert;
mod error;
mod mock;
mod source;
mod types;

pub use client::{LrtClient, LrtConfig};
pub use convert::snapshot_from_response;
pub use error::ApiError;
pub use mock::MockScheduleSource;
pub use source::ScheduleSource;
pub use types::{PlatformDto, RouteDto, ScheduleResponse};
