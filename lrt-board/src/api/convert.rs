//! Conversion from API DTOs to domain types.
//!
//! The wire format tolerates absent fields by defaulting them at decode
//! time, so this conversion has no failure modes: every decoded
//! response maps to a snapshot. Platform and train order is preserved
//! as returned (earliest arrival first per upstream convention).

use crate::domain::{Platform, ScheduleSnapshot, Train};

use super::types::{PlatformDto, RouteDto, ScheduleResponse};

/// Convert a decoded schedule response to a domain snapshot.
pub fn snapshot_from_response(response: ScheduleResponse) -> ScheduleSnapshot {
    let platforms = response
        .platform_list
        .into_iter()
        .map(convert_platform)
        .collect();

    ScheduleSnapshot {
        status: response.status,
        system_time: response.system_time,
        platforms,
    }
}

fn convert_platform(dto: PlatformDto) -> Platform {
    let platform_id = dto.platform_id;
    let trains = dto
        .route_list
        .into_iter()
        .map(|route| convert_route(route, platform_id))
        .collect();

    Platform {
        platform_id,
        trains,
    }
}

fn convert_route(dto: RouteDto, platform_id: u32) -> Train {
    Train {
        route_no: dto.route_no,
        dest_en: dto.dest_en,
        dest_ch: dto.dest_ch,
        arrival: dto.time_en,
        car_count: dto.train_length,
        platform_id,
    }
}
