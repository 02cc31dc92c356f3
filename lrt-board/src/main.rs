use std::time::Duration;

use tracing_subscriber::EnvFilter;

use lrt_board::api::{LrtClient, LrtConfig};
use lrt_board::controller::ScheduleController;
use lrt_board::domain::StationId;
use lrt_board::stations;

/// How often the board re-fetches the selected station.
const REFRESH_INTERVAL: Duration = Duration::from_secs(30);

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Station id from argv, defaulting to the first table entry
    let station_arg = std::env::args()
        .nth(1)
        .unwrap_or_else(|| stations::all()[0].id.to_string());
    let station = StationId::parse(&station_arg).unwrap_or_else(|e| {
        eprintln!("Bad station id {station_arg:?}: {e}");
        eprintln!("Known stations:");
        for info in stations::all() {
            eprintln!("  {:>4}  {}", info.id, info);
        }
        std::process::exit(2);
    });

    let client = LrtClient::new(LrtConfig::new()).expect("Failed to create Light Rail client");
    let mut controller = ScheduleController::new(client);

    controller.on_error(|message| {
        eprintln!("! {message} (showing last good data, if any)");
    });

    controller.select_station(station).await;
    render(&controller);

    // The controller drives one fetch at a time; this loop is the only
    // caller, so ticks can never overlap an in-flight load.
    let mut interval = tokio::time::interval(REFRESH_INTERVAL);
    interval.tick().await; // First tick is immediate, skip it
    loop {
        interval.tick().await;
        controller.refresh().await;
        render(&controller);
    }
}

/// Print the current board state.
fn render(controller: &ScheduleController<LrtClient>) {
    let heading = match controller.current_station_info() {
        Some(info) => info.to_string(),
        None => match controller.state().current_station() {
            Some(id) => format!("Station {id}"),
            None => "No station selected".to_string(),
        },
    };

    println!();
    println!("=== {heading} ===");
    println!("Last updated: {}", controller.last_updated_string());

    let Some(snapshot) = controller.state().snapshot() else {
        println!("No schedule data");
        return;
    };

    if snapshot.status != 1 || snapshot.platforms.is_empty() {
        println!("No service information available");
        return;
    }

    for platform in &snapshot.platforms {
        println!("Platform {}", platform.platform_id);
        if platform.trains.is_empty() {
            println!("  (no trains)");
        }
        for t in &platform.trains {
            println!(
                "  {:>4}  {} ({})  {:>8}  [{}]",
                t.route_no,
                t.dest_en,
                t.dest_ch,
                t.arrival,
                t.car_type()
            );
        }
    }
}
