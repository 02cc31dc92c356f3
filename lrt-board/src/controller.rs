//! Schedule view-model controller.
//!
//! Owns the board state for one station widget: which station is
//! selected, the latest snapshot, the loading flag, and the last error.
//! The shell reads state through accessors and subscribes to change
//! notifications; all mutation happens inside [`ScheduleController`].
//!
//! One controller drives one fetch at a time. `load_schedule` holds the
//! exclusive borrow across its await, so a second load cannot begin
//! until the first has finished; overlapping fetches are ruled out by
//! construction rather than guarded at runtime.

use chrono::{DateTime, FixedOffset, Utc};

use crate::api::ScheduleSource;
use crate::domain::{ScheduleSnapshot, StationId, Train};
use crate::stations::{self, StationInfo};

/// User-facing message set on any failed fetch.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch schedule data";

/// Hong Kong is UTC+8 year-round; the network and its timestamps live
/// in that zone regardless of where the widget runs.
fn hong_kong_now() -> DateTime<FixedOffset> {
    let hkt = FixedOffset::east_opt(8 * 3600).unwrap();
    Utc::now().with_timezone(&hkt)
}

/// Read-only view of the controller's state.
///
/// A failed fetch sets `last_error` but keeps any previously successful
/// snapshot, so the shell can show stale data alongside a warning.
#[derive(Debug, Default)]
pub struct ControllerState {
    current_station: Option<StationId>,
    snapshot: Option<ScheduleSnapshot>,
    last_updated: Option<DateTime<FixedOffset>>,
    loading: bool,
    last_error: Option<String>,
}

impl ControllerState {
    /// The station the last load was requested for, if any.
    pub fn current_station(&self) -> Option<StationId> {
        self.current_station
    }

    /// The latest successful snapshot, possibly stale after a failure.
    pub fn snapshot(&self) -> Option<&ScheduleSnapshot> {
        self.snapshot.as_ref()
    }

    /// Local (Hong Kong) time of the last successful fetch.
    pub fn last_updated(&self) -> Option<DateTime<FixedOffset>> {
        self.last_updated
    }

    /// Whether a fetch is currently in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Message from the most recent failed fetch; cleared on success.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

/// View-model for one station's arrival board.
///
/// Generic over its [`ScheduleSource`] so tests and offline runs can
/// substitute canned data for the live client.
pub struct ScheduleController<S> {
    source: S,
    state: ControllerState,
    data_observers: Vec<Box<dyn Fn() + Send>>,
    loading_observers: Vec<Box<dyn Fn(bool) + Send>>,
    error_observers: Vec<Box<dyn Fn(&str) + Send>>,
}

impl<S: ScheduleSource> ScheduleController<S> {
    /// Create a controller with no station selected.
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: ControllerState::default(),
            data_observers: Vec::new(),
            loading_observers: Vec::new(),
            error_observers: Vec::new(),
        }
    }

    /// Subscribe to snapshot replacements.
    ///
    /// Observers for the same event fire in registration order.
    pub fn on_data_changed(&mut self, f: impl Fn() + Send + 'static) {
        self.data_observers.push(Box::new(f));
    }

    /// Subscribe to loading-flag transitions.
    pub fn on_loading_changed(&mut self, f: impl Fn(bool) + Send + 'static) {
        self.loading_observers.push(Box::new(f));
    }

    /// Subscribe to fetch failures.
    pub fn on_error(&mut self, f: impl Fn(&str) + Send + 'static) {
        self.error_observers.push(Box::new(f));
    }

    /// Select a station and load its schedule.
    pub async fn select_station(&mut self, station: StationId) {
        self.load_schedule(station).await;
    }

    /// Reload the currently selected station, if any.
    pub async fn refresh(&mut self) {
        if let Some(station) = self.state.current_station {
            self.load_schedule(station).await;
        }
    }

    /// Load the schedule for a station.
    ///
    /// Loading observers fire with `true` before the fetch starts, so
    /// the shell can show its indicator immediately, and with `false`
    /// on every exit path. On success the snapshot is replaced
    /// wholesale and the error cleared; on failure the error is set and
    /// the previous snapshot is left untouched.
    async fn load_schedule(&mut self, station: StationId) {
        self.state.current_station = Some(station);
        self.set_loading(true);

        match self.source.fetch(&station).await {
            Some(snapshot) => {
                tracing::debug!(station = %station, platforms = snapshot.platforms.len(), "schedule updated");
                self.state.snapshot = Some(snapshot);
                self.state.last_updated = Some(hong_kong_now());
                self.state.last_error = None;
                for observer in &self.data_observers {
                    observer();
                }
            }
            None => {
                self.state.last_error = Some(FETCH_FAILED_MESSAGE.to_string());
                for observer in &self.error_observers {
                    observer(FETCH_FAILED_MESSAGE);
                }
            }
        }

        self.set_loading(false);
    }

    fn set_loading(&mut self, loading: bool) {
        self.state.loading = loading;
        for observer in &self.loading_observers {
            observer(loading);
        }
    }

    /// Read-only view of the current state.
    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    /// Trains at the given platform from the latest snapshot.
    ///
    /// Empty when no snapshot has been loaded or the platform does not
    /// appear in it; never an error.
    pub fn platform_trains(&self, platform_id: u32) -> &[Train] {
        self.state
            .snapshot
            .as_ref()
            .map(|s| s.platform_trains(platform_id))
            .unwrap_or(&[])
    }

    /// Reference-table entry for the selected station, if it is known.
    pub fn current_station_info(&self) -> Option<&'static StationInfo> {
        self.state
            .current_station
            .as_ref()
            .and_then(stations::by_id)
    }

    /// Last successful fetch time formatted for display.
    pub fn last_updated_string(&self) -> String {
        match self.state.last_updated {
            Some(t) => t.format("%Y-%m-%d %H:%M:%S HKT").to_string(),
            None => "Never".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::api::MockScheduleSource;
    use crate::domain::Platform;

    fn station(id: &str) -> StationId {
        StationId::parse(id).unwrap()
    }

    fn train(route: &str, platform_id: u32) -> Train {
        Train {
            route_no: route.to_string(),
            dest_en: "Yuen Long".to_string(),
            dest_ch: "元朗".to_string(),
            arrival: "5 min".to_string(),
            car_count: 1,
            platform_id,
        }
    }

    fn snapshot(platforms: Vec<(u32, Vec<Train>)>) -> ScheduleSnapshot {
        ScheduleSnapshot {
            status: 1,
            system_time: "2024-01-15 14:30:00".to_string(),
            platforms: platforms
                .into_iter()
                .map(|(platform_id, trains)| Platform {
                    platform_id,
                    trains,
                })
                .collect(),
        }
    }

    #[test]
    fn platform_trains_empty_before_any_load() {
        let controller = ScheduleController::new(MockScheduleSource::new());

        assert!(controller.platform_trains(1).is_empty());
        assert!(controller.platform_trains(2).is_empty());
        assert!(controller.state().snapshot().is_none());
        assert!(!controller.state().is_loading());
        assert_eq!(controller.last_updated_string(), "Never");
    }

    #[tokio::test]
    async fn successful_load_populates_state() {
        let siu_hong = station("100");
        let source = MockScheduleSource::new().with_board(
            siu_hong,
            snapshot(vec![
                (1, vec![train("610", 1), train("614", 1)]),
                (2, vec![train("615", 2)]),
            ]),
        );
        let mut controller = ScheduleController::new(source);

        controller.select_station(siu_hong).await;

        assert_eq!(controller.platform_trains(1).len(), 2);
        assert_eq!(controller.platform_trains(2).len(), 1);
        assert_eq!(controller.platform_trains(3).len(), 0);
        assert!(!controller.state().is_loading());
        assert!(controller.state().last_error().is_none());
        assert_eq!(controller.state().current_station(), Some(siu_hong));
        assert!(controller.state().last_updated().is_some());
        assert!(controller.last_updated_string().ends_with("HKT"));
    }

    #[tokio::test]
    async fn failed_load_sets_error_and_resets_loading() {
        let mut controller = ScheduleController::new(MockScheduleSource::new());

        controller.select_station(station("100")).await;

        assert!(!controller.state().is_loading());
        assert_eq!(controller.state().last_error(), Some(FETCH_FAILED_MESSAGE));
        assert!(controller.state().snapshot().is_none());
        assert_eq!(controller.state().current_station(), Some(station("100")));
    }

    #[tokio::test]
    async fn failed_load_keeps_stale_snapshot() {
        let siu_hong = station("100");
        let source = MockScheduleSource::new()
            .with_board(siu_hong, snapshot(vec![(1, vec![train("610", 1)])]));
        let mut controller = ScheduleController::new(source);

        controller.select_station(siu_hong).await;
        let before = controller.state().snapshot().cloned();
        let updated_before = controller.state().last_updated();

        // Station 920 has no board in the mock: this fetch fails
        controller.select_station(station("920")).await;

        assert_eq!(controller.state().last_error(), Some(FETCH_FAILED_MESSAGE));
        assert_eq!(controller.state().snapshot().cloned(), before);
        assert_eq!(controller.state().last_updated(), updated_before);
        assert!(!controller.state().is_loading());
    }

    #[tokio::test]
    async fn success_clears_prior_error() {
        let siu_hong = station("100");
        let source = MockScheduleSource::new()
            .with_board(siu_hong, snapshot(vec![(1, vec![train("610", 1)])]));
        let mut controller = ScheduleController::new(source);

        controller.select_station(station("920")).await;
        assert!(controller.state().last_error().is_some());

        controller.select_station(siu_hong).await;

        assert!(controller.state().last_error().is_none());
        assert!(!controller.state().is_loading());
    }

    #[tokio::test]
    async fn loading_observers_see_true_then_false_on_success() {
        let siu_hong = station("100");
        let source =
            MockScheduleSource::new().with_board(siu_hong, snapshot(vec![(1, vec![])]));
        let mut controller = ScheduleController::new(source);

        let transitions = Arc::new(Mutex::new(Vec::new()));
        let observed = Arc::clone(&transitions);
        controller.on_loading_changed(move |loading| {
            observed.lock().unwrap().push(loading);
        });

        controller.select_station(siu_hong).await;

        assert_eq!(*transitions.lock().unwrap(), vec![true, false]);
    }

    #[tokio::test]
    async fn loading_observers_see_true_then_false_on_failure() {
        let mut controller = ScheduleController::new(MockScheduleSource::new());

        let transitions = Arc::new(Mutex::new(Vec::new()));
        let observed = Arc::clone(&transitions);
        controller.on_loading_changed(move |loading| {
            observed.lock().unwrap().push(loading);
        });

        controller.select_station(station("100")).await;

        assert_eq!(*transitions.lock().unwrap(), vec![true, false]);
    }

    #[tokio::test]
    async fn data_observers_fire_on_success_only() {
        let siu_hong = station("100");
        let source =
            MockScheduleSource::new().with_board(siu_hong, snapshot(vec![(1, vec![])]));
        let mut controller = ScheduleController::new(source);

        let data_calls = Arc::new(AtomicUsize::new(0));
        let counted = Arc::clone(&data_calls);
        controller.on_data_changed(move || {
            counted.fetch_add(1, Ordering::SeqCst);
        });

        let errors = Arc::new(Mutex::new(Vec::new()));
        let observed = Arc::clone(&errors);
        controller.on_error(move |message| {
            observed.lock().unwrap().push(message.to_string());
        });

        controller.select_station(siu_hong).await;
        assert_eq!(data_calls.load(Ordering::SeqCst), 1);
        assert!(errors.lock().unwrap().is_empty());

        controller.select_station(station("920")).await;
        assert_eq!(data_calls.load(Ordering::SeqCst), 1);
        assert_eq!(*errors.lock().unwrap(), vec![FETCH_FAILED_MESSAGE.to_string()]);
    }

    #[tokio::test]
    async fn observers_fire_in_registration_order() {
        let siu_hong = station("100");
        let source =
            MockScheduleSource::new().with_board(siu_hong, snapshot(vec![(1, vec![])]));
        let mut controller = ScheduleController::new(source);

        let order = Arc::new(Mutex::new(Vec::new()));
        for tag in ["first", "second", "third"] {
            let observed = Arc::clone(&order);
            controller.on_data_changed(move || {
                observed.lock().unwrap().push(tag);
            });
        }

        controller.select_station(siu_hong).await;

        assert_eq!(*order.lock().unwrap(), vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn sequential_fetches_replace_snapshot_wholesale() {
        let siu_hong = station("100");
        let yuen_long = station("600");
        let source = MockScheduleSource::new()
            .with_board(
                siu_hong,
                snapshot(vec![(1, vec![train("610", 1)]), (2, vec![train("615", 2)])]),
            )
            .with_board(yuen_long, snapshot(vec![(3, vec![train("614", 3)])]));
        let mut controller = ScheduleController::new(source);

        controller.select_station(siu_hong).await;
        assert_eq!(controller.platform_trains(1).len(), 1);

        controller.select_station(yuen_long).await;

        // No stale platform entries survive from the first station
        assert_eq!(controller.platform_trains(1).len(), 0);
        assert_eq!(controller.platform_trains(2).len(), 0);
        assert_eq!(controller.platform_trains(3).len(), 1);
        assert_eq!(controller.state().current_station(), Some(yuen_long));
    }

    #[tokio::test]
    async fn refresh_reloads_current_station() {
        let siu_hong = station("100");
        let source =
            MockScheduleSource::new().with_board(siu_hong, snapshot(vec![(1, vec![])]));
        let mut controller = ScheduleController::new(source);

        let data_calls = Arc::new(AtomicUsize::new(0));
        let counted = Arc::clone(&data_calls);
        controller.on_data_changed(move || {
            counted.fetch_add(1, Ordering::SeqCst);
        });

        // No station selected yet: refresh is a no-op
        controller.refresh().await;
        assert_eq!(data_calls.load(Ordering::SeqCst), 0);

        controller.select_station(siu_hong).await;
        controller.refresh().await;
        assert_eq!(data_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn current_station_info_uses_reference_table() {
        let siu_hong = station("100");
        let source =
            MockScheduleSource::new().with_board(siu_hong, snapshot(vec![(1, vec![])]));
        let mut controller = ScheduleController::new(source);

        assert!(controller.current_station_info().is_none());

        controller.select_station(siu_hong).await;

        let info = controller.current_station_info().unwrap();
        assert_eq!(info.name_en, "Siu Hong");
    }
}
