//! Application state for the shift attendance API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::{Arc, PoisonError, RwLock};

use tokio::sync::Mutex;
use tracing::warn;

use crate::config::{AccessSettings, SettingsStore, TimeSettings};
use crate::error::{AttendanceError, AttendanceResult};

/// Shared application state.
///
/// Holds the settings store behind a lock. Handlers take a snapshot of the
/// settings they need so no lock is held while evaluating.
///
/// Updates are written to disk on the blocking pool against a staged copy of
/// the store. The lock is only taken to publish the copy once the write has
/// succeeded. Writers queue on a separate async mutex so two updates never
/// stage from the same snapshot.
#[derive(Clone)]
pub struct AppState {
    store: Arc<RwLock<SettingsStore>>,
    writer: Arc<Mutex<()>>,
}

impl AppState {
    /// Creates a new application state around an opened settings store.
    pub fn new(store: SettingsStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            writer: Arc::new(Mutex::new(())),
        }
    }

    /// Returns a copy of the current time settings.
    pub fn time_settings(&self) -> TimeSettings {
        self.store
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .time_settings()
            .clone()
    }

    /// Returns a copy of the current access policy.
    pub fn access_settings(&self) -> AccessSettings {
        *self
            .store
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .access_settings()
    }

    /// Validates, persists and publishes new time settings.
    pub async fn update_time_settings(&self, settings: TimeSettings) -> AttendanceResult<()> {
        self.persist(move |store| store.save_time_settings(settings))
            .await
    }

    /// Persists and publishes a new access policy.
    pub async fn update_access_settings(&self, settings: AccessSettings) -> AttendanceResult<()> {
        self.persist(move |store| store.save_access_settings(settings))
            .await
    }

    async fn persist<F>(&self, save: F) -> AttendanceResult<()>
    where
        F: FnOnce(&mut SettingsStore) -> AttendanceResult<()> + Send + 'static,
    {
        let _writer = self.writer.lock().await;

        let mut staged = self
            .store
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        let dir = staged.dir().display().to_string();

        let staged = tokio::task::spawn_blocking(move || {
            save(&mut staged)?;
            Ok::<_, AttendanceError>(staged)
        })
        .await
        .map_err(|e| {
            warn!(dir = %dir, error = %e, "Settings write task failed");
            AttendanceError::ConfigWriteError {
                path: dir,
                message: e.to_string(),
            }
        })??;

        *self.store.write().unwrap_or_else(PoisonError::into_inner) = staged;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TIME_SETTINGS_FILE;
    use crate::models::Shift;
    use tempfile::tempdir;

    #[test]
    fn test_app_state_is_clone_and_send() {
        fn assert_state<T: Clone + Send + Sync + 'static>() {}
        assert_state::<AppState>();
    }

    #[test]
    fn test_snapshots_reflect_store() {
        let store = SettingsStore::open("./config/default").unwrap();
        let state = AppState::new(store);
        assert_eq!(state.time_settings(), TimeSettings::default());
        assert_eq!(state.access_settings(), AccessSettings::default());
    }

    #[tokio::test]
    async fn test_update_publishes_after_write() {
        let dir = tempdir().unwrap();
        let state = AppState::new(SettingsStore::open(dir.path()).unwrap());

        let mut settings = TimeSettings::default();
        settings.for_shift_mut(Shift::Siang).check_in_end = "14:20".to_string();
        state.update_time_settings(settings.clone()).await.unwrap();

        assert_eq!(state.time_settings(), settings);
        assert!(dir.path().join(TIME_SETTINGS_FILE).exists());
    }

    #[tokio::test]
    async fn test_rejected_update_keeps_previous_settings() {
        let dir = tempdir().unwrap();
        let state = AppState::new(SettingsStore::open(dir.path()).unwrap());

        let mut settings = TimeSettings::default();
        settings.for_shift_mut(Shift::Pagi).check_in_start = "07:00".to_string();

        assert!(matches!(
            state.update_time_settings(settings).await,
            Err(AttendanceError::InvalidSettings { .. })
        ));
        assert_eq!(state.time_settings(), TimeSettings::default());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_concurrent_updates_are_both_kept() {
        let dir = tempdir().unwrap();
        let state = AppState::new(SettingsStore::open(dir.path()).unwrap());

        let mut time_settings = TimeSettings::default();
        time_settings.for_shift_mut(Shift::Malam).overtime_threshold = "07:00".to_string();
        let access_settings = AccessSettings {
            allow_logbook_edit: false,
            ..AccessSettings::default()
        };

        let (time_result, access_result) = tokio::join!(
            state.update_time_settings(time_settings.clone()),
            state.update_access_settings(access_settings),
        );
        time_result.unwrap();
        access_result.unwrap();

        assert_eq!(state.time_settings(), time_settings);
        assert_eq!(state.access_settings(), access_settings);

        let reopened = SettingsStore::open(dir.path()).unwrap();
        assert_eq!(reopened.time_settings(), &time_settings);
        assert_eq!(reopened.access_settings(), &access_settings);
    }
}
