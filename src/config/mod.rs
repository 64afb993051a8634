//! Settings for attendance evaluation.
//!
//! This module holds the per-shift time windows, the access policy and the
//! file-backed store that persists them.
//!
//! # Example
//!
//! ```no_run
//! use shift_attendance::config::SettingsStore;
//!
//! let store = SettingsStore::open("./config/default").unwrap();
//! println!("Pagi late after {}", store.time_settings().pagi.check_in_end);
//! ```

mod store;
mod types;

pub use store::{ACCESS_SETTINGS_FILE, SettingsStore, TIME_SETTINGS_FILE};
pub use types::{AccessSettings, ShiftTimeSettings, TimeSettings};
