use std::env;
use std::error::Error;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use shift_attendance::api::{AppState, create_router};
use shift_attendance::config::SettingsStore;

// Writable; never the bundled `config/default`. Absent files load the defaults.
const DEFAULT_SETTINGS_DIR: &str = "./data/settings";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("shift_attendance=info")),
        )
        .init();

    let settings_dir =
        env::var("ATTENDANCE_SETTINGS_DIR").unwrap_or_else(|_| DEFAULT_SETTINGS_DIR.to_string());
    let bind_addr =
        env::var("ATTENDANCE_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    let store = SettingsStore::open(&settings_dir)?;
    let router = create_router(AppState::new(store));

    let listener = TcpListener::bind(&bind_addr).await?;
    info!(addr = %bind_addr, settings_dir = %settings_dir, "Listening");

    axum::serve(listener, router).await?;
    Ok(())
}
