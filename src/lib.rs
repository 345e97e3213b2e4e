pub mod api_client;
pub mod bridge;
pub mod commands;
pub mod config;
pub mod logging;
pub mod screen;

use std::sync::Arc;

use api_client::ApiClient;
use bridge::LocalBridge;
use config::DesktopConfig;
use screen::Screen;

/// Async mutex for state that is locked from async IPC commands.
pub type TokioMutex<T> = tokio::sync::Mutex<T>;

/// Return the platform-standard data directory for KogniTerm Desktop.
///
/// - macOS: `~/Library/Application Support/com.kogniterm.desktop/`
/// - Windows: `{FOLDERID_RoamingAppData}\com.kogniterm.desktop\`
/// - Linux: `$XDG_DATA_HOME/com.kogniterm.desktop/` (fallback `~/.local/share/...`)
///
/// Falls back to `~/.kogniterm-desktop/` if none of the above resolve.
pub(crate) fn data_dir() -> std::path::PathBuf {
    if let Some(dir) = dirs::data_dir() {
        return dir.join("com.kogniterm.desktop");
    }
    dirs::home_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join(".kogniterm-desktop")
}

/// Run the Tauri application.
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Tracing first, so config loading is logged
    logging::init_tracing(&data_dir());

    let config = DesktopConfig::load_or_default();
    let api = Arc::new(ApiClient::from_config(&config).expect("failed to build server client"));

    tracing::info!(
        server_url = %api.base_url(),
        connect_timeout_secs = config.connect_timeout_secs,
        request_timeout_secs = config.request_timeout_secs,
        "KogniTerm server client ready"
    );

    tauri::Builder::default()
        .manage(Arc::clone(&api))
        .manage(LocalBridge::new(api))
        .manage(TokioMutex::new(Screen::new()))
        .invoke_handler(tauri::generate_handler![
            commands::greet,
            commands::server::send_message,
            commands::server::check_server_status,
            commands::screen::get_screen,
            commands::screen::screen_set_input,
            commands::screen::screen_submit,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
