//! Tauri IPC commands exposed to the webview.
//!
//! Raw bridge commands (`greet`, `send_message`, `check_server_status`) are
//! callable via `invoke("command_name", { args })`. The `screen_*` commands
//! drive the screen model in [`crate::screen`].

pub mod screen;
pub mod server;

/// Greeting text for `name`, returned unchanged for empty or odd input.
pub fn greet_text(name: &str) -> String {
    format!("Hello, {name}! You've been greeted from Rust!")
}

#[tauri::command]
pub fn greet(name: &str) -> String {
    tracing::debug!(name_len = name.len(), "greet");
    greet_text(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greet_text() {
        assert_eq!(greet_text("World"), "Hello, World! You've been greeted from Rust!");
        assert_eq!(greet("  "), "Hello,   ! You've been greeted from Rust!");
    }
}
