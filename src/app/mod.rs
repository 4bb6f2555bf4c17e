// ==========================================
// Support Stock - application layer
// ==========================================
// Tauri integration: owned state and commands
// ==========================================

pub mod state;
pub mod tauri_commands;

pub use state::{get_default_db_path, AppState};

#[cfg(feature = "tauri-app")]
pub use tauri_commands::*;
