use std::path::PathBuf;

use crate::app::state::AppState;

use super::common::{map_api_error, to_json};

// ==========================================
// CSV export / restore
// ==========================================

/// Export every movement; `target` may be a file or a directory
#[tauri::command(rename_all = "snake_case")]
pub async fn export_movements_csv(
    state: tauri::State<'_, AppState>,
    target: Option<String>,
) -> Result<String, String> {
    let target = target
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .map(PathBuf::from);

    let summary = state
        .export_api
        .export_csv(target.as_deref())
        .map_err(map_api_error)?;
    to_json(&summary)
}

/// Restore an exported file into an empty ledger
#[tauri::command(rename_all = "snake_case")]
pub async fn restore_movements_csv(
    state: tauri::State<'_, AppState>,
    source: String,
) -> Result<String, String> {
    let rows = state
        .export_api
        .restore_csv(&PathBuf::from(source.trim()))
        .map_err(map_api_error)?;
    to_json(&rows)
}
