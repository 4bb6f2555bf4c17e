use crate::api::validator::parse_location;
use crate::api::ApiError;
use crate::app::state::AppState;
use crate::domain::types::Item;

use super::common::{map_api_error, parse_date, to_json};

// ==========================================
// Inventory / history / report tabs
// ==========================================

/// Signed balance; both filters optional
#[tauri::command(rename_all = "snake_case")]
pub async fn get_balance(
    state: tauri::State<'_, AppState>,
    item: Option<String>,
    location: Option<String>,
) -> Result<String, String> {
    let item = match item.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        Some(raw) => Some(
            raw.parse::<Item>()
                .map_err(|e| map_api_error(ApiError::ValidationError(e.to_string())))?,
        ),
        None => None,
    };
    let location = parse_location(location.as_deref()).map_err(map_api_error)?;

    let balance = state
        .dashboard_api
        .balance(item, location)
        .map_err(map_api_error)?;
    to_json(&balance)
}

#[tauri::command(rename_all = "snake_case")]
pub async fn get_inventory(state: tauri::State<'_, AppState>) -> Result<String, String> {
    let snapshot = state.dashboard_api.inventory().map_err(map_api_error)?;
    to_json(&snapshot)
}

/// History rows with their expand flags
#[tauri::command(rename_all = "snake_case")]
pub async fn get_history(state: tauri::State<'_, AppState>) -> Result<String, String> {
    let rows = state.dashboard_api.history_rows().map_err(map_api_error)?;
    to_json(&rows)
}

/// Expand/collapse one date (YYYY-MM-DD); returns the refreshed rows
#[tauri::command(rename_all = "snake_case")]
pub async fn toggle_history_day(
    state: tauri::State<'_, AppState>,
    date: String,
) -> Result<String, String> {
    let date = parse_date(&date)?;
    let rows = state
        .dashboard_api
        .toggle_history_day(date)
        .map_err(map_api_error)?;
    to_json(&rows)
}

#[tauri::command(rename_all = "snake_case")]
pub async fn collapse_history(state: tauri::State<'_, AppState>) -> Result<String, String> {
    let rows = state.dashboard_api.collapse_history().map_err(map_api_error)?;
    to_json(&rows)
}

#[tauri::command(rename_all = "snake_case")]
pub async fn list_latest_movements(state: tauri::State<'_, AppState>) -> Result<String, String> {
    let movements = state.dashboard_api.latest_movements().map_err(map_api_error)?;
    to_json(&movements)
}

/// Daily report grid (date: YYYY-MM-DD)
#[tauri::command(rename_all = "snake_case")]
pub async fn get_daily_report(
    state: tauri::State<'_, AppState>,
    date: String,
) -> Result<String, String> {
    let date = parse_date(&date)?;
    let report = state.dashboard_api.daily_report(date).map_err(map_api_error)?;
    to_json(&report)
}
