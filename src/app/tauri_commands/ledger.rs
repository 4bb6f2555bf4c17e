use crate::api::RegistrationForm;
use crate::app::state::AppState;

use super::common::{map_api_error, to_json};

// ==========================================
// Registration tab
// ==========================================

/// Record the registration form (up to three movements)
#[tauri::command(rename_all = "snake_case")]
pub async fn register_movements(
    state: tauri::State<'_, AppState>,
    form: RegistrationForm,
) -> Result<String, String> {
    let created = state.ledger_api.register(&form).map_err(map_api_error)?;
    to_json(&created)
}

/// Undo the last movement; the UI asks for confirmation first
///
/// `removed` is `null` when there was nothing to undo; `message` is the notice to show.
#[tauri::command(rename_all = "snake_case")]
pub async fn undo_last_movement(state: tauri::State<'_, AppState>) -> Result<String, String> {
    let outcome = state
        .ledger_api
        .undo_last_with_notice()
        .map_err(map_api_error)?;
    to_json(&outcome)
}

/// Direction selector state after a location change
#[tauri::command(rename_all = "snake_case")]
pub async fn get_direction_choice(
    state: tauri::State<'_, AppState>,
    location: Option<String>,
    current: Option<String>,
) -> Result<String, String> {
    let choice = state
        .ledger_api
        .direction_choice(location.as_deref(), current.as_deref())
        .map_err(map_api_error)?;
    to_json(&choice)
}
