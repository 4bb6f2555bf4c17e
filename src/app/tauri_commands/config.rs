use serde::Serialize;

use crate::api::ApiError;
use crate::app::state::AppState;
use crate::config::UiConfig;
use crate::i18n::{self, UiTexts};

use super::common::{map_api_error, to_json};

// ==========================================
// Settings
// ==========================================

/// Stored settings plus every string the frontend renders
#[derive(Debug, Serialize)]
struct UiBundle {
    config: UiConfig,
    texts: UiTexts,
}

fn ui_bundle(state: &AppState) -> Result<String, String> {
    let config = state
        .config
        .ui_config()
        .map_err(|e| map_api_error(ApiError::from(e)))?;
    to_json(&UiBundle {
        config,
        texts: i18n::ui_texts(),
    })
}

#[tauri::command(rename_all = "snake_case")]
pub async fn get_ui_config(state: tauri::State<'_, AppState>) -> Result<String, String> {
    ui_bundle(&state)
}

/// Persist and apply the UI language; returns the bundle in the new language
#[tauri::command(rename_all = "snake_case")]
pub async fn set_locale(
    state: tauri::State<'_, AppState>,
    locale: String,
) -> Result<String, String> {
    state
        .config
        .set_locale(&locale)
        .map_err(|e| map_api_error(ApiError::from(e)))?;
    i18n::set_locale(locale.trim());
    ui_bundle(&state)
}
