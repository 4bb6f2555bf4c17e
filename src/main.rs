// ==========================================
// Support Stock - Tauri entry point
// ==========================================

// No console window on Windows release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

#[cfg(feature = "tauri-app")]
fn main() {
    use support_stock::app::tauri_commands::*;
    use support_stock::app::{get_default_db_path, AppState};

    support_stock::logging::init();

    tracing::info!("{} {}", support_stock::APP_NAME, support_stock::VERSION);

    let db_path = get_default_db_path();
    tracing::info!("database: {}", db_path);

    let app_state = match AppState::new(db_path) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("startup failed: {}", e);
            std::process::exit(1);
        }
    };

    let result = tauri::Builder::default()
        .manage(app_state)
        .invoke_handler(tauri::generate_handler![
            // registration
            register_movements,
            undo_last_movement,
            get_direction_choice,
            // inventory / history / report
            get_balance,
            get_inventory,
            get_history,
            toggle_history_day,
            collapse_history,
            list_latest_movements,
            get_daily_report,
            // CSV
            export_movements_csv,
            restore_movements_csv,
            // settings
            get_ui_config,
            set_locale,
        ])
        .run(tauri::generate_context!());

    if let Err(e) = result {
        tracing::error!("Tauri application error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("application closed");
}

#[cfg(not(feature = "tauri-app"))]
fn main() {
    println!("{} {}", support_stock::APP_NAME, support_stock::VERSION);
    println!();
    println!("The desktop UI needs the tauri-app feature:");
    println!("  cargo run --features tauri-app");
    println!();
    println!("CSV export without the UI:");
    println!("  cargo run --bin export_movements -- [db_path] [csv_path]");
}
