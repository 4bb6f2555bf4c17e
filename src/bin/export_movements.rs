// Export the movement ledger to CSV without starting the desktop UI.
//
// Usage:
//   cargo run --bin export_movements -- [db_path] [csv_path]
//
// db_path defaults to the application database, csv_path to the
// configured export file name in the working directory.

use std::path::PathBuf;

use support_stock::app::{get_default_db_path, AppState};

fn main() -> anyhow::Result<()> {
    support_stock::logging::init();

    let mut args = std::env::args().skip(1);
    let db_path = args
        .next()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(get_default_db_path);
    let target = args
        .next()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .map(PathBuf::from);

    let state = AppState::new(db_path).map_err(anyhow::Error::msg)?;
    let summary = state.export_api.export_csv(target.as_deref())?;

    println!("rows={} path={}", summary.rows, summary.path.display());
    Ok(())
}
