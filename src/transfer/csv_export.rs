// ==========================================
// Support Stock - CSV export
// ==========================================
// Header: Date,Item,Direction,Location,Quantity
// One row per movement, ascending id, stored codes as values
// ==========================================

use crate::domain::movement::Movement;
use crate::repository::movement_repo::DATE_FORMAT;
use crate::transfer::error::TransferResult;
use csv::WriterBuilder;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export column order
pub const EXPORT_HEADER: [&str; 5] = ["Date", "Item", "Direction", "Location", "Quantity"];

/// Write movements as CSV to any writer
///
/// Rows are sorted by id before writing. Returns the number of data rows.
pub fn write_movements<W: Write>(writer: W, movements: &[Movement]) -> TransferResult<usize> {
    let mut ordered: Vec<&Movement> = movements.iter().collect();
    ordered.sort_by_key(|m| m.id);

    let mut out = WriterBuilder::new().has_headers(false).from_writer(writer);
    out.write_record(EXPORT_HEADER)?;

    for m in &ordered {
        let date = m.date.format(DATE_FORMAT).to_string();
        let quantity = m.quantity.to_string();
        out.write_record([
            date.as_str(),
            m.item.to_db_str(),
            m.direction.to_db_str(),
            m.location.to_db_str(),
            quantity.as_str(),
        ])?;
    }

    out.flush()?;
    Ok(ordered.len())
}

/// Write movements to a CSV file, replacing it if present
pub fn export_to_file(path: &Path, movements: &[Movement]) -> TransferResult<usize> {
    let file = File::create(path)?;
    let rows = write_movements(file, movements)?;
    tracing::info!(path = %path.display(), rows, "movements exported");
    Ok(rows)
}
