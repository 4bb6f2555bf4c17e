// ==========================================
// Support Stock - CSV parser
// ==========================================
// Reads the export format back into unsaved movements.
// Also accepts the Italian headers of files written by the old desktop tool.
// ==========================================

use crate::domain::movement::NewMovement;
use crate::domain::types::{Direction, Item, Location, UnknownCode};
use crate::repository::movement_repo::DATE_FORMAT;
use crate::transfer::error::{TransferError, TransferResult};
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Column positions resolved from the header row
struct ColumnMap {
    date: usize,
    item: usize,
    direction: usize,
    location: usize,
    quantity: usize,
}

impl ColumnMap {
    fn from_headers(headers: &StringRecord) -> TransferResult<Self> {
        let find = |names: &[&str], label: &str| -> TransferResult<usize> {
            headers
                .iter()
                .position(|h| names.iter().any(|n| h.trim().eq_ignore_ascii_case(n)))
                .ok_or_else(|| TransferError::MissingColumn(label.to_string()))
        };

        Ok(Self {
            date: find(&["Date", "Data"], "Date")?,
            item: find(&["Item", "Articolo"], "Item")?,
            direction: find(&["Direction", "Direzione"], "Direction")?,
            location: find(&["Location", "Magazzino"], "Location")?,
            quantity: find(&["Quantity", "Quantità", "Quantita"], "Quantity")?,
        })
    }
}

/// Parse CSV rows from any reader
///
/// Row numbers in errors count the header as row 1.
pub fn parse_movements<R: Read>(reader: R) -> TransferResult<Vec<NewMovement>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let columns = ColumnMap::from_headers(rdr.headers()?)?;

    let mut movements = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let record = result?;
        let row = idx + 2;

        if record.iter().all(|v| v.is_empty()) {
            continue;
        }

        movements.push(parse_record(&record, &columns, row)?);
    }

    Ok(movements)
}

/// Parse a CSV file
pub fn parse_file(path: &Path) -> TransferResult<Vec<NewMovement>> {
    if !path.exists() {
        return Err(TransferError::FileNotFound(path.display().to_string()));
    }
    let file = File::open(path)?;
    parse_movements(file)
}

fn field<'a>(record: &'a StringRecord, idx: usize) -> &'a str {
    record.get(idx).unwrap_or("")
}

fn invalid(row: usize, column: &str, message: String) -> TransferError {
    TransferError::InvalidValue {
        row,
        column: column.to_string(),
        message,
    }
}

fn parse_record(record: &StringRecord, columns: &ColumnMap, row: usize) -> TransferResult<NewMovement> {
    let raw_date = field(record, columns.date);
    let date = NaiveDate::parse_from_str(raw_date, DATE_FORMAT)
        .map_err(|e| invalid(row, "Date", format!("'{}': {}", raw_date, e)))?;

    let raw_item = field(record, columns.item);
    let item: Item = raw_item
        .parse()
        .map_err(|e: UnknownCode| invalid(row, "Item", e.to_string()))?;

    let raw_direction = field(record, columns.direction);
    let direction: Direction = raw_direction
        .parse()
        .map_err(|e: UnknownCode| invalid(row, "Direction", e.to_string()))?;

    let raw_location = field(record, columns.location);
    let location: Location = raw_location
        .parse()
        .map_err(|e: UnknownCode| invalid(row, "Location", e.to_string()))?;

    let raw_quantity = field(record, columns.quantity);
    let quantity: i64 = raw_quantity
        .parse()
        .map_err(|_| invalid(row, "Quantity", format!("not an integer: '{}'", raw_quantity)))?;

    let movement = NewMovement::new(date, item, direction, location, quantity);
    movement
        .validate()
        .map_err(|v| invalid(row, v.field(), v.to_string()))?;
    Ok(movement)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_export_format() {
        let text = "Date,Item,Direction,Location,Quantity\n\
                    2024-01-10,Roll,ENTRATA,Freschi,10\n\
                    2024-01-10,Roll,USCITA,Freschi,3\n";
        let parsed = parse_movements(text.as_bytes()).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[1].direction, Direction::Outbound);
        assert_eq!(parsed[1].location, Location::Fresh);
        assert_eq!(parsed[1].quantity, 3);
    }

    #[test]
    fn test_parse_spaced_and_italian_headers() {
        let text = "Data, Articolo, Direzione, Magazzino, Quantità\n\
                    2024-02-01, Cassetta CPR, ENTRATA, Ortofrutta, 7\n";
        let parsed = parse_movements(text.as_bytes()).unwrap();
        assert_eq!(parsed[0].item, Item::ReturnableCrate);
        assert_eq!(parsed[0].location, Location::Produce);
    }

    #[test]
    fn test_missing_column_reported() {
        let text = "Date,Item,Direction,Quantity\n2024-01-10,Roll,ENTRATA,1\n";
        match parse_movements(text.as_bytes()) {
            Err(TransferError::MissingColumn(c)) => assert_eq!(c, "Location"),
            other => panic!("expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_value_reports_row() {
        let text = "Date,Item,Direction,Location,Quantity\n\
                    2024-01-10,Roll,ENTRATA,Secchi,1\n\
                    2024-01-10,Pallet,ENTRATA,Secchi,1\n";
        match parse_movements(text.as_bytes()) {
            Err(TransferError::InvalidValue { row, column, .. }) => {
                assert_eq!(row, 3);
                assert_eq!(column, "Item");
            }
            other => panic!("expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn test_non_positive_quantity_rejected() {
        let text = "Date,Item,Direction,Location,Quantity\n2024-01-10,Roll,ENTRATA,Secchi,0\n";
        assert!(parse_movements(text.as_bytes()).is_err());
    }

    #[test]
    fn test_outbound_at_forced_location_reports_direction() {
        let text = "Date,Item,Direction,Location,Quantity\n2024-01-10,Griglia,USCITA,Carne,2\n";
        match parse_movements(text.as_bytes()) {
            Err(TransferError::InvalidValue { row, column, .. }) => {
                assert_eq!(row, 2);
                assert_eq!(column, "Direction");
            }
            other => panic!("expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn test_oversized_quantity_reports_quantity() {
        let text = format!(
            "Date,Item,Direction,Location,Quantity\n2024-01-10,Roll,ENTRATA,Secchi,{}\n",
            i64::MAX
        );
        match parse_movements(text.as_bytes()) {
            Err(TransferError::InvalidValue { column, .. }) => assert_eq!(column, "Quantity"),
            other => panic!("expected InvalidValue, got {:?}", other),
        }
    }
}
