// ==========================================
// Support Stock - CSV transfer
// ==========================================
// Export of the full ledger and parsing of exported files
// ==========================================

pub mod csv_export;
pub mod csv_parser;
pub mod error;

pub use csv_export::{export_to_file, write_movements, EXPORT_HEADER};
pub use csv_parser::{parse_file, parse_movements};
pub use error::{TransferError, TransferResult};
