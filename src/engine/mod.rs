// ==========================================
// Support Stock - engine layer
// ==========================================
// Read-side derivations over the ledger.
// Stateless: every result is recomputed from the movements passed in.
// ==========================================

pub mod balance;
pub mod history;
pub mod report;

pub use balance::{BalanceCalculator, BalanceCell, InventorySnapshot};
pub use history::{DaySummary, HistoryAggregator, HistoryDetail, HistoryRow, HistoryViewState};
pub use report::{DailyReport, ReportGenerator, ReportRow};
