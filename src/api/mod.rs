// ==========================================
// Support Stock - API layer
// ==========================================
// Business entry points used by the Tauri commands and the CLI
// ==========================================

pub mod dashboard_api;
pub mod error;
pub mod export_api;
pub mod ledger_api;
pub mod validator;

pub use dashboard_api::DashboardApi;
pub use error::{ApiError, ApiResult};
pub use export_api::{ExportApi, ExportSummary};
pub use ledger_api::{LedgerApi, UndoOutcome};
pub use validator::{DirectionChoice, RegistrationForm};
