// ==========================================
// Support Stock - core library
// ==========================================
// Rolls / grids / returnable crates across four storage locations.
// Stack: Tauri + Rust + SQLite
// ==========================================

rust_i18n::i18n!("locales", fallback = "it");

// ==========================================
// Modules
// ==========================================

// Domain - entities and enumerations
pub mod domain;

// Repository - ledger storage
pub mod repository;

// Engine - balances, history, report
pub mod engine;

// CSV export / parsing
pub mod transfer;

// Configuration
pub mod config;

// SQLite connection and schema
pub mod db;

// Logging
pub mod logging;

// i18n
pub mod i18n;

// API - business entry points
pub mod api;

// App - Tauri integration
pub mod app;

// ==========================================
// Re-exports
// ==========================================

pub use domain::{Direction, Item, Location, Movement, NewMovement};
pub use engine::{BalanceCalculator, HistoryAggregator, HistoryViewState, ReportGenerator};
pub use api::{DashboardApi, ExportApi, LedgerApi, RegistrationForm};
pub use repository::MovementRepository;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const APP_NAME: &str = "Gestione Roll / Griglie / CPR";
