// ==========================================
// Support Stock - Tauri commands (split by area)
// ==========================================

#![cfg(feature = "tauri-app")]

mod common;
mod config;
mod dashboard;
mod export;
mod ledger;

pub use config::*;
pub use dashboard::*;
pub use export::*;
pub use ledger::*;
