// ==========================================
// Support Stock - dashboard API
// ==========================================
// Read side: balances, inventory grid, history, daily report.
// Each call reloads the ledger; no cached projections.
// ==========================================

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::NaiveDate;

use crate::api::error::{ApiError, ApiResult};
use crate::config::ConfigManager;
use crate::domain::movement::Movement;
use crate::domain::types::{Item, Location};
use crate::engine::{
    BalanceCalculator, DailyReport, DaySummary, HistoryAggregator, HistoryRow, HistoryViewState,
    InventorySnapshot, ReportGenerator,
};
use crate::repository::movement_repo::MovementRepository;

pub struct DashboardApi {
    movement_repo: Arc<MovementRepository>,
    config: Arc<ConfigManager>,
    balance_calculator: BalanceCalculator,
    history_aggregator: HistoryAggregator,
    report_generator: ReportGenerator,
    history_view: Mutex<HistoryViewState>,
}

impl DashboardApi {
    pub fn new(movement_repo: Arc<MovementRepository>, config: Arc<ConfigManager>) -> Self {
        Self {
            movement_repo,
            config,
            balance_calculator: BalanceCalculator::new(),
            history_aggregator: HistoryAggregator::new(),
            report_generator: ReportGenerator::new(),
            history_view: Mutex::new(HistoryViewState::new()),
        }
    }

    fn view_state(&self) -> ApiResult<MutexGuard<'_, HistoryViewState>> {
        self.history_view
            .lock()
            .map_err(|e| ApiError::InternalError(format!("history view lock poisoned: {}", e)))
    }

    /// Signed balance for the optional filters (0 when nothing matches)
    pub fn balance(&self, item: Option<Item>, location: Option<Location>) -> ApiResult<i64> {
        let ledger = self.movement_repo.list_all()?;
        Ok(self.balance_calculator.balance(&ledger, item, location))
    }

    /// Current stock grid with totals
    pub fn inventory(&self) -> ApiResult<InventorySnapshot> {
        let ledger = self.movement_repo.list_all()?;
        Ok(self.balance_calculator.inventory_snapshot(&ledger))
    }

    /// Date-grouped history, newest date first
    pub fn history(&self) -> ApiResult<Vec<DaySummary>> {
        let ledger = self.movement_repo.list_all()?;
        Ok(self.history_aggregator.aggregate(&ledger))
    }

    /// History rows with the expand state kept across refreshes
    pub fn history_rows(&self) -> ApiResult<Vec<HistoryRow>> {
        let days = self.history()?;
        Ok(self.view_state()?.rows(days))
    }

    /// Expand or collapse one date, then return the refreshed rows
    pub fn toggle_history_day(&self, date: NaiveDate) -> ApiResult<Vec<HistoryRow>> {
        let days = self.history()?;
        let mut view = self.view_state()?;
        view.toggle(date);
        Ok(view.rows(days))
    }

    pub fn collapse_history(&self) -> ApiResult<Vec<HistoryRow>> {
        let days = self.history()?;
        let mut view = self.view_state()?;
        view.collapse_all();
        Ok(view.rows(days))
    }

    /// Latest movements table (size from config)
    pub fn latest_movements(&self) -> ApiResult<Vec<Movement>> {
        let limit = self.config.latest_limit()?;
        Ok(self.movement_repo.list_latest(limit)?)
    }

    /// Movements of one day
    pub fn recent(&self, date: NaiveDate) -> ApiResult<Vec<Movement>> {
        Ok(self.movement_repo.list_recent(date)?)
    }

    /// Inbound/outbound per location × item for `date`
    pub fn daily_report(&self, date: NaiveDate) -> ApiResult<DailyReport> {
        let day = self.movement_repo.list_recent(date)?;
        tracing::debug!(%date, movements = day.len(), "daily report");
        Ok(self.report_generator.generate(date, &day))
    }
}
