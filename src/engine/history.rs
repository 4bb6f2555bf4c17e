// ==========================================
// Support Stock - history aggregator
// ==========================================
// Movements grouped by date, newest date first.
// Pure projection of the ledger; expand/collapse lives in HistoryViewState.
// ==========================================

use crate::domain::movement::Movement;
use crate::domain::types::{Direction, Item, Location};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Expandable detail row of a day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryDetail {
    pub id: i64,
    pub direction: Direction,
    pub item: Item,
    pub location: Location,
    pub quantity: i64,
}

impl From<&Movement> for HistoryDetail {
    fn from(m: &Movement) -> Self {
        Self {
            id: m.id,
            direction: m.direction,
            item: m.item,
            location: m.location,
            quantity: m.quantity,
        }
    }
}

/// One row of the history view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub total_inbound: i64,
    pub total_outbound: i64,
    /// inbound - outbound
    pub net: i64,
    pub movement_count: usize,
    /// Newest first (id descending)
    pub details: Vec<HistoryDetail>,
}

// ==========================================
// HistoryAggregator
// ==========================================
pub struct HistoryAggregator;

impl HistoryAggregator {
    pub fn new() -> Self {
        Self
    }

    /// Group movements by date, most recent date first
    ///
    /// Empty input gives an empty list.
    pub fn aggregate(&self, movements: &[Movement]) -> Vec<DaySummary> {
        let mut by_date: BTreeMap<NaiveDate, Vec<&Movement>> = BTreeMap::new();
        for m in movements {
            by_date.entry(m.date).or_default().push(m);
        }

        by_date
            .into_iter()
            .rev()
            .map(|(date, mut day)| {
                day.sort_by(|a, b| b.id.cmp(&a.id));

                let total_inbound: i64 = day
                    .iter()
                    .filter(|m| m.direction == Direction::Inbound)
                    .map(|m| m.quantity)
                    .sum();
                let total_outbound: i64 = day
                    .iter()
                    .filter(|m| m.direction == Direction::Outbound)
                    .map(|m| m.quantity)
                    .sum();

                DaySummary {
                    date,
                    total_inbound,
                    total_outbound,
                    net: total_inbound - total_outbound,
                    movement_count: day.len(),
                    details: day.into_iter().map(HistoryDetail::from).collect(),
                }
            })
            .collect()
    }
}

impl Default for HistoryAggregator {
    fn default() -> Self {
        Self::new()
    }
}

/// Day summary as shown in the history view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRow {
    #[serde(flatten)]
    pub day: DaySummary,
    /// Details are listed under the row
    pub expanded: bool,
}

// ==========================================
// HistoryViewState - presentation state
// ==========================================
// Owned by the view, never by the ledger or the aggregator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryViewState {
    expanded: BTreeSet<NaiveDate>,
}

impl HistoryViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip a date row; returns true when it is now expanded
    pub fn toggle(&mut self, date: NaiveDate) -> bool {
        if self.expanded.remove(&date) {
            false
        } else {
            self.expanded.insert(date);
            true
        }
    }

    pub fn is_expanded(&self, date: NaiveDate) -> bool {
        self.expanded.contains(&date)
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    /// Drop dates that no longer appear in the history (e.g. after undo)
    pub fn retain_present(&mut self, days: &[DaySummary]) {
        let present: BTreeSet<NaiveDate> = days.iter().map(|d| d.date).collect();
        self.expanded.retain(|d| present.contains(d));
    }

    /// Prune stale dates, then pair every day with its expand flag
    pub fn rows(&mut self, days: Vec<DaySummary>) -> Vec<HistoryRow> {
        self.retain_present(&days);
        days.into_iter()
            .map(|day| HistoryRow {
                expanded: self.is_expanded(day.date),
                day,
            })
            .collect()
    }
}
