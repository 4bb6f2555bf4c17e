// ==========================================
// Support Stock - daily report generator
// ==========================================
// Target date → inbound/outbound totals for every location × item.
// Full cross product, zero cells included.
// Independent of the lifetime balance calculation.
// ==========================================

use crate::domain::movement::Movement;
use crate::domain::types::{Direction, Item, Location};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    pub date: NaiveDate,
    pub location: Location,
    pub item: Item,
    pub inbound_total: i64,
    pub outbound_total: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyReport {
    pub date: NaiveDate,
    /// Location-major, always 12 rows
    pub rows: Vec<ReportRow>,
}

impl DailyReport {
    /// Cell lookup
    pub fn cell(&self, item: Item, location: Location) -> Option<&ReportRow> {
        self.rows
            .iter()
            .find(|r| r.item == item && r.location == location)
    }
}

pub struct ReportGenerator;

impl ReportGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Build the report for `date`
    ///
    /// Movements on other dates are ignored, so the whole ledger may be passed in.
    pub fn generate(&self, date: NaiveDate, movements: &[Movement]) -> DailyReport {
        let total = |item: Item, location: Location, direction: Direction| -> i64 {
            movements
                .iter()
                .filter(|m| {
                    m.date == date
                        && m.item == item
                        && m.location == location
                        && m.direction == direction
                })
                .map(|m| m.quantity)
                .sum()
        };

        let rows = Location::ALL
            .into_iter()
            .flat_map(|location| Item::ALL.into_iter().map(move |item| (location, item)))
            .map(|(location, item)| ReportRow {
                date,
                location,
                item,
                inbound_total: total(item, location, Direction::Inbound),
                outbound_total: total(item, location, Direction::Outbound),
            })
            .collect();

        DailyReport { date, rows }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}
