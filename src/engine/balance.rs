// ==========================================
// Support Stock - balance calculator
// ==========================================
// Signed totals over the whole ledger: INBOUND +q, OUTBOUND -q.
// Recomputed on every call, nothing cached.
// ==========================================

use crate::domain::movement::Movement;
use crate::domain::types::{Item, Location};
use serde::{Deserialize, Serialize};

// ==========================================
// Inventory snapshot (current stock grid)
// ==========================================

/// One location × item cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceCell {
    pub location: Location,
    pub item: Item,
    pub balance: i64,
}

/// Current stock per location/item plus the totals rows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventorySnapshot {
    /// Location-major, 12 cells
    pub cells: Vec<BalanceCell>,
    pub location_totals: Vec<(Location, i64)>,
    pub item_totals: Vec<(Item, i64)>,
    pub grand_total: i64,
}

// ==========================================
// BalanceCalculator
// ==========================================
// Stateless, pure functions.
pub struct BalanceCalculator;

impl BalanceCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Σ signed quantity over movements matching the filters
    ///
    /// `None` means every value of that dimension. Returns 0 when nothing matches.
    /// Stored quantities never exceed `MAX_QUANTITY`, which keeps the sum in `i64` range.
    pub fn balance(
        &self,
        movements: &[Movement],
        item: Option<Item>,
        location: Option<Location>,
    ) -> i64 {
        movements
            .iter()
            .filter(|m| item.map_or(true, |i| m.item == i))
            .filter(|m| location.map_or(true, |l| m.location == l))
            .map(Movement::signed_quantity)
            .sum()
    }

    /// Full inventory grid
    pub fn inventory_snapshot(&self, movements: &[Movement]) -> InventorySnapshot {
        let cells = Location::ALL
            .into_iter()
            .flat_map(|location| {
                Item::ALL.into_iter().map(move |item| BalanceCell {
                    location,
                    item,
                    balance: self.balance(movements, Some(item), Some(location)),
                })
            })
            .collect();

        let location_totals = Location::ALL
            .into_iter()
            .map(|l| (l, self.balance(movements, None, Some(l))))
            .collect();

        let item_totals = Item::ALL
            .into_iter()
            .map(|i| (i, self.balance(movements, Some(i), None)))
            .collect();

        InventorySnapshot {
            cells,
            location_totals,
            item_totals,
            grand_total: self.balance(movements, None, None),
        }
    }
}

impl Default for BalanceCalculator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::Direction;
    use crate::domain::movement::MAX_QUANTITY;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn make_movement(
        id: i64,
        item: Item,
        direction: Direction,
        location: Location,
        quantity: i64,
    ) -> Movement {
        Movement {
            id,
            date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            item,
            direction,
            location,
            quantity,
        }
    }

    #[test]
    fn test_balance_in_minus_out() {
        let calc = BalanceCalculator::new();
        let ledger = vec![
            make_movement(1, Item::Roll, Direction::Inbound, Location::Fresh, 10),
            make_movement(2, Item::Roll, Direction::Outbound, Location::Fresh, 3),
        ];
        assert_eq!(calc.balance(&ledger, Some(Item::Roll), Some(Location::Fresh)), 7);
    }

    #[test]
    fn test_balance_empty_ledger_is_zero() {
        let calc = BalanceCalculator::new();
        assert_eq!(calc.balance(&[], None, None), 0);
        assert_eq!(calc.balance(&[], Some(Item::Grid), Some(Location::Dry)), 0);
    }

    #[test]
    fn test_balance_filters() {
        let calc = BalanceCalculator::new();
        let ledger = vec![
            make_movement(1, Item::Roll, Direction::Inbound, Location::Meat, 5),
            make_movement(2, Item::Grid, Direction::Inbound, Location::Dry, 8),
            make_movement(3, Item::Grid, Direction::Outbound, Location::Dry, 2),
            make_movement(4, Item::ReturnableCrate, Direction::Outbound, Location::Fresh, 4),
        ];
        assert_eq!(calc.balance(&ledger, None, None), 7);
        assert_eq!(calc.balance(&ledger, Some(Item::Grid), None), 6);
        assert_eq!(calc.balance(&ledger, None, Some(Location::Fresh)), -4);
        assert_eq!(calc.balance(&ledger, Some(Item::Roll), Some(Location::Dry)), 0);
    }

    #[test]
    fn test_balance_is_idempotent() {
        let calc = BalanceCalculator::new();
        let ledger = vec![
            make_movement(1, Item::Roll, Direction::Inbound, Location::Dry, 9),
            make_movement(2, Item::Roll, Direction::Outbound, Location::Dry, 1),
        ];
        assert_eq!(calc.balance(&ledger, None, None), calc.balance(&ledger, None, None));
    }

    #[test]
    fn test_inventory_snapshot_totals() {
        let calc = BalanceCalculator::new();
        let ledger = vec![
            make_movement(1, Item::Roll, Direction::Inbound, Location::Meat, 5),
            make_movement(2, Item::Grid, Direction::Inbound, Location::Dry, 8),
            make_movement(3, Item::Roll, Direction::Outbound, Location::Dry, 2),
        ];
        let snap = calc.inventory_snapshot(&ledger);

        assert_eq!(snap.cells.len(), 12);
        assert_eq!(snap.cells[0].location, Location::Meat);
        assert_eq!(snap.cells[0].item, Item::Roll);
        assert_eq!(snap.cells[0].balance, 5);

        assert_eq!(snap.location_totals[3], (Location::Dry, 6));
        assert_eq!(snap.item_totals[0], (Item::Roll, 3));
        assert_eq!(snap.grand_total, 11);

        let cell_sum: i64 = snap.cells.iter().map(|c| c.balance).sum();
        assert_eq!(cell_sum, snap.grand_total);
    }

    #[test]
    fn test_balance_of_maximum_quantities() {
        let calc = BalanceCalculator::new();
        let ledger: Vec<Movement> = (1..=3)
            .map(|id| make_movement(id, Item::Roll, Direction::Inbound, Location::Dry, MAX_QUANTITY))
            .collect();
        assert_eq!(calc.balance(&ledger, None, None), 3 * MAX_QUANTITY);
        assert_eq!(calc.inventory_snapshot(&ledger).grand_total, 3 * MAX_QUANTITY);
    }

    fn arb_ledger() -> impl Strategy<Value = Vec<Movement>> {
        prop::collection::vec(
            (0usize..3, any::<bool>(), 0usize..4, 1i64..=MAX_QUANTITY),
            0..40,
        )
        .prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(idx, (item, outbound, location, quantity))| {
                    let direction = if outbound {
                        Direction::Outbound
                    } else {
                        Direction::Inbound
                    };
                    make_movement(
                        idx as i64 + 1,
                        Item::ALL[item],
                        direction,
                        Location::ALL[location],
                        quantity,
                    )
                })
                .collect()
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Unfiltered balance equals total inbound minus total outbound
        #[test]
        fn balance_equals_inbound_minus_outbound(ledger in arb_ledger()) {
            let calc = BalanceCalculator::new();
            let inbound: i64 = ledger
                .iter()
                .filter(|m| m.direction == Direction::Inbound)
                .map(|m| m.quantity)
                .sum();
            let outbound: i64 = ledger
                .iter()
                .filter(|m| m.direction == Direction::Outbound)
                .map(|m| m.quantity)
                .sum();
            prop_assert_eq!(calc.balance(&ledger, None, None), inbound - outbound);
            prop_assert_eq!(
                calc.balance(&ledger, None, None),
                calc.balance(&ledger, None, None)
            );
        }

        /// Every row and column of the grid adds up to the grand total
        #[test]
        fn inventory_totals_are_consistent(ledger in arb_ledger()) {
            let snap = BalanceCalculator::new().inventory_snapshot(&ledger);
            let cell_sum: i64 = snap.cells.iter().map(|c| c.balance).sum();
            let location_sum: i64 = snap.location_totals.iter().map(|(_, v)| *v).sum();
            let item_sum: i64 = snap.item_totals.iter().map(|(_, v)| *v).sum();
            prop_assert_eq!(snap.cells.len(), 12);
            prop_assert_eq!(cell_sum, snap.grand_total);
            prop_assert_eq!(location_sum, snap.grand_total);
            prop_assert_eq!(item_sum, snap.grand_total);
        }
    }
}
