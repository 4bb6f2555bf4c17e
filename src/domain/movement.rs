// ==========================================
// Support Stock - movement model
// ==========================================
// Aligned with the `movimenti` table:
// (id, data, articolo, direzione, magazzino, quantita)
// ==========================================

use crate::domain::types::{Direction, Item, Location};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest quantity a single movement may carry
///
/// Balances are plain `i64` sums; with this bound they stay in range for
/// any ledger below nine billion movements.
pub const MAX_QUANTITY: i64 = 1_000_000_000;

/// Why a movement may not be stored
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MovementViolation {
    #[error("quantity must be positive (item={item}, quantity={quantity})")]
    NonPositiveQuantity { item: Item, quantity: i64 },

    #[error("quantity exceeds {max} (item={item}, quantity={quantity})")]
    QuantityTooLarge { item: Item, quantity: i64, max: i64 },

    #[error("location {0} accepts only INBOUND movements")]
    OutboundAtForcedInbound(Location),
}

impl MovementViolation {
    /// Export column the violation belongs to
    pub fn field(&self) -> &'static str {
        match self {
            MovementViolation::NonPositiveQuantity { .. }
            | MovementViolation::QuantityTooLarge { .. } => "Quantity",
            MovementViolation::OutboundAtForcedInbound(_) => "Direction",
        }
    }
}

// ==========================================
// Movement - one persisted ledger entry
// ==========================================
// Immutable once stored; removed only by undo-last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movement {
    pub id: i64,
    pub date: NaiveDate,
    pub item: Item,
    pub direction: Direction,
    pub location: Location,
    pub quantity: i64,
}

impl Movement {
    /// Quantity with the direction sign applied
    pub fn signed_quantity(&self) -> i64 {
        self.direction.sign() * self.quantity
    }

    /// The same movement without its id
    pub fn to_new(&self) -> NewMovement {
        NewMovement {
            date: self.date,
            item: self.item,
            direction: self.direction,
            location: self.location,
            quantity: self.quantity,
        }
    }
}

// ==========================================
// NewMovement - movement not yet persisted
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMovement {
    pub date: NaiveDate,
    pub item: Item,
    pub direction: Direction,
    pub location: Location,
    pub quantity: i64,
}

impl NewMovement {
    pub fn new(
        date: NaiveDate,
        item: Item,
        direction: Direction,
        location: Location,
        quantity: i64,
    ) -> Self {
        Self {
            date,
            item,
            direction,
            location,
            quantity,
        }
    }

    /// Check creation invariants
    ///
    /// # Returns
    /// - Ok(()): the movement may be stored
    /// - Err(MovementViolation): reason for rejection
    pub fn validate(&self) -> Result<(), MovementViolation> {
        if self.quantity <= 0 {
            return Err(MovementViolation::NonPositiveQuantity {
                item: self.item,
                quantity: self.quantity,
            });
        }
        if self.quantity > MAX_QUANTITY {
            return Err(MovementViolation::QuantityTooLarge {
                item: self.item,
                quantity: self.quantity,
                max: MAX_QUANTITY,
            });
        }
        if self.location.forces_inbound() && self.direction != Direction::Inbound {
            return Err(MovementViolation::OutboundAtForcedInbound(self.location));
        }
        Ok(())
    }
}
