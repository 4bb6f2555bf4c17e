// ==========================================
// Support Stock - domain layer
// ==========================================
// Entities and closed enumerations.
// No data access, no aggregation logic.
// ==========================================

pub mod movement;
pub mod types;

pub use movement::{Movement, MovementViolation, NewMovement, MAX_QUANTITY};
pub use types::{Direction, Item, Location, UnknownCode};
