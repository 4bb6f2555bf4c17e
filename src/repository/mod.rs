// ==========================================
// Support Stock - repository layer
// ==========================================
// Data access only, no aggregation logic.
// All queries are parameterized.
// ==========================================

pub mod error;
pub mod movement_repo;

pub use error::{RepositoryError, RepositoryResult};
pub use movement_repo::MovementRepository;
