// ==========================================
// Support Stock - ledger API
// ==========================================
// Writes: registration (up to three movements, one transaction)
// and undo-last. Confirmation dialogs stay in the UI.
// ==========================================

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::api::error::ApiResult;
use crate::api::validator::{self, DirectionChoice, RegistrationForm};
use crate::domain::movement::{Movement, NewMovement};
use crate::i18n::t;
use crate::repository::movement_repo::MovementRepository;

/// Undo result with the notice to show
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UndoOutcome {
    /// None when the ledger was empty
    pub removed: Option<Movement>,
    pub message: String,
}

pub struct LedgerApi {
    movement_repo: Arc<MovementRepository>,
}

impl LedgerApi {
    pub fn new(movement_repo: Arc<MovementRepository>) -> Self {
        Self { movement_repo }
    }

    /// Record a registration form
    ///
    /// A blank date means today (local time).
    ///
    /// # Returns
    /// - Ok(Vec<Movement>): created movements, ascending id
    /// - Err(ValidationError): nothing written
    /// - Err(Database*): nothing written (transaction rolled back)
    pub fn register(&self, form: &RegistrationForm) -> ApiResult<Vec<Movement>> {
        self.register_on(form, Local::now().date_naive())
    }

    /// Same as [`register`](Self::register) with an explicit "today"
    pub fn register_on(&self, form: &RegistrationForm, today: NaiveDate) -> ApiResult<Vec<Movement>> {
        let drafts = validator::validate_registration(form, today)?;
        let created = self.movement_repo.append_batch(&drafts)?;

        tracing::info!(
            count = created.len(),
            first_id = created.first().map(|m| m.id),
            "registration recorded"
        );
        Ok(created)
    }

    /// Append one movement directly (import tools, tests)
    pub fn append(&self, movement: &NewMovement) -> ApiResult<Movement> {
        Ok(self.movement_repo.append(movement)?)
    }

    /// Remove the most recent movement
    ///
    /// # Returns
    /// - Ok(Some(Movement)): the removed movement
    /// - Ok(None): ledger empty, nothing to undo
    pub fn undo_last(&self) -> ApiResult<Option<Movement>> {
        let removed = self.movement_repo.delete_last()?;
        match &removed {
            Some(m) => tracing::info!(id = m.id, "last movement undone"),
            None => tracing::info!("undo requested on empty ledger"),
        }
        Ok(removed)
    }

    /// [`undo_last`](Self::undo_last) plus the localized notice
    pub fn undo_last_with_notice(&self) -> ApiResult<UndoOutcome> {
        let removed = self.undo_last()?;
        let message = match removed {
            Some(_) => t("notice.undone"),
            None => t("notice.nothing_to_undo"),
        };
        Ok(UndoOutcome { removed, message })
    }

    /// Direction selector state for a raw location selection
    pub fn direction_choice(
        &self,
        location: Option<&str>,
        current: Option<&str>,
    ) -> ApiResult<DirectionChoice> {
        let location = validator::parse_location(location)?;
        let current = match current {
            Some(_) if location.is_some_and(|l| l.forces_inbound()) => None,
            Some(raw) => Some(validator::parse_direction(Some(raw))?),
            None => None,
        };
        Ok(validator::direction_choice(location, current))
    }
}
