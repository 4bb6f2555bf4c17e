// ==========================================
// Support Stock - CSV export / restore API
// ==========================================

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::api::error::{ApiError, ApiResult};
use crate::config::ConfigManager;
use crate::i18n::{t, t_with_args};
use crate::repository::movement_repo::MovementRepository;
use crate::transfer;

/// Result of an export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub rows: usize,
    /// Localized confirmation for the operator
    pub message: String,
}

pub struct ExportApi {
    movement_repo: Arc<MovementRepository>,
    config: Arc<ConfigManager>,
}

impl ExportApi {
    pub fn new(movement_repo: Arc<MovementRepository>, config: Arc<ConfigManager>) -> Self {
        Self {
            movement_repo,
            config,
        }
    }

    /// Export the whole ledger, ascending id
    ///
    /// `target` may be a file or a directory; `None` writes the configured
    /// file name in the working directory.
    pub fn export_csv(&self, target: Option<&Path>) -> ApiResult<ExportSummary> {
        let path = self.resolve_target(target)?;
        let movements = self.movement_repo.list_all()?;
        let rows = transfer::export_to_file(&path, &movements)?;
        let shown = path.display().to_string();
        let message = t_with_args("notice.exported", &[("path", shown.as_str())]);
        Ok(ExportSummary {
            path,
            rows,
            message,
        })
    }

    /// Load an exported file into an empty ledger
    ///
    /// Refused when the ledger already has movements, so ids keep the file order.
    pub fn restore_csv(&self, source: &Path) -> ApiResult<usize> {
        let drafts = transfer::parse_file(source)?;

        if self.movement_repo.count()? > 0 {
            return Err(ApiError::BusinessRuleViolation(t(
                "notice.restore_requires_empty",
            )));
        }

        let created = self.movement_repo.append_batch(&drafts)?;
        tracing::info!(source = %source.display(), rows = created.len(), "ledger restored from CSV");
        Ok(created.len())
    }

    fn resolve_target(&self, target: Option<&Path>) -> ApiResult<PathBuf> {
        let file_name = self.config.export_file_name()?;
        Ok(match target {
            None => PathBuf::from(file_name),
            Some(p) if p.is_dir() => p.join(file_name),
            Some(p) => p.to_path_buf(),
        })
    }
}
