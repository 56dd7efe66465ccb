use thiserror::Error;

use crate::model::entity::ProjectStatus;

pub type ModelResult<T> = std::result::Result<T, ModelError>;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("module not found: {0}")]
    ModuleNotFound(String),
    #[error("module is locked: {0}")]
    ModuleLocked(String),
    #[error("module requires payment: {0}")]
    PaymentRequired(String),
    #[error("unknown plan: {0}")]
    UnknownPlan(String),
    #[error("payment already confirmed")]
    AlreadyPaid,
    #[error("final project is locked, progress {progress}%")]
    ProjectLocked { progress: u8 },
    #[error("cannot {action} a project in state {from}")]
    InvalidProjectTransition {
        from: ProjectStatus,
        action: &'static str,
    },
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
}
