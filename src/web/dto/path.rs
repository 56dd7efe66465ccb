use serde::{Deserialize, Serialize};

use crate::model::ModuleProgressTracker;
use crate::model::entity::{Module, ModuleKind, ModuleStatus, PaymentType};

/// A module together with what the client may do with it.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ModuleResponse {
    pub id: String,
    /// 1-based step number in the path
    pub position: usize,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: ModuleKind,
    pub status: ModuleStatus,
    pub payment_type: PaymentType,
    pub duration_minutes: u32,
    pub content_link: Option<String>,
    pub accessible: bool,
    pub requires_payment: bool,
}

impl ModuleResponse {
    pub fn new(position: usize, module: &Module) -> Self {
        Self {
            id: module.id().to_string(),
            position,
            title: module.title().to_string(),
            description: module.description().to_string(),
            kind: module.kind(),
            status: module.status(),
            payment_type: module.payment_type(),
            duration_minutes: module.duration_minutes(),
            content_link: module.content_link().map(str::to_string),
            accessible: module.is_accessible(),
            requires_payment: module.requires_payment(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PathResponse {
    pub modules: Vec<ModuleResponse>,
    pub completed: usize,
    pub total: usize,
    pub progress: u8,
    pub project_unlocked: bool,
}

impl From<&ModuleProgressTracker> for PathResponse {
    fn from(tracker: &ModuleProgressTracker) -> Self {
        Self {
            modules: tracker
                .modules()
                .iter()
                .enumerate()
                .map(|(index, module)| ModuleResponse::new(index + 1, module))
                .collect(),
            completed: tracker.completed_count(),
            total: tracker.modules().len(),
            progress: tracker.progress(),
            project_unlocked: tracker.project_unlocked(),
        }
    }
}
