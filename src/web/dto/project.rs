use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::LearningSession;
use crate::model::entity::{ProjectStatus, ProjectSubmission};

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ProjectResponse {
    pub status: ProjectStatus,
    pub unlocked: bool,
    pub progress: u8,
    pub submission: Option<ProjectSubmission>,
    pub submitted_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl From<&LearningSession> for ProjectResponse {
    fn from(session: &LearningSession) -> Self {
        let project = session.project();
        Self {
            status: project.status(),
            unlocked: session.project_unlocked(),
            progress: session.progress(),
            submission: project.submission().cloned(),
            submitted_at: project.submitted_at(),
            completed_at: project.completed_at(),
        }
    }
}
