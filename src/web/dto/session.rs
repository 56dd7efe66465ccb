use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{LearningSession, SessionStage};

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SessionResponse {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub stage: SessionStage,
    pub progress: u8,
    pub project_unlocked: bool,
    pub diagnostic_completed: bool,
    pub premium_unlocked: bool,
}

impl From<&LearningSession> for SessionResponse {
    fn from(session: &LearningSession) -> Self {
        Self {
            id: session.id(),
            created_at: session.created_at(),
            stage: session.stage(),
            progress: session.progress(),
            project_unlocked: session.project_unlocked(),
            diagnostic_completed: session.profile().is_some(),
            premium_unlocked: session.payment().is_some(),
        }
    }
}
