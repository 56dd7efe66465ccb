use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::error::{ModelError, ModelResult};
use crate::model::repo::ResourceTyped;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Draft,
    Submitted,
    InReview,
    Completed,
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Draft => write!(f, "draft"),
            Self::Submitted => write!(f, "submitted"),
            Self::InReview => write!(f, "in_review"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ProjectSubmission {
    pub title: String,
    pub description: String,
    /// How the project applies to the author's field
    pub application: String,
    pub resources: String,
    /// File name of the attached deliverable, if any
    pub attachment: Option<String>,
}

/// Final certification project. Moves strictly
/// `draft -> submitted -> in_review -> completed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FinalProject {
    status: ProjectStatus,
    submission: Option<ProjectSubmission>,
    submitted_at: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
}

impl ResourceTyped for FinalProject {
    fn get_resource_type() -> crate::model::ResourceType {
        crate::model::ResourceType::Project
    }
}

impl Default for FinalProject {
    fn default() -> Self {
        Self {
            status: ProjectStatus::Draft,
            submission: None,
            submitted_at: None,
            completed_at: None,
        }
    }
}

impl FinalProject {
    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    pub fn submission(&self) -> Option<&ProjectSubmission> {
        self.submission.as_ref()
    }

    pub fn submitted_at(&self) -> Option<DateTime<Utc>> {
        self.submitted_at
    }

    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    fn expect_status(&self, expected: ProjectStatus, action: &'static str) -> ModelResult<()> {
        if self.status != expected {
            return Err(ModelError::InvalidProjectTransition {
                from: self.status,
                action,
            });
        }
        Ok(())
    }

    pub fn submit(&mut self, submission: ProjectSubmission) -> ModelResult<()> {
        self.expect_status(ProjectStatus::Draft, "submit")?;
        if submission.title.trim().is_empty() {
            return Err(ModelError::InvalidInput("project title must not be blank"));
        }

        self.submission = Some(submission);
        self.submitted_at = Some(Utc::now());
        self.status = ProjectStatus::Submitted;
        Ok(())
    }

    pub fn request_review(&mut self) -> ModelResult<()> {
        self.expect_status(ProjectStatus::Submitted, "request_review")?;
        self.status = ProjectStatus::InReview;
        Ok(())
    }

    pub fn complete_review(&mut self) -> ModelResult<()> {
        self.expect_status(ProjectStatus::InReview, "complete_review")?;
        self.completed_at = Some(Utc::now());
        self.status = ProjectStatus::Completed;
        Ok(())
    }
}
