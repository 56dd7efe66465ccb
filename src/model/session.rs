//! One user's workflow state: diagnostic profile, learning path, payment
//! and final project.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::entity::{
    DiagnosticProfile, FinalProject, ModuleStatus, PaymentMethod, PaymentReceipt, Plan,
    ProjectStatus, ProjectSubmission,
};
use crate::model::error::{ModelError, ModelResult};
use crate::model::repo::ResourceTyped;
use crate::model::seed::seed_modules;
use crate::model::tracker::ModuleProgressTracker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SessionStage {
    /// Diagnostic not answered yet
    Diagnostic,
    Learning,
    /// Final project is open
    Project,
    Certified,
}

#[derive(Debug, Clone)]
pub struct LearningSession {
    id: Uuid,
    created_at: DateTime<Utc>,
    tracker: ModuleProgressTracker,
    profile: Option<DiagnosticProfile>,
    payment: Option<PaymentReceipt>,
    project: FinalProject,
}

impl ResourceTyped for LearningSession {
    fn get_resource_type() -> crate::model::ResourceType {
        crate::model::ResourceType::Session
    }
}

impl LearningSession {
    pub fn new(id: Uuid) -> Self {
        Self::with_tracker(id, ModuleProgressTracker::new(seed_modules()))
    }

    pub fn with_tracker(id: Uuid, tracker: ModuleProgressTracker) -> Self {
        Self {
            id,
            created_at: Utc::now(),
            tracker,
            profile: None,
            payment: None,
            project: FinalProject::default(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn tracker(&self) -> &ModuleProgressTracker {
        &self.tracker
    }

    pub fn profile(&self) -> Option<&DiagnosticProfile> {
        self.profile.as_ref()
    }

    pub fn payment(&self) -> Option<&PaymentReceipt> {
        self.payment.as_ref()
    }

    pub fn project(&self) -> &FinalProject {
        &self.project
    }

    pub fn progress(&self) -> u8 {
        self.tracker.progress()
    }

    pub fn project_unlocked(&self) -> bool {
        self.tracker.project_unlocked()
    }

    pub fn stage(&self) -> SessionStage {
        if self.project.status() == ProjectStatus::Completed {
            SessionStage::Certified
        } else if self.project_unlocked() {
            SessionStage::Project
        } else if self.profile.is_some() {
            SessionStage::Learning
        } else {
            SessionStage::Diagnostic
        }
    }

    pub fn submit_diagnostic(&mut self, profile: DiagnosticProfile) -> ModelResult<&DiagnosticProfile> {
        let profile = profile.normalized()?;
        tracing::debug!(session = %self.id, industry = ?profile.industry(), "diagnostic submitted");
        Ok(self.profile.insert(profile))
    }

    /// Completion action for one module.
    ///
    /// Locked modules and unpaid premium modules are refused. Completing a
    /// module twice is a no-op, so a completed successor is never reopened.
    pub fn complete_module(&mut self, module_id: &str) -> ModelResult<()> {
        let module = self
            .tracker
            .find(module_id)
            .ok_or_else(|| ModelError::ModuleNotFound(module_id.to_string()))?;

        match module.status() {
            ModuleStatus::Locked => return Err(ModelError::ModuleLocked(module_id.to_string())),
            ModuleStatus::Completed => {
                tracing::debug!(session = %self.id, module_id, "module already completed");
                return Ok(());
            }
            ModuleStatus::Available => {}
        }

        if module.requires_payment() && self.payment.is_none() {
            return Err(ModelError::PaymentRequired(module_id.to_string()));
        }

        self.tracker.complete(module_id);
        tracing::info!(
            session = %self.id,
            module_id,
            progress = self.progress(),
            "module completed"
        );
        Ok(())
    }

    pub fn confirm_payment(&mut self, plan_id: &str, method: PaymentMethod) -> ModelResult<&PaymentReceipt> {
        if self.payment.is_some() {
            return Err(ModelError::AlreadyPaid);
        }

        let plan = Plan::find(plan_id).ok_or_else(|| ModelError::UnknownPlan(plan_id.to_string()))?;
        let receipt = PaymentReceipt::new(&plan, method);
        tracing::info!(session = %self.id, plan = plan.id(), "payment confirmed");
        Ok(self.payment.insert(receipt))
    }

    pub fn submit_project(&mut self, submission: ProjectSubmission) -> ModelResult<&FinalProject> {
        if !self.project_unlocked() {
            return Err(ModelError::ProjectLocked {
                progress: self.progress(),
            });
        }

        self.project.submit(submission)?;
        tracing::info!(session = %self.id, "final project submitted");
        Ok(&self.project)
    }

    pub fn request_review(&mut self) -> ModelResult<&FinalProject> {
        self.project.request_review()?;
        tracing::info!(session = %self.id, "peer review requested");
        Ok(&self.project)
    }

    pub fn complete_review(&mut self) -> ModelResult<&FinalProject> {
        self.project.complete_review()?;
        tracing::info!(session = %self.id, "final project completed");
        Ok(&self.project)
    }
}
