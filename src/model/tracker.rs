//! Module unlocking and progress.
//!
//! A learning path is an ordered list of modules. Completing a module opens
//! the one right after it; progress is the rounded share of completed
//! modules and the final project opens at [`PROJECT_UNLOCK_THRESHOLD`].

use serde::Serialize;

use crate::model::entity::{Module, ModuleStatus};

/// Progress percentage at which the final project opens.
pub const PROJECT_UNLOCK_THRESHOLD: u8 = 80;

/// Marks `module_id` as completed and makes the module at the next position
/// available.
///
/// The next module is set to `available` whatever its previous status was,
/// so completing an earlier module again can move an already completed
/// successor back to `available`. An unknown id leaves the collection as is.
pub fn complete_module(modules: &[Module], module_id: &str) -> Vec<Module> {
    let Some(position) = modules.iter().position(|m| m.id() == module_id) else {
        tracing::debug!(module_id, "completion requested for unknown module, ignoring");
        return modules.to_vec();
    };

    modules
        .iter()
        .enumerate()
        .map(|(index, module)| {
            if index == position {
                module.clone().with_status(ModuleStatus::Completed)
            } else if index == position + 1 {
                module.clone().with_status(ModuleStatus::Available)
            } else {
                module.clone()
            }
        })
        .collect()
}

/// Share of completed modules in percent, rounded half up. Empty paths
/// report 0.
pub fn compute_progress(modules: &[Module]) -> u8 {
    let total = modules.len();
    if total == 0 {
        return 0;
    }

    let completed = modules
        .iter()
        .filter(|m| m.status() == ModuleStatus::Completed)
        .count();

    ((completed * 200 + total) / (total * 2)) as u8
}

pub fn is_project_unlocked(progress_percentage: u8) -> bool {
    progress_percentage >= PROJECT_UNLOCK_THRESHOLD
}

pub fn is_module_accessible(module: &Module) -> bool {
    module.is_accessible()
}

pub fn requires_payment(module: &Module) -> bool {
    module.requires_payment()
}

/// Owns the ordered module list of one learning path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleProgressTracker {
    modules: Vec<Module>,
}

impl ModuleProgressTracker {
    pub fn new(modules: Vec<Module>) -> Self {
        Self { modules }
    }

    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    pub fn find(&self, module_id: &str) -> Option<&Module> {
        self.modules.iter().find(|m| m.id() == module_id)
    }

    /// Replaces the module list with the result of [`complete_module`].
    pub fn complete(&mut self, module_id: &str) {
        self.modules = complete_module(&self.modules, module_id);
    }

    pub fn progress(&self) -> u8 {
        compute_progress(&self.modules)
    }

    pub fn project_unlocked(&self) -> bool {
        is_project_unlocked(self.progress())
    }

    pub fn completed_count(&self) -> usize {
        self.modules
            .iter()
            .filter(|m| m.status() == ModuleStatus::Completed)
            .count()
    }
}
