pub mod entity;

mod error;
pub use error::{ModelError, ModelResult};

mod repo;
pub use repo::{ResourceType, ResourceTyped};

pub mod seed;

pub mod session;
pub use session::{LearningSession, SessionStage};

mod store;
pub use store::{SessionHandle, SessionStore};

pub mod tracker;
pub use tracker::ModuleProgressTracker;

#[derive(Debug, Clone)]
pub struct ModelManager {
    store: SessionStore,
}

impl ModelManager {
    pub fn new(store: SessionStore) -> Self {
        Self { store }
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.store
    }
}
