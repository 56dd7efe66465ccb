use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::{Mutex, RwLock};
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::model::session::LearningSession;

pub type SessionHandle = Arc<Mutex<LearningSession>>;

#[derive(Debug)]
struct SessionEntry {
    session: SessionHandle,
    last_seen: DateTime<Utc>,
}

/// Process-local registry of live sessions. Nothing survives a restart.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, SessionEntry>>>, // cloning shares the same map
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self) -> (Uuid, SessionHandle) {
        let id = Uuid::new_v4();
        (id, self.create_with_id(id).await)
    }

    /// Registers a fresh session under an id chosen by the caller.
    pub async fn create_with_id(&self, id: Uuid) -> SessionHandle {
        let session = Arc::new(Mutex::new(LearningSession::new(id)));

        self.sessions.write().await.insert(
            id,
            SessionEntry {
                session: session.clone(),
                last_seen: Utc::now(),
            },
        );

        tracing::info!(session = %id, "session started");
        session
    }

    /// Looks a session up and marks it as recently used.
    pub async fn get(&self, id: Uuid) -> Option<SessionHandle> {
        let mut sessions = self.sessions.write().await;
        let entry = sessions.get_mut(&id)?;
        entry.last_seen = Utc::now();
        Some(entry.session.clone())
    }

    pub async fn remove(&self, id: Uuid) -> bool {
        let removed = self.sessions.write().await.remove(&id).is_some();
        if removed {
            tracing::info!(session = %id, "session abandoned");
        }
        removed
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    /// Drops sessions idle for longer than `ttl`, returns how many went away.
    pub async fn purge_idle(&self, ttl: Duration) -> usize {
        self.purge_idle_at(Utc::now(), ttl).await
    }

    async fn purge_idle_at(&self, now: DateTime<Utc>, ttl: Duration) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, entry| now - entry.last_seen <= ttl);
        let purged = before - sessions.len();

        if purged > 0 {
            tracing::debug!(purged, remaining = sessions.len(), "idle sessions purged");
        }
        purged
    }

    /// Periodically purges idle sessions until `shutdown` fires.
    pub async fn run_sweeper(
        self,
        ttl: Duration,
        every: std::time::Duration,
        shutdown: CancellationToken,
    ) {
        let mut interval = tokio::time::interval(every);
        loop {
            tokio::select! {
                _ = shutdown.cancelled() => {
                    tracing::debug!("session sweeper stopped");
                    break;
                }
                _ = interval.tick() => {
                    self.purge_idle(ttl).await;
                }
            }
        }
    }
}
