//! In-memory session registry.
//!
//! Each browser gets its own [`GameController`]; the registry only maps ids
//! to sessions and never touches game state itself. Sessions idle for
//! longer than [`SessionLimits::idle_ttl`] are evicted, and creation is
//! refused once [`SessionLimits::max_sessions`] live sessions exist.

use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::SessionLimits;
use crate::cues::QueuedCues;
use crate::domain::{Catalog, IndexPicker};
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::gateway::AiGateway;
use crate::services::game_controller::GameController;

pub struct Session {
    pub controller: GameController,
    /// Cues waiting for the browser to play them.
    pub cues: Arc<QueuedCues>,
    last_seen: Mutex<Instant>,
}

impl Session {
    fn touch(&self, now: Instant) {
        *self.last_seen.lock() = now;
    }

    fn idle_for(&self, now: Instant) -> Duration {
        now.saturating_duration_since(*self.last_seen.lock())
    }
}

pub struct SessionRegistry {
    sessions: DashMap<Uuid, Arc<Session>>,
    catalog: Arc<Catalog>,
    gateway: Arc<dyn AiGateway>,
    picker: Arc<dyn IndexPicker>,
    limits: SessionLimits,
}

impl SessionRegistry {
    pub fn new(
        catalog: Arc<Catalog>,
        gateway: Arc<dyn AiGateway>,
        picker: Arc<dyn IndexPicker>,
        limits: SessionLimits,
    ) -> Self {
        Self {
            sessions: DashMap::new(),
            catalog,
            gateway,
            picker,
            limits,
        }
    }

    /// Register a fresh session, evicting idle ones first.
    pub fn create(&self) -> Result<(Uuid, Arc<Session>), DomainError> {
        let now = Instant::now();
        if self.sessions.len() >= self.limits.max_sessions {
            self.evict_idle_at(now);
        }
        if self.sessions.len() >= self.limits.max_sessions {
            warn!(max = self.limits.max_sessions, "session registry full");
            return Err(DomainError::session_limit(self.limits.max_sessions));
        }

        let id = Uuid::new_v4();
        let cues = Arc::new(QueuedCues::default());
        let controller = GameController::new(
            Arc::clone(&self.catalog),
            Arc::clone(&self.gateway),
            Arc::clone(&self.picker),
            cues.clone(),
        );
        let session = Arc::new(Session {
            controller,
            cues,
            last_seen: Mutex::new(now),
        });
        self.sessions.insert(id, Arc::clone(&session));
        info!(session_id = %id, active = self.sessions.len(), "session created");
        Ok((id, session))
    }

    /// Look up a live session and mark it as used.
    pub fn get(&self, id: Uuid) -> Result<Arc<Session>, DomainError> {
        let session = self
            .sessions
            .get(&id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| {
                DomainError::not_found(NotFoundKind::Session, format!("Session {id} not found"))
            })?;
        session.touch(Instant::now());
        Ok(session)
    }

    pub fn evict_idle(&self) -> usize {
        self.evict_idle_at(Instant::now())
    }

    /// Drop sessions idle for at least the configured TTL as of `now`.
    ///
    /// A request already holding a session keeps its `Arc` and finishes
    /// normally; the id just stops resolving.
    pub fn evict_idle_at(&self, now: Instant) -> usize {
        let ttl = self.limits.idle_ttl;
        let before = self.sessions.len();
        self.sessions.retain(|id, session| {
            let keep = session.idle_for(now) < ttl;
            if !keep {
                debug!(session_id = %id, "evicting idle session");
            }
            keep
        });
        let evicted = before.saturating_sub(self.sessions.len());
        if evicted > 0 {
            info!(evicted, active = self.sessions.len(), "idle sessions evicted");
        }
        evicted
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn limits(&self) -> SessionLimits {
        self.limits
    }
}

/// Sweep idle sessions every `every` until the runtime shuts down.
pub fn spawn_reaper(registry: Arc<SessionRegistry>, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        // First tick completes immediately
        ticker.tick().await;
        loop {
            ticker.tick().await;
            registry.evict_idle();
        }
    })
}
