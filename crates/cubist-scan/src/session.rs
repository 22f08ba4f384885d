//! Per-session ownership of in-progress scans.
//!
//! Every scanning client gets its own [`ScanSession`] keyed by a
//! [`SessionId`]; no cube state is ever shared across sessions or parked in
//! process-wide mutable globals. Mutation of one session is serialized by
//! its own mutex, so duplicate or racing face submissions from the same
//! client cannot interleave and corrupt face order. Sessions die by
//! explicit removal or by the idle-TTL sweep.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use cubist_types::SessionId;
use tokio::sync::{Mutex, RwLock};
use tracing::debug;

use crate::aggregator::CubeScan;

/// One client's scanning session: the in-progress scan plus lifecycle
/// timestamps used by the idle sweep.
#[derive(Debug)]
pub struct ScanSession {
    /// The in-progress cube scan owned by this session.
    pub scan: CubeScan,
    /// When the session was created.
    pub created_at: DateTime<Utc>,
    /// Last time a request touched this session.
    pub last_active: DateTime<Utc>,
}

impl ScanSession {
    fn new() -> Self {
        let now = Utc::now();
        Self {
            scan: CubeScan::new(),
            created_at: now,
            last_active: now,
        }
    }

    /// Mark the session as active now. Callers hold the session mutex, so
    /// touching is already serialized with scan mutation.
    pub fn touch(&mut self) {
        self.last_active = Utc::now();
    }
}

/// Registry of live scanning sessions.
///
/// The outer lock guards the map (create, remove, sweep); each session has
/// its own inner mutex guarding the scan itself. Lookups clone the `Arc`,
/// so handlers never hold the map lock across a scan operation.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<BTreeMap<SessionId, Arc<Mutex<ScanSession>>>>,
}

impl SessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(BTreeMap::new()),
        }
    }

    /// Mint a new session and return its identifier.
    pub async fn create(&self) -> SessionId {
        let id = SessionId::new();
        let session = Arc::new(Mutex::new(ScanSession::new()));
        self.sessions.write().await.insert(id, session);
        debug!(session_id = %id, "scan session created");
        id
    }

    /// Look a session up by id.
    pub async fn get(&self, id: SessionId) -> Option<Arc<Mutex<ScanSession>>> {
        self.sessions.read().await.get(&id).map(Arc::clone)
    }

    /// Remove a session. Returns whether it existed.
    pub async fn remove(&self, id: SessionId) -> bool {
        let removed = self.sessions.write().await.remove(&id).is_some();
        if removed {
            debug!(session_id = %id, "scan session removed");
        }
        removed
    }

    /// Number of live sessions.
    pub async fn active_count(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Evict sessions idle for longer than `max_idle`. Sessions currently
    /// locked by a request are in use and are skipped. Returns how many
    /// sessions were evicted.
    pub async fn expire_idle(&self, max_idle: Duration) -> usize {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;

        let expired: Vec<SessionId> = sessions
            .iter()
            .filter_map(|(id, session)| {
                let guard = session.try_lock().ok()?;
                (now.signed_duration_since(guard.last_active) > max_idle).then_some(*id)
            })
            .collect();

        for id in &expired {
            sessions.remove(id);
        }
        if !expired.is_empty() {
            debug!(evicted = expired.len(), "idle scan sessions evicted");
        }
        expired.len()
    }
}
