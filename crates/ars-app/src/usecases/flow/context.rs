use std::sync::Arc;

use tokio::sync::Mutex;
use ars_core::flow::Session;

/// Shared flow context holding the session and the dispatch lock.
///
/// ## Lock Ordering
/// When acquiring both locks, acquire `dispatch_lock` first, then `session`.
/// - `dispatch_lock`: held while a transition and its synchronous actions run.
/// - `session`: taken briefly for reads and for the final write of a dispatch.
#[derive(Clone)]
pub struct FlowContext {
    session: Arc<Mutex<Session>>,
    /// Serializes transitions so two events never start from the same snapshot.
    dispatch_lock: Arc<Mutex<()>>,
}

impl FlowContext {
    pub fn new(initial: Session) -> Self {
        Self {
            session: Arc::new(Mutex::new(initial)),
            dispatch_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Snapshot of the session. Does NOT acquire `dispatch_lock`.
    pub async fn get_session(&self) -> Session {
        self.session.lock().await.clone()
    }

    pub async fn acquire_dispatch_lock(&self) -> tokio::sync::MutexGuard<'_, ()> {
        self.dispatch_lock.lock().await
    }

    /// Only call while holding `dispatch_lock`.
    pub async fn set_session(&self, session: Session) {
        *self.session.lock().await = session;
    }
}

impl Default for FlowContext {
    fn default() -> Self {
        Self::new(Session::default())
    }
}
