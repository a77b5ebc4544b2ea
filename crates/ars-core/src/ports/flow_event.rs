use crate::flow::{Screen, Session};
use crate::tryon::ProcessingStatus;

#[async_trait::async_trait]
pub trait FlowEventPort: Send + Sync {
    async fn emit_session_changed(&self, screen: Screen, session: &Session);
    async fn emit_progress(&self, ticket: u64, status: &ProcessingStatus);
}
