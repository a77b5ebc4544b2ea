use async_trait::async_trait;
use ars_core::flow::{Screen, Session};
use ars_core::ports::FlowEventPort;
use ars_core::tryon::ProcessingStatus;
use tracing::info;

/// Reports session changes and pipeline progress as log events.
#[derive(Debug, Default)]
pub struct TracingFlowEvents;

#[async_trait]
impl FlowEventPort for TracingFlowEvents {
    async fn emit_session_changed(&self, screen: Screen, session: &Session) {
        info!(
            ?screen,
            step = session.step.name(),
            gallery_items = session.gallery.len(),
            "session changed"
        );
    }

    async fn emit_progress(&self, ticket: u64, status: &ProcessingStatus) {
        info!(ticket, progress = status.progress, message = %status.message, "processing");
    }
}
