use crate::tryon::ProcessingStatus;

/// Observer of a pipeline run.
///
/// Each report is awaited before the pipeline suspends again, so observers
/// see a strict total order of updates.
#[async_trait::async_trait]
pub trait ProgressPort: Send + Sync {
    async fn report(&self, status: ProcessingStatus);
}
