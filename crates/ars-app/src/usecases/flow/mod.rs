mod context;
mod orchestrator;

pub use context::FlowContext;
pub use orchestrator::{FlowError, FlowOrchestrator, FlowOrchestratorDeps};
