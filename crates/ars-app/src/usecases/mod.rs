//! Try-on use cases.

pub mod detect_category;
pub mod export;
pub mod flow;
pub mod process_try_on;

pub use detect_category::{DetectClothingCategory, DetectionError};
pub use export::{DownloadTryOn, ExportError, ShareOutcome, ShareTryOn};
pub use flow::{FlowContext, FlowError, FlowOrchestrator, FlowOrchestratorDeps};
pub use process_try_on::{ProcessVirtualTryOn, ProcessingError};
