//! AR Style application orchestration layer
//!
//! This crate contains the try-on use cases (mock processing, category
//! detection, export) and the flow orchestrator that executes the side
//! effects requested by the core state machine.

pub mod usecases;

pub use usecases::{
    DetectClothingCategory, DownloadTryOn, FlowOrchestrator, FlowOrchestratorDeps,
    ProcessVirtualTryOn, ShareOutcome, ShareTryOn,
};
