//! # ars-core
//!
//! Core domain models and business logic for AR Style.
//!
//! This crate contains the try-on flow state machine, photo validation and the
//! static tables behind the mock processing pipeline, without any
//! infrastructure dependencies.

// Public module exports
pub mod clothing;
pub mod config;
pub mod export;
pub mod flow;
pub mod gallery;
pub mod ids;
pub mod photo;
pub mod pipeline;
pub mod ports;
pub mod tryon;

// Re-export commonly used types at the crate root
pub use clothing::{Category, ClothingItem};
pub use config::AppConfig;
pub use flow::{FlowAction, FlowEvent, FlowStateMachine, FlowStep, Session, Tab};
pub use gallery::GalleryItem;
pub use ids::{TryOnId, UserId};
pub use photo::{ImageHandle, PhotoValidation, ValidationPolicy};
pub use tryon::{ProcessingPhase, ProcessingStatus, TryOnResult};
