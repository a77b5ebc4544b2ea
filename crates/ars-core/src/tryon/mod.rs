//! Try-on results and processing status.

mod result;
mod status;

pub use result::TryOnResult;
pub use status::{ProcessingPhase, ProcessingStatus};
