pub mod config;
pub mod events;
pub mod run;
pub mod settings;
pub mod tracing;
pub mod wiring;

pub use config::load_config;
pub use run::{run_app, run_session};
pub use settings::{RuntimeSettings, SessionScript};
pub use wiring::{wire_runtime, AppRuntime};
