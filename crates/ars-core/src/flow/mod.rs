//! Try-on flow domain module.
//!
//! This module defines the screen-navigation state machine types.

mod session;
pub mod state_machine;

pub use session::{CustomClothing, FlowStep, Screen, Session, Tab};
pub use state_machine::{FlowAction, FlowEvent, FlowStateMachine};
