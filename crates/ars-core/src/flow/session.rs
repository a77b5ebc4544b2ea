use serde::{Deserialize, Serialize};

use crate::clothing::{Category, ClothingItem};
use crate::gallery::Gallery;
use crate::photo::{ImageHandle, PhotoValidation};
use crate::tryon::{ProcessingStatus, TryOnResult};

/// Top-level navigation tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Home,
    Gallery,
    Explore,
    Profile,
}

/// A garment uploaded by the user, waiting for its category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomClothing {
    pub image: ImageHandle,
    pub category: Option<Category>,
    pub detecting: bool,
    /// Ticket of the detection job started for this upload.
    pub ticket: u64,
}

/// Step of the linear try-on flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "kebab-case")]
pub enum FlowStep {
    Welcome,
    PhotoUpload {
        /// Outcome of the last rejected submission.
        validation: Option<PhotoValidation>,
    },
    ClothingUpload {
        custom: Option<CustomClothing>,
    },
    Processing {
        ticket: u64,
        status: ProcessingStatus,
    },
    Result,
}

impl FlowStep {
    pub fn name(&self) -> &'static str {
        match self {
            FlowStep::Welcome => "welcome",
            FlowStep::PhotoUpload { .. } => "photo-upload",
            FlowStep::ClothingUpload { .. } => "clothing-upload",
            FlowStep::Processing { .. } => "processing",
            FlowStep::Result => "result",
        }
    }
}

/// What the user is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    Welcome,
    PhotoUpload,
    ClothingUpload,
    Processing,
    Result,
    Gallery,
    Explore,
    Profile,
}

/// Application state of one session.
///
/// Owned by the flow orchestrator and only changed through
/// [`FlowStateMachine::transition`](super::FlowStateMachine::transition).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub step: FlowStep,
    pub tab: Tab,
    pub photo: Option<ImageHandle>,
    pub clothing: Option<ClothingItem>,
    pub result: Option<TryOnResult>,
    pub gallery: Gallery,
    /// Next ticket handed to an async job; stale completions carry old tickets.
    pub next_ticket: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            step: FlowStep::Welcome,
            tab: Tab::Home,
            photo: None,
            clothing: None,
            result: None,
            gallery: Gallery::default(),
            next_ticket: 1,
        }
    }
}

impl Session {
    pub fn screen(&self) -> Screen {
        match (&self.step, self.tab) {
            (FlowStep::Welcome, _) => Screen::Welcome,
            (_, Tab::Gallery) => Screen::Gallery,
            (_, Tab::Explore) => Screen::Explore,
            (_, Tab::Profile) => Screen::Profile,
            (FlowStep::PhotoUpload { .. }, Tab::Home) => Screen::PhotoUpload,
            (FlowStep::ClothingUpload { .. }, Tab::Home) => Screen::ClothingUpload,
            (FlowStep::Processing { .. }, Tab::Home) => Screen::Processing,
            (FlowStep::Result, Tab::Home) => Screen::Result,
        }
    }

    /// Whether a submitted photo would be validated right now.
    pub fn awaits_photo(&self) -> bool {
        self.tab == Tab::Home && matches!(self.step, FlowStep::PhotoUpload { .. })
    }

    /// Status of the current pipeline run, if one is on screen.
    pub fn processing_status(&self) -> Option<&ProcessingStatus> {
        match &self.step {
            FlowStep::Processing { status, .. } => Some(status),
            _ => None,
        }
    }

    pub(crate) fn take_ticket(&mut self) -> u64 {
        let ticket = self.next_ticket;
        self.next_ticket += 1;
        ticket
    }
}
