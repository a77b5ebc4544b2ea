//! Try-on flow orchestrator.
//!
//! This module coordinates the flow state machine and its side effects.

use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::{debug, info, info_span, warn, Instrument};

use ars_core::{
    clothing::find_catalog_item,
    flow::{FlowAction, FlowEvent, FlowStateMachine, FlowStep, Session, Tab},
    gallery::{GalleryItem, GalleryQuery},
    ids::TryOnId,
    photo::{ImageHandle, PhotoValidation},
    ports::{ClockPort, FlowEventPort, GalleryStorePort, PhotoUrlPort, ProgressPort},
    tryon::ProcessingStatus,
};

use crate::usecases::detect_category::DetectClothingCategory;
use crate::usecases::flow::context::FlowContext;
use crate::usecases::process_try_on::ProcessVirtualTryOn;

/// Errors produced by flow commands before an event reaches the machine.
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    #[error("unknown catalog item: {0}")]
    UnknownCatalogItem(String),
    #[error("uploaded clothing image is unavailable: {0}")]
    ClothingImageUnavailable(#[source] anyhow::Error),
}

/// Collaborators of [`FlowOrchestrator`].
pub struct FlowOrchestratorDeps {
    pub machine: FlowStateMachine,
    pub process: Arc<ProcessVirtualTryOn>,
    pub detect: Arc<DetectClothingCategory>,
    pub photo_urls: Arc<dyn PhotoUrlPort>,
    pub clock: Arc<dyn ClockPort>,
    pub gallery_store: Arc<dyn GalleryStorePort>,
    pub event_port: Arc<dyn FlowEventPort>,
}

/// Outcome of the one-time gallery load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GallerySeed {
    Loaded,
    /// The store could not be read; writing now would replace what it holds.
    LoadFailed,
}

/// A transition applied under the dispatch lock.
struct Applied {
    before: Session,
    after: Session,
    jobs: Vec<FlowAction>,
}

/// Orchestrator that drives the session and runs the machine's actions.
pub struct FlowOrchestrator {
    context: Arc<FlowContext>,
    gallery_seed: OnceCell<GallerySeed>,

    machine: FlowStateMachine,
    process: Arc<ProcessVirtualTryOn>,
    detect: Arc<DetectClothingCategory>,
    photo_urls: Arc<dyn PhotoUrlPort>,
    clock: Arc<dyn ClockPort>,
    gallery_store: Arc<dyn GalleryStorePort>,
    event_port: Arc<dyn FlowEventPort>,
}

impl FlowOrchestrator {
    pub fn new(deps: FlowOrchestratorDeps) -> Self {
        Self {
            context: FlowContext::default().arc(),
            gallery_seed: OnceCell::new(),
            machine: deps.machine,
            process: deps.process,
            detect: deps.detect,
            photo_urls: deps.photo_urls,
            clock: deps.clock,
            gallery_store: deps.gallery_store,
            event_port: deps.event_port,
        }
    }

    pub async fn get_started(&self) -> Session {
        self.dispatch(FlowEvent::GetStarted).await
    }

    pub async fn back(&self) -> Session {
        self.dispatch(FlowEvent::Back).await
    }

    /// Submits the user photo and returns its validation outcome, or `None`
    /// when the flow is not waiting for a photo.
    pub async fn submit_photo(&self, photo: ImageHandle) -> Option<PhotoValidation> {
        let validation = self.machine.validate_photo(&photo);
        let (applied_to, _) = self
            .dispatch_tracked(FlowEvent::SubmitPhoto { photo })
            .await;
        applied_to.awaits_photo().then_some(validation)
    }

    /// Uploads a custom garment; returns once its category is known.
    pub async fn upload_clothing(&self, image: ImageHandle) -> Session {
        self.dispatch(FlowEvent::UploadClothing { image }).await
    }

    /// Starts processing with the uploaded garment; returns when the run ends.
    pub async fn confirm_custom_clothing(&self) -> Result<Session, FlowError> {
        let session = self.state().await;
        let uploaded = match &session.step {
            FlowStep::ClothingUpload {
                custom: Some(custom),
            } => Some(custom.image.clone()),
            _ => None,
        };
        let Some(image) = uploaded else {
            return Ok(session);
        };
        let image_url = self
            .photo_urls
            .object_url(&image)
            .map_err(FlowError::ClothingImageUnavailable)?;

        let event = FlowEvent::ConfirmCustomClothing {
            item_id: self.clock.now_ms().to_string(),
            image_url,
        };
        Ok(self.dispatch(event).await)
    }

    /// Starts processing with a catalog garment; returns when the run ends.
    pub async fn select_catalog_item(&self, item_id: &str) -> Result<Session, FlowError> {
        let item = find_catalog_item(item_id)
            .ok_or_else(|| FlowError::UnknownCatalogItem(item_id.to_string()))?;
        Ok(self.dispatch(FlowEvent::SelectCatalogItem { item }).await)
    }

    pub async fn try_another(&self) -> Session {
        self.dispatch(FlowEvent::TryAnother).await
    }

    pub async fn save_to_gallery(&self) -> Session {
        self.dispatch(FlowEvent::SaveToGallery).await
    }

    pub async fn toggle_result_like(&self) -> Session {
        self.dispatch(FlowEvent::ToggleResultLike).await
    }

    pub async fn delete_gallery_item(&self, id: &TryOnId) -> Session {
        self.dispatch(FlowEvent::DeleteGalleryItem { id: id.clone() }).await
    }

    pub async fn toggle_gallery_like(&self, id: &TryOnId) -> Session {
        self.dispatch(FlowEvent::ToggleGalleryLike { id: id.clone() }).await
    }

    pub async fn select_tab(&self, tab: Tab) -> Session {
        self.dispatch(FlowEvent::SelectTab { tab }).await
    }

    pub async fn state(&self) -> Session {
        self.seed_gallery_from_store().await;
        self.context.get_session().await
    }

    /// Gallery items matching `query`, most recent first.
    pub async fn gallery_view(&self, query: &GalleryQuery) -> Vec<GalleryItem> {
        self.state().await.gallery.query(query)
    }

    async fn dispatch(&self, event: FlowEvent) -> Session {
        self.dispatch_tracked(event).await.1
    }

    /// Returns the session `event` was applied to and the session once every
    /// follow-up event has been applied.
    async fn dispatch_tracked(&self, event: FlowEvent) -> (Session, Session) {
        self.seed_gallery_from_store().await;

        let span = info_span!("usecase.flow_orchestrator.dispatch", event = event.name());
        async {
            let Applied {
                before,
                mut after,
                jobs,
            } = self.apply_event(event).await;
            let mut pending_jobs = jobs;
            let mut pending_events = Vec::new();

            loop {
                // Jobs run without the dispatch lock so other commands can
                // interleave while detection or the pipeline is waiting.
                for job in std::mem::take(&mut pending_jobs) {
                    if let Some(follow_up) = self.run_job(job).await {
                        pending_events.push(follow_up);
                    }
                }
                let Some(event) = pending_events.pop() else {
                    break;
                };
                let applied = self.apply_event(event).await;
                after = applied.after;
                pending_jobs = applied.jobs;
            }

            (before, after)
        }
        .instrument(span)
        .await
    }

    /// Runs one transition under the dispatch lock and executes its
    /// synchronous actions. Deferred jobs are handed back to the caller.
    async fn apply_event(&self, event: FlowEvent) -> Applied {
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;

        let current = self.context.get_session().await;
        let before = current.clone();
        let from = current.step.name();
        let event_name = event.name();
        let is_progress = matches!(event, FlowEvent::ProcessingProgress { .. });
        let (next, actions) = self.machine.transition(current, event);
        if is_progress {
            debug!(step = next.step.name(), "flow progress applied");
        } else {
            info!(from, to = next.step.name(), tab = ?next.tab, event = event_name, "flow transition");
        }

        let mut jobs = Vec::new();
        for action in actions {
            debug!(?action, "flow executing action");
            match action {
                FlowAction::PersistGallery => self.persist_gallery(&next).await,
                FlowAction::ReleaseImages { images } => {
                    for image in &images {
                        self.photo_urls.revoke(image);
                    }
                }
                job => jobs.push(job),
            }
        }

        if next != before {
            self.set_session_and_emit(next.clone()).await;
        }
        Applied {
            before,
            after: next,
            jobs,
        }
    }

    async fn persist_gallery(&self, session: &Session) {
        if self.gallery_seed.get() != Some(&GallerySeed::Loaded) {
            warn!(
                items = session.gallery.len(),
                "stored gallery was never loaded, skipping persist"
            );
            return;
        }
        if let Err(err) = self.gallery_store.save(&session.gallery).await {
            warn!(error = %err, "persisting gallery failed");
        }
    }

    async fn run_job(&self, job: FlowAction) -> Option<FlowEvent> {
        match job {
            FlowAction::DetectCategory { ticket, image } => {
                match self.detect.execute(&image).await {
                    Ok(category) => Some(FlowEvent::CategoryDetected { ticket, category }),
                    Err(err) => {
                        warn!(error = %err, ticket, "category detection failed");
                        Some(FlowEvent::CategoryDetectionFailed { ticket })
                    }
                }
            }
            FlowAction::StartProcessing {
                ticket,
                photo,
                clothing,
            } => {
                let progress = FlowProgress {
                    orchestrator: self,
                    ticket,
                };
                match self.process.run(&photo, clothing, &progress).await {
                    Ok(result) => Some(FlowEvent::ProcessingSucceeded {
                        ticket,
                        result: Box::new(result),
                    }),
                    Err(err) => {
                        warn!(error = %err, ticket, "virtual try-on failed");
                        Some(FlowEvent::ProcessingFailed {
                            ticket,
                            reason: err.to_string(),
                        })
                    }
                }
            }
            FlowAction::PersistGallery | FlowAction::ReleaseImages { .. } => None,
        }
    }

    async fn set_session_and_emit(&self, session: Session) {
        self.context.set_session(session.clone()).await;
        self.event_port
            .emit_session_changed(session.screen(), &session)
            .await;
    }

    /// Loads the stored gallery once. Concurrent callers wait for the first.
    async fn seed_gallery_from_store(&self) {
        self.gallery_seed.get_or_init(|| self.load_gallery()).await;
    }

    async fn load_gallery(&self) -> GallerySeed {
        match self.gallery_store.load().await {
            Ok(gallery) => {
                if !gallery.is_empty() {
                    info!(items = gallery.len(), "gallery restored from store");
                    self.apply_event(FlowEvent::GalleryRestored { gallery }).await;
                }
                GallerySeed::Loaded
            }
            Err(err) => {
                warn!(error = %err, "loading gallery failed, gallery changes stay in memory");
                GallerySeed::LoadFailed
            }
        }
    }
}

/// Feeds pipeline reports of one run back into the session.
struct FlowProgress<'a> {
    orchestrator: &'a FlowOrchestrator,
    ticket: u64,
}

#[async_trait::async_trait]
impl<'a> ProgressPort for FlowProgress<'a> {
    async fn report(&self, status: ProcessingStatus) {
        let event = FlowEvent::ProcessingProgress {
            ticket: self.ticket,
            status,
        };
        let session = self.orchestrator.apply_event(event).await.after;

        if let FlowStep::Processing { ticket, status } = &session.step {
            if *ticket == self.ticket {
                self.orchestrator
                    .event_port
                    .emit_progress(self.ticket, status)
                    .await;
            }
        }
    }
}
