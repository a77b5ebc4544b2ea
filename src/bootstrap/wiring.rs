//! # Dependency Injection
//!
//! Creates the infra adapters and injects them into the use cases. This is
//! the only place that depends on ars-infra and ars-app together; it
//! assembles, it does not decide.

use std::sync::Arc;

use ars_app::usecases::{
    DetectClothingCategory, DownloadTryOn, FlowOrchestrator, FlowOrchestratorDeps,
    ProcessVirtualTryOn, ShareTryOn,
};
use ars_core::flow::FlowStateMachine;
use ars_core::ports::{
    ClipboardPort, ClockPort, DownloadPort, FlowEventPort, GalleryStorePort, PhotoUrlPort,
    RandomPort, SharePort,
};
use ars_infra::{
    HeadlessShare, HttpDownloadSink, JsonGalleryStore, ObjectUrlRegistry, SystemClipboard,
    SystemClock, ThreadRandom,
};

use super::events::TracingFlowEvents;
use super::settings::RuntimeSettings;

pub type WiringResult<T> = Result<T, WiringError>;

#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("download sink initialization failed: {0}")]
    DownloadSink(#[source] anyhow::Error),
}

/// Host adapters behind the use cases; swapped out in tests.
pub struct HostPorts {
    pub random: Arc<dyn RandomPort>,
    pub clock: Arc<dyn ClockPort>,
    pub photo_urls: Arc<dyn PhotoUrlPort>,
    pub gallery_store: Arc<dyn GalleryStorePort>,
    pub event_port: Arc<dyn FlowEventPort>,
    pub download: Arc<dyn DownloadPort>,
    pub share: Arc<dyn SharePort>,
    pub clipboard: Arc<dyn ClipboardPort>,
}

impl HostPorts {
    pub fn system(settings: &RuntimeSettings) -> WiringResult<Self> {
        let download = HttpDownloadSink::new(settings.downloads_dir.clone())
            .map_err(WiringError::DownloadSink)?;
        Ok(Self {
            random: Arc::new(ThreadRandom),
            clock: Arc::new(SystemClock),
            photo_urls: Arc::new(ObjectUrlRegistry::new()),
            gallery_store: Arc::new(JsonGalleryStore::new(settings.gallery_path.clone())),
            event_port: Arc::new(TracingFlowEvents),
            download: Arc::new(download),
            share: Arc::new(HeadlessShare),
            clipboard: Arc::new(SystemClipboard),
        })
    }
}

/// The assembled application.
pub struct AppRuntime {
    pub orchestrator: Arc<FlowOrchestrator>,
    pub download: DownloadTryOn,
    pub share: ShareTryOn,
}

pub fn wire_runtime(settings: &RuntimeSettings, ports: HostPorts) -> AppRuntime {
    let process = ProcessVirtualTryOn::new(
        ports.photo_urls.clone(),
        ports.random.clone(),
        ports.clock.clone(),
    )
    .with_time_scale(settings.time_scale);
    let detect =
        DetectClothingCategory::new(ports.random.clone()).with_delay(settings.detection_delay);

    let orchestrator = FlowOrchestrator::new(FlowOrchestratorDeps {
        machine: FlowStateMachine::new(settings.validation_policy),
        process: Arc::new(process),
        detect: Arc::new(detect),
        photo_urls: ports.photo_urls,
        clock: ports.clock,
        gallery_store: ports.gallery_store,
        event_port: ports.event_port,
    });

    AppRuntime {
        orchestrator: Arc::new(orchestrator),
        download: DownloadTryOn::new(ports.download),
        share: ShareTryOn::new(ports.share, ports.clipboard),
    }
}
