//! Scripted session runner.
//!
//! Drives one try-on end to end through the orchestrator: welcome, photo,
//! garment, processing, then save, download and share of the result.

use std::path::PathBuf;

use anyhow::{bail, Context};
use ars_app::usecases::ShareOutcome;
use ars_core::config::AppConfig;
use ars_core::export::{ExportOrigin, ImageVariant};
use ars_core::flow::FlowStep;
use ars_core::ids::TryOnId;
use ars_core::photo::ImageHandle;
use ars_infra::image_handle_from_path;
use tracing::{info, warn};

use super::config::{config_path, load_config, CONFIG_ENV_VAR};
use super::settings::{RuntimeSettings, SessionScript};
use super::tracing::init_tracing_subscriber;
use super::wiring::{wire_runtime, AppRuntime, HostPorts};

const APP_DIR_NAME: &str = "arstyle";

/// Size reported for the built-in sample photo.
const SAMPLE_PHOTO_BYTES: u64 = 2 * 1024 * 1024;

/// What a scripted session produced.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionReport {
    pub result_id: TryOnId,
    pub downloaded: Option<String>,
    pub shared: Option<ShareOutcome>,
    pub gallery_items: usize,
}

fn data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR_NAME)
}

/// Entry point of the binary.
pub async fn run_app() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let data_dir = data_dir();
    let config = match config_path(std::env::var(CONFIG_ENV_VAR).ok(), &data_dir) {
        Some(path) => load_config(path)?,
        None => AppConfig::empty(),
    };
    let settings = RuntimeSettings::resolve(&config, &data_dir);
    init_tracing_subscriber(Some(&settings.log_dir))?;
    info!(data_dir = %data_dir.display(), ?settings, "starting AR Style session");

    let ports = HostPorts::system(&settings)?;
    let runtime = wire_runtime(&settings, ports);
    let report = run_session(&runtime, &settings.session).await?;
    info!(?report, "session finished");
    Ok(())
}

async fn user_photo(script: &SessionScript) -> anyhow::Result<ImageHandle> {
    match &script.photo_path {
        Some(path) => image_handle_from_path(path)
            .await
            .with_context(|| format!("load photo {}", path.display())),
        None => Ok(ImageHandle::new(
            "sample-photo.jpg",
            "image/jpeg",
            SAMPLE_PHOTO_BYTES,
        )),
    }
}

/// Runs one try-on through the orchestrator.
///
/// Export failures are logged; the session still counts as finished.
pub async fn run_session(
    runtime: &AppRuntime,
    script: &SessionScript,
) -> anyhow::Result<SessionReport> {
    let orchestrator = &runtime.orchestrator;
    orchestrator.get_started().await;

    let Some(validation) = orchestrator.submit_photo(user_photo(script).await?).await else {
        bail!("photo upload screen was not shown");
    };
    if !validation.valid {
        bail!("photo rejected: {}", validation.message);
    }
    if validation.likely_screenshot {
        warn!(message = %validation.message, "photo looks like a screenshot");
    }

    let session = match &script.clothing_image_path {
        Some(path) => {
            let image = image_handle_from_path(path)
                .await
                .with_context(|| format!("load clothing image {}", path.display()))?;
            orchestrator.upload_clothing(image).await;
            orchestrator.confirm_custom_clothing().await?
        }
        None => orchestrator.select_catalog_item(&script.catalog_item_id).await?,
    };

    if let Some(status) = session.processing_status() {
        bail!("processing did not finish: {}", status.message);
    }
    if session.step != FlowStep::Result {
        bail!("session stopped at {}", session.step.name());
    }
    let Some(result) = session.result else {
        bail!("result screen without a result");
    };

    let session = orchestrator.save_to_gallery().await;

    let downloaded = match runtime
        .download
        .execute(&result, ExportOrigin::Result, ImageVariant::Standard)
        .await
    {
        Ok(file_name) => Some(file_name),
        Err(err) => {
            warn!(error = %err, "download failed");
            None
        }
    };
    let shared = match runtime.share.execute(&result, ExportOrigin::Result).await {
        Ok(outcome) => Some(outcome),
        Err(err) => {
            warn!(error = %err, "share failed");
            None
        }
    };

    Ok(SessionReport {
        result_id: result.id,
        downloaded,
        shared,
        gallery_items: session.gallery.len(),
    })
}
