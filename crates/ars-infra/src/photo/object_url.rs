use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::bail;
use ars_core::photo::ImageHandle;
use ars_core::ports::PhotoUrlPort;
use tracing::{debug, warn};
use uuid::Uuid;

pub const OBJECT_URL_PREFIX: &str = "blob:arstyle/";

/// In-process stand-in for browser object URLs.
///
/// Each distinct handle gets one stable `blob:arstyle/<uuid>` URL until it is
/// revoked.
#[derive(Debug, Default)]
pub struct ObjectUrlRegistry {
    urls: Mutex<HashMap<ImageHandle, String>>,
}

impl ObjectUrlRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.urls
            .lock()
            .map(|urls| urls.len())
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PhotoUrlPort for ObjectUrlRegistry {
    fn object_url(&self, image: &ImageHandle) -> anyhow::Result<String> {
        if image.size_bytes == 0 {
            bail!("image {} is empty", image.file_name);
        }
        if let Some(location) = &image.location {
            if !location.is_file() {
                bail!("image {} is no longer at {}", image.file_name, location.display());
            }
        }

        let mut urls = self
            .urls
            .lock()
            .map_err(|_| anyhow::anyhow!("object url registry poisoned"))?;
        let url = urls
            .entry(image.clone())
            .or_insert_with(|| format!("{OBJECT_URL_PREFIX}{}", Uuid::new_v4()));
        Ok(url.clone())
    }

    fn revoke(&self, image: &ImageHandle) {
        match self.urls.lock() {
            Ok(mut urls) => {
                if let Some(url) = urls.remove(image) {
                    debug!(%url, file = %image.file_name, "object url revoked");
                }
            }
            Err(_) => warn!("object url registry poisoned, revoke skipped"),
        }
    }
}
