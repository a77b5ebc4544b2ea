use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Opaque reference to a user-supplied image (camera capture or gallery pick).
///
/// The core only inspects the declared MIME type, the byte length and the
/// file name; the bytes stay wherever `location` points.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageHandle {
    pub file_name: String,
    pub mime_type: String,
    pub size_bytes: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<PathBuf>,
}

impl ImageHandle {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            size_bytes,
            location: None,
        }
    }

    pub fn with_location(mut self, location: impl Into<PathBuf>) -> Self {
        self.location = Some(location.into());
        self
    }
}
