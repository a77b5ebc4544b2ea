//! Export naming: download file names and share payloads.

use serde::{Deserialize, Serialize};

use crate::tryon::TryOnResult;

pub const SHARE_TITLE: &str = "Meu look no AR Style";
pub const SHARE_TEXT: &str = "Veja como ficou incrível! Criado com AR Style - IA e Realidade Aumentada";

/// Screen an export is triggered from; decides the file name prefix and
/// share title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportOrigin {
    Result,
    Gallery,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageVariant {
    #[default]
    Standard,
    Transparent,
}

/// Native share payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareRequest {
    pub title: String,
    pub text: String,
    pub url: String,
}

/// `<prefix><id>.jpg` or `<prefix><id>_transparent.png`.
pub fn download_file_name(result: &TryOnResult, origin: ExportOrigin, variant: ImageVariant) -> String {
    let stem = match origin {
        ExportOrigin::Result => format!("ar-style-look-{}", result.id),
        ExportOrigin::Gallery => format!("ar-style-{}", result.id),
    };
    match variant {
        ImageVariant::Standard => format!("{stem}.jpg"),
        ImageVariant::Transparent => format!("{stem}_transparent.png"),
    }
}

/// Image URL for `variant`, if the result has one.
pub fn image_url(result: &TryOnResult, variant: ImageVariant) -> Option<&str> {
    match variant {
        ImageVariant::Standard => Some(result.result_image_url.as_str()),
        ImageVariant::Transparent => result.transparent_result_url.as_deref(),
    }
}

pub fn share_request(result: &TryOnResult, origin: ExportOrigin) -> ShareRequest {
    let title = match origin {
        ExportOrigin::Result => SHARE_TITLE.to_string(),
        ExportOrigin::Gallery => format!("{SHARE_TITLE} - {}", result.clothing_item.name),
    };
    ShareRequest {
        title,
        text: SHARE_TEXT.to_string(),
        url: result.result_image_url.clone(),
    }
}
