//! Photo validation.
//!
//! Pure checks on the declared MIME type and size of the user photo, plus a
//! file name heuristic that flags likely screenshots without blocking them.

use serde::{Deserialize, Serialize};

use super::ImageHandle;

pub const ALLOWED_MIME_TYPES: [&str; 4] = ["image/jpeg", "image/jpg", "image/png", "image/webp"];
pub const MAX_PHOTO_BYTES: u64 = 10 * 1024 * 1024;
pub const MIN_PHOTO_BYTES: u64 = 50 * 1024;

const SCREENSHOT_HINTS: [&str; 5] = ["screenshot", "screen shot", "screen_", "captura", "print"];

const MSG_UNSUPPORTED: &str = "Formato não suportado. Use JPG, PNG ou WEBP.";
const MSG_TOO_LARGE: &str = "Imagem muito grande. Máximo 10MB.";
const MSG_TOO_SMALL: &str = "Imagem muito pequena. Mínimo 50KB.";
const MSG_VALID: &str = "Imagem válida!";
const MSG_VALID_SCREENSHOT: &str =
    "Imagem válida! Parece uma captura de tela; fotos de corpo inteiro funcionam melhor.";

/// Which size bounds apply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationPolicy {
    /// Upper bound only.
    Standard,
    /// Upper bound plus a 50 KB floor.
    #[default]
    Strict,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoValidation {
    pub valid: bool,
    pub message: String,
    /// Advisory only; never blocks the flow.
    pub likely_screenshot: bool,
}

impl PhotoValidation {
    fn rejected(message: &str) -> Self {
        Self {
            valid: false,
            message: message.to_string(),
            likely_screenshot: false,
        }
    }
}

pub fn validate_user_photo(photo: &ImageHandle, policy: ValidationPolicy) -> PhotoValidation {
    let mime = photo.mime_type.trim().to_ascii_lowercase();
    if !ALLOWED_MIME_TYPES.contains(&mime.as_str()) {
        return PhotoValidation::rejected(MSG_UNSUPPORTED);
    }

    if photo.size_bytes > MAX_PHOTO_BYTES {
        return PhotoValidation::rejected(MSG_TOO_LARGE);
    }

    if policy == ValidationPolicy::Strict && photo.size_bytes < MIN_PHOTO_BYTES {
        return PhotoValidation::rejected(MSG_TOO_SMALL);
    }

    let name = photo.file_name.to_lowercase();
    let likely_screenshot = SCREENSHOT_HINTS.iter().any(|hint| name.contains(hint));
    PhotoValidation {
        valid: true,
        message: if likely_screenshot {
            MSG_VALID_SCREENSHOT
        } else {
            MSG_VALID
        }
        .to_string(),
        likely_screenshot,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo(mime: &str, size: u64) -> ImageHandle {
        ImageHandle::new("me.jpg", mime, size)
    }

    #[test]
    fn accepts_two_megabyte_jpeg() {
        let result = validate_user_photo(&photo("image/jpeg", 2 * 1024 * 1024), ValidationPolicy::Strict);
        assert!(result.valid);
        assert_eq!(result.message, "Imagem válida!");
        assert!(!result.likely_screenshot);
    }

    #[test]
    fn rejects_unsupported_mime_type() {
        let result = validate_user_photo(&photo("image/gif", 200_000), ValidationPolicy::Strict);
        assert!(!result.valid);
        assert_eq!(result.message, MSG_UNSUPPORTED);
    }

    #[test]
    fn mime_comparison_ignores_case() {
        let result = validate_user_photo(&photo("IMAGE/PNG", 200_000), ValidationPolicy::Strict);
        assert!(result.valid);
    }

    #[test]
    fn size_bounds_are_inclusive() {
        let at_max = validate_user_photo(&photo("image/webp", MAX_PHOTO_BYTES), ValidationPolicy::Strict);
        let at_min = validate_user_photo(&photo("image/webp", MIN_PHOTO_BYTES), ValidationPolicy::Strict);
        assert!(at_max.valid);
        assert!(at_min.valid);

        let over = validate_user_photo(&photo("image/webp", MAX_PHOTO_BYTES + 1), ValidationPolicy::Strict);
        assert!(!over.valid);
        assert_eq!(over.message, MSG_TOO_LARGE);
    }

    #[test]
    fn small_photos_pass_only_under_standard_policy() {
        let tiny = photo("image/png", MIN_PHOTO_BYTES - 1);

        let strict = validate_user_photo(&tiny, ValidationPolicy::Strict);
        assert!(!strict.valid);
        assert_eq!(strict.message, MSG_TOO_SMALL);

        assert!(validate_user_photo(&tiny, ValidationPolicy::Standard).valid);
    }

    #[test]
    fn screenshot_names_get_an_advisory_but_stay_valid() {
        let shot = ImageHandle::new("Screenshot 2024-05-01.png", "image/png", 300_000);
        let result = validate_user_photo(&shot, ValidationPolicy::Strict);
        assert!(result.valid);
        assert!(result.likely_screenshot);
        assert_ne!(result.message, MSG_VALID);
    }

    #[test]
    fn every_accepted_photo_respects_type_and_size_bounds() {
        let mimes = ["image/jpeg", "image/jpg", "image/png", "image/webp", "image/gif", "text/plain", ""];
        let sizes = [0, 1, MIN_PHOTO_BYTES - 1, MIN_PHOTO_BYTES, 2_000_000, MAX_PHOTO_BYTES, MAX_PHOTO_BYTES + 1, u64::MAX];

        for mime in mimes {
            for size in sizes {
                let result = validate_user_photo(&photo(mime, size), ValidationPolicy::Strict);
                if result.valid {
                    assert!(ALLOWED_MIME_TYPES.contains(&mime));
                    assert!((MIN_PHOTO_BYTES..=MAX_PHOTO_BYTES).contains(&size));
                } else {
                    assert!(!result.message.is_empty());
                }
            }
        }
    }
}
