//! User-supplied images and photo validation.

mod handle;
mod validation;

pub use handle::ImageHandle;
pub use validation::{
    validate_user_photo, PhotoValidation, ValidationPolicy, ALLOWED_MIME_TYPES, MAX_PHOTO_BYTES,
    MIN_PHOTO_BYTES,
};
