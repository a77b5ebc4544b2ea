use crate::photo::ImageHandle;

/// Turns an image handle into a URL the host can display.
pub trait PhotoUrlPort: Send + Sync {
    /// Fails when the handle can no longer be dereferenced.
    fn object_url(&self, image: &ImageHandle) -> anyhow::Result<String>;

    /// Forgets the URL handed out for `image`. Unknown handles are ignored.
    fn revoke(&self, image: &ImageHandle);
}
