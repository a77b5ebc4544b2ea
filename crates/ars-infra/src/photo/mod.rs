mod loader;
mod object_url;

pub use loader::image_handle_from_path;
pub use object_url::{ObjectUrlRegistry, OBJECT_URL_PREFIX};
