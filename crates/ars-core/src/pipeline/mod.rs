//! Static tables behind the mock processing pipeline and category detection.

mod detection;
mod steps;

pub use detection::{
    category_from_file_name, weighted_category, CATEGORY_KEYWORDS, CATEGORY_WEIGHTS,
    DEFAULT_DETECTION_DELAY,
};
pub use steps::{
    transparent_variant, ProcessingStep, PROCESSING_STEPS, STOCK_RESULT_IMAGES,
};
