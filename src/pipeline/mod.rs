//! Translation pipeline: normalize, match, select.

mod translator;

pub use translator::{Translation, TranslationPipeline};
