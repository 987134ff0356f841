//! Render selection: mapping a match outcome to a clip, a
//! fingerspelling sequence, or "unknown" based on available assets.

mod assets;
mod selector;

pub use assets::{AssetCatalog, FsAssetCatalog};
pub use selector::{RenderDecision, RenderSelector};
