//! Asset existence oracle.
//!
//! The catalog is queried, never owned: it answers whether a clip
//! exists for a phrase and whether a letter image exists for a
//! character. Lookups are synchronous local checks.

use std::path::PathBuf;

/// Existence predicates over the visual asset store.
pub trait AssetCatalog: Send + Sync {
    /// Does a sign clip exist for this canonical phrase?
    fn has_clip(&self, phrase: &str) -> bool;

    /// Does a fingerspelling image exist for this character?
    fn has_letter(&self, letter: char) -> bool;
}

/// Filesystem-backed catalog: one clip file per phrase under the clips
/// directory, one image per letter under the letters directory.
pub struct FsAssetCatalog {
    clips_dir: PathBuf,
    letters_dir: PathBuf,
    clip_ext: String,
    letter_ext: String,
}

impl FsAssetCatalog {
    pub fn new(clips_dir: PathBuf, letters_dir: PathBuf, clip_ext: &str, letter_ext: &str) -> Self {
        Self {
            clips_dir,
            letters_dir,
            clip_ext: clip_ext.to_string(),
            letter_ext: letter_ext.to_string(),
        }
    }
}

impl AssetCatalog for FsAssetCatalog {
    fn has_clip(&self, phrase: &str) -> bool {
        self.clips_dir.join(format!("{}.{}", phrase, self.clip_ext)).is_file()
    }

    fn has_letter(&self, letter: char) -> bool {
        self.letters_dir.join(format!("{}.{}", letter, self.letter_ext)).is_file()
    }
}
