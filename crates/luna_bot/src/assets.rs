//! Per-day illustration lookup.
//!
//! Images are named `<day>.<ext>` (e.g. `7.jpg`). The directory is
//! scanned once at startup; lookups never touch the filesystem.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use luna_clock::LunarDay;
use tracing::{debug, warn};

/// Accepted extensions, in lookup priority order.
pub const IMAGE_EXTENSIONS: [&str; 5] = ["JPG", "jpg", "JPEG", "jpeg", "png"];

/// Maps a lunar day to an image file, if one exists.
pub trait AssetResolver: Send + Sync {
    fn resolve(&self, day: LunarDay) -> Option<&Path>;
}

/// Images indexed from a directory at construction time.
#[derive(Debug, Clone, Default)]
pub struct DirectoryAssets {
    images: HashMap<LunarDay, PathBuf>,
}

impl DirectoryAssets {
    /// Index `<root>/<day>.<ext>` for every day. A missing directory
    /// yields an empty index.
    pub fn scan(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        if !root.is_dir() {
            warn!(dir = %root.display(), "image directory not found, replies will be text only");
            return Self::default();
        }

        let mut images = HashMap::new();
        for day in LunarDay::all() {
            let found = IMAGE_EXTENSIONS
                .iter()
                .map(|ext| root.join(format!("{day}.{ext}")))
                .find(|candidate| candidate.is_file());
            if let Some(path) = found {
                images.insert(day, path);
            }
        }
        debug!(dir = %root.display(), count = images.len(), "indexed lunar day images");
        Self { images }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

impl AssetResolver for DirectoryAssets {
    fn resolve(&self, day: LunarDay) -> Option<&Path> {
        self.images.get(&day).map(PathBuf::as_path)
    }
}

/// Resolver with no images; every reply is text.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAssets;

impl AssetResolver for NoAssets {
    fn resolve(&self, _day: LunarDay) -> Option<&Path> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn day(n: u8) -> LunarDay {
        LunarDay::new(n).unwrap()
    }

    #[test]
    fn missing_directory_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let assets = DirectoryAssets::scan(dir.path().join("nope"));
        assert!(assets.is_empty());
        assert_eq!(assets.resolve(day(1)), None);
    }

    #[test]
    fn finds_images_by_day() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("1.png"), b"x").unwrap();
        fs::write(dir.path().join("30.jpeg"), b"x").unwrap();
        fs::write(dir.path().join("notes.txt"), b"x").unwrap();

        let assets = DirectoryAssets::scan(dir.path());
        assert_eq!(assets.len(), 2);
        assert_eq!(assets.resolve(day(1)), Some(dir.path().join("1.png").as_path()));
        assert_eq!(assets.resolve(day(30)), Some(dir.path().join("30.jpeg").as_path()));
        assert_eq!(assets.resolve(day(2)), None);
    }

    #[test]
    fn extension_priority() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("5.png"), b"x").unwrap();
        fs::write(dir.path().join("5.jpg"), b"x").unwrap();

        let assets = DirectoryAssets::scan(dir.path());
        let found = assets.resolve(day(5)).unwrap();
        // jpg outranks png; on case-insensitive filesystems it may match as JPG.
        let ext = found.extension().unwrap().to_string_lossy().to_lowercase();
        assert_eq!(ext, "jpg");
    }

    #[test]
    fn subdirectories_ignored() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("3.jpg")).unwrap();
        assert!(DirectoryAssets::scan(dir.path()).is_empty());
    }

    #[test]
    fn no_assets_resolves_nothing() {
        assert!(LunarDay::all().all(|d| NoAssets.resolve(d).is_none()));
    }
}
