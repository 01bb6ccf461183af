// SPDX-License-Identifier: MPL-2.0

//! Resolves carousel item identifiers to image files.

use cosmic::widget::image;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File extensions tried, in order, for every identifier.
pub const IMAGE_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "webp"];

/// Looks images up by name.
pub trait ImageSource {
    /// Returns the image for `name`, or `None` when it is unknown.
    fn lookup(&self, name: &str) -> Option<image::Handle>;
}

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset directory {} does not exist", .0.display())]
    MissingDirectory(PathBuf),
    #[error("failed to read assets: {0}")]
    Io(#[from] std::io::Error),
}

/// Image files found in an asset directory, keyed by identifier.
#[derive(Debug, Clone, Default)]
pub struct AssetCatalog {
    dir: PathBuf,
    paths: HashMap<String, PathBuf>,
}

impl AssetCatalog {
    /// Looks for `<dir>/<name>.<ext>` for each of `names`.
    ///
    /// Names without a matching file are left out; they render as
    /// placeholders.
    pub async fn scan(dir: impl Into<PathBuf>, names: &[String]) -> Result<Self, AssetError> {
        let dir = dir.into();

        match tokio::fs::metadata(&dir).await {
            Ok(metadata) if metadata.is_dir() => {}
            Ok(_) => return Err(AssetError::MissingDirectory(dir)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(AssetError::MissingDirectory(dir));
            }
            Err(err) => return Err(err.into()),
        }

        let mut paths = HashMap::new();
        for name in names {
            if paths.contains_key(name) {
                continue;
            }
            match find_image(&dir, name).await? {
                Some(path) => {
                    paths.insert(name.clone(), path);
                }
                None => tracing::debug!(name, dir = %dir.display(), "no image for item"),
            }
        }

        Ok(Self { dir, paths })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Number of identifiers that resolved to a file.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl ImageSource for AssetCatalog {
    fn lookup(&self, name: &str) -> Option<image::Handle> {
        self.paths
            .get(name)
            .map(|path| image::Handle::from_path(path))
    }
}

async fn find_image(dir: &Path, name: &str) -> Result<Option<PathBuf>, AssetError> {
    // Identifiers are plain file stems; never let one escape the directory.
    if name.is_empty() || Path::new(name).file_name() != Some(name.as_ref()) {
        return Ok(None);
    }

    for ext in IMAGE_EXTENSIONS {
        let candidate = dir.join(format!("{name}.{ext}"));
        if tokio::fs::try_exists(&candidate).await? {
            return Ok(Some(candidate));
        }
    }

    Ok(None)
}
