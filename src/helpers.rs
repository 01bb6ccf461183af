// SPDX-License-Identifier: MPL-2.0

//! Async helper functions for the Vista application.

use crate::assets::AssetCatalog;
use std::path::{Path, PathBuf};

/// Expands a leading `~` to the home directory.
fn resolve_asset_dir(dir: &str) -> PathBuf {
    expand_home(dir, dirs::home_dir())
}

fn expand_home(dir: &str, home: Option<PathBuf>) -> PathBuf {
    match (dir.strip_prefix('~'), home) {
        (Some(""), Some(home)) => home,
        (Some(rest), Some(home)) if rest.starts_with('/') => home.join(rest.trim_start_matches('/')),
        _ => PathBuf::from(dir),
    }
}

/// Source tree the binary was built from; holds the bundled sample images.
fn bundled_root() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
}

/// Picks the directory to scan: a relative path missing from the working
/// directory falls back to the bundled copy.
async fn locate_asset_dir(dir: &str) -> PathBuf {
    let resolved = resolve_asset_dir(dir);
    if resolved.is_absolute() || tokio::fs::try_exists(&resolved).await.unwrap_or(false) {
        return resolved;
    }

    let bundled = bundled_root().join(&resolved);
    if tokio::fs::try_exists(&bundled).await.unwrap_or(false) {
        tracing::debug!(dir = %bundled.display(), "using bundled asset directory");
        bundled
    } else {
        resolved
    }
}

/// Scan the configured asset directory for the carousel items
pub async fn load_catalog(dir: String, items: Vec<String>) -> Result<AssetCatalog, String> {
    AssetCatalog::scan(locate_asset_dir(&dir).await, &items)
        .await
        .map_err(|e| e.to_string())
}
