use std::path::{Component, Path, PathBuf};
use include_dir::Dir;
use uuid::Uuid;
use crate::error::HostError;

pub const ENTRY_POINT: &str = "index.html";
pub const NO_CACHE: &str = "no-cache";
pub const IMMUTABLE: &str = "public, max-age=31536000, immutable";
pub const SHORT_LIVED: &str = "public, max-age=3600";

/// Copies the bundled build output into a fresh directory under the system temp dir.
pub fn stage(bundle: &Dir<'_>) -> Result<PathBuf, HostError> {
    let dir = std::env::temp_dir().join(format!("art_arena_static_{}", Uuid::new_v4()));
    let staging_error = |source| HostError::Staging { dir: dir.display().to_string(), source };
    std::fs::create_dir_all(&dir).map_err(staging_error)?;
    bundle.extract(&dir).map_err(staging_error)?;
    Ok(dir)
}

/// The requested file when it exists under `root`; the SPA entry point otherwise.
pub fn resolve(root: &Path, requested: &Path) -> PathBuf {
    let contained = requested.components().all(|c| matches!(c, Component::Normal(_)));
    let candidate = root.join(requested);
    if contained && candidate.is_file() {
        candidate
    } else {
        root.join(ENTRY_POINT)
    }
}

pub fn cache_policy(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        None | Some("html") => NO_CACHE,
        Some("wasm" | "js" | "css") => IMMUTABLE,
        Some(_) => SHORT_LIVED,
    }
}
