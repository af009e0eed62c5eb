pub mod check;
pub mod define;
pub mod expand;
pub mod keys;

use actionkey_core::Manifest;
use anyhow::Context;
use std::path::Path;

pub(crate) fn load_manifest(path: &Path) -> anyhow::Result<Manifest> {
    tracing::debug!(path = %path.display(), "loading manifest");
    Manifest::load(path).with_context(|| format!("failed to load {}", path.display()))
}
