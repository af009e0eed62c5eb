use crate::output::print_json;
use anyhow::Context;
use std::path::Path;

pub fn run(manifest_path: &Path, json: bool) -> anyhow::Result<()> {
    let manifest = super::load_manifest(manifest_path)?;
    let keys = manifest
        .dispatch_keys()
        .context("failed to expand manifest")?;
    tracing::debug!(count = keys.len(), "collected dispatch keys");

    if json {
        return print_json(&keys);
    }

    for key in &keys {
        println!("{key}");
    }
    Ok(())
}
