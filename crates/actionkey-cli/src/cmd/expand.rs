use crate::output::{print_json, print_table};
use anyhow::Context;
use std::path::Path;

pub fn run(manifest_path: &Path, json: bool) -> anyhow::Result<()> {
    let manifest = super::load_manifest(manifest_path)?;
    let tokens = manifest
        .expand()
        .context("failed to expand manifest")?;
    tracing::debug!(count = tokens.len(), "expanded manifest");

    if json {
        let value = serde_json::json!({
            "namespace": manifest.namespace,
            "actions": tokens,
        });
        return print_json(&value);
    }

    if tokens.is_empty() {
        println!("No actions declared.");
        return Ok(());
    }

    let mut rows = Vec::new();
    for token in &tokens {
        rows.push(vec![token.to_string(), "-".to_string(), token.to_string()]);
        for (suffix, key) in token.subactions() {
            rows.push(vec![token.to_string(), suffix.to_string(), key.to_string()]);
        }
    }
    print_table(&["ACTION", "SUBACTION", "KEY"], &rows);
    Ok(())
}
