use crate::output::print_json;
use actionkey_core::manifest::WarnLevel;
use std::path::Path;

pub fn run(manifest_path: &Path, json: bool) -> anyhow::Result<()> {
    let manifest = super::load_manifest(manifest_path)?;
    let warnings = manifest.validate();

    if json {
        let value = serde_json::json!({
            "manifest": manifest_path.display().to_string(),
            "warnings": warnings,
        });
        print_json(&value)?;
    } else if warnings.is_empty() {
        println!("Manifest is valid. No warnings.");
    } else {
        for w in &warnings {
            let prefix = match w.level {
                WarnLevel::Warning => "warning",
                WarnLevel::Error => "error",
            };
            println!("[{prefix}] {}", w.message);
        }
    }

    let has_errors = warnings.iter().any(|w| w.level == WarnLevel::Error);
    if has_errors {
        anyhow::bail!("manifest validation found errors");
    }

    Ok(())
}
