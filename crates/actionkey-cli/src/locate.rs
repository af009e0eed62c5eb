use std::path::{Path, PathBuf};

/// File names searched for, in priority order, when no manifest is given.
pub const MANIFEST_NAMES: &[&str] = &["actions.yaml", "actions.yml", "actions.json"];

/// Resolve the manifest path.
///
/// Priority:
/// 1. `--manifest` flag / `ACTIONKEY_MANIFEST` env var (passed in as `explicit`)
/// 2. Walk upward from `cwd` looking for one of [`MANIFEST_NAMES`]
/// 3. Fall back to `actions.yaml` in `cwd`
pub fn resolve_manifest(explicit: Option<&Path>, cwd: &Path) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }

    let mut dir = cwd.to_path_buf();
    loop {
        if let Some(found) = MANIFEST_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
        {
            return found;
        }
        match dir.parent() {
            Some(p) => dir = p.to_path_buf(),
            None => break,
        }
    }

    cwd.join(MANIFEST_NAMES[0])
}
