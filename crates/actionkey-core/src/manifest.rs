use crate::action::{define_action, ActionToken};
use crate::error::{ActionKeyError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

// ---------------------------------------------------------------------------
// ManifestWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// ActionSpec
// ---------------------------------------------------------------------------

/// One declared action. Children are scoped under it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionSpec {
    #[serde(rename = "type")]
    pub action_type: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subactions: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ActionSpec>,
}

// ---------------------------------------------------------------------------
// Manifest
// ---------------------------------------------------------------------------

/// A tree of action declarations, usually read from `actions.yaml`.
///
/// ```yaml
/// namespace: my-app
/// actions:
///   - type: todos
///     subactions: [LOADING]
///     children:
///       - type: CREATE
///         subactions: [ERROR, SUCCESS]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default)]
    pub actions: Vec<ActionSpec>,
}

impl Manifest {
    /// Read a manifest from disk. Files ending in `.json` are parsed as JSON,
    /// anything else as YAML.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ActionKeyError::ManifestNotFound(path.to_path_buf()));
        }
        let data = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Ok(serde_json::from_str(&data)?)
        } else {
            Self::from_yaml_str(&data)
        }
    }

    pub fn from_yaml_str(data: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(data)?)
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    pub fn validate(&self) -> Vec<ManifestWarning> {
        let mut warnings = Vec::new();

        if self.actions.is_empty() {
            warnings.push(ManifestWarning {
                level: WarnLevel::Warning,
                message: "manifest declares no actions".to_string(),
            });
        }

        let root = self.namespace.as_deref().unwrap_or("");
        validate_level(root, &self.actions, &mut warnings);
        warnings
    }

    // -----------------------------------------------------------------------
    // Expansion
    // -----------------------------------------------------------------------

    /// Build every declared token, parents before their children.
    pub fn expand(&self) -> Result<Vec<ActionToken>> {
        let mut tokens = Vec::new();
        for spec in &self.actions {
            let token = define_action(
                &spec.action_type,
                spec.subactions.clone(),
                self.namespace.as_deref(),
            )?;
            let mut children = Vec::new();
            expand_children(&token, &spec.children, &mut children)?;
            tokens.push(token);
            tokens.extend(children);
        }
        Ok(tokens)
    }

    /// All dispatch keys in expansion order.
    pub fn dispatch_keys(&self) -> Result<Vec<String>> {
        let keys = self
            .expand()?
            .iter()
            .flat_map(|token| token.keys())
            .map(str::to_string)
            .collect();
        Ok(keys)
    }
}

fn expand_children(
    parent: &ActionToken,
    children: &[ActionSpec],
    out: &mut Vec<ActionToken>,
) -> Result<()> {
    for spec in children {
        let child = parent.define_action(&spec.action_type, spec.subactions.clone())?;
        let mut grandchildren = Vec::new();
        expand_children(&child, &spec.children, &mut grandchildren)?;
        out.push(child);
        out.extend(grandchildren);
    }
    Ok(())
}

fn validate_level(scope: &str, specs: &[ActionSpec], warnings: &mut Vec<ManifestWarning>) {
    let mut seen_types = HashSet::new();
    for spec in specs {
        let path = if scope.is_empty() {
            spec.action_type.clone()
        } else {
            format!("{scope}/{}", spec.action_type)
        };

        if spec.action_type.trim().is_empty() {
            warnings.push(ManifestWarning {
                level: WarnLevel::Error,
                message: format!("empty action type under '{scope}'"),
            });
        } else if !seen_types.insert(spec.action_type.as_str()) {
            warnings.push(ManifestWarning {
                level: WarnLevel::Warning,
                message: format!("action '{path}' is declared more than once"),
            });
        }

        let mut seen_suffixes = HashSet::new();
        for suffix in &spec.subactions {
            if suffix.is_empty() {
                warnings.push(ManifestWarning {
                    level: WarnLevel::Error,
                    message: format!("empty sub-action suffix on '{path}'"),
                });
            } else if !seen_suffixes.insert(suffix.as_str()) {
                warnings.push(ManifestWarning {
                    level: WarnLevel::Warning,
                    message: format!("duplicate sub-action '{suffix}' on '{path}'"),
                });
            }
        }

        validate_level(&path, &spec.children, warnings);
    }
}
