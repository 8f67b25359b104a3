//! JSON manifests and the non-destructive deep-merge.
//!
//! Merge rule: the patch wins on conflict, the base wins on absence. Two
//! objects under the same key are merged recursively; anything else (scalars,
//! arrays, type changes) is replaced by the patch value.

use serde_json::{Map, Value};

use crate::domain::{entities::common::RelativePath, error::DomainError};

/// Partial manifest content to be merged into `target`.
#[derive(Debug, Clone, PartialEq)]
pub struct ManifestPatch {
    target: RelativePath,
    fields: Map<String, Value>,
    only_if_present: bool,
}

impl ManifestPatch {
    /// Patch that creates the manifest when it does not exist yet.
    pub fn new(target: impl Into<RelativePath>, fields: Map<String, Value>) -> Self {
        Self {
            target: target.into(),
            fields,
            only_if_present: false,
        }
    }

    /// Build from a `json!` object literal. Non-object values yield an empty patch.
    pub fn from_value(target: impl Into<RelativePath>, value: Value) -> Self {
        let fields = match value {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Self::new(target, fields)
    }

    /// Skip the patch entirely when the target file is missing.
    pub fn only_if_present(mut self) -> Self {
        self.only_if_present = true;
        self
    }

    pub fn target(&self) -> &RelativePath {
        &self.target
    }

    pub fn is_conditional(&self) -> bool {
        self.only_if_present
    }

    /// Merge this patch into an existing manifest.
    ///
    /// `None` means no manifest exists: the patch becomes the whole document.
    pub fn apply(&self, existing: Option<Value>) -> Result<Value, DomainError> {
        let mut base = match existing {
            None => Map::new(),
            Some(Value::Object(map)) => map,
            Some(_) => {
                return Err(DomainError::ManifestNotObject {
                    path: self.target.to_string(),
                });
            }
        };
        deep_merge(&mut base, &self.fields);
        Ok(Value::Object(base))
    }
}

/// Recursively merge `patch` into `base` in place.
pub fn deep_merge(base: &mut Map<String, Value>, patch: &Map<String, Value>) {
    for (key, incoming) in patch {
        match (base.get_mut(key), incoming) {
            (Some(Value::Object(existing)), Value::Object(nested)) => {
                deep_merge(existing, nested);
            }
            _ => {
                base.insert(key.clone(), incoming.clone());
            }
        }
    }
}

/// Parse manifest text, labelling failures with the manifest path.
pub fn parse_manifest(path: &RelativePath, text: &str) -> Result<Value, DomainError> {
    serde_json::from_str(text).map_err(|e| DomainError::MalformedManifest {
        path: path.to_string(),
        reason: e.to_string(),
    })
}

/// Stable serialization: insertion-ordered keys, two-space indent, trailing newline.
pub fn to_stable_string(value: &Value) -> String {
    format!("{value:#}\n")
}
