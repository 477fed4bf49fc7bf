//! Manifest (`package.json`) script discovery.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;

/// Errors reading the manifest. Never fatal to the caller.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest exists but could not be read.
    #[error("Error reading {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest is not valid JSON.
    #[error("Error parsing {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Default, Deserialize)]
struct Manifest {
    #[serde(default)]
    scripts: Option<Scripts>,
}

/// The `scripts` section; anything other than an object is ignored.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Scripts {
    Named(IndexMap<String, serde_json::Value>),
    #[allow(dead_code)]
    Other(serde_json::Value),
}

/// Read the script names from a manifest, in declaration order.
///
/// A missing manifest yields `Ok(None)`.
pub fn read_manifest_scripts(path: &Path) -> Result<Option<Vec<String>>, ManifestError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ManifestError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let manifest: Manifest =
        serde_json::from_str(&content).map_err(|source| ManifestError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let names = match manifest.scripts {
        Some(Scripts::Named(scripts)) => scripts.into_keys().collect(),
        _ => Vec::new(),
    };

    Ok(Some(names))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_manifest(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join("package.json");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_scripts_keep_declaration_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_manifest(
            dir.path(),
            r#"{"name":"app","scripts":{"dev":"vite","build":"vite build","lint":"eslint ."}}"#,
        );

        let scripts = read_manifest_scripts(&path).unwrap().unwrap();
        assert_eq!(scripts, vec!["dev", "build", "lint"]);
    }

    #[test]
    fn test_missing_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let scripts = read_manifest_scripts(&dir.path().join("package.json")).unwrap();
        assert!(scripts.is_none());
    }

    #[test]
    fn test_scripts_not_an_object() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_manifest(dir.path(), r#"{"scripts":["dev","build"]}"#);
        assert_eq!(read_manifest_scripts(&path).unwrap(), Some(Vec::new()));

        let path = write_manifest(dir.path(), r#"{"name":"no-scripts"}"#);
        assert_eq!(read_manifest_scripts(&path).unwrap(), Some(Vec::new()));
    }

    #[test]
    fn test_invalid_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_manifest(dir.path(), "{ not json");
        let err = read_manifest_scripts(&path).unwrap_err();
        assert!(matches!(err, ManifestError::Parse { .. }));
        assert!(err.to_string().starts_with("Error parsing"));
    }
}
