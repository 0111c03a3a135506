//! The `info.json` record written next to generated code

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Version and content hashes captured at generation time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub version: String,
    pub schema_hash: String,
    pub orm_hash: String,
}

impl Metadata {
    /// Read and parse a metadata file. Missing keys are an error.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::from_io(e, path))?;
        serde_json::from_str(&content).map_err(|e| {
            Error::SerializationError(format!("Malformed {}: {}", path.display(), e))
        })
    }

    /// Write the record, replacing any existing file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn reads_metadata_written_by_older_tooling() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("info.json");
        fs::write(
            &path,
            r#"{"version": "1.0.0", "schema_hash": "aa", "orm_hash": "bb"}"#,
        )
        .unwrap();

        assert_eq!(
            Metadata::load(&path).unwrap(),
            Metadata {
                version: "1.0.0".to_string(),
                schema_hash: "aa".to_string(),
                orm_hash: "bb".to_string(),
            }
        );
    }

    #[test]
    fn save_overwrites_and_uses_the_three_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("info.json");
        fs::write(&path, "stale content that is longer than the new record").unwrap();

        let metadata = Metadata {
            version: "2.0.0".to_string(),
            schema_hash: "01".to_string(),
            orm_hash: "02".to_string(),
        };
        metadata.save(&path).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(
            raw,
            serde_json::json!({"version": "2.0.0", "schema_hash": "01", "orm_hash": "02"})
        );
    }

    #[test]
    fn missing_key_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("info.json");
        fs::write(&path, r#"{"version": "1.0.0", "schema_hash": "aa"}"#).unwrap();

        let err = Metadata::load(&path).unwrap_err();
        assert!(matches!(err, Error::SerializationError(ref msg) if msg.contains("orm_hash")));
    }
}
