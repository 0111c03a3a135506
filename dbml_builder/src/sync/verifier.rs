//! Sync verifier
//!
//! Generated code is in sync when `info.json` records the current schema
//! version and the SHA-1 of both generated files still matches.

use std::fmt;
use std::path::Path;

use crate::error::Result;
use crate::sync::hash::hash_file;
use crate::sync::layout::ArtifactLayout;
use crate::sync::metadata::Metadata;

/// Outcome of comparing an output directory against a schema version
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncStatus {
    InSync,
    /// `info.json` or `schema.py` is missing
    NotGenerated,
    VersionChanged { recorded: String, current: String },
    SchemaModified,
    OrmModified,
}

impl SyncStatus {
    pub fn is_in_sync(&self) -> bool {
        matches!(self, SyncStatus::InSync)
    }
}

impl fmt::Display for SyncStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncStatus::InSync => write!(f, "in sync"),
            SyncStatus::NotGenerated => write!(f, "models have not been generated"),
            SyncStatus::VersionChanged { recorded, current } => write!(
                f,
                "schema version changed from '{}' to '{}'",
                recorded, current
            ),
            SyncStatus::SchemaModified => write!(f, "schema.py was modified after generation"),
            SyncStatus::OrmModified => write!(f, "orm.py was modified after generation"),
        }
    }
}

/// Check whether the code in `output_dir` was generated from `version`
/// and has not been edited since
pub fn is_in_sync(version: &str, output_dir: &Path) -> Result<bool> {
    Ok(check(version, output_dir)?.is_in_sync())
}

/// Like [`is_in_sync`], but says what is out of date.
///
/// Only `info.json` and `schema.py` are probed for existence. A missing
/// `orm.py` next to them is reported as `Error::NotFound`.
pub fn check(version: &str, output_dir: &Path) -> Result<SyncStatus> {
    let layout = ArtifactLayout::new(output_dir);
    let info_path = layout.info_path();
    let schema_path = layout.schema_path();

    if !info_path.exists() || !schema_path.exists() {
        tracing::debug!(dir = %output_dir.display(), "No generated models found");
        return Ok(SyncStatus::NotGenerated);
    }

    let orm_hash = hash_file(&layout.orm_path())?;
    let schema_hash = hash_file(&schema_path)?;
    let info = Metadata::load(&info_path)?;

    let status = if info.version != version {
        SyncStatus::VersionChanged {
            recorded: info.version,
            current: version.to_string(),
        }
    } else if info.schema_hash != schema_hash {
        SyncStatus::SchemaModified
    } else if info.orm_hash != orm_hash {
        SyncStatus::OrmModified
    } else {
        SyncStatus::InSync
    };

    tracing::debug!(
        dir = %output_dir.display(),
        %schema_hash,
        %orm_hash,
        %status,
        "Verified generated models"
    );

    Ok(status)
}
