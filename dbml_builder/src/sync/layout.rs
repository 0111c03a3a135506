//! Output directory layout

use std::path::{Path, PathBuf};

/// Metadata file recording version and hashes
pub const INFO: &str = "info.json";
/// Generated Pydantic schemas
pub const SCHEMAS: &str = "schema.py";
/// Generated SQLAlchemy tables
pub const ORM: &str = "orm.py";

/// Paths of the artifacts generated into one directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactLayout {
    dir: PathBuf,
}

impl ArtifactLayout {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn info_path(&self) -> PathBuf {
        self.dir.join(INFO)
    }

    pub fn schema_path(&self) -> PathBuf {
        self.dir.join(SCHEMAS)
    }

    pub fn orm_path(&self) -> PathBuf {
        self.dir.join(ORM)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn files_live_directly_under_the_output_dir() {
        let layout = ArtifactLayout::new("app/generated");
        assert_eq!(layout.info_path(), Path::new("app/generated/info.json"));
        assert_eq!(layout.schema_path(), Path::new("app/generated/schema.py"));
        assert_eq!(layout.orm_path(), Path::new("app/generated/orm.py"));
    }
}
