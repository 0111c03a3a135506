//! dbml_builder: generate Pydantic schemas and SQLAlchemy tables from DBML
//!
//! Generated code is stamped with the DBML project version and the SHA-1 of
//! each generated file, so a build can cheaply tell whether the models need
//! to be regenerated.

pub mod config;
pub mod error;
pub mod models;
pub mod python;
pub mod schema;
pub mod sync;
pub mod utils;

use std::path::Path;

// Re-export main types for easier access
pub use config::Config;
pub use error::{Error, Result};
pub use models::{CodeGenerator, ModelFlavor, ModelGenerator, PatchSet};
pub use schema::{get_version, ParsedSchema, SchemaParser};
pub use sync::{is_in_sync, ArtifactLayout, Metadata, SyncStatus};

use models::OmyModelsGenerator;
use python::PythonRuntime;
use schema::PyDbmlParser;

/// Initialize dbml_builder with the specified configuration file
pub fn init(config_path: impl AsRef<Path>) -> Result<DbmlBuilder> {
    let config = config::load_from_file(config_path)?;
    DbmlBuilder::new(config)
}

/// What [`DbmlBuilder::sync`] did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    UpToDate,
    Regenerated {
        reason: SyncStatus,
        metadata: Metadata,
    },
}

/// The main client for reading, verifying and generating models
pub struct DbmlBuilder {
    config: Config,
    parser: Box<dyn SchemaParser>,
    codegen: Box<dyn CodeGenerator>,
    patches: PatchSet,
}

impl DbmlBuilder {
    /// Create a client that uses pydbml and omymodels from the configured interpreter
    pub fn new(config: Config) -> Result<Self> {
        let runtime = PythonRuntime::new(&config.python);
        Self::with_collaborators(
            config,
            Box::new(PyDbmlParser::new(runtime.clone())),
            Box::new(OmyModelsGenerator::new(runtime)),
        )
    }

    /// Create a client with explicit parser and generator implementations
    pub fn with_collaborators(
        config: Config,
        parser: Box<dyn SchemaParser>,
        codegen: Box<dyn CodeGenerator>,
    ) -> Result<Self> {
        let patches = PatchSet::from_config(&config.patches)?;

        Ok(Self {
            config,
            parser,
            codegen,
            patches,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Version recorded in the schema's project note
    pub fn version(&self, schema_path: &Path) -> Result<String> {
        get_version(self.parser.as_ref(), schema_path)
    }

    /// Whether `output_dir` holds unedited code generated for `version`
    pub fn verify(&self, version: &str, output_dir: &Path) -> Result<bool> {
        is_in_sync(version, output_dir)
    }

    /// Compare `output_dir` against the schema's current version
    pub fn status(&self, schema_path: &Path, output_dir: &Path) -> Result<SyncStatus> {
        let version = self.version(schema_path)?;
        sync::check(&version, output_dir)
    }

    /// Regenerate models unconditionally
    pub fn generate(&self, schema_path: &Path, output_dir: &Path) -> Result<Metadata> {
        ModelGenerator::new(self.parser.as_ref(), self.codegen.as_ref(), &self.patches)
            .show_diagnostics(self.config.generator.show_diagnostics)
            .generate(schema_path, output_dir)
    }

    /// Complete workflow: read version, verify, regenerate only when stale
    pub fn sync(&self, schema_path: &Path, output_dir: &Path) -> Result<SyncOutcome> {
        let status = self.status(schema_path, output_dir)?;

        if status.is_in_sync() {
            tracing::info!(dir = %output_dir.display(), "Generated models are already in sync");
            return Ok(SyncOutcome::UpToDate);
        }

        tracing::info!(dir = %output_dir.display(), reason = %status, "Regenerating models");
        let metadata = self.generate(schema_path, output_dir)?;

        Ok(SyncOutcome::Regenerated {
            reason: status,
            metadata,
        })
    }
}
