//! Model generator
//!
//! This module drives the parser and code generator and writes the
//! generated files plus `info.json` into an output directory.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::error::Result;
use crate::models::codegen::{CodeGenerator, ModelFlavor};
use crate::models::patch::PatchSet;
use crate::schema::parser::SchemaParser;
use crate::schema::version::version_of;
use crate::sync::hash::hash_file;
use crate::sync::layout::ArtifactLayout;
use crate::sync::metadata::Metadata;
use crate::utils::diagnostics::DiagnosticLog;

/// Generates Pydantic and SQLAlchemy models from DBML
pub struct ModelGenerator<'a> {
    parser: &'a dyn SchemaParser,
    codegen: &'a dyn CodeGenerator,
    patches: &'a PatchSet,
    show_diagnostics: bool,
}

impl<'a> ModelGenerator<'a> {
    /// Create a new model generator
    pub fn new(
        parser: &'a dyn SchemaParser,
        codegen: &'a dyn CodeGenerator,
        patches: &'a PatchSet,
    ) -> Self {
        Self {
            parser,
            codegen,
            patches,
            show_diagnostics: false,
        }
    }

    /// Forward generator chatter to the debug log instead of dropping it
    pub fn show_diagnostics(mut self, show: bool) -> Self {
        self.show_diagnostics = show;
        self
    }

    /// Regenerate `schema.py`, `orm.py` and `info.json` in `output_dir`.
    ///
    /// Existing files are overwritten. Nothing is rolled back if a later
    /// write fails.
    pub fn generate(&self, schema_path: &Path, output_dir: &Path) -> Result<Metadata> {
        let layout = ArtifactLayout::new(output_dir);
        fs::create_dir_all(output_dir)?;

        let parsed = self.parser.parse(schema_path)?;
        let version = version_of(&parsed, schema_path)?;
        let ddl = self.patches.patch_ddl(&parsed.sql);

        let (schema_content, orm_content) = {
            let mut diagnostics = self.diagnostics_sink();

            let schemas = self
                .codegen
                .generate(&ddl, ModelFlavor::Pydantic, diagnostics.as_mut())?;
            let orm = self
                .codegen
                .generate(&ddl, ModelFlavor::SqlAlchemy, diagnostics.as_mut())?;

            (self.patches.patch_schema(&schemas), self.patches.patch_orm(&orm))
        };

        fs::write(layout.schema_path(), &schema_content)?;
        fs::write(layout.orm_path(), &orm_content)?;

        let metadata = Metadata {
            version,
            schema_hash: hash_file(&layout.schema_path())?,
            orm_hash: hash_file(&layout.orm_path())?,
        };
        metadata.save(&layout.info_path())?;

        tracing::info!(
            schema = %schema_path.display(),
            dir = %output_dir.display(),
            version = %metadata.version,
            "Generated models"
        );

        Ok(metadata)
    }

    /// Where generator output goes for the duration of one `generate` call
    fn diagnostics_sink(&self) -> Box<dyn Write> {
        if self.show_diagnostics {
            Box::new(DiagnosticLog::new("omymodels"))
        } else {
            Box::new(io::sink())
        }
    }
}
