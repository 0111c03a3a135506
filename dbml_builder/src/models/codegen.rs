//! Code generator seam
//!
//! [`CodeGenerator`] renders DDL into Python model code. The production
//! implementation is [`OmyModelsGenerator`].

use std::ffi::OsStr;
use std::fmt;
use std::io::Write;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::python::runtime::{decode_reply, failure_message};
use crate::python::{scripts, PythonRuntime};

/// Kind of model code to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelFlavor {
    /// Pydantic validation schemas
    Pydantic,
    /// SQLAlchemy table definitions
    SqlAlchemy,
}

impl ModelFlavor {
    /// Value of omymodels' `models_type` argument
    pub fn models_type(self) -> &'static str {
        match self {
            ModelFlavor::Pydantic => "pydantic",
            ModelFlavor::SqlAlchemy => "sqlalchemy",
        }
    }
}

impl fmt::Display for ModelFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.models_type())
    }
}

/// Renders DDL into model source code
pub trait CodeGenerator {
    /// Generate `flavor` models for `ddl`.
    ///
    /// Anything the generator prints along the way goes to `diagnostics`,
    /// never to the process's own stdout.
    fn generate(
        &self,
        ddl: &str,
        flavor: ModelFlavor,
        diagnostics: &mut dyn Write,
    ) -> Result<String>;
}

/// Generator backed by the `omymodels` package
#[derive(Debug, Clone)]
pub struct OmyModelsGenerator {
    runtime: PythonRuntime,
}

#[derive(Deserialize)]
struct Reply {
    code: String,
}

impl OmyModelsGenerator {
    pub fn new(runtime: PythonRuntime) -> Self {
        Self { runtime }
    }
}

impl CodeGenerator for OmyModelsGenerator {
    fn generate(
        &self,
        ddl: &str,
        flavor: ModelFlavor,
        diagnostics: &mut dyn Write,
    ) -> Result<String> {
        let output = self.runtime.run(
            scripts::CREATE_MODELS,
            &[OsStr::new(flavor.models_type())],
            Some(ddl),
            diagnostics,
        )?;

        if !output.status.success() {
            return Err(Error::CodegenError(format!(
                "{} models: {}",
                flavor,
                failure_message(&output)
            )));
        }

        let reply: Reply = decode_reply(&output.stdout)?;
        Ok(reply.code)
    }
}
