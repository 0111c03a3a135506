//! DBML parser seam
//!
//! Parsing DBML is not done here. [`SchemaParser`] is implemented by
//! [`PyDbmlParser`] in production and by fakes in tests.

use std::io;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::python::runtime::{decode_reply, failure_message};
use crate::python::{scripts, PythonRuntime};

/// What the rest of the crate needs from a parsed DBML file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ParsedSchema {
    /// Text of the `Project { Note: ... }` annotation
    #[serde(rename = "note")]
    pub project_note: Option<String>,
    /// SQL DDL derived from the schema
    pub sql: String,
}

/// Parses a schema source file
pub trait SchemaParser {
    fn parse(&self, path: &Path) -> Result<ParsedSchema>;
}

/// Parser backed by the `pydbml` package
#[derive(Debug, Clone)]
pub struct PyDbmlParser {
    runtime: PythonRuntime,
}

impl PyDbmlParser {
    pub fn new(runtime: PythonRuntime) -> Self {
        Self { runtime }
    }
}

impl SchemaParser for PyDbmlParser {
    fn parse(&self, path: &Path) -> Result<ParsedSchema> {
        if !path.is_file() {
            return Err(Error::NotFound(path.to_path_buf()));
        }

        let output = self.runtime.run(
            scripts::PARSE_DBML,
            &[path.as_os_str()],
            None,
            &mut io::sink(),
        )?;

        if !output.status.success() {
            return Err(Error::SchemaParseError(format!(
                "{}: {}",
                path.display(),
                failure_message(&output)
            )));
        }

        let parsed: ParsedSchema = decode_reply(&output.stdout)?;
        tracing::debug!(
            schema = %path.display(),
            ddl_bytes = parsed.sql.len(),
            "Parsed DBML"
        );
        Ok(parsed)
    }
}
