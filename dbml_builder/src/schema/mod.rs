//! Schema source handling
//!
//! This module reads DBML through an injected parser and extracts the
//! version recorded in the project note.

pub mod parser;
pub mod version;

pub use parser::{ParsedSchema, PyDbmlParser, SchemaParser};
pub use version::{get_version, version_of};
