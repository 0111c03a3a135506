//! Version reader

use std::path::Path;

use crate::error::{Error, Result};
use crate::schema::parser::{ParsedSchema, SchemaParser};

/// Read the schema version stored in the DBML project note
pub fn get_version(parser: &dyn SchemaParser, schema_path: &Path) -> Result<String> {
    if !schema_path.exists() {
        return Err(Error::NotFound(schema_path.to_path_buf()));
    }

    let parsed = parser.parse(schema_path)?;
    version_of(&parsed, schema_path)
}

/// Version of an already parsed schema. The note text is used verbatim.
pub fn version_of(parsed: &ParsedSchema, schema_path: &Path) -> Result<String> {
    parsed
        .project_note
        .clone()
        .ok_or_else(|| Error::MissingVersion(schema_path.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::fs;

    struct StaticParser {
        note: Option<&'static str>,
        calls: Cell<usize>,
    }

    impl SchemaParser for StaticParser {
        fn parse(&self, _path: &Path) -> Result<ParsedSchema> {
            self.calls.set(self.calls.get() + 1);
            Ok(ParsedSchema {
                project_note: self.note.map(str::to_string),
                sql: String::new(),
            })
        }
    }

    #[test]
    fn returns_note_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schema.dbml");
        fs::write(&path, "Project app { Note: '1.0.0' }").unwrap();

        let parser = StaticParser {
            note: Some(" 1.0.0"),
            calls: Cell::new(0),
        };
        assert_eq!(get_version(&parser, &path).unwrap(), " 1.0.0");
        assert_eq!(parser.calls.get(), 1);
    }

    #[test]
    fn missing_note_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schema.dbml");
        fs::write(&path, "Table users { id int }").unwrap();

        let parser = StaticParser {
            note: None,
            calls: Cell::new(0),
        };
        let err = get_version(&parser, &path).unwrap_err();
        assert!(matches!(err, Error::MissingVersion(p) if p == path));
    }

    #[test]
    fn missing_file_skips_parser() {
        let parser = StaticParser {
            note: Some("1.0.0"),
            calls: Cell::new(0),
        };
        let err = get_version(&parser, Path::new("missing.dbml")).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
        assert_eq!(parser.calls.get(), 0);
    }
}
