//! Fix-ups for generator input and output
//!
//! The built-in patches smooth over known quirks of pydbml and omymodels.
//! Projects can add their own regex rewrites through the `[patches]` config
//! section; those run after the built-in ones.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::{PatchRuleConfig, PatchesConfig};
use crate::error::Result;

/// First line of every generated file
pub const GENERATED_BANNER: &str = "# Code generated by dbml_builder from DBML. DO NOT EDIT.";

// pydbml emits COMMENT ON for table and column notes; omymodels rejects them
static COMMENT_ON: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?im)^[ \t]*COMMENT ON\b[^;]*;[ \t]*\n?").expect("static regex")
});

static BLANK_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{4,}").expect("static regex"));

/// Prepare pydbml's DDL for omymodels
pub fn patch_ddl(ddl: &str) -> String {
    let ddl = ddl.replace("\r\n", "\n");
    let ddl = COMMENT_ON.replace_all(&ddl, "");
    format!("{}\n", ddl.trim_end())
}

/// Tidy the generated Pydantic schemas
pub fn patch_schema(code: &str) -> String {
    with_banner(&normalize_source(code))
}

/// Tidy the generated SQLAlchemy tables
pub fn patch_orm(code: &str) -> String {
    with_banner(&normalize_source(code))
}

fn normalize_source(code: &str) -> String {
    let joined = code.lines().map(str::trim_end).collect::<Vec<_>>().join("\n");
    let collapsed = BLANK_RUNS.replace_all(&joined, "\n\n\n");
    format!("{}\n", collapsed.trim_matches('\n'))
}

fn with_banner(code: &str) -> String {
    format!("{}\n\n{}", GENERATED_BANNER, code)
}

/// A user supplied regex rewrite
#[derive(Debug, Clone)]
pub struct PatchRule {
    pattern: Regex,
    replacement: String,
}

impl PatchRule {
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            replacement: replacement.to_string(),
        })
    }

    /// Replace every match; `$1`-style group references are expanded
    pub fn apply(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, self.replacement.as_str())
            .into_owned()
    }
}

/// Built-in fix-ups plus configured rewrites for each stage
#[derive(Debug, Clone, Default)]
pub struct PatchSet {
    ddl: Vec<PatchRule>,
    schema: Vec<PatchRule>,
    orm: Vec<PatchRule>,
}

impl PatchSet {
    /// Compile the rules from the `[patches]` section
    pub fn from_config(config: &PatchesConfig) -> Result<Self> {
        Ok(Self {
            ddl: compile(&config.ddl)?,
            schema: compile(&config.schema)?,
            orm: compile(&config.orm)?,
        })
    }

    pub fn patch_ddl(&self, ddl: &str) -> String {
        apply_rules(&self.ddl, patch_ddl(ddl))
    }

    pub fn patch_schema(&self, code: &str) -> String {
        apply_rules(&self.schema, patch_schema(code))
    }

    pub fn patch_orm(&self, code: &str) -> String {
        apply_rules(&self.orm, patch_orm(code))
    }
}

fn compile(rules: &[PatchRuleConfig]) -> Result<Vec<PatchRule>> {
    rules
        .iter()
        .map(|rule| PatchRule::new(&rule.pattern, &rule.replacement))
        .collect()
}

fn apply_rules(rules: &[PatchRule], text: String) -> String {
    rules.iter().fold(text, |text, rule| rule.apply(&text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use pretty_assertions::assert_eq;

    #[test]
    fn ddl_drops_comment_statements() {
        let ddl = "CREATE TABLE \"users\" (\r\n  \"id\" int\r\n);\r\n\r\nCOMMENT ON TABLE \"users\" IS 'People who log in';\nCOMMENT ON COLUMN \"users\".\"id\" IS 'pk';\n\n";
        assert_eq!(
            patch_ddl(ddl),
            "CREATE TABLE \"users\" (\n  \"id\" int\n);\n"
        );
    }

    #[test]
    fn generated_sources_get_banner_and_clean_whitespace() {
        let code = "from pydantic import BaseModel   \n\n\n\n\n\nclass Users(BaseModel):\n    id: int\t\n\n";
        assert_eq!(
            patch_schema(code),
            format!(
                "{}\n\nfrom pydantic import BaseModel\n\n\nclass Users(BaseModel):\n    id: int\n",
                GENERATED_BANNER
            )
        );
        assert!(patch_orm("Base = declarative_base()").starts_with(GENERATED_BANNER));
    }

    #[test]
    fn configured_rules_run_after_builtins() {
        let config = PatchesConfig {
            orm: vec![PatchRuleConfig {
                pattern: r"from gino import Gino\n\ndb = Gino\(\)".to_string(),
                replacement: "from app.db import db".to_string(),
            }],
            schema: vec![PatchRuleConfig {
                pattern: r"class (\w+)\(BaseModel\)".to_string(),
                replacement: "class ${1}Schema(BaseModel)".to_string(),
            }],
            ..PatchesConfig::default()
        };
        let patches = PatchSet::from_config(&config).unwrap();

        let orm = patches.patch_orm("from gino import Gino   \n\ndb = Gino()\n");
        assert!(orm.ends_with("from app.db import db\n"));

        let schema = patches.patch_schema("class Users(BaseModel):\n    id: int\n");
        assert!(schema.contains("class UsersSchema(BaseModel):"));

        assert_eq!(patches.patch_ddl("CREATE TABLE t ();"), "CREATE TABLE t ();\n");
    }

    #[test]
    fn invalid_rule_is_config_error() {
        let config = PatchesConfig {
            ddl: vec![PatchRuleConfig {
                pattern: "(unclosed".to_string(),
                replacement: String::new(),
            }],
            ..PatchesConfig::default()
        };
        let err = PatchSet::from_config(&config).unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)));
    }
}
