//! Model code generation
//!
//! This module turns parsed DBML into Pydantic and SQLAlchemy sources.

pub mod codegen;
pub mod generator;
pub mod patch;

pub use codegen::{CodeGenerator, ModelFlavor, OmyModelsGenerator};
pub use generator::ModelGenerator;
pub use patch::{patch_ddl, patch_orm, patch_schema, PatchRule, PatchSet};
