//! Python bridge
//!
//! DBML parsing and model rendering are done by the `pydbml` and `omymodels`
//! packages. This module runs them through a configured interpreter.

pub mod runtime;
pub mod scripts;

pub use runtime::PythonRuntime;
