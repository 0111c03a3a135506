//! Utilities for dbml_builder
//!
//! This module provides utility functions used across the library.

pub mod diagnostics;
pub mod logging;

pub use diagnostics::DiagnosticLog;
pub use logging::init_logging;
