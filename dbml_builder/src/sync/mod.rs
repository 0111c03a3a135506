//! Generated artifact bookkeeping
//!
//! This module knows where generated files live, fingerprints them and
//! decides whether they still match the schema they were built from.

pub mod hash;
pub mod layout;
pub mod metadata;
pub mod verifier;

pub use layout::ArtifactLayout;
pub use metadata::Metadata;
pub use verifier::{check, is_in_sync, SyncStatus};
