//! Core domain models for bundle-check
//!
//! This module contains the fundamental types used throughout the application:
//! - The bundled tools being tracked
//! - The set of versions discovered upstream
//! - The baseline recorded in the previous release
//! - The packaging decision derived from both

mod baseline;
mod decision;
mod tool;
mod version_set;

pub use baseline::ReleaseBaseline;
pub use decision::{Decision, NO_UPDATE};
pub use tool::Tool;
pub use version_set::VersionSet;
