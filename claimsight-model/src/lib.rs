//! Regression artifact handling for Claimsight.
//!
//! The predictive model is a pre-trained linear regression serialized as a
//! versioned JSON artifact. This crate deserializes it, validates it against
//! the canonical feature schema (count *and* column order), and exposes the
//! `predict` contract. The loaded handle is cached process-wide: loaded
//! lazily on first use, immutable thereafter, torn down at process exit.

mod error;
mod linear;
mod loader;
mod schema;

pub use error::ModelError;
pub use linear::LinearModel;
pub use loader::{cached, load};
pub use schema::{ArtifactMeta, ArtifactSchema, TaskKind, SCHEMA_VERSION};
