//! Shared types for the Sooq catalog
//!
//! Wire-facing data model used across the catalog engine and its hosts:
//! product/attribute/variant/combination entities, query and page DTOs,
//! session types, and the unified error surface.

pub mod error;
pub mod models;
pub mod query;
pub mod session;

// Re-exports
pub use serde::{Deserialize, Serialize};

// Model re-exports (for convenient access)
pub use error::{CatalogError, CatalogResult, ErrorCode};
pub use models::{Attribute, AttributeType, Product, Variant, VariantCombination, VariantMode};
pub use query::{Page, ProductPage, ProductQuery, StatusFilter};
