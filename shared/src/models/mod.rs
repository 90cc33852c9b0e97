//! Data models
//!
//! Shared between the catalog engine and its API hosts. All entities
//! serialize to camelCase JSON; optional fields are omitted when absent.

pub mod attribute;
pub mod combination;
pub mod product;

// Re-exports
pub use attribute::*;
pub use combination::*;
pub use product::*;
