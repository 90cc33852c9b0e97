//! Sooq catalog engine
//!
//! Product variant/attribute combination model for the Sooq marketplace:
//! typed write paths with authoring invariants, selection resolution to
//! price/stock, and a pure query layer over a product collection.
//!
//! # Module structure
//!
//! ```text
//! catalog-engine/src/
//! ├── core/          # Runtime configuration
//! ├── catalog/       # Attribute taxonomy, registry write paths, integrity
//! ├── resolver/      # Selection -> price/stock resolution
//! ├── query/         # Filtering, pagination, summary counters
//! ├── store/         # Async persistence seam + in-memory store
//! ├── auth.rs        # Session gateway seam
//! └── service.rs     # Facade tying store + pure core together
//! ```
//!
//! The pure modules (`catalog`, `resolver`, `query`) perform no I/O and
//! hold no locks; async appears only at the `store`/`auth` seams.

pub mod auth;
pub mod catalog;
pub mod core;
pub mod query;
pub mod resolver;
pub mod service;
pub mod store;

// Re-export public types
pub use auth::{AuthGateway, StaticAuthGateway};
pub use catalog::{IntegrityIssue, IssueSeverity, RegistryError};
pub use core::CatalogConfig;
pub use query::CatalogSummary;
pub use resolver::{Selection, SelectionError, SelectionOutcome, VariantQuote};
pub use service::CatalogService;
pub use store::{MemoryCatalogStore, ProductCatalogStore, StoreError};
