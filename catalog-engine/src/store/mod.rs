//! Product persistence
//!
//! The engine reads and writes products through [`ProductCatalogStore`]
//! so the pure layers never learn where the data lives or how long it
//! takes to arrive. [`MemoryCatalogStore`] is the in-process
//! implementation used by tests and demos.

pub mod memory;

pub use memory::MemoryCatalogStore;

use async_trait::async_trait;
use shared::error::{CatalogError, ErrorCode};
use shared::models::{Product, ProductCreate, ProductUpdate};
use thiserror::Error;

/// Store error types
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Integrity: {0}")]
    Integrity(String),

    #[error("Backend error: {0}")]
    Backend(String),
}

impl From<StoreError> for CatalogError {
    fn from(err: StoreError) -> Self {
        let code = match err {
            StoreError::NotFound(_) => ErrorCode::ProductNotFound,
            StoreError::Duplicate(_) => ErrorCode::AlreadyExists,
            StoreError::Integrity(_) => ErrorCode::IntegrityViolation,
            StoreError::Backend(_) => ErrorCode::BackendError,
        };
        CatalogError::with_message(code, err.to_string())
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// CRUD surface every catalog backend provides
///
/// Object safe on purpose, services hold it as
/// `Arc<dyn ProductCatalogStore>`.
#[async_trait]
pub trait ProductCatalogStore: Send + Sync {
    /// Full snapshot in insertion order
    async fn list(&self) -> StoreResult<Vec<Product>>;

    async fn get(&self, id: &str) -> StoreResult<Option<Product>>;

    /// Mints the id and timestamps; rejects duplicate SKUs and
    /// structurally broken variant data
    async fn create(&self, data: ProductCreate) -> StoreResult<Product>;

    /// Applies the present fields of `data`, refreshes `updated_at`
    async fn update(&self, id: &str, data: ProductUpdate) -> StoreResult<Product>;

    /// Returns whether anything was deleted
    async fn delete(&self, id: &str) -> StoreResult<bool>;
}
