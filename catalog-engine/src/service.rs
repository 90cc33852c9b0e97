//! Catalog service facade
//!
//! The one object a host application talks to. Payloads are validated
//! here, ids and timestamps are minted on the way in, persistence goes
//! through the store trait and all computation is delegated to the pure
//! catalog, resolver and query layers.

use std::sync::Arc;
use std::time::Duration;

use shared::error::{CatalogError, CatalogResult};
use shared::models::{
    Attribute, AttributeCreate, CombinationCreate, Product, ProductCreate, ProductUpdate, Variant,
    VariantCombination, VariantCreate,
};
use shared::query::{ProductPage, ProductQuery};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::catalog;
use crate::core::CatalogConfig;
use crate::query::{CatalogSummary, list_page, summarize};
use crate::resolver::{self, Selection, SelectionOutcome};
use crate::store::{MemoryCatalogStore, ProductCatalogStore};

/// Product catalog facade over a pluggable store
#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn ProductCatalogStore>,
    config: CatalogConfig,
}

impl std::fmt::Debug for CatalogService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl CatalogService {
    pub fn new(store: Arc<dyn ProductCatalogStore>, config: CatalogConfig) -> Self {
        Self { store, config }
    }

    /// Service over a fresh in-memory store, wiring the configured
    /// artificial latency. The demo/test setup.
    pub fn in_memory(config: CatalogConfig) -> Self {
        let store =
            MemoryCatalogStore::new().with_latency(Duration::from_millis(config.store_latency_ms));
        Self::new(Arc::new(store), config)
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    // =========================================================================
    // Product CRUD
    // =========================================================================

    pub async fn create_product(&self, data: ProductCreate) -> CatalogResult<Product> {
        data.validate()
            .map_err(|e| CatalogError::validation(e.to_string()))?;
        let product = self.store.create(data).await?;
        info!(
            "📦 Catalog: product {} created ({})",
            product.id, product.sku
        );
        Ok(product)
    }

    pub async fn get_product(&self, id: &str) -> CatalogResult<Product> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| CatalogError::product_not_found(id))
    }

    pub async fn update_product(&self, id: &str, data: ProductUpdate) -> CatalogResult<Product> {
        data.validate()
            .map_err(|e| CatalogError::validation(e.to_string()))?;
        let product = self.store.update(id, data).await?;
        info!("📦 Catalog: product {} updated", product.id);
        Ok(product)
    }

    /// Soft removal: the product stays listed under the inactive filter
    pub async fn deactivate_product(&self, id: &str) -> CatalogResult<Product> {
        let product = self
            .store
            .update(
                id,
                ProductUpdate {
                    is_active: Some(false),
                    ..ProductUpdate::default()
                },
            )
            .await?;
        info!("📦 Catalog: product {} deactivated", id);
        Ok(product)
    }

    pub async fn delete_product(&self, id: &str) -> CatalogResult<()> {
        let deleted = self.store.delete(id).await?;
        if !deleted {
            return Err(CatalogError::product_not_found(id));
        }
        info!("📦 Catalog: product {} deleted", id);
        Ok(())
    }

    // =========================================================================
    // Listing
    // =========================================================================

    pub async fn list_products(&self, query: &ProductQuery) -> CatalogResult<ProductPage> {
        let products = self.store.list().await?;
        let page = list_page(&products, query, &self.config);
        info!(
            "📦 Catalog: listed {} of {} products (page {}/{})",
            page.items.len(),
            page.total_count,
            page.current_page,
            page.total_pages
        );
        Ok(page)
    }

    pub async fn summary(&self) -> CatalogResult<CatalogSummary> {
        let products = self.store.list().await?;
        let summary = summarize(&products, self.config.low_stock_threshold);
        info!("📦 Catalog: summary over {} products", summary.total);
        Ok(summary)
    }

    // =========================================================================
    // Variant authoring
    // =========================================================================

    pub async fn add_attribute(
        &self,
        product_id: &str,
        data: AttributeCreate,
    ) -> CatalogResult<Product> {
        data.validate()
            .map_err(|e| CatalogError::validation(e.to_string()))?;
        let mut product = self.get_product(product_id).await?;

        let attribute = materialize_attribute(data);
        let attribute_id = attribute.id.clone();
        catalog::add_attribute(&mut product, attribute)?;

        let updated = self
            .store
            .update(
                product_id,
                ProductUpdate {
                    has_variants: Some(true),
                    attributes: Some(product.attributes),
                    ..ProductUpdate::default()
                },
            )
            .await?;
        info!(
            "📦 Catalog: attribute {} added to product {}",
            attribute_id, product_id
        );
        Ok(updated)
    }

    pub async fn add_variant(
        &self,
        product_id: &str,
        attribute_id: &str,
        data: VariantCreate,
    ) -> CatalogResult<Product> {
        data.validate()
            .map_err(|e| CatalogError::validation(e.to_string()))?;
        let mut product = self.get_product(product_id).await?;

        catalog::add_variant(&mut product, attribute_id, materialize_variant(data))?;

        let updated = self
            .store
            .update(
                product_id,
                ProductUpdate {
                    attributes: Some(product.attributes),
                    ..ProductUpdate::default()
                },
            )
            .await?;
        info!(
            "📦 Catalog: variant added to {} on product {}",
            attribute_id, product_id
        );
        Ok(updated)
    }

    pub async fn add_combination(
        &self,
        product_id: &str,
        data: CombinationCreate,
    ) -> CatalogResult<Product> {
        data.validate()
            .map_err(|e| CatalogError::validation(e.to_string()))?;
        let mut product = self.get_product(product_id).await?;

        let combination = materialize_combination(data);
        let combination_id = combination.id.clone();
        catalog::add_combination(&mut product, combination)?;

        let updated = self
            .store
            .update(
                product_id,
                ProductUpdate {
                    has_variants: Some(true),
                    variant_combinations: Some(product.variant_combinations),
                    ..ProductUpdate::default()
                },
            )
            .await?;
        info!(
            "📦 Catalog: combination {} added to product {}",
            combination_id, product_id
        );
        Ok(updated)
    }

    // =========================================================================
    // Resolution
    // =========================================================================

    /// The selection a storefront should preselect for a product
    pub async fn default_selection(&self, product_id: &str) -> CatalogResult<Selection> {
        let product = self.get_product(product_id).await?;
        Ok(catalog::default_selection(&product))
    }

    /// Resolve a shopper's choices to a quote, candidates or unavailable
    pub async fn resolve(
        &self,
        product_id: &str,
        selection: &Selection,
    ) -> CatalogResult<SelectionOutcome> {
        let product = self.get_product(product_id).await?;
        resolver::resolve(&product, selection).map_err(CatalogError::from)
    }
}

fn materialize_variant(data: VariantCreate) -> Variant {
    Variant {
        id: format!("var-{}", Uuid::new_v4()),
        name: data.name,
        value: data.value,
        price: data.price,
        stock: data.stock,
        sku: data.sku,
        images: data.images,
        is_default: data.is_default,
        hex_color: data.hex_color,
        dimensions: data.dimensions,
        weight: data.weight,
    }
}

fn materialize_attribute(data: AttributeCreate) -> Attribute {
    Attribute {
        id: format!("attr-{}", Uuid::new_v4()),
        name: data.name,
        attribute_type: data.attribute_type,
        display_name: data.display_name,
        is_required: data.is_required,
        variants: data.variants.into_iter().map(materialize_variant).collect(),
    }
}

fn materialize_combination(data: CombinationCreate) -> VariantCombination {
    VariantCombination {
        id: format!("comb-{}", Uuid::new_v4()),
        name: data.name,
        attribute_values: data.attribute_values,
        price: data.price,
        stock: data.stock,
        sku: data.sku,
        images: data.images,
        is_available: data.is_available,
        weight: data.weight,
        dimensions: data.dimensions,
    }
}
