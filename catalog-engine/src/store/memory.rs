//! In-memory catalog store
//!
//! Insertion-ordered product list behind a `parking_lot::RwLock`. Ids
//! and timestamps are minted here. An optional artificial latency can
//! be switched on to imitate a remote backend; locks are only taken
//! after the sleep so a guard is never held across an await point.

use std::time::Duration;

use chrono::Utc;
use parking_lot::RwLock;
use shared::models::{Product, ProductCreate, ProductUpdate};
use uuid::Uuid;

use super::{ProductCatalogStore, StoreError, StoreResult};
use crate::catalog::integrity::{has_errors, validate_product};
use async_trait::async_trait;

pub struct MemoryCatalogStore {
    products: RwLock<Vec<Product>>,
    latency: Duration,
}

impl MemoryCatalogStore {
    pub fn new() -> Self {
        Self {
            products: RwLock::new(Vec::new()),
            latency: Duration::ZERO,
        }
    }

    /// Delay every operation by `latency`, imitating a remote backend
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Start from an existing snapshot. Seeds are trusted as-is, the
    /// write-path checks apply only to subsequent mutations.
    pub fn with_products(self, products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(products),
            ..self
        }
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    /// Error-severity integrity issues block the write
    fn check_integrity(product: &Product) -> StoreResult<()> {
        let issues = validate_product(product);
        if has_errors(&issues) {
            let details: Vec<String> = issues
                .iter()
                .filter(|i| i.is_error())
                .map(|i| i.detail.clone())
                .collect();
            return Err(StoreError::Integrity(details.join("; ")));
        }
        Ok(())
    }
}

impl Default for MemoryCatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the stored product out of a create payload
fn materialize(data: ProductCreate) -> Product {
    let has_variants = data
        .has_variants
        .unwrap_or(!data.attributes.is_empty() || !data.variant_combinations.is_empty());
    let now = Utc::now();
    Product {
        id: format!("prod-{}", Uuid::new_v4()),
        name: data.name,
        description: data.description,
        price: data.price,
        original_price: data.original_price,
        stock: data.stock,
        sku: data.sku,
        category: data.category,
        sub_category: data.sub_category,
        shop: data.shop,
        is_active: data.is_active,
        is_featured: data.is_featured,
        has_variants,
        attributes: data.attributes,
        variant_combinations: data.variant_combinations,
        tags: data.tags,
        views: 0,
        sales: 0,
        rating: 0.0,
        review_count: 0,
        created_at: Some(now),
        updated_at: Some(now),
    }
}

/// Apply the present fields of an update payload
fn apply_update(product: &mut Product, data: ProductUpdate) {
    let lists_changed = data.attributes.is_some() || data.variant_combinations.is_some();
    let flag_supplied = data.has_variants.is_some();

    if let Some(name) = data.name {
        product.name = name;
    }
    if let Some(description) = data.description {
        product.description = description;
    }
    if let Some(price) = data.price {
        product.price = price;
    }
    if let Some(original_price) = data.original_price {
        product.original_price = Some(original_price);
    }
    if let Some(stock) = data.stock {
        product.stock = stock;
    }
    if let Some(sku) = data.sku {
        product.sku = sku;
    }
    if let Some(category) = data.category {
        product.category = category;
    }
    if let Some(sub_category) = data.sub_category {
        product.sub_category = Some(sub_category);
    }
    if let Some(is_active) = data.is_active {
        product.is_active = is_active;
    }
    if let Some(is_featured) = data.is_featured {
        product.is_featured = is_featured;
    }
    if let Some(has_variants) = data.has_variants {
        product.has_variants = has_variants;
    }
    if let Some(attributes) = data.attributes {
        product.attributes = attributes;
    }
    if let Some(variant_combinations) = data.variant_combinations {
        product.variant_combinations = variant_combinations;
    }
    if let Some(tags) = data.tags {
        product.tags = tags;
    }

    // When variant lists are replaced without an explicit flag, keep the
    // flag truthful instead of failing the integrity check
    if lists_changed && !flag_supplied {
        product.has_variants =
            !product.attributes.is_empty() || !product.variant_combinations.is_empty();
    }

    product.updated_at = Some(Utc::now());
}

#[async_trait]
impl ProductCatalogStore for MemoryCatalogStore {
    async fn list(&self) -> StoreResult<Vec<Product>> {
        self.simulate_latency().await;
        Ok(self.products.read().clone())
    }

    async fn get(&self, id: &str) -> StoreResult<Option<Product>> {
        self.simulate_latency().await;
        Ok(self.products.read().iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, data: ProductCreate) -> StoreResult<Product> {
        self.simulate_latency().await;

        let product = materialize(data);
        Self::check_integrity(&product)?;

        let mut products = self.products.write();
        if products.iter().any(|p| p.sku == product.sku) {
            return Err(StoreError::Duplicate(format!(
                "product SKU '{}' already exists",
                product.sku
            )));
        }
        products.push(product.clone());
        Ok(product)
    }

    async fn update(&self, id: &str, data: ProductUpdate) -> StoreResult<Product> {
        self.simulate_latency().await;

        let mut products = self.products.write();
        let idx = products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("product '{id}'")))?;

        let mut candidate = products[idx].clone();
        apply_update(&mut candidate, data);
        Self::check_integrity(&candidate)?;

        let sku_taken = products
            .iter()
            .any(|p| p.id != id && p.sku == candidate.sku);
        if sku_taken {
            return Err(StoreError::Duplicate(format!(
                "product SKU '{}' already exists",
                candidate.sku
            )));
        }

        products[idx] = candidate.clone();
        Ok(candidate)
    }

    async fn delete(&self, id: &str) -> StoreResult<bool> {
        self.simulate_latency().await;

        let mut products = self.products.write();
        let before = products.len();
        products.retain(|p| p.id != id);
        Ok(products.len() < before)
    }
}
