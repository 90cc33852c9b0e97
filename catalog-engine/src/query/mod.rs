//! Catalog query layer
//!
//! Pure filtering and pagination over an in-memory product snapshot.
//! All predicates are AND-combined; absent filters match everything.
//! Result order is the snapshot's own order, no sorting is applied.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use shared::models::Product;
use shared::query::{Page, ProductPage, ProductQuery, StatusFilter};

use crate::core::CatalogConfig;

/// Does one product satisfy every filter of the query?
///
/// `low_stock_threshold` parameterizes the `low_stock` status bucket
/// (stock in `1..=threshold`).
pub fn matches_query(product: &Product, query: &ProductQuery, low_stock_threshold: u32) -> bool {
    if let Some(term) = &query.search {
        let needle = term.to_lowercase();
        let hit = product.name.to_lowercase().contains(&needle)
            || product.description.to_lowercase().contains(&needle)
            || product.sku.to_lowercase().contains(&needle);
        if !hit {
            return false;
        }
    }
    if let Some(category) = &query.category
        && product.category.id != *category
    {
        return false;
    }
    if let Some(shop) = &query.shop
        && product.shop.id != *shop
    {
        return false;
    }
    if let Some(status) = query.status {
        let hit = match status {
            StatusFilter::Active => product.is_active,
            StatusFilter::Inactive => !product.is_active,
            StatusFilter::OutOfStock => product.is_out_of_stock(),
            StatusFilter::LowStock => product.is_low_stock(low_stock_threshold),
        };
        if !hit {
            return false;
        }
    }
    if let Some(featured) = query.featured
        && product.is_featured != featured
    {
        return false;
    }
    if let Some(min) = query.price_min
        && product.price < min
    {
        return false;
    }
    if let Some(max) = query.price_max
        && product.price > max
    {
        return false;
    }
    if let Some(min) = query.stock_min
        && product.stock < min
    {
        return false;
    }
    if let Some(max) = query.stock_max
        && product.stock > max
    {
        return false;
    }
    true
}

/// Filter a snapshot, preserving its order
pub fn filter_products<'a>(
    products: &'a [Product],
    query: &ProductQuery,
    low_stock_threshold: u32,
) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|p| matches_query(p, query, low_stock_threshold))
        .collect()
}

/// Cut one 1-indexed page out of a filtered set
///
/// A page beyond the end comes back with empty items but still carries
/// the real totals, so a UI can clamp its pager. Page 0 is treated as
/// page 1.
pub fn paginate(matched: &[&Product], page: u32, page_size: u32) -> ProductPage {
    let current = page.max(1);
    let start = (current as usize - 1) * page_size as usize;
    let items: Vec<Product> = matched
        .iter()
        .skip(start)
        .take(page_size as usize)
        .map(|p| (*p).clone())
        .collect();
    Page::new(items, matched.len() as u64, current, page_size)
}

/// Filter and paginate in one step, the listing endpoint's shape
pub fn list_page(products: &[Product], query: &ProductQuery, config: &CatalogConfig) -> ProductPage {
    let matched = filter_products(products, query, config.low_stock_threshold);
    paginate(&matched, query.page, config.page_size)
}

/// Dashboard stat card counts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSummary {
    pub total: usize,
    pub active: usize,
    pub featured: usize,
    pub out_of_stock: usize,
    pub low_stock: usize,
    /// Distinct category ids in the snapshot
    pub categories: usize,
    /// Distinct shop ids in the snapshot
    pub shops: usize,
}

/// Count the snapshot for the dashboard cards in a single pass
pub fn summarize(products: &[Product], low_stock_threshold: u32) -> CatalogSummary {
    let mut categories: HashSet<&str> = HashSet::new();
    let mut shops: HashSet<&str> = HashSet::new();
    let mut summary = CatalogSummary {
        total: products.len(),
        ..CatalogSummary::default()
    };
    for product in products {
        if product.is_active {
            summary.active += 1;
        }
        if product.is_featured {
            summary.featured += 1;
        }
        if product.is_out_of_stock() {
            summary.out_of_stock += 1;
        }
        if product.is_low_stock(low_stock_threshold) {
            summary.low_stock += 1;
        }
        categories.insert(product.category.id.as_str());
        shops.insert(product.shop.id.as_str());
    }
    summary.categories = categories.len();
    summary.shops = shops.len();
    summary
}
