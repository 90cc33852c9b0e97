//! Catalog query types
//!
//! Request/response DTOs for the listing page: filter criteria plus
//! 1-indexed pagination.

use serde::{Deserialize, Serialize};

/// Stock/activity status filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    Active,
    Inactive,
    OutOfStock,
    LowStock,
}

/// Product listing query (all filters optional, AND-combined)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductQuery {
    /// Case-insensitive substring over name, description and sku
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Exact category id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Exact shop id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shop: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_min: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_max: Option<u32>,
    /// 1-indexed page number
    #[serde(default = "default_page")]
    pub page: u32,
}

fn default_page() -> u32 {
    1
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            search: None,
            category: None,
            shop: None,
            status: None,
            featured: None,
            price_min: None,
            price_max: None,
            stock_min: None,
            stock_max: None,
            page: 1,
        }
    }
}

impl ProductQuery {
    /// Query matching everything, first page
    pub fn all() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn in_category(mut self, category_id: impl Into<String>) -> Self {
        self.category = Some(category_id.into());
        self
    }

    pub fn from_shop(mut self, shop_id: impl Into<String>) -> Self {
        self.shop = Some(shop_id.into());
        self
    }

    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = Some(status);
        self
    }

    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = Some(featured);
        self
    }

    pub fn price_between(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.price_min = min;
        self.price_max = max;
        self
    }

    pub fn stock_between(mut self, min: Option<u32>, max: Option<u32>) -> Self {
        self.stock_min = min;
        self.stock_max = max;
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }
}

/// One page of results
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-indexed page this response covers
    pub current_page: u32,
    /// Never 0, even for an empty result set
    pub total_pages: u32,
    pub total_count: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total_count: u64, current_page: u32, page_size: u32) -> Self {
        let total_pages = if page_size > 0 {
            ((total_count as f64) / (page_size as f64)).ceil() as u32
        } else {
            1
        };

        Self {
            items,
            current_page,
            total_pages: total_pages.max(1),
            total_count,
        }
    }

    /// Empty page echoing the requested page number
    pub fn empty(current_page: u32) -> Self {
        Self {
            items: vec![],
            current_page,
            total_pages: 1,
            total_count: 0,
        }
    }
}

/// Page of products, the listing page's response shape
pub type ProductPage = Page<crate::models::Product>;
