/// Catalog engine configuration
///
/// # Environment variables
///
/// Every setting can be overridden through the environment:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | PAGE_SIZE | 12 | Listing page size |
/// | LOW_STOCK_THRESHOLD | 10 | Upper bound (inclusive) of the low-stock band |
/// | STORE_LATENCY_MS | 0 | Artificial latency of the in-memory store |
///
/// # Example
///
/// ```ignore
/// PAGE_SIZE=24 LOW_STOCK_THRESHOLD=5 cargo test
/// ```
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Number of products per listing page
    pub page_size: u32,
    /// Stock at or below this (and above zero) counts as low stock
    pub low_stock_threshold: u32,
    /// Artificial latency applied by the in-memory store, for exercising
    /// loading states in hosts; zero disables it
    pub store_latency_ms: u64,
}

impl CatalogConfig {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to defaults.
    pub fn from_env() -> Self {
        Self {
            page_size: std::env::var("PAGE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|v| *v > 0)
                .unwrap_or(12),
            low_stock_threshold: std::env::var("LOW_STOCK_THRESHOLD")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            store_latency_ms: std::env::var("STORE_LATENCY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0),
        }
    }

    /// Override the page size, keeping everything else
    ///
    /// Mostly used in tests.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: 12,
            low_stock_threshold: 10,
            store_latency_ms: 0,
        }
    }
}
