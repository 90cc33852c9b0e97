//! Product Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::attribute::Attribute;
use super::combination::VariantCombination;

/// Category reference (id plus denormalized name)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub id: String,
    pub name: String,
}

/// Owning shop reference (foreign, maintained by shop management)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopRef {
    pub id: String,
    pub name: String,
    pub logo: String,
}

/// How a product's variant data is interpreted
///
/// - `None`: plain product, base price and product stock apply
/// - `Simple`: shoppers pick one variant per attribute independently;
///   price = base + sum of deltas, stock = min over selected
/// - `Combination`: an explicit combination list is authoritative for
///   price/stock/availability
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantMode {
    None,
    Simple,
    Combination,
}

/// Product entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Base price; variant deltas and combination prices build on or
    /// replace it depending on the variant mode
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    pub stock: u32,
    pub sku: String,
    pub category: CategoryRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<CategoryRef>,
    pub shop: ShopRef,
    pub is_active: bool,
    pub is_featured: bool,
    pub has_variants: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<Attribute>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variant_combinations: Vec<VariantCombination>,
    #[serde(default)]
    pub tags: Vec<String>,

    // Externally-maintained counters; read-only from the catalog's side
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub sales: u64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub review_count: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Which pricing/stock regime applies to this product
    pub fn variant_mode(&self) -> VariantMode {
        if !self.variant_combinations.is_empty() {
            VariantMode::Combination
        } else if !self.attributes.is_empty() {
            VariantMode::Simple
        } else {
            VariantMode::None
        }
    }

    /// Find an attribute by id
    pub fn attribute(&self, attribute_id: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.id == attribute_id)
    }

    pub fn is_out_of_stock(&self) -> bool {
        self.stock == 0
    }

    pub fn is_low_stock(&self, threshold: u32) -> bool {
        self.stock > 0 && self.stock <= threshold
    }

    /// True when a strikethrough original price applies
    pub fn is_on_sale(&self) -> bool {
        matches!(self.original_price, Some(op) if op > self.price)
    }

    /// Discount percentage against the original price, rounded down
    pub fn discount_percentage(&self) -> Option<u32> {
        match self.original_price {
            Some(op) if op > self.price && op > 0.0 => {
                Some(((op - self.price) / op * 100.0) as u32)
            }
            _ => None,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Create product payload
///
/// Ids and timestamps are minted by the store; `has_variants` defaults to
/// whether any attributes or combinations were supplied.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreate {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(max = 2000))]
    #[serde(default)]
    pub description: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(range(min = 0.0))]
    pub original_price: Option<f64>,
    #[serde(default)]
    pub stock: u32,
    #[validate(length(min = 1, max = 64))]
    pub sku: String,
    pub category: CategoryRef,
    pub sub_category: Option<CategoryRef>,
    pub shop: ShopRef,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_featured: bool,
    pub has_variants: Option<bool>,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub variant_combinations: Vec<VariantCombination>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Update product payload (absent fields stay unchanged)
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[validate(length(max = 2000))]
    pub description: Option<String>,
    #[validate(range(min = 0.0))]
    pub price: Option<f64>,
    #[validate(range(min = 0.0))]
    pub original_price: Option<f64>,
    pub stock: Option<u32>,
    #[validate(length(min = 1, max = 64))]
    pub sku: Option<String>,
    pub category: Option<CategoryRef>,
    pub sub_category: Option<CategoryRef>,
    pub is_active: Option<bool>,
    pub is_featured: Option<bool>,
    pub has_variants: Option<bool>,
    pub attributes: Option<Vec<Attribute>>,
    pub variant_combinations: Option<Vec<VariantCombination>>,
    pub tags: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::attribute::AttributeType;

    fn base_product() -> Product {
        Product {
            id: "prod-1".to_string(),
            name: "Ceramic Vase".to_string(),
            description: "Hand made".to_string(),
            price: 45.0,
            original_price: None,
            stock: 8,
            sku: "VASE-001".to_string(),
            category: CategoryRef {
                id: "cat-home".to_string(),
                name: "Home".to_string(),
            },
            sub_category: None,
            shop: ShopRef {
                id: "shop-1".to_string(),
                name: "Clay Works".to_string(),
                logo: "clay.png".to_string(),
            },
            is_active: true,
            is_featured: false,
            has_variants: false,
            attributes: vec![],
            variant_combinations: vec![],
            tags: vec![],
            views: 0,
            sales: 0,
            rating: 0.0,
            review_count: 0,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_variant_mode_none() {
        assert_eq!(base_product().variant_mode(), VariantMode::None);
    }

    #[test]
    fn test_variant_mode_simple_and_combination() {
        let mut p = base_product();
        p.has_variants = true;
        p.attributes.push(Attribute {
            id: "attr-size".to_string(),
            name: "size".to_string(),
            attribute_type: AttributeType::Size,
            display_name: "Size".to_string(),
            is_required: false,
            variants: vec![],
        });
        assert_eq!(p.variant_mode(), VariantMode::Simple);

        p.variant_combinations.push(VariantCombination {
            id: "comb-1".to_string(),
            name: "Small".to_string(),
            attribute_values: vec![],
            price: 45.0,
            stock: 3,
            sku: "VASE-S".to_string(),
            images: None,
            is_available: true,
            weight: None,
            dimensions: None,
        });
        assert_eq!(p.variant_mode(), VariantMode::Combination);
    }

    #[test]
    fn test_stock_flags() {
        let mut p = base_product();
        assert!(!p.is_out_of_stock());
        assert!(p.is_low_stock(10));
        assert!(!p.is_low_stock(5));

        p.stock = 0;
        assert!(p.is_out_of_stock());
        assert!(!p.is_low_stock(10));
    }

    #[test]
    fn test_discount_percentage() {
        let mut p = base_product();
        assert!(!p.is_on_sale());
        assert_eq!(p.discount_percentage(), None);

        p.original_price = Some(60.0);
        assert!(p.is_on_sale());
        assert_eq!(p.discount_percentage(), Some(25));
    }

    #[test]
    fn test_product_wire_shape() {
        let p = base_product();
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["isActive"], true);
        assert_eq!(json["hasVariants"], false);
        assert_eq!(json["category"]["id"], "cat-home");
        // Empty lists stay off the wire
        assert!(json.get("attributes").is_none());
        assert!(json.get("variantCombinations").is_none());
        assert!(json.get("originalPrice").is_none());
    }

    #[test]
    fn test_product_roundtrip_without_counters() {
        // Older payloads without counters still deserialize
        let json = r#"{
            "id": "prod-2",
            "name": "Mug",
            "description": "",
            "price": 12.5,
            "stock": 4,
            "sku": "MUG-01",
            "category": {"id": "cat-home", "name": "Home"},
            "shop": {"id": "shop-1", "name": "Clay Works", "logo": "clay.png"},
            "isActive": true,
            "isFeatured": false,
            "hasVariants": false,
            "tags": []
        }"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.views, 0);
        assert_eq!(p.rating, 0.0);
        assert!(p.attributes.is_empty());
    }
}
