//! Variant combination model

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::attribute::{Dimensions, Weight};

/// One (attribute, variant) pair inside a combination
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeValueRef {
    pub attribute_id: String,
    pub variant_id: String,
}

impl AttributeValueRef {
    pub fn new(attribute_id: impl Into<String>, variant_id: impl Into<String>) -> Self {
        Self {
            attribute_id: attribute_id.into(),
            variant_id: variant_id.into(),
        }
    }
}

/// Explicitly authored attribute-value combination (embedded in Product)
///
/// `price` is absolute and authoritative for this exact cell. It is never
/// recomputed from the contributing variants' deltas, since backends may
/// store it pre-computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantCombination {
    pub id: String,
    /// Human summary, e.g. "Red - Large - Light"
    pub name: String,
    pub attribute_values: Vec<AttributeValueRef>,
    pub price: f64,
    /// Sellable quantity for this specific combination, independent from
    /// per-variant stock
    pub stock: u32,
    pub sku: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    /// Distinct from `stock > 0`: a stocked combination may be disabled
    #[serde(default = "default_true")]
    pub is_available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<Weight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,
}

impl VariantCombination {
    /// Does this combination carry exactly this (attribute, variant) pair
    pub fn references(&self, attribute_id: &str, variant_id: &str) -> bool {
        self.attribute_values
            .iter()
            .any(|av| av.attribute_id == attribute_id && av.variant_id == variant_id)
    }

    /// Does this combination pin any variant of the given attribute
    pub fn covers_attribute(&self, attribute_id: &str) -> bool {
        self.attribute_values
            .iter()
            .any(|av| av.attribute_id == attribute_id)
    }

    pub fn sellable(&self) -> bool {
        self.is_available && self.stock > 0
    }
}

fn default_true() -> bool {
    true
}

/// Create combination payload (id minted by the service)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CombinationCreate {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    pub attribute_values: Vec<AttributeValueRef>,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[serde(default)]
    pub stock: u32,
    #[validate(length(min = 1, max = 64))]
    pub sku: String,
    pub images: Option<Vec<String>>,
    #[serde(default = "default_true")]
    pub is_available: bool,
    pub weight: Option<Weight>,
    pub dimensions: Option<Dimensions>,
}
