//! Attribute and Variant models

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Attribute type taxonomy
///
/// Closed set of attribute kinds the catalog understands. Unknown strings
/// coming off the wire fold into [`AttributeType::Other`] so that newer
/// backends can introduce types without breaking older consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeType {
    Color,
    Size,
    Weight,
    Material,
    Dimension,
    Capacity,
    #[serde(other)]
    Other,
}

impl AttributeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeType::Color => "color",
            AttributeType::Size => "size",
            AttributeType::Weight => "weight",
            AttributeType::Material => "material",
            AttributeType::Dimension => "dimension",
            AttributeType::Capacity => "capacity",
            AttributeType::Other => "other",
        }
    }
}

impl std::fmt::Display for AttributeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Physical dimensions payload (length/width/height in one unit)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub unit: String,
}

/// Weight payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weight {
    pub value: f64,
    pub unit: String,
}

/// Variant option (embedded in Attribute)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    pub id: String,
    pub name: String,
    /// Canonical value: hex-like string for color, a unit string otherwise
    pub value: String,
    /// Additive delta over the product base price; absent means no surcharge
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    pub stock: u32,
    pub sku: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(default)]
    pub is_default: bool,
    /// Only meaningful for `type = color`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hex_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<Weight>,
}

impl Variant {
    /// Price delta this variant adds on top of the product base price
    pub fn price_delta(&self) -> f64 {
        self.price.unwrap_or(0.0)
    }
}

/// Product attribute (embedded in Product, owns its variants)
///
/// Variant list order is display order. At most one variant may carry
/// `is_default`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    pub id: String,
    /// Machine key (e.g. "color")
    pub name: String,
    #[serde(rename = "type")]
    pub attribute_type: AttributeType,
    /// Human label (e.g. "Colour")
    pub display_name: String,
    #[serde(default)]
    pub is_required: bool,
    #[serde(default)]
    pub variants: Vec<Variant>,
}

impl Attribute {
    /// Find a variant by id
    pub fn variant(&self, variant_id: &str) -> Option<&Variant> {
        self.variants.iter().find(|v| v.id == variant_id)
    }

    /// The variant a UI should preselect: the `is_default` one if present,
    /// else the first in list order, else none when the list is empty
    pub fn default_variant(&self) -> Option<&Variant> {
        self.variants
            .iter()
            .find(|v| v.is_default)
            .or_else(|| self.variants.first())
    }
}

/// Create variant payload (ids are minted by the service)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VariantCreate {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(min = 1, max = 200))]
    pub value: String,
    pub price: Option<f64>,
    #[serde(default)]
    pub stock: u32,
    #[validate(length(min = 1, max = 64))]
    pub sku: String,
    pub images: Option<Vec<String>>,
    #[serde(default)]
    pub is_default: bool,
    pub hex_color: Option<String>,
    pub dimensions: Option<Dimensions>,
    pub weight: Option<Weight>,
}

/// Create attribute payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AttributeCreate {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[serde(rename = "type")]
    pub attribute_type: AttributeType,
    #[validate(length(min = 1, max = 200))]
    pub display_name: String,
    #[serde(default)]
    pub is_required: bool,
    #[validate(nested)]
    #[serde(default)]
    pub variants: Vec<VariantCreate>,
}
