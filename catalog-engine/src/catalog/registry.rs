//! Variant registry write paths
//!
//! Every mutation of a product's attribute, variant and combination lists
//! goes through these functions. Checks run against the whole product
//! before anything is touched, so a failed call leaves the product
//! exactly as it was.
//!
//! Price sums run on `Decimal` via [`super::money`] and come back to
//! `f64` rounded to cents.

use std::collections::HashSet;

use rust_decimal::Decimal;
use shared::error::{CatalogError, ErrorCode};
use shared::models::{Attribute, Product, Variant, VariantCombination};
use thiserror::Error;

use super::money::{to_decimal, to_f64};
use crate::resolver::Selection;

/// Rejections raised by the registry write paths
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Attribute '{0}' already exists on this product")]
    DuplicateAttributeId(String),

    #[error("SKU '{0}' is already used within this product")]
    DuplicateSku(String),

    #[error("Attribute '{0}' already has a default variant")]
    MultipleDefaults(String),

    #[error("Combination '{0}' already exists on this product")]
    DuplicateCombinationId(String),

    #[error("Attribute '{0}' does not exist on this product")]
    UnknownAttribute(String),

    #[error("Combination references attribute '{attribute_id}' variant '{variant_id}' which this product does not own")]
    InvalidAttributeReference {
        attribute_id: String,
        variant_id: String,
    },
}

impl From<RegistryError> for CatalogError {
    fn from(err: RegistryError) -> Self {
        let code = match err {
            RegistryError::DuplicateAttributeId(_) => ErrorCode::DuplicateAttributeId,
            RegistryError::DuplicateSku(_) => ErrorCode::DuplicateSku,
            RegistryError::MultipleDefaults(_) => ErrorCode::MultipleDefaults,
            RegistryError::DuplicateCombinationId(_) => ErrorCode::DuplicateCombinationId,
            RegistryError::UnknownAttribute(_) => ErrorCode::UnknownAttribute,
            RegistryError::InvalidAttributeReference { .. } => ErrorCode::InvalidAttributeReference,
        };
        CatalogError::with_message(code, err.to_string())
    }
}

/// True when `sku` is already taken by any variant or combination of the
/// product. SKU uniqueness is product-wide, not per attribute.
fn sku_in_use(product: &Product, sku: &str) -> bool {
    product
        .attributes
        .iter()
        .flat_map(|a| a.variants.iter())
        .any(|v| v.sku == sku)
        || product.variant_combinations.iter().any(|c| c.sku == sku)
}

/// Attach a new attribute to the product
///
/// The attribute may arrive with variants already on it; those are held
/// to the same SKU and default rules as [`add_variant`] so a bulk add
/// cannot smuggle in what a stepwise add would reject.
pub fn add_attribute(product: &mut Product, attribute: Attribute) -> Result<(), RegistryError> {
    if product.attribute(&attribute.id).is_some() {
        return Err(RegistryError::DuplicateAttributeId(attribute.id));
    }

    let mut saw_default = false;
    for (idx, variant) in attribute.variants.iter().enumerate() {
        let taken_in_batch = attribute.variants[..idx].iter().any(|v| v.sku == variant.sku);
        if taken_in_batch || sku_in_use(product, &variant.sku) {
            return Err(RegistryError::DuplicateSku(variant.sku.clone()));
        }
        if variant.is_default {
            if saw_default {
                return Err(RegistryError::MultipleDefaults(attribute.id));
            }
            saw_default = true;
        }
    }

    product.attributes.push(attribute);
    // Attribute data on the product implies the flag
    product.has_variants = true;
    Ok(())
}

/// Append a variant to an existing attribute
pub fn add_variant(
    product: &mut Product,
    attribute_id: &str,
    variant: Variant,
) -> Result<(), RegistryError> {
    let idx = product
        .attributes
        .iter()
        .position(|a| a.id == attribute_id)
        .ok_or_else(|| RegistryError::UnknownAttribute(attribute_id.to_string()))?;

    if sku_in_use(product, &variant.sku) {
        return Err(RegistryError::DuplicateSku(variant.sku));
    }

    let attribute = &mut product.attributes[idx];
    if variant.is_default && attribute.variants.iter().any(|v| v.is_default) {
        return Err(RegistryError::MultipleDefaults(attribute_id.to_string()));
    }

    attribute.variants.push(variant);
    Ok(())
}

/// Append a combination to the product
///
/// Every `(attributeId, variantId)` pair must land on an attribute and
/// variant the product owns, and no attribute may be pinned twice.
pub fn add_combination(
    product: &mut Product,
    combination: VariantCombination,
) -> Result<(), RegistryError> {
    if product.variant_combinations.iter().any(|c| c.id == combination.id) {
        return Err(RegistryError::DuplicateCombinationId(combination.id));
    }
    if sku_in_use(product, &combination.sku) {
        return Err(RegistryError::DuplicateSku(combination.sku));
    }

    let mut pinned: HashSet<&str> = HashSet::new();
    for value in &combination.attribute_values {
        if !pinned.insert(value.attribute_id.as_str()) {
            return Err(RegistryError::DuplicateAttributeId(value.attribute_id.clone()));
        }
        let known = product
            .attribute(&value.attribute_id)
            .and_then(|a| a.variant(&value.variant_id))
            .is_some();
        if !known {
            return Err(RegistryError::InvalidAttributeReference {
                attribute_id: value.attribute_id.clone(),
                variant_id: value.variant_id.clone(),
            });
        }
    }

    product.variant_combinations.push(combination);
    product.has_variants = true;
    Ok(())
}

/// The selection a UI should start from: per attribute, the `isDefault`
/// variant if one exists, else the first in list order. Attributes with
/// no variants contribute nothing.
pub fn default_selection(product: &Product) -> Selection {
    let mut selection = Selection::new();
    for attribute in &product.attributes {
        if let Some(variant) = attribute.default_variant() {
            selection.set(&attribute.id, &variant.id);
        }
    }
    selection
}

/// Effective price under simple-variant mode: base price plus the delta
/// of every selected variant. Floors at zero so a large negative delta
/// cannot price below free.
///
/// Selection entries are assumed validated; pairs that do not land on
/// the product are skipped. Combination-mode pricing never comes through
/// here, the stored combination price is authoritative there.
pub fn resolve_price(product: &Product, selection: &Selection) -> f64 {
    let mut price = to_decimal(product.price);
    for attribute in &product.attributes {
        if let Some(variant_id) = selection.get(&attribute.id)
            && let Some(variant) = attribute.variant(variant_id)
        {
            price += to_decimal(variant.price_delta());
        }
    }
    to_f64(price.max(Decimal::ZERO))
}

/// Effective stock under simple-variant mode: the minimum stock across
/// selected variants. A required attribute with no selection yields 0;
/// with nothing selected at all the product-level stock applies.
pub fn resolve_stock(product: &Product, selection: &Selection) -> u32 {
    let mut stock: Option<u32> = None;
    for attribute in &product.attributes {
        match selection.get(&attribute.id) {
            Some(variant_id) => {
                if let Some(variant) = attribute.variant(variant_id) {
                    stock = Some(stock.map_or(variant.stock, |s| s.min(variant.stock)));
                }
            }
            None if attribute.is_required => return 0,
            None => {}
        }
    }
    stock.unwrap_or(product.stock)
}
