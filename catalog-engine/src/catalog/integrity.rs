//! Product structural validation
//!
//! One sweep over a product that reports every violated invariant
//! instead of stopping at the first. The registry write paths prevent
//! these states from being reached stepwise; this check exists for data
//! that arrives whole, imported snapshots and bulk edits.

use std::collections::HashSet;

use shared::models::Product;

/// Whether an issue blocks persistence or is merely worth surfacing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IssueSeverity {
    Warning,
    Error,
}

/// One violated invariant found by [`validate_product`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegrityIssue {
    pub severity: IssueSeverity,
    pub detail: String,
}

impl IntegrityIssue {
    fn error(detail: impl Into<String>) -> Self {
        Self {
            severity: IssueSeverity::Error,
            detail: detail.into(),
        }
    }

    fn warning(detail: impl Into<String>) -> Self {
        Self {
            severity: IssueSeverity::Warning,
            detail: detail.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == IssueSeverity::Error
    }
}

impl std::fmt::Display for IntegrityIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.severity {
            IssueSeverity::Error => write!(f, "error: {}", self.detail),
            IssueSeverity::Warning => write!(f, "warning: {}", self.detail),
        }
    }
}

/// True when any reported issue is severe enough to block a write
pub fn has_errors(issues: &[IntegrityIssue]) -> bool {
    issues.iter().any(IntegrityIssue::is_error)
}

/// Check a product's variant data for structural problems
///
/// Returns every issue found, errors and warnings mixed, in a stable
/// order: flag consistency first, then SKUs, then per-attribute checks,
/// then per-combination checks.
pub fn validate_product(product: &Product) -> Vec<IntegrityIssue> {
    let mut issues = Vec::new();

    let has_data = !product.attributes.is_empty() || !product.variant_combinations.is_empty();
    if !product.has_variants && has_data {
        issues.push(IntegrityIssue::error(
            "hasVariants is false but attribute or combination data is present",
        ));
    }
    if product.has_variants && !has_data {
        issues.push(IntegrityIssue::warning(
            "hasVariants is set but no attributes or combinations are authored",
        ));
    }

    // SKU uniqueness is product-wide across variants and combinations
    let mut seen_skus: HashSet<&str> = HashSet::new();
    let mut reported_skus: HashSet<&str> = HashSet::new();
    let all_skus = product
        .attributes
        .iter()
        .flat_map(|a| a.variants.iter().map(|v| v.sku.as_str()))
        .chain(product.variant_combinations.iter().map(|c| c.sku.as_str()));
    for sku in all_skus {
        if !seen_skus.insert(sku) && reported_skus.insert(sku) {
            issues.push(IntegrityIssue::error(format!(
                "SKU '{sku}' is used more than once"
            )));
        }
    }

    let mut attribute_ids: HashSet<&str> = HashSet::new();
    for attribute in &product.attributes {
        if !attribute_ids.insert(attribute.id.as_str()) {
            issues.push(IntegrityIssue::error(format!(
                "attribute id '{}' appears more than once",
                attribute.id
            )));
        }
        let defaults = attribute.variants.iter().filter(|v| v.is_default).count();
        if defaults > 1 {
            issues.push(IntegrityIssue::error(format!(
                "attribute '{}' has {defaults} default variants",
                attribute.id
            )));
        }
        if attribute.is_required && !attribute.variants.is_empty() && defaults == 0 {
            issues.push(IntegrityIssue::warning(format!(
                "required attribute '{}' has no default variant",
                attribute.id
            )));
        }
    }

    let mut combination_ids: HashSet<&str> = HashSet::new();
    for combination in &product.variant_combinations {
        if !combination_ids.insert(combination.id.as_str()) {
            issues.push(IntegrityIssue::error(format!(
                "combination id '{}' appears more than once",
                combination.id
            )));
        }
        let mut pinned: HashSet<&str> = HashSet::new();
        for value in &combination.attribute_values {
            if !pinned.insert(value.attribute_id.as_str()) {
                issues.push(IntegrityIssue::error(format!(
                    "combination '{}' pins attribute '{}' more than once",
                    combination.id, value.attribute_id
                )));
            }
            let known = product
                .attribute(&value.attribute_id)
                .and_then(|a| a.variant(&value.variant_id))
                .is_some();
            if !known {
                issues.push(IntegrityIssue::error(format!(
                    "combination '{}' references unknown attribute '{}' variant '{}'",
                    combination.id, value.attribute_id, value.variant_id
                )));
            }
        }
    }

    issues
}
