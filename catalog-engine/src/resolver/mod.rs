//! Selection resolution
//!
//! Turns a shopper's attribute choices into a price/stock answer. The
//! three variant modes behave differently:
//!
//! - no variant data: the product's own price and stock are the answer
//! - simple mode: price is base plus selected deltas, stock is the
//!   minimum over selected variants
//! - combination mode: the authored combination list is authoritative;
//!   a full selection resolves to one combination (or to
//!   [`SelectionOutcome::Unavailable`] when that cell was never
//!   authored), a partial selection narrows to a candidate set
//!
//! Bad attribute or variant references are rejected eagerly in every
//! mode, before any matching runs. An unmatched full selection is not
//! an error, it is a normal answer a storefront renders as "not
//! available".

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use shared::error::{CatalogError, ErrorCode};
use shared::models::{Product, VariantCombination, VariantMode};
use thiserror::Error;
use tracing::warn;

use crate::catalog::{resolve_price, resolve_stock};

#[cfg(test)]
mod tests;

/// A shopper's (possibly partial) attribute choices for one product
///
/// Keys are attribute ids, values are variant ids. Entries iterate in
/// attribute-id order, which keeps validation failures deterministic
/// when several entries are bad.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection {
    choices: BTreeMap<String, String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, handy when chaining choices
    pub fn pick(mut self, attribute_id: impl Into<String>, variant_id: impl Into<String>) -> Self {
        self.set(attribute_id, variant_id);
        self
    }

    /// Record a choice, replacing any earlier one for the attribute
    pub fn set(&mut self, attribute_id: impl Into<String>, variant_id: impl Into<String>) {
        self.choices.insert(attribute_id.into(), variant_id.into());
    }

    /// The chosen variant for an attribute, if any
    pub fn get(&self, attribute_id: &str) -> Option<&str> {
        self.choices.get(attribute_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.choices.iter().map(|(a, v)| (a.as_str(), v.as_str()))
    }

    /// True when every attribute the product defines has an entry
    pub fn covers(&self, product: &Product) -> bool {
        product
            .attributes
            .iter()
            .all(|a| self.choices.contains_key(&a.id))
    }
}

/// Rejection raised before any matching is attempted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("Selection references attribute '{attribute_id}' variant '{variant_id}' which this product does not own")]
    InvalidAttributeReference {
        attribute_id: String,
        variant_id: String,
    },
}

impl From<SelectionError> for CatalogError {
    fn from(err: SelectionError) -> Self {
        CatalogError::with_message(ErrorCode::InvalidAttributeReference, err.to_string())
    }
}

/// A fully-resolved price/stock answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantQuote {
    pub price: f64,
    pub stock: u32,
    /// In combination mode this is the stored `isAvailable` flag taken
    /// verbatim; the other modes have no authored flag and report true
    pub available: bool,
    /// The authored combination behind the quote, absent outside
    /// combination mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub combination: Option<VariantCombination>,
}

impl VariantQuote {
    fn from_combination(combination: &VariantCombination) -> Self {
        Self {
            price: combination.price,
            stock: combination.stock,
            available: combination.is_available,
            combination: Some(combination.clone()),
        }
    }

    /// Whether this quote can actually be added to a cart
    pub fn sellable(&self) -> bool {
        self.available && self.stock > 0
    }
}

/// What a selection resolved to
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionOutcome {
    /// The selection pins down a single price/stock answer
    Resolved(VariantQuote),
    /// Partial selection in combination mode: the combinations still in
    /// play, in authoring order. May be empty when the partial choices
    /// already rule everything out.
    Candidates(Vec<VariantCombination>),
    /// Full selection in combination mode with no authored combination.
    /// Common when an out-of-stock cell was pruned by the author.
    Unavailable,
}

impl SelectionOutcome {
    /// The resolved quote, when resolution landed on one
    pub fn quote(&self) -> Option<&VariantQuote> {
        match self {
            SelectionOutcome::Resolved(quote) => Some(quote),
            _ => None,
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, SelectionOutcome::Unavailable)
    }
}

/// Resolve a selection against a product
///
/// Dispatches on [`Product::variant_mode`]. The only error is a
/// selection pair the product does not own; everything else, including
/// an unmatched full selection, is expressed through the outcome.
pub fn resolve(
    product: &Product,
    selection: &Selection,
) -> Result<SelectionOutcome, SelectionError> {
    validate_selection(product, selection)?;

    let outcome = match product.variant_mode() {
        VariantMode::None => SelectionOutcome::Resolved(VariantQuote {
            price: product.price,
            stock: product.stock,
            available: true,
            combination: None,
        }),
        VariantMode::Simple => SelectionOutcome::Resolved(VariantQuote {
            price: resolve_price(product, selection),
            stock: resolve_stock(product, selection),
            available: true,
            combination: None,
        }),
        VariantMode::Combination => resolve_combination(product, selection),
    };
    Ok(outcome)
}

/// Every supplied pair must land on an attribute and variant the product
/// owns. Checked up front so a stale or foreign reference fails loudly
/// instead of quietly matching nothing.
fn validate_selection(product: &Product, selection: &Selection) -> Result<(), SelectionError> {
    for (attribute_id, variant_id) in selection.iter() {
        let known = product
            .attribute(attribute_id)
            .and_then(|a| a.variant(variant_id))
            .is_some();
        if !known {
            return Err(SelectionError::InvalidAttributeReference {
                attribute_id: attribute_id.to_string(),
                variant_id: variant_id.to_string(),
            });
        }
    }
    Ok(())
}

/// A combination matches when it carries an identical pair for every
/// pair the caller supplied. Extra pairs on the combination are what
/// make partial narrowing work.
fn combination_matches(combination: &VariantCombination, selection: &Selection) -> bool {
    selection
        .iter()
        .all(|(attribute_id, variant_id)| combination.references(attribute_id, variant_id))
}

fn resolve_combination(product: &Product, selection: &Selection) -> SelectionOutcome {
    let matched: Vec<&VariantCombination> = product
        .variant_combinations
        .iter()
        .filter(|c| combination_matches(c, selection))
        .collect();

    if !selection.covers(product) {
        return SelectionOutcome::Candidates(matched.into_iter().cloned().collect());
    }

    match matched.as_slice() {
        [] => SelectionOutcome::Unavailable,
        [single] => SelectionOutcome::Resolved(VariantQuote::from_combination(single)),
        [first, ..] => {
            // Authored data anomaly: two combinations occupy the same cell
            warn!(
                product_id = %product.id,
                matched = matched.len(),
                "full selection matched more than one combination, using the first"
            );
            SelectionOutcome::Resolved(VariantQuote::from_combination(first))
        }
    }
}
