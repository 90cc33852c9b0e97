//! Catalog authoring and validation
//!
//! Write paths for attributes, variants and combinations, plus the
//! structural checks that keep a product's variant data coherent.
//! Everything here is synchronous and side-effect free; persistence
//! lives in [`crate::store`].

pub mod attribute_types;
pub mod integrity;
pub mod money;
pub mod registry;

pub use attribute_types::{PayloadShape, TypeDescriptor, describe};
pub use integrity::{IntegrityIssue, IssueSeverity, validate_product};
pub use registry::{
    RegistryError, add_attribute, add_combination, add_variant, default_selection, resolve_price,
    resolve_stock,
};
