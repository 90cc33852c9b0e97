//! Unified error surface for the catalog
//!
//! Granular per-module errors live next to the code that raises them; this
//! module provides the one type hosts consume: a stable [`ErrorCode`] plus
//! a human-readable message. Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 6xxx: Catalog authoring errors
//! - 9xxx: Backend errors

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Unified error code enum
///
/// Codes are `u16` values for efficient serialization and cross-language
/// compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,

    // ==================== 1xxx: Auth ====================
    /// Invalid credentials (username/password)
    InvalidCredentials = 1002,
    /// Account is disabled
    AccountDisabled = 1007,

    // ==================== 6xxx: Catalog ====================
    /// Product not found
    ProductNotFound = 6001,
    /// Attribute id already present on the product
    DuplicateAttributeId = 6301,
    /// SKU already used by a variant or combination of the product
    DuplicateSku = 6302,
    /// Attribute already has a default variant
    MultipleDefaults = 6303,
    /// Combination id already present on the product
    DuplicateCombinationId = 6304,
    /// Attribute not found on the product
    UnknownAttribute = 6305,
    /// Selection or combination references an attribute/variant the
    /// product does not own
    InvalidAttributeReference = 6306,
    /// Product violates a structural invariant
    IntegrityViolation = 6307,

    // ==================== 9xxx: Backend ====================
    /// Store backend error
    BackendError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidCredentials => "Invalid username or password",
            ErrorCode::AccountDisabled => "Account is disabled",
            ErrorCode::ProductNotFound => "Product not found",
            ErrorCode::DuplicateAttributeId => "Attribute id already exists on this product",
            ErrorCode::DuplicateSku => "SKU already used within this product",
            ErrorCode::MultipleDefaults => "Attribute already has a default variant",
            ErrorCode::DuplicateCombinationId => "Combination id already exists on this product",
            ErrorCode::UnknownAttribute => "Attribute not found on this product",
            ErrorCode::InvalidAttributeReference => {
                "Reference to an attribute or variant the product does not own"
            }
            ErrorCode::IntegrityViolation => "Product violates a structural invariant",
            ErrorCode::BackendError => "Store backend error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> u16 {
        code.code()
    }
}

impl TryFrom<u16> for ErrorCode {
    type Error = String;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            1002 => Ok(ErrorCode::InvalidCredentials),
            1007 => Ok(ErrorCode::AccountDisabled),
            6001 => Ok(ErrorCode::ProductNotFound),
            6301 => Ok(ErrorCode::DuplicateAttributeId),
            6302 => Ok(ErrorCode::DuplicateSku),
            6303 => Ok(ErrorCode::MultipleDefaults),
            6304 => Ok(ErrorCode::DuplicateCombinationId),
            6305 => Ok(ErrorCode::UnknownAttribute),
            6306 => Ok(ErrorCode::InvalidAttributeReference),
            6307 => Ok(ErrorCode::IntegrityViolation),
            9002 => Ok(ErrorCode::BackendError),
            _ => Err(format!("Unknown error code: {value}")),
        }
    }
}

/// Catalog error with a structured code
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct CatalogError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

impl CatalogError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    // ==================== Convenience constructors ====================

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::NotFound, format!("{} not found", resource.into()))
    }

    pub fn product_not_found(id: impl Into<String>) -> Self {
        Self::with_message(
            ErrorCode::ProductNotFound,
            format!("Product {} not found", id.into()),
        )
    }

    pub fn already_exists(resource: impl Into<String>) -> Self {
        Self::with_message(
            ErrorCode::AlreadyExists,
            format!("{} already exists", resource.into()),
        )
    }

    pub fn duplicate_sku(sku: impl Into<String>) -> Self {
        Self::with_message(
            ErrorCode::DuplicateSku,
            format!("SKU '{}' already used within this product", sku.into()),
        )
    }

    pub fn integrity(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::IntegrityViolation, msg)
    }

    pub fn backend(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::BackendError, msg)
    }
}

/// Type alias for Result with CatalogError
pub type CatalogResult<T> = Result<T, CatalogError>;

impl From<crate::session::AuthError> for CatalogError {
    fn from(err: crate::session::AuthError) -> Self {
        use crate::session::AuthError;
        match err {
            AuthError::InvalidCredentials => Self::new(ErrorCode::InvalidCredentials),
            AuthError::AccountDisabled => Self::new(ErrorCode::AccountDisabled),
            AuthError::Backend(msg) => Self::with_message(ErrorCode::BackendError, msg),
        }
    }
}
