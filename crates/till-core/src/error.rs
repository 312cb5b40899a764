//! # Error Types
//!
//! Domain-specific error types for till-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  till-core errors (this file)                                          │
//! │  ├── CoreError        - Product, rule and checkout failures            │
//! │  └── ValidationError  - Field-level input failures                     │
//! │                                                                         │
//! │  till-config errors (separate crate)                                   │
//! │  └── ConfigError      - File, parse and environment failures           │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ConfigError → CLI exit message    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (SKU, rule, field)
//! 3. Errors are enum variants, never String
//! 4. Every error is raised at the point of violation, before any mutation

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core pricing errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A product could not be constructed.
    ///
    /// ## When This Occurs
    /// - Price is negative
    /// - Price is not a finite number (NaN, infinity)
    #[error("Invalid product '{sku}': {reason}")]
    InvalidProduct { sku: String, reason: String },

    /// A pricing rule was constructed with unusable parameters.
    ///
    /// ## When This Occurs
    /// - Buy/free quantity or bulk threshold is zero or negative
    /// - Discounted unit price is negative
    #[error("Invalid {rule} parameters: {reason}")]
    InvalidRuleParameters { rule: String, reason: String },

    /// SKU is not present in the catalog.
    ///
    /// ## User Workflow
    /// ```text
    /// scan("xyz")
    ///      │
    ///      ▼
    /// catalog.has_product("xyz") == false
    ///      │
    ///      ▼
    /// UnknownProduct("xyz")   (cart untouched)
    /// ```
    #[error("Unknown product: {0}")]
    UnknownProduct(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} cannot be negative")]
    Negative { field: String },

    /// Invalid format (e.g., malformed decimal amount).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., duplicate SKU).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
