//! # till-core: Pure Pricing Logic for Till
//!
//! This crate is the **heart** of Till. It prices a cart of scanned SKUs
//! against a product catalog and per-SKU promotional rules, with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Till Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 till-config (I/O edge)                          │   │
//! │  │    pricing.json ──► Catalog + rules    TILL_* env ──► Settings  │   │
//! │  │    `till` binary: scan SKUs, print totals and receipts          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ till-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │  catalog  │  │  pricing  │  │ checkout  │  │   │
//! │  │   │   Money   │  │  Catalog  │  │BuyXGetYFr.│  │ Checkout  │  │   │
//! │  │   │           │  │  Product  │  │BulkDiscnt.│  │ Receipt   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO ENVIRONMENT • PURE FUNCTIONS          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`types`] - The immutable `Product` record
//! - [`catalog`] - SKU → Product lookup
//! - [`pricing`] - Pricing rule variants and best-of evaluation inputs
//! - [`checkout`] - Cart state, totals and receipts
//! - [`receipt`] - Itemised pricing result
//! - [`error`] - Domain error types
//! - [`validation`] - Field validation shared by constructors
//!
//! ## Design Principles
//!
//! 1. **Integer Money**: All monetary values are in cents (i64); decimals
//!    appear only at the output boundary
//! 2. **Best-of Pricing**: Each SKU pays the cheapest of its list price and
//!    every matching rule; rules never stack
//! 3. **Fail Fast**: Invalid products, rules and scans are rejected before
//!    any state changes
//! 4. **No Global State**: Catalogs and rules are explicit values
//!
//! ## Example Usage
//!
//! ```rust
//! use till_core::{BulkDiscount, BuyXGetYFree, Catalog, Checkout, PricingRule, Product};
//!
//! let catalog = Catalog::build(vec![
//!     Product::new("ipd", "Super iPad", 549.99).unwrap(),
//!     Product::new("atv", "Apple TV", 109.50).unwrap(),
//! ])
//! .unwrap();
//!
//! let rules: Vec<PricingRule> = vec![
//!     BuyXGetYFree::new("atv", 2, 1).unwrap().into(),
//!     BulkDiscount::from_decimal("ipd", 5, 499.99).unwrap().into(),
//! ];
//!
//! let mut checkout = Checkout::new(rules, catalog);
//! for sku in ["atv", "ipd", "ipd", "atv", "ipd", "ipd", "ipd"] {
//!     checkout.scan(sku).unwrap();
//! }
//!
//! assert_eq!(checkout.total().cents(), 271895);
//! assert_eq!(checkout.total().to_string(), "$2718.95");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod checkout;
pub mod error;
pub mod money;
pub mod pricing;
pub mod receipt;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use till_core::Money` instead of
// `use till_core::money::Money`

pub use catalog::Catalog;
pub use checkout::Checkout;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pricing::{matches_sku, BulkDiscount, BuyXGetYFree, PricingRule, RuleKind};
pub use receipt::{Receipt, ReceiptLine};
pub use types::Product;
