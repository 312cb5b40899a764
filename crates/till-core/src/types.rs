//! # Domain Types
//!
//! The product record shared by the catalog, the checkout and receipts.
//!
//! ```text
//! ┌─────────────────┐
//! │    Product      │
//! │  ─────────────  │
//! │  sku (unique)   │
//! │  name           │
//! │  unit_price     │  Money, integer cents
//! └─────────────────┘
//! ```
//!
//! Products are immutable. The only way in is through a validating
//! constructor, so a `Product` value always has a non-negative price.

use serde::Serialize;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::validation::{validate_product_name, validate_sku};

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct Product {
    /// Stock Keeping Unit - business identifier.
    sku: String,

    /// Display name shown on receipts.
    name: String,

    /// Price of a single unit in cents.
    unit_price: Money,
}

impl Product {
    /// Creates a product from a decimal price in major units.
    ///
    /// ## Errors
    /// - `InvalidProduct` when the price is negative or not finite
    /// - `Validation` when the SKU or name is malformed
    ///
    /// ## Example
    /// ```rust
    /// use till_core::Product;
    ///
    /// let ipad = Product::new("ipd", "Super iPad", 549.99).unwrap();
    /// assert_eq!(ipad.unit_price().cents(), 54999);
    ///
    /// assert!(Product::new("test", "Test Product", -10.0).is_err());
    /// ```
    pub fn new(sku: impl Into<String>, name: impl Into<String>, price: f64) -> CoreResult<Self> {
        let sku = sku.into();

        if price < 0.0 {
            return Err(CoreError::InvalidProduct {
                sku,
                reason: "price cannot be negative".to_string(),
            });
        }

        let unit_price = Money::from_decimal(price).map_err(|e| CoreError::InvalidProduct {
            sku: sku.clone(),
            reason: e.to_string(),
        })?;

        Self::from_cents(sku, name, unit_price)
    }

    /// Creates a product from a price already expressed in cents.
    pub fn from_cents(
        sku: impl Into<String>,
        name: impl Into<String>,
        unit_price: Money,
    ) -> CoreResult<Self> {
        let sku = sku.into();
        let name = name.into();

        validate_sku(&sku)?;
        validate_product_name(&name)?;

        if unit_price.is_negative() {
            return Err(CoreError::InvalidProduct {
                sku,
                reason: "price cannot be negative".to_string(),
            });
        }

        Ok(Product {
            sku,
            name,
            unit_price,
        })
    }

    #[inline]
    pub fn sku(&self) -> &str {
        &self.sku
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unit price.
    #[inline]
    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// Returns the undiscounted price of `quantity` units.
    #[inline]
    pub fn list_price(&self, quantity: i64) -> Money {
        self.unit_price.multiply_quantity(quantity)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_price_stored_in_cents() {
        let product = Product::new("atv", "Apple TV", 109.50).unwrap();
        assert_eq!(product.sku(), "atv");
        assert_eq!(product.name(), "Apple TV");
        assert_eq!(product.unit_price().cents(), 10950);
        assert_eq!(product.list_price(3).cents(), 32850);
    }

    #[test]
    fn test_negative_price_rejected() {
        let err = Product::new("test", "Test Product", -10.0).unwrap_err();
        assert!(matches!(err, CoreError::InvalidProduct { .. }));
        assert_eq!(
            err.to_string(),
            "Invalid product 'test': price cannot be negative"
        );

        let err = Product::from_cents("test", "Test Product", Money::from_cents(-1)).unwrap_err();
        assert!(matches!(err, CoreError::InvalidProduct { .. }));
    }

    #[test]
    fn test_non_finite_price_rejected() {
        let err = Product::new("test", "Test Product", f64::NAN).unwrap_err();
        assert!(matches!(err, CoreError::InvalidProduct { .. }));
    }

    #[test]
    fn test_free_product_allowed() {
        let product = Product::new("bag", "Paper bag", 0.0).unwrap();
        assert!(product.unit_price().is_zero());
    }

    #[test]
    fn test_malformed_sku_rejected() {
        let err = Product::new("", "Nameless", 1.0).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));

        let err = Product::new("vga", "  ", 1.0).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }
}
