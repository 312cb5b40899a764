//! # Product Catalog
//!
//! Read-only SKU → [`Product`] lookup.
//!
//! The catalog is built once from an explicit product list and never
//! changes afterwards. Checkouts hold it behind an `Arc`, so any number of
//! them can share one catalog.
//!
//! ```rust
//! use till_core::{Catalog, Product};
//!
//! let catalog = Catalog::build(vec![
//!     Product::new("vga", "VGA adapter", 30.00).unwrap(),
//! ])
//! .unwrap();
//!
//! assert!(catalog.has_product("vga"));
//! assert!(catalog.get_product("mbp").is_err());
//! ```

use std::collections::BTreeMap;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::Product;

/// Immutable product catalog keyed by SKU.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: BTreeMap<String, Product>,
}

impl Catalog {
    /// Builds a catalog from a product list.
    ///
    /// ## Errors
    /// `Validation(Duplicate)` when two products share a SKU.
    pub fn build(products: impl IntoIterator<Item = Product>) -> CoreResult<Self> {
        let mut map = BTreeMap::new();

        for product in products {
            let sku = product.sku().to_string();
            if map.contains_key(&sku) {
                return Err(ValidationError::Duplicate {
                    field: "sku".to_string(),
                    value: sku,
                }
                .into());
            }
            map.insert(sku, product);
        }

        Ok(Catalog { products: map })
    }

    #[inline]
    pub fn has_product(&self, sku: &str) -> bool {
        self.products.contains_key(sku)
    }

    /// Looks up a product by SKU.
    ///
    /// ## Errors
    /// `UnknownProduct` when the SKU is not in the catalog.
    pub fn get_product(&self, sku: &str) -> CoreResult<&Product> {
        self.products
            .get(sku)
            .ok_or_else(|| CoreError::UnknownProduct(sku.to_string()))
    }

    /// Iterates products in SKU order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
