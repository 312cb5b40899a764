//! # Built-in Pricing Data
//!
//! The catalog and promotions used when no pricing document is configured.
//! Returned as fresh values on every call; nothing here is global state.
//!
//! | SKU | Name        | Price    | Promotion                    |
//! |-----|-------------|----------|------------------------------|
//! | ipd | Super iPad  | 549.99   | 5 or more at 499.99 each     |
//! | mbp | MacBook Pro | 1399.99  |                              |
//! | atv | Apple TV    | 109.50   | buy 2 get 1 free (3 for 2)   |
//! | vga | VGA adapter | 30.00    |                              |

use crate::loader::{ProductRecord, RuleRecord};

/// Default product records.
pub fn default_products() -> Vec<ProductRecord> {
    vec![
        ProductRecord::new("ipd", "Super iPad", 549.99),
        ProductRecord::new("mbp", "MacBook Pro", 1399.99),
        ProductRecord::new("atv", "Apple TV", 109.50),
        ProductRecord::new("vga", "VGA adapter", 30.00),
    ]
}

/// Default promotion records.
pub fn default_rules() -> Vec<RuleRecord> {
    vec![
        RuleRecord::BuyXGetYFree {
            sku: "atv".to_string(),
            buy: 2,
            free: 1,
        },
        RuleRecord::BulkDiscount {
            sku: "ipd".to_string(),
            min_quantity: 5,
            price: 499.99,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_skus_are_unique() {
        let mut skus: Vec<String> = default_products().into_iter().map(|p| p.sku).collect();
        skus.sort();
        skus.dedup();
        assert_eq!(skus.len(), 4);
    }

    #[test]
    fn test_default_rules_target_default_products() {
        let products = default_products();
        for rule in default_rules() {
            let sku = match rule {
                RuleRecord::BuyXGetYFree { sku, .. } | RuleRecord::BulkDiscount { sku, .. } => sku,
            };
            assert!(products.iter().any(|p| p.sku == sku), "no product {sku}");
        }
    }
}
