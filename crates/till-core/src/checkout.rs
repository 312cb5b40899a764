//! # Checkout Engine
//!
//! Accumulates scanned SKUs and prices the cart.
//!
//! ## Pricing Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Checkout::total()                                    │
//! │                                                                         │
//! │  for each (sku, qty) in cart                                            │
//! │      best = qty × unit_price                                            │
//! │      for each rule where matches_sku(rule, sku)                         │
//! │          best = min(best, rule.price(qty, unit_price))                  │
//! │      total += best                                                      │
//! │                                                                         │
//! │  Best-of, not first-match and not stacked: declaration order of the    │
//! │  rules never changes the result.                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership
//! The catalog and rule set are shared, read-only `Arc`s. Cart state is
//! owned by one `Checkout` value; clones and sibling checkouts never see
//! each other's scans.
//!
//! ## Example
//! ```rust
//! use till_core::{BuyXGetYFree, Catalog, Checkout, PricingRule, Product};
//!
//! let catalog = Catalog::build(vec![
//!     Product::new("atv", "Apple TV", 109.50).unwrap(),
//!     Product::new("vga", "VGA adapter", 30.00).unwrap(),
//! ])
//! .unwrap();
//! let rules: Vec<PricingRule> = vec![BuyXGetYFree::new("atv", 2, 1).unwrap().into()];
//!
//! let mut checkout = Checkout::new(rules, catalog);
//! for sku in ["atv", "atv", "atv", "vga"] {
//!     checkout.scan(sku).unwrap();
//! }
//! assert_eq!(checkout.total().to_string(), "$249.00");
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::error::CoreResult;
use crate::money::Money;
use crate::pricing::PricingRule;
use crate::receipt::{Receipt, ReceiptLine};
use crate::types::Product;

/// A SKU in the cart with its product data frozen at first scan.
#[derive(Debug, Clone)]
struct ScannedItem {
    name: String,
    unit_price: Money,
    quantity: i64,
}

impl ScannedItem {
    fn from_product(product: &Product) -> Self {
        ScannedItem {
            name: product.name().to_string(),
            unit_price: product.unit_price(),
            quantity: 0,
        }
    }

    fn list_price(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

/// Prices a cart against a catalog and a set of pricing rules.
#[derive(Debug, Clone)]
pub struct Checkout {
    rules: Arc<[PricingRule]>,
    catalog: Arc<Catalog>,
    items: BTreeMap<String, ScannedItem>,
    started_at: DateTime<Utc>,
}

impl Checkout {
    /// Creates an empty checkout.
    ///
    /// Pass `Arc`s to share one catalog and rule set between checkouts.
    pub fn new(rules: impl Into<Arc<[PricingRule]>>, catalog: impl Into<Arc<Catalog>>) -> Self {
        Checkout {
            rules: rules.into(),
            catalog: catalog.into(),
            items: BTreeMap::new(),
            started_at: Utc::now(),
        }
    }

    /// Adds one unit of `sku` to the cart.
    ///
    /// ## Errors
    /// `UnknownProduct` when the catalog has no such SKU. The cart is left
    /// unchanged.
    pub fn scan(&mut self, sku: &str) -> CoreResult<()> {
        let product = self.catalog.get_product(sku).map_err(|e| {
            warn!(sku = %sku, "Rejected scan of unknown product");
            e
        })?;

        let item = self
            .items
            .entry(sku.to_string())
            .or_insert_with(|| ScannedItem::from_product(product));
        item.quantity += 1;

        debug!(sku = %sku, quantity = item.quantity, "Scanned item");
        Ok(())
    }

    /// Grand total of the cart. Zero when empty.
    pub fn total(&self) -> Money {
        self.items
            .iter()
            .map(|(sku, item)| self.best_price(sku, item).0)
            .sum()
    }

    /// Prices the cart line by line.
    ///
    /// `receipt().total` always equals [`Checkout::total`].
    pub fn receipt(&self) -> Receipt {
        let lines = self
            .items
            .iter()
            .map(|(sku, item)| {
                let (charged, rule) = self.best_price(sku, item);
                ReceiptLine {
                    sku: sku.clone(),
                    name: item.name.clone(),
                    quantity: item.quantity,
                    unit_price: item.unit_price,
                    list_price: item.list_price(),
                    charged,
                    applied_rule: rule.map(PricingRule::kind),
                    rule_description: rule.map(PricingRule::describe),
                }
            })
            .collect();

        Receipt::new(self.started_at, lines)
    }

    /// Empties the cart. Catalog and rules are untouched.
    pub fn reset(&mut self) {
        debug!(items = self.items.len(), "Resetting checkout");
        self.items.clear();
        self.started_at = Utc::now();
    }

    /// Snapshot of scanned quantities by SKU.
    pub fn scanned_items(&self) -> BTreeMap<String, i64> {
        self.items
            .iter()
            .map(|(sku, item)| (sku.clone(), item.quantity))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct SKUs in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Total units scanned across all SKUs.
    pub fn total_quantity(&self) -> i64 {
        self.items.values().map(|item| item.quantity).sum()
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn rules(&self) -> &[PricingRule] {
        &self.rules
    }

    /// Cheapest price for one cart line and the rule that produced it.
    ///
    /// A rule only wins when strictly cheaper, so ties go to the list
    /// price first and then to the earliest declared rule.
    fn best_price(&self, sku: &str, item: &ScannedItem) -> (Money, Option<&PricingRule>) {
        self.rules
            .iter()
            .filter(|rule| rule.applies_to(sku))
            .fold((item.list_price(), None), |(best, winner), rule| {
                let price = rule.price(item.quantity, item.unit_price);
                if price < best {
                    (price, Some(rule))
                } else {
                    (best, winner)
                }
            })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::pricing::{BulkDiscount, BuyXGetYFree, RuleKind};

    fn test_catalog() -> Catalog {
        Catalog::build(vec![
            Product::new("ipd", "Super iPad", 549.99).unwrap(),
            Product::new("mbp", "MacBook Pro", 1399.99).unwrap(),
            Product::new("atv", "Apple TV", 109.50).unwrap(),
            Product::new("vga", "VGA adapter", 30.00).unwrap(),
        ])
        .unwrap()
    }

    fn test_rules() -> Vec<PricingRule> {
        vec![
            BuyXGetYFree::new("atv", 2, 1).unwrap().into(),
            BulkDiscount::from_decimal("ipd", 5, 499.99).unwrap().into(),
        ]
    }

    fn test_checkout() -> Checkout {
        Checkout::new(test_rules(), test_catalog())
    }

    fn scan_all(checkout: &mut Checkout, skus: &[&str]) {
        for sku in skus {
            checkout.scan(sku).unwrap();
        }
    }

    #[test]
    fn test_scan_known_items() {
        let mut checkout = test_checkout();
        assert!(checkout.scan("atv").is_ok());
        assert!(checkout.scan("ipd").is_ok());
        assert_eq!(checkout.item_count(), 2);
    }

    #[test]
    fn test_scan_unknown_sku_leaves_cart_unchanged() {
        let mut checkout = test_checkout();
        checkout.scan("vga").unwrap();
        let before = checkout.scanned_items();

        let err = checkout.scan("unknown").unwrap_err();
        assert!(matches!(err, CoreError::UnknownProduct(ref sku) if sku == "unknown"));
        assert_eq!(checkout.scanned_items(), before);
        assert_eq!(checkout.total().cents(), 3000);
    }

    #[test]
    fn test_single_item() {
        let mut checkout = test_checkout();
        checkout.scan("vga").unwrap();
        assert_eq!(checkout.total().cents(), 3000);
        assert_eq!(checkout.total().to_string(), "$30.00");
    }

    #[test]
    fn test_multiple_different_items() {
        let mut checkout = test_checkout();
        scan_all(&mut checkout, &["vga", "mbp"]);
        assert_eq!(checkout.total().cents(), 142999);
    }

    #[test]
    fn test_three_for_two_apple_tv() {
        let mut checkout = test_checkout();
        scan_all(&mut checkout, &["atv", "atv", "atv", "vga"]);
        assert_eq!(checkout.total().cents(), 24900); // 2 × 109.50 + 30.00
    }

    #[test]
    fn test_six_and_seven_apple_tvs() {
        let mut checkout = test_checkout();
        scan_all(&mut checkout, &["atv"; 6]);
        assert_eq!(checkout.total().cents(), 43800); // 4 × 109.50

        checkout.scan("atv").unwrap();
        assert_eq!(checkout.total().cents(), 54750); // 5 × 109.50
    }

    #[test]
    fn test_bulk_ipad_threshold() {
        let mut checkout = test_checkout();
        scan_all(&mut checkout, &["ipd"; 4]);
        assert_eq!(checkout.total().cents(), 219996); // 4 × 549.99, no discount

        checkout.scan("ipd").unwrap();
        assert_eq!(checkout.total().cents(), 249995); // 5 × 499.99

        checkout.scan("ipd").unwrap();
        assert_eq!(checkout.total().cents(), 299994); // 6 × 499.99
    }

    #[test]
    fn test_mixed_scan_order() {
        let mut checkout = test_checkout();
        scan_all(&mut checkout, &["atv", "ipd", "ipd", "atv", "ipd", "ipd", "ipd"]);
        assert_eq!(checkout.total().cents(), 271895);
        assert_eq!(checkout.total().to_string(), "$2718.95");
    }

    #[test]
    fn test_no_promotion_reached() {
        let mut checkout = test_checkout();
        scan_all(&mut checkout, &["atv", "ipd"]);
        assert_eq!(checkout.total().cents(), 65949); // 109.50 + 549.99
    }

    #[test]
    fn test_empty_cart_and_reset() {
        let mut checkout = test_checkout();
        assert!(checkout.total().is_zero());

        scan_all(&mut checkout, &["vga", "vga"]);
        assert_eq!(checkout.total().cents(), 6000);

        checkout.reset();
        assert!(checkout.is_empty());
        assert!(checkout.total().is_zero());
        assert!(checkout.catalog().has_product("vga"));
        assert_eq!(checkout.rules().len(), 2);
    }

    #[test]
    fn test_scanned_items_is_a_snapshot() {
        let mut checkout = test_checkout();
        scan_all(&mut checkout, &["atv", "atv", "vga"]);

        let mut snapshot = checkout.scanned_items();
        assert_eq!(snapshot.get("atv"), Some(&2));
        assert_eq!(snapshot.get("vga"), Some(&1));

        snapshot.insert("atv".to_string(), 99);
        snapshot.remove("vga");
        assert_eq!(checkout.scanned_items().get("atv"), Some(&2));
        assert_eq!(checkout.total_quantity(), 3);
    }

    #[test]
    fn test_best_rule_wins_regardless_of_order() {
        // 3-for-2 on 3 iPads: 2 × 549.99 = 1099.98
        // bulk 3+ at 400.00: 3 × 400.00 = 1200.00
        let catalog = Arc::new(test_catalog());
        let buy: PricingRule = BuyXGetYFree::new("ipd", 2, 1).unwrap().into();
        let bulk: PricingRule = BulkDiscount::from_decimal("ipd", 3, 400.00).unwrap().into();

        for rules in [vec![buy.clone(), bulk.clone()], vec![bulk.clone(), buy.clone()]] {
            let mut checkout = Checkout::new(rules, Arc::clone(&catalog));
            scan_all(&mut checkout, &["ipd"; 3]);
            assert_eq!(checkout.total().cents(), 109998);
            assert_eq!(
                checkout.receipt().lines[0].applied_rule,
                Some(RuleKind::BuyXGetYFree)
            );
        }
    }

    #[test]
    fn test_rule_never_raises_price() {
        // A "discount" priced above list is ignored.
        let rules: Vec<PricingRule> =
            vec![BulkDiscount::from_decimal("vga", 1, 45.00).unwrap().into()];
        let mut checkout = Checkout::new(rules, test_catalog());
        scan_all(&mut checkout, &["vga", "vga"]);

        assert_eq!(checkout.total().cents(), 6000);
        assert_eq!(checkout.receipt().lines[0].applied_rule, None);
    }

    #[test]
    fn test_receipt_matches_total() {
        let mut checkout = test_checkout();
        scan_all(&mut checkout, &["atv", "ipd", "ipd", "atv", "ipd", "ipd", "ipd", "atv"]);

        let receipt = checkout.receipt();
        assert_eq!(receipt.total, checkout.total());
        assert_eq!(receipt.discount, receipt.subtotal - receipt.total);
        assert_eq!(receipt.lines.len(), 2);

        let atv = &receipt.lines[0];
        assert_eq!(atv.sku, "atv");
        assert_eq!(atv.quantity, 3);
        assert_eq!(atv.charged.cents(), 21900);
        assert_eq!(atv.rule_description.as_deref(), Some("buy 2 get 1 free"));
    }

    #[test]
    fn test_checkouts_are_independent() {
        let catalog = Arc::new(test_catalog());
        let rules: Arc<[PricingRule]> = test_rules().into();

        let mut first = Checkout::new(Arc::clone(&rules), Arc::clone(&catalog));
        let mut second = Checkout::new(rules, catalog);

        first.scan("mbp").unwrap();
        second.scan("vga").unwrap();

        let mut cloned = first.clone();
        cloned.scan("mbp").unwrap();

        assert_eq!(first.total().cents(), 139999);
        assert_eq!(second.total().cents(), 3000);
        assert_eq!(cloned.total().cents(), 279998);
    }

    #[test]
    fn test_rule_equal_to_list_price_is_not_applied() {
        let rules: Vec<PricingRule> =
            vec![BulkDiscount::from_decimal("vga", 1, 30.00).unwrap().into()];
        let mut checkout = Checkout::new(rules, test_catalog());
        scan_all(&mut checkout, &["vga", "vga"]);

        let receipt = checkout.receipt();
        assert_eq!(checkout.total().cents(), 6000);
        assert_eq!(receipt.lines[0].applied_rule, None);
        assert_eq!(receipt.lines[0].rule_description, None);
    }

    #[test]
    fn test_equally_cheap_rules_report_first_declared() {
        // 3 × Apple TV: 2 × 109.50 and 3 × 73.00 both come to 219.00
        let three_for_two: PricingRule = BuyXGetYFree::new("atv", 2, 1).unwrap().into();
        let bulk: PricingRule = BulkDiscount::from_decimal("atv", 3, 73.00).unwrap().into();

        let mut forward = Checkout::new(vec![three_for_two.clone(), bulk.clone()], test_catalog());
        let mut reversed = Checkout::new(vec![bulk, three_for_two], test_catalog());
        scan_all(&mut forward, &["atv", "atv", "atv"]);
        scan_all(&mut reversed, &["atv", "atv", "atv"]);

        assert_eq!(forward.total().cents(), 21900);
        assert_eq!(reversed.total().cents(), 21900);
        assert_eq!(
            forward.receipt().lines[0].applied_rule,
            Some(RuleKind::BuyXGetYFree)
        );
        assert_eq!(
            reversed.receipt().lines[0].applied_rule,
            Some(RuleKind::BulkDiscount)
        );
    }

    #[test]
    fn test_huge_prices_saturate_instead_of_panicking() {
        let catalog = Catalog::build(vec![
            Product::new("big", "Big", 5e16).unwrap(),
            Product::new("vga", "VGA adapter", 30.00).unwrap(),
        ])
        .unwrap();
        let mut checkout = Checkout::new(Vec::<PricingRule>::new(), catalog);
        scan_all(&mut checkout, &["big", "big", "vga"]);

        assert_eq!(checkout.total(), Money::from_cents(i64::MAX));
        assert_eq!(checkout.receipt().total, checkout.total());
    }
}
