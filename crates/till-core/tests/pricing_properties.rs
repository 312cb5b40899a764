//! Property-based tests for pricing rules and checkout totals.
//!
//! Rules may only lower a price, never raise it; bulk pricing is a step
//! function at its threshold; resetting a checkout always prices to zero.

use proptest::prelude::*;

use till_core::{BulkDiscount, BuyXGetYFree, Catalog, Checkout, Money, PricingRule, Product};

fn catalog() -> Catalog {
    Catalog::build(vec![
        Product::new("ipd", "Super iPad", 549.99).unwrap(),
        Product::new("atv", "Apple TV", 109.50).unwrap(),
        Product::new("vga", "VGA adapter", 30.00).unwrap(),
    ])
    .unwrap()
}

fn rules() -> Vec<PricingRule> {
    vec![
        BuyXGetYFree::new("atv", 2, 1).unwrap().into(),
        BulkDiscount::from_decimal("ipd", 5, 499.99).unwrap().into(),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn buy_x_get_y_free_never_exceeds_list(
        buy in 1i64..20,
        free in 1i64..20,
        quantity in 0i64..500,
        base in 0i64..1_000_000,
    ) {
        let rule = BuyXGetYFree::new("sku", buy, free).unwrap();
        let base = Money::from_cents(base);

        prop_assert!(rule.price(quantity, base) <= base.multiply_quantity(quantity));
    }

    #[test]
    fn buy_x_get_y_free_no_discount_below_buy_quantity(
        buy in 1i64..50,
        free in 1i64..20,
        base in 0i64..1_000_000,
    ) {
        let rule = BuyXGetYFree::new("sku", buy, free).unwrap();
        let base = Money::from_cents(base);

        for quantity in 0..buy {
            prop_assert_eq!(rule.price(quantity, base), base.multiply_quantity(quantity));
        }
    }

    #[test]
    fn bulk_discount_is_a_step_function(
        min_quantity in 1i64..50,
        discounted in 0i64..1_000_000,
        quantity in 0i64..200,
        base in 0i64..1_000_000,
    ) {
        let rule = BulkDiscount::new("sku", min_quantity, Money::from_cents(discounted)).unwrap();
        let base = Money::from_cents(base);
        let price = rule.price(quantity, base);

        if quantity < min_quantity {
            prop_assert_eq!(price, base.multiply_quantity(quantity));
        } else {
            prop_assert_eq!(price, Money::from_cents(discounted).multiply_quantity(quantity));
        }
    }

    #[test]
    fn reset_always_prices_to_zero(
        skus in proptest::collection::vec(prop_oneof![Just("ipd"), Just("atv"), Just("vga")], 0..40),
    ) {
        let mut checkout = Checkout::new(rules(), catalog());
        for sku in &skus {
            checkout.scan(sku).unwrap();
        }
        prop_assert_eq!(checkout.total_quantity(), skus.len() as i64);

        checkout.reset();
        prop_assert!(checkout.total().is_zero());
        prop_assert!(checkout.scanned_items().is_empty());
    }

    #[test]
    fn scan_order_does_not_change_total(
        skus in proptest::collection::vec(prop_oneof![Just("ipd"), Just("atv"), Just("vga")], 0..40),
    ) {
        let mut forward = Checkout::new(rules(), catalog());
        let mut backward = Checkout::new(rules(), catalog());
        for sku in &skus {
            forward.scan(sku).unwrap();
        }
        for sku in skus.iter().rev() {
            backward.scan(sku).unwrap();
        }

        prop_assert_eq!(forward.total(), backward.total());
        prop_assert_eq!(forward.receipt().total, forward.total());
    }

    #[test]
    fn scanned_items_does_not_mutate(
        skus in proptest::collection::vec(prop_oneof![Just("ipd"), Just("atv"), Just("vga")], 1..20),
    ) {
        let mut checkout = Checkout::new(rules(), catalog());
        for sku in &skus {
            checkout.scan(sku).unwrap();
        }

        let total = checkout.total();
        let first = checkout.scanned_items();
        let second = checkout.scanned_items();
        prop_assert_eq!(first, second);
        prop_assert_eq!(checkout.total(), total);
    }
}

#[test]
fn acceptance_scenarios() {
    // A: single VGA adapter
    let mut checkout = Checkout::new(Vec::<PricingRule>::new(), catalog());
    checkout.scan("vga").unwrap();
    assert_eq!(checkout.total().to_string(), "$30.00");

    // B: atv ×3 + vga
    let mut checkout = Checkout::new(rules(), catalog());
    for sku in ["atv", "atv", "atv", "vga"] {
        checkout.scan(sku).unwrap();
    }
    assert_eq!(checkout.total().to_string(), "$249.00");

    // C: mixed order with both promotions
    checkout.reset();
    for sku in ["atv", "ipd", "ipd", "atv", "ipd", "ipd", "ipd"] {
        checkout.scan(sku).unwrap();
    }
    assert_eq!(checkout.total().to_string(), "$2718.95");

    // D: bulk threshold
    checkout.reset();
    for _ in 0..4 {
        checkout.scan("ipd").unwrap();
    }
    assert_eq!(checkout.total().to_string(), "$2199.96");
    checkout.scan("ipd").unwrap();
    assert_eq!(checkout.total().to_string(), "$2499.95");
}
