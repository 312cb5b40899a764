//! # Pricing Rules
//!
//! Promotional schemes that price one SKU's whole quantity at once.
//!
//! ## Rule Variants
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  PricingRule (closed enum, one SKU per rule)                            │
//! │                                                                         │
//! │  BuyXGetYFree { buy, free }                                             │
//! │    group = buy + free                                                   │
//! │    payable = (q / group) × buy + min(q % group, buy)                    │
//! │    price = payable × base                                               │
//! │                                                                         │
//! │  BulkDiscount { min_quantity, discounted_price }                        │
//! │    q >= min_quantity → q × discounted_price   (every unit)              │
//! │    q <  min_quantity → q × base                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rules never stack. The checkout evaluates each matching rule on its own
//! and keeps the cheapest result.
//!
//! ## Example
//! ```rust
//! use till_core::money::Money;
//! use till_core::pricing::{BuyXGetYFree, PricingRule};
//!
//! let rule: PricingRule = BuyXGetYFree::new("atv", 2, 1).unwrap().into();
//! assert!(rule.applies_to("atv"));
//! assert_eq!(rule.price(3, Money::from_cents(10950)).cents(), 21900);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::validation::{validate_positive, validate_price, validate_sku};

// =============================================================================
// Rule Kind
// =============================================================================

/// Tag identifying a rule variant, reported on receipts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    BuyXGetYFree,
    BulkDiscount,
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleKind::BuyXGetYFree => f.write_str("buy_x_get_y_free"),
            RuleKind::BulkDiscount => f.write_str("bulk_discount"),
        }
    }
}

fn invalid_parameters(kind: RuleKind) -> impl Fn(ValidationError) -> CoreError {
    move |e| CoreError::InvalidRuleParameters {
        rule: kind.to_string(),
        reason: e.to_string(),
    }
}

// =============================================================================
// Buy X Get Y Free
// =============================================================================

/// "Buy X, get Y free": every complete group of `buy + free` units is
/// charged for `buy` units only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuyXGetYFree {
    sku: String,
    buy_quantity: i64,
    free_quantity: i64,
}

impl BuyXGetYFree {
    /// Creates the rule.
    ///
    /// ## Errors
    /// `InvalidRuleParameters` when either quantity is not positive.
    pub fn new(sku: impl Into<String>, buy_quantity: i64, free_quantity: i64) -> CoreResult<Self> {
        let sku = sku.into();
        let invalid = invalid_parameters(RuleKind::BuyXGetYFree);

        validate_sku(&sku).map_err(&invalid)?;
        validate_positive("buy_quantity", buy_quantity).map_err(&invalid)?;
        validate_positive("free_quantity", free_quantity).map_err(&invalid)?;

        Ok(BuyXGetYFree {
            sku,
            buy_quantity,
            free_quantity,
        })
    }

    /// The common "buy X, get one free" form (`free_quantity = 1`).
    pub fn buy_x_get_one_free(sku: impl Into<String>, buy_quantity: i64) -> CoreResult<Self> {
        Self::new(sku, buy_quantity, 1)
    }

    pub fn buy_quantity(&self) -> i64 {
        self.buy_quantity
    }

    pub fn free_quantity(&self) -> i64 {
        self.free_quantity
    }

    /// Number of units actually charged for `quantity` scanned units.
    ///
    /// A trailing partial group is charged in full up to `buy_quantity`.
    pub fn payable_units(&self, quantity: i64) -> i64 {
        if quantity < self.buy_quantity {
            return quantity;
        }

        let group_size = self.buy_quantity.saturating_add(self.free_quantity);
        let complete_groups = quantity / group_size;
        let remainder = quantity % group_size;

        complete_groups * self.buy_quantity + remainder.min(self.buy_quantity)
    }

    pub fn price(&self, quantity: i64, base_price: Money) -> Money {
        base_price.multiply_quantity(self.payable_units(quantity))
    }
}

// =============================================================================
// Bulk Discount
// =============================================================================

/// Flat per-unit price once a quantity threshold is reached.
///
/// The discounted price applies to every unit, not only the units above
/// the threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BulkDiscount {
    sku: String,
    min_quantity: i64,
    discounted_price: Money,
}

impl BulkDiscount {
    /// Creates the rule.
    ///
    /// ## Errors
    /// `InvalidRuleParameters` when `min_quantity` is not positive or the
    /// discounted price is negative.
    pub fn new(
        sku: impl Into<String>,
        min_quantity: i64,
        discounted_price: Money,
    ) -> CoreResult<Self> {
        let sku = sku.into();
        let invalid = invalid_parameters(RuleKind::BulkDiscount);

        validate_sku(&sku).map_err(&invalid)?;
        validate_positive("min_quantity", min_quantity).map_err(&invalid)?;
        validate_price("discounted_price", discounted_price).map_err(&invalid)?;

        Ok(BulkDiscount {
            sku,
            min_quantity,
            discounted_price,
        })
    }

    /// Creates the rule from a decimal discounted price in major units.
    ///
    /// ```rust
    /// use till_core::pricing::BulkDiscount;
    ///
    /// let rule = BulkDiscount::from_decimal("ipd", 5, 499.99).unwrap();
    /// assert_eq!(rule.discounted_price().cents(), 49999);
    /// assert!(BulkDiscount::from_decimal("ipd", 5, -1.0).is_err());
    /// ```
    pub fn from_decimal(
        sku: impl Into<String>,
        min_quantity: i64,
        discounted_price: f64,
    ) -> CoreResult<Self> {
        let invalid = invalid_parameters(RuleKind::BulkDiscount);

        if discounted_price < 0.0 {
            return Err(invalid(ValidationError::Negative {
                field: "discounted_price".to_string(),
            }));
        }
        let discounted_price = Money::from_decimal(discounted_price).map_err(&invalid)?;

        Self::new(sku, min_quantity, discounted_price)
    }

    pub fn min_quantity(&self) -> i64 {
        self.min_quantity
    }

    pub fn discounted_price(&self) -> Money {
        self.discounted_price
    }

    pub fn price(&self, quantity: i64, base_price: Money) -> Money {
        if quantity >= self.min_quantity {
            self.discounted_price.multiply_quantity(quantity)
        } else {
            base_price.multiply_quantity(quantity)
        }
    }
}

// =============================================================================
// Pricing Rule
// =============================================================================

/// A pricing rule bound to a single SKU.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PricingRule {
    BuyXGetYFree(BuyXGetYFree),
    BulkDiscount(BulkDiscount),
}

impl PricingRule {
    /// The SKU this rule is bound to.
    pub fn sku(&self) -> &str {
        match self {
            PricingRule::BuyXGetYFree(rule) => &rule.sku,
            PricingRule::BulkDiscount(rule) => &rule.sku,
        }
    }

    pub fn kind(&self) -> RuleKind {
        match self {
            PricingRule::BuyXGetYFree(_) => RuleKind::BuyXGetYFree,
            PricingRule::BulkDiscount(_) => RuleKind::BulkDiscount,
        }
    }

    #[inline]
    pub fn applies_to(&self, sku: &str) -> bool {
        matches_sku(self, sku)
    }

    /// Total price of `quantity` units under this rule.
    pub fn price(&self, quantity: i64, base_price: Money) -> Money {
        match self {
            PricingRule::BuyXGetYFree(rule) => rule.price(quantity, base_price),
            PricingRule::BulkDiscount(rule) => rule.price(quantity, base_price),
        }
    }

    /// Short human-readable label, e.g. `"buy 2 get 1 free"`.
    pub fn describe(&self) -> String {
        match self {
            PricingRule::BuyXGetYFree(rule) => format!(
                "buy {} get {} free",
                rule.buy_quantity, rule.free_quantity
            ),
            PricingRule::BulkDiscount(rule) => format!(
                "{} or more at {} each",
                rule.min_quantity, rule.discounted_price
            ),
        }
    }
}

impl From<BuyXGetYFree> for PricingRule {
    fn from(rule: BuyXGetYFree) -> Self {
        PricingRule::BuyXGetYFree(rule)
    }
}

impl From<BulkDiscount> for PricingRule {
    fn from(rule: BulkDiscount) -> Self {
        PricingRule::BulkDiscount(rule)
    }
}

/// Whether `rule` is bound to `sku`. Shared by every rule variant.
#[inline]
pub fn matches_sku(rule: &PricingRule, sku: &str) -> bool {
    rule.sku() == sku
}

// =============================================================================
// Unit Tests
// =============================================================================
