//! # Receipt
//!
//! Itemised result of pricing a cart: one line per SKU with the list
//! price, the price actually charged and the rule that produced it.
//!
//! Lines use the snapshot pattern: name and unit price are the values
//! frozen when the SKU was first scanned.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::money::Money;
use crate::pricing::RuleKind;

/// One SKU on a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReceiptLine {
    pub sku: String,
    pub name: String,
    pub quantity: i64,
    /// Unit price at time of scanning (frozen).
    pub unit_price: Money,
    /// quantity × unit_price.
    pub list_price: Money,
    /// Cheapest of list_price and every matching rule.
    pub charged: Money,
    /// Rule that produced `charged`, if any beat the list price.
    pub applied_rule: Option<RuleKind>,
    pub rule_description: Option<String>,
}

impl ReceiptLine {
    /// Amount saved on this line.
    #[inline]
    pub fn discount(&self) -> Money {
        self.list_price - self.charged
    }
}

/// A priced cart.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Receipt {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// When the checkout session started (or was last reset).
    #[ts(as = "String")]
    pub started_at: DateTime<Utc>,

    #[ts(as = "String")]
    pub issued_at: DateTime<Utc>,

    /// Lines in SKU order.
    pub lines: Vec<ReceiptLine>,

    /// Sum of list prices.
    pub subtotal: Money,

    /// subtotal - total.
    pub discount: Money,

    pub total: Money,
}

impl Receipt {
    /// Builds a receipt and its totals from priced lines.
    pub fn new(started_at: DateTime<Utc>, lines: Vec<ReceiptLine>) -> Self {
        let subtotal: Money = lines.iter().map(|line| line.list_price).sum();
        let total: Money = lines.iter().map(|line| line.charged).sum();

        Receipt {
            id: Uuid::new_v4().to_string(),
            started_at,
            issued_at: Utc::now(),
            lines,
            subtotal,
            discount: subtotal - total,
            total,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(
                f,
                "{:<6} {:<20} x{:<4} {:>12}",
                line.sku,
                line.name,
                line.quantity,
                line.list_price.to_string()
            )?;
            if let Some(description) = &line.rule_description {
                writeln!(
                    f,
                    "       {:<26} {:>12}",
                    description,
                    format!("-{}", line.discount())
                )?;
            }
        }
        writeln!(f, "{:<34} {:>12}", "Subtotal", self.subtotal.to_string())?;
        writeln!(f, "{:<34} {:>12}", "Discounts", format!("-{}", self.discount))?;
        write!(f, "{:<34} {:>12}", "Total", self.total.to_string())
    }
}
