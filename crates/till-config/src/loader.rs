//! # Pricing Document Loader
//!
//! Reads catalog and promotion definitions from JSON and assembles them
//! into till-core values.
//!
//! ## Document Format
//! ```json
//! {
//!   "products": [
//!     { "sku": "atv", "name": "Apple TV", "price": 109.50 }
//!   ],
//!   "rules": [
//!     { "kind": "buy_x_get_y_free", "sku": "atv", "buy": 2, "free": 1 },
//!     { "kind": "bulk_discount", "sku": "ipd", "min_quantity": 5, "price": 499.99 }
//!   ]
//! }
//! ```
//! `rules` may be omitted; `free` defaults to 1.
//!
//! ## Load Flow
//! ```text
//! pricing.json ──► PricingDocument (serde) ──► Product::new / rule ::new
//!                                                   │
//!                                                   ▼
//!                                     PricingConfig { catalog, rules }
//!                                                   │
//!                                                   ▼
//!                                            into_checkout()
//! ```

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use till_core::{
    BulkDiscount, BuyXGetYFree, Catalog, Checkout, CoreError, PricingRule, Product,
};

use crate::defaults::{default_products, default_rules};
use crate::error::{ConfigError, ConfigResult};
use crate::settings::Settings;

// =============================================================================
// Records
// =============================================================================

/// A product as written in a pricing document. Price in major units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub sku: String,
    pub name: String,
    pub price: f64,
}

impl ProductRecord {
    pub fn new(sku: &str, name: &str, price: f64) -> Self {
        ProductRecord {
            sku: sku.to_string(),
            name: name.to_string(),
            price,
        }
    }
}

impl TryFrom<ProductRecord> for Product {
    type Error = CoreError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        Product::new(record.sku, record.name, record.price)
    }
}

fn default_free_quantity() -> i64 {
    1
}

/// A pricing rule as written in a pricing document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RuleRecord {
    BuyXGetYFree {
        sku: String,
        buy: i64,
        #[serde(default = "default_free_quantity")]
        free: i64,
    },
    BulkDiscount {
        sku: String,
        min_quantity: i64,
        /// Discounted unit price in major units.
        price: f64,
    },
}

impl TryFrom<RuleRecord> for PricingRule {
    type Error = CoreError;

    fn try_from(record: RuleRecord) -> Result<Self, Self::Error> {
        match record {
            RuleRecord::BuyXGetYFree { sku, buy, free } => {
                Ok(BuyXGetYFree::new(sku, buy, free)?.into())
            }
            RuleRecord::BulkDiscount {
                sku,
                min_quantity,
                price,
            } => Ok(BulkDiscount::from_decimal(sku, min_quantity, price)?.into()),
        }
    }
}

/// Top-level pricing document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingDocument {
    pub products: Vec<ProductRecord>,

    /// `None` when the document has no `rules` key at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<RuleRecord>>,
}

// =============================================================================
// Pricing Config
// =============================================================================

/// A validated catalog and rule set, ready to build checkouts from.
#[derive(Debug, Clone)]
pub struct PricingConfig {
    pub catalog: Catalog,
    pub rules: Vec<PricingRule>,
}

impl PricingConfig {
    /// The built-in catalog and promotions.
    pub fn defaults() -> ConfigResult<Self> {
        Self::from_document(
            PricingDocument {
                products: default_products(),
                rules: Some(default_rules()),
            },
            false,
        )
    }

    /// Validates a parsed document.
    ///
    /// When the document has no `rules` key and `use_default_rules` is set,
    /// the built-in promotions are used.
    pub fn from_document(document: PricingDocument, use_default_rules: bool) -> ConfigResult<Self> {
        let products = document
            .products
            .into_iter()
            .map(Product::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let catalog = Catalog::build(products)?;

        let records = match document.rules {
            Some(records) => records,
            None if use_default_rules => {
                debug!("Pricing document has no rules, using built-in promotions");
                default_rules()
            }
            None => Vec::new(),
        };
        let rules = records
            .into_iter()
            .map(PricingRule::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        for rule in &rules {
            if !catalog.has_product(rule.sku()) {
                warn!(sku = %rule.sku(), kind = %rule.kind(), "Rule targets a SKU missing from the catalog");
            }
        }

        info!(
            products = catalog.len(),
            rules = rules.len(),
            "Pricing configuration loaded"
        );

        Ok(PricingConfig { catalog, rules })
    }

    /// Parses and validates a JSON pricing document.
    pub fn parse(json: &str, use_default_rules: bool) -> ConfigResult<Self> {
        let document: PricingDocument = serde_json::from_str(json)?;
        Self::from_document(document, use_default_rules)
    }

    /// Reads, parses and validates a JSON pricing document from disk.
    pub fn load(path: &Path, use_default_rules: bool) -> ConfigResult<Self> {
        debug!(path = %path.display(), "Reading pricing document");

        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        Self::parse(&json, use_default_rules)
    }

    /// Builds an empty checkout over this catalog and rule set.
    pub fn into_checkout(self) -> Checkout {
        Checkout::new(self.rules, self.catalog)
    }

    /// Shares this catalog and rule set for building many checkouts.
    pub fn into_shared(self) -> (Arc<[PricingRule]>, Arc<Catalog>) {
        (self.rules.into(), Arc::new(self.catalog))
    }
}

/// Builds a checkout from the settings' pricing document, or from the
/// built-in data set when no document is configured.
pub fn create_default_checkout(settings: &Settings) -> ConfigResult<Checkout> {
    let config = match &settings.pricing_path {
        Some(path) => PricingConfig::load(path, settings.use_default_rules)?,
        None => PricingConfig::defaults()?,
    };

    Ok(config.into_checkout())
}

// =============================================================================
// Unit Tests
// =============================================================================
