//! # till-config: Catalog Loading and Settings for Till
//!
//! The I/O edge of Till. Turns pricing documents and environment variables
//! into the pure till-core values the checkout runs on.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Till Data Flow                                 │
//! │                                                                         │
//! │  TILL_* env ──► Settings                                               │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   till-config (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   settings    │    │    loader     │    │   defaults   │  │   │
//! │  │   │ TILL_PRICING_ │───►│ JSON document │◄───│ ipd mbp atv  │  │   │
//! │  │   │ PATH, ...     │    │ → Catalog,    │    │ vga + promos │  │   │
//! │  │   │               │    │   rules       │    │              │  │   │
//! │  │   └───────────────┘    └───────┬───────┘    └──────────────┘  │   │
//! │  └────────────────────────────────┼────────────────────────────────┘   │
//! │                                   ▼                                     │
//! │                         till-core Checkout                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use till_config::{create_default_checkout, Settings};
//!
//! let mut checkout = create_default_checkout(&Settings::default()).unwrap();
//! checkout.scan("vga").unwrap();
//! assert_eq!(checkout.total().to_string(), "$30.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod defaults;
pub mod error;
pub mod loader;
pub mod settings;

// =============================================================================
// Re-exports
// =============================================================================

pub use defaults::{default_products, default_rules};
pub use error::{ConfigError, ConfigResult};
pub use loader::{
    create_default_checkout, PricingConfig, PricingDocument, ProductRecord, RuleRecord,
};
pub use settings::Settings;
