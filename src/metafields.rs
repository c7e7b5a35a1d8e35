//! Metafields
//!
//! Products carry their gift-wrap configuration as string metafields. Reading
//! one is a two-step affair: look the field up (it may be absent), then parse
//! its value as a typed JSON document. Parsing is explicit and fails loudly.

use rust_decimal::Decimal;
use serde::{Deserialize, de::DeserializeOwned};

/// Metafield key holding the gift-wrap cost document.
pub const GIFT_WRAP_COST_KEY: &str = "giftWrapCost";

/// A metafield value as supplied by the host.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Metafield {
    /// Raw string value
    pub value: String,
}

impl Metafield {
    /// Creates a metafield with the given value
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Returns `true` if the value is empty or only whitespace.
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    /// Parse the value as a JSON document.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if the value is not valid JSON or does
    /// not match the shape of `T`.
    pub fn parse_json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.value)
    }
}

/// Filter out absent and blank metafields.
///
/// Only identifiers are read this way. Documents such as the gift-wrap cost go
/// straight to [`Metafield::parse_json`], where a blank value is a parse error.
pub fn present(metafield: Option<&Metafield>) -> Option<&Metafield> {
    metafield.filter(|metafield| !metafield.is_blank())
}

/// Gift-wrap cost document, e.g. `{"amount": "5.0"}`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct GiftWrapCost {
    /// Cost in the shop's currency
    pub amount: Decimal,
}
