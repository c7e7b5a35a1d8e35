//! Run Input
//!
//! The cart snapshot handed to the planner by the host. Field names follow the
//! host's input document so the same types decode JSON requests and YAML
//! fixtures.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::metafields::Metafield;

/// A single evaluation request.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunInput {
    /// Cart being evaluated
    pub cart: Cart,

    /// Multiplier converting shop currency into the shopper's presentment currency
    pub presentment_currency_rate: Decimal,
}

/// Cart state at evaluation time.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Cart {
    /// Cart lines, in cart order
    pub lines: Vec<CartLine>,
}

/// One purchasable line in the cart.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CartLine {
    /// Line identifier
    pub id: String,

    /// Cost of the line
    pub cost: CartLineCost,

    /// What the line refers to
    pub merchandise: Merchandise,
}

/// Cost breakdown for a cart line.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineCost {
    /// Cost of a single unit
    pub amount_per_quantity: MoneyV2,
}

/// A monetary amount as supplied by the host.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoneyV2 {
    /// Decimal amount, scale preserved as supplied
    pub amount: Decimal,

    /// ISO currency code, informational only
    #[serde(default)]
    pub currency_code: Option<String>,
}

/// Purchasable entity a line refers to.
///
/// Only product variants can be expanded; every other kind decodes to
/// [`Merchandise::Other`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "__typename")]
pub enum Merchandise {
    /// A variant of a catalogue product
    ProductVariant(ProductVariant),

    /// Any other merchandise kind (custom products and the like)
    #[serde(other)]
    Other,
}

impl Merchandise {
    /// Returns the product variant, if this merchandise is one.
    pub fn as_product_variant(&self) -> Option<&ProductVariant> {
        match self {
            Merchandise::ProductVariant(variant) => Some(variant),
            Merchandise::Other => None,
        }
    }
}

/// Product variant merchandise.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductVariant {
    /// Variant identifier
    pub id: String,

    /// Display title
    pub title: String,

    /// Parent product
    pub product: Product,
}

/// Parent product of a variant, reduced to the metafields the planner reads.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Identifier of the gift-wrap variant to add alongside this product
    #[serde(default)]
    pub gift_wrap_variant: Option<Metafield>,

    /// Gift-wrap cost, a JSON document of the form `{"amount": "5.0"}`
    #[serde(default)]
    pub gift_wrap_cost: Option<Metafield>,
}
