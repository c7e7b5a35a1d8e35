//! Run Result
//!
//! The operations handed back to the host. Serializes to the host's result
//! document, e.g. `{"operations": [{"lineExpand": {...}}]}`.

use rust_decimal::Decimal;
use serde::Serialize;

/// Result of a single evaluation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CartTransformRunResult {
    /// Operations in cart line order; empty means no changes
    pub operations: Vec<Operation>,
}

impl CartTransformRunResult {
    /// The explicit "no changes" result.
    pub fn no_changes() -> Self {
        Self::default()
    }

    /// Create a result from a list of operations.
    pub fn new(operations: Vec<Operation>) -> Self {
        Self { operations }
    }

    /// Number of operations
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Returns `true` if the result makes no changes to the cart.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Iterate over the line expansions in the result.
    pub fn expansions(&self) -> impl Iterator<Item = &ExpandOperation> {
        self.operations
            .iter()
            .map(|Operation::LineExpand(expand)| expand)
    }
}

/// A single cart transform operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    /// Replace one cart line with a list of items
    LineExpand(ExpandOperation),
}

/// Expansion of one cart line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpandOperation {
    /// Line being expanded
    pub cart_line_id: String,

    /// Title shown for the expanded line
    pub title: String,

    /// Resulting items, original item first
    pub expanded_cart_items: Vec<ExpandedItem>,
}

/// One item produced by an expansion.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpandedItem {
    /// Merchandise to add
    pub merchandise_id: String,

    /// Quantity to add
    pub quantity: u32,

    /// Price applied to the item
    pub price: ExpandedItemPrice,
}

impl ExpandedItem {
    /// Create an item with a fixed per-unit price.
    pub fn fixed_price(merchandise_id: impl Into<String>, quantity: u32, amount: Decimal) -> Self {
        Self {
            merchandise_id: merchandise_id.into(),
            quantity,
            price: ExpandedItemPrice {
                adjustment: PriceAdjustment {
                    fixed_price_per_unit: FixedPricePerUnit { amount },
                },
            },
        }
    }

    /// The fixed per-unit price.
    pub fn price_per_unit(&self) -> Decimal {
        self.price.adjustment.fixed_price_per_unit.amount
    }
}

/// Price wrapper for an expanded item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpandedItemPrice {
    /// Adjustment to apply
    pub adjustment: PriceAdjustment,
}

/// Price adjustment for an expanded item.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceAdjustment {
    /// Fixed price for each unit
    pub fixed_price_per_unit: FixedPricePerUnit,
}

/// Fixed per-unit price.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FixedPricePerUnit {
    /// Amount in presentment currency
    pub amount: Decimal,
}
