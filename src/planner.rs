//! Line Expansion Planner
//!
//! Decides, line by line, whether a cart line should be expanded into the
//! purchased variant plus its gift-wrap companion, and builds the expansion.

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::{
    input::{CartLine, RunInput},
    metafields::{self, GIFT_WRAP_COST_KEY, GiftWrapCost},
    output::{CartTransformRunResult, ExpandOperation, ExpandedItem, Operation},
    pricing::presentment_price,
};

/// Quantity of each item in an expansion.
const EXPANDED_ITEM_QUANTITY: u32 = 1;

/// Errors that abort an evaluation.
#[derive(Debug, Error)]
pub enum PlanError {
    /// A metafield was present but could not be parsed.
    #[error("cart line {line_id}: invalid `{key}` metafield: {source}")]
    InvalidMetafield {
        /// Line whose product carries the metafield
        line_id: String,

        /// Metafield key
        key: &'static str,

        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// Converting the companion cost into presentment currency overflowed.
    #[error("cart line {line_id}: companion price overflowed")]
    PriceOverflow {
        /// Line being expanded
        line_id: String,
    },
}

/// Plan the line expansions for a cart.
///
/// Operations are returned in cart line order, at most one per line. A cart
/// with no eligible lines yields [`CartTransformRunResult::no_changes`].
///
/// # Errors
///
/// - [`PlanError::InvalidMetafield`]: a gift-wrap cost metafield is present but malformed or blank.
/// - [`PlanError::PriceOverflow`]: a companion price cannot be represented.
#[instrument(skip_all, fields(lines = input.cart.lines.len()))]
pub fn plan(input: &RunInput) -> Result<CartTransformRunResult, PlanError> {
    let operations = input
        .cart
        .lines
        .iter()
        .filter_map(|line| expand_line(line, input.presentment_currency_rate).transpose())
        .map(|expand| expand.map(Operation::LineExpand))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(operations = operations.len(), "planned line expansions");

    Ok(CartTransformRunResult::new(operations))
}

/// Build the expansion for a single cart line.
///
/// Returns `Ok(None)` when the line is not eligible: its merchandise is not a
/// product variant, the product lacks either gift-wrap metafield, or the
/// companion variant id is blank.
///
/// # Errors
///
/// - [`PlanError::InvalidMetafield`]: the gift-wrap cost metafield is present but malformed
///   or blank.
/// - [`PlanError::PriceOverflow`]: the companion price cannot be represented.
pub fn expand_line(
    line: &CartLine,
    presentment_currency_rate: Decimal,
) -> Result<Option<ExpandOperation>, PlanError> {
    let Some(variant) = line.merchandise.as_product_variant() else {
        debug!(line_id = %line.id, "skipping line: merchandise is not a product variant");
        return Ok(None);
    };

    let product = &variant.product;

    // A blank cost is still a configured cost and must parse.
    let (Some(companion), Some(cost)) = (
        metafields::present(product.gift_wrap_variant.as_ref()),
        product.gift_wrap_cost.as_ref(),
    ) else {
        debug!(line_id = %line.id, "skipping line: gift-wrap metafields not configured");
        return Ok(None);
    };

    let cost: GiftWrapCost = cost
        .parse_json()
        .map_err(|source| PlanError::InvalidMetafield {
            line_id: line.id.clone(),
            key: GIFT_WRAP_COST_KEY,
            source,
        })?;

    let companion_price = presentment_price(cost.amount, presentment_currency_rate)
        .ok_or_else(|| PlanError::PriceOverflow {
            line_id: line.id.clone(),
        })?;

    Ok(Some(ExpandOperation {
        cart_line_id: line.id.clone(),
        title: variant.title.clone(),
        expanded_cart_items: vec![
            ExpandedItem::fixed_price(
                variant.id.as_str(),
                EXPANDED_ITEM_QUANTITY,
                line.cost.amount_per_quantity.amount,
            ),
            ExpandedItem::fixed_price(
                companion.value.as_str(),
                EXPANDED_ITEM_QUANTITY,
                companion_price,
            ),
        ],
    }))
}
