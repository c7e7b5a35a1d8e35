//! Wrapify prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    host::HostError,
    input::{Cart, CartLine, CartLineCost, Merchandise, MoneyV2, Product, ProductVariant, RunInput},
    metafields::{GiftWrapCost, Metafield},
    output::{CartTransformRunResult, ExpandOperation, ExpandedItem, Operation},
    planner::{PlanError, expand_line, plan},
    pricing::presentment_price,
};
