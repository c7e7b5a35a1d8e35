//! Wrapify
//!
//! Wrapify is a cart transform that expands eligible cart lines into the purchased
//! variant plus a gift-wrap companion item, priced in the shopper's presentment currency.
//!
//! The planner ([`planner::plan`]) is a pure function over a [`input::RunInput`]; the
//! [`host`] module wraps it in the decode/plan/encode loop used by the `wrapify` binary.

pub mod config;
pub mod fixtures;
pub mod host;
pub mod input;
pub mod metafields;
pub mod observability;
pub mod output;
pub mod planner;
pub mod prelude;
pub mod pricing;
pub mod render;
