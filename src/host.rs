//! Host harness
//!
//! Stands in for the platform that normally invokes the cart transform: decode
//! a run input document, plan, and encode the run result.

use std::{
    fs::File,
    io::{self, BufReader, Read, Write},
};

use thiserror::Error;
use tracing::{debug, info};

use crate::{
    config::{Config, OutputFormat},
    input::RunInput,
    output::CartTransformRunResult,
    planner::{PlanError, plan},
    render::write_table,
};

/// Errors surfaced by the harness.
#[derive(Debug, Error)]
pub enum HostError {
    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The run input violated the input contract.
    #[error("invalid run input: {0}")]
    Decode(#[source] serde_json::Error),

    /// The run result could not be serialized.
    #[error("failed to encode run result: {0}")]
    Encode(#[source] serde_json::Error),

    /// Planning aborted.
    #[error(transparent)]
    Plan(#[from] PlanError),
}

/// Decode a run input document.
///
/// # Errors
///
/// Returns [`HostError::Decode`] if the document is not a valid run input.
pub fn decode(reader: impl Read) -> Result<RunInput, HostError> {
    serde_json::from_reader(reader).map_err(HostError::Decode)
}

/// Encode a run result in the requested format.
///
/// # Errors
///
/// Returns [`HostError::Encode`] if serialization fails, or [`HostError::Io`]
/// if writing fails.
pub fn encode(
    result: &CartTransformRunResult,
    format: OutputFormat,
    pretty: bool,
    mut writer: impl Write,
) -> Result<(), HostError> {
    match format {
        OutputFormat::Json => {
            if pretty {
                serde_json::to_writer_pretty(&mut writer, result)
            } else {
                serde_json::to_writer(&mut writer, result)
            }
            .map_err(HostError::Encode)?;

            writeln!(writer)?;
        }
        OutputFormat::Table => write_table(result, &mut writer)?,
    }

    Ok(())
}

/// Decode, plan and encode a single evaluation.
///
/// # Errors
///
/// Returns a [`HostError`] if the input is invalid, planning fails, or the
/// result cannot be written.
pub fn evaluate(
    reader: impl Read,
    writer: impl Write,
    format: OutputFormat,
    pretty: bool,
) -> Result<CartTransformRunResult, HostError> {
    let input = decode(reader)?;

    debug!(
        lines = input.cart.lines.len(),
        rate = %input.presentment_currency_rate,
        "decoded run input"
    );

    let result = plan(&input)?;

    encode(&result, format, pretty, writer)?;

    Ok(result)
}

/// Run the harness with the given configuration.
///
/// Reads from the configured input file, or `stdin` when none is given.
///
/// # Errors
///
/// Returns a [`HostError`] if the input cannot be read or decoded, planning
/// fails, or the result cannot be written.
pub fn run(config: &Config, stdin: impl Read, stdout: impl Write) -> Result<(), HostError> {
    let result = match config.input_path() {
        Some(path) => {
            debug!(path = %path.display(), "reading run input from file");

            let file = BufReader::new(File::open(path)?);

            evaluate(file, stdout, config.format, config.pretty)?
        }
        None => evaluate(stdin, stdout, config.format, config.pretty)?,
    };

    info!(operations = result.len(), "cart transform complete");

    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};
    use testresult::TestResult;

    use super::*;

    fn input_with_cost(cost: Option<&str>) -> Value {
        let mut product = json!({ "giftWrapVariant": { "value": "gid://v/99" } });

        if let (Some(cost), Some(product)) = (cost, product.as_object_mut()) {
            product.insert("giftWrapCost".to_string(), json!({ "value": cost }));
        }

        json!({
            "cart": {
                "lines": [{
                    "id": "gid://shopify/CartLine/1",
                    "cost": { "amountPerQuantity": { "amount": "20.0", "currencyCode": "USD" } },
                    "merchandise": {
                        "__typename": "ProductVariant",
                        "id": "gid://shopify/ProductVariant/1",
                        "title": "Candle",
                        "product": product
                    }
                }]
            },
            "presentmentCurrencyRate": "2.0"
        })
    }

    fn evaluate_json(input: &Value) -> Result<Value, Box<dyn std::error::Error>> {
        let mut out = Vec::new();

        evaluate(
            input.to_string().as_bytes(),
            &mut out,
            OutputFormat::Json,
            false,
        )?;

        Ok(serde_json::from_slice(&out)?)
    }

    #[test]
    fn evaluates_gift_wrap_scenario() -> TestResult {
        let output = evaluate_json(&input_with_cost(Some(r#"{"amount":"5.0"}"#)))?;

        assert_eq!(
            output,
            json!({
                "operations": [{
                    "lineExpand": {
                        "cartLineId": "gid://shopify/CartLine/1",
                        "title": "Candle",
                        "expandedCartItems": [
                            {
                                "merchandiseId": "gid://shopify/ProductVariant/1",
                                "quantity": 1,
                                "price": { "adjustment": { "fixedPricePerUnit": { "amount": "20.0" } } }
                            },
                            {
                                "merchandiseId": "gid://v/99",
                                "quantity": 1,
                                "price": { "adjustment": { "fixedPricePerUnit": { "amount": "10.0" } } }
                            }
                        ]
                    }
                }]
            })
        );

        Ok(())
    }

    #[test]
    fn missing_cost_returns_no_changes() -> TestResult {
        let output = evaluate_json(&input_with_cost(None))?;

        assert_eq!(output, json!({ "operations": [] }));

        Ok(())
    }

    #[test]
    fn malformed_cost_fails_without_output() {
        let mut out = Vec::new();
        let input = input_with_cost(Some("{bad json")).to_string();

        let result = evaluate(input.as_bytes(), &mut out, OutputFormat::Json, false);

        assert!(matches!(result, Err(HostError::Plan(PlanError::InvalidMetafield { .. }))));
        assert!(out.is_empty(), "nothing should be written on failure");
    }

    #[test]
    fn invalid_document_is_a_decode_error() {
        let mut out = Vec::new();

        let result = evaluate(&b"{\"cart\": {}}"[..], &mut out, OutputFormat::Json, false);

        assert!(matches!(result, Err(HostError::Decode(_))));
    }

    #[test]
    fn pretty_json_is_indented() -> TestResult {
        let mut out = Vec::new();

        encode(
            &CartTransformRunResult::no_changes(),
            OutputFormat::Json,
            true,
            &mut out,
        )?;

        assert_eq!(String::from_utf8(out)?, "{\n  \"operations\": []\n}\n");

        Ok(())
    }

    #[test]
    fn table_output_renders_no_changes() -> TestResult {
        let mut out = Vec::new();

        encode(
            &CartTransformRunResult::no_changes(),
            OutputFormat::Table,
            false,
            &mut out,
        )?;

        assert_eq!(String::from_utf8(out)?, "No changes\n");

        Ok(())
    }
}
