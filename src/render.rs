//! Render
//!
//! Terminal rendering of a run result.

use std::io;

use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{
        Alignment, Color, Style, Theme,
        object::{Columns, Rows},
    },
};

use crate::output::CartTransformRunResult;

/// Write the result as a table, one row per expanded item.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_table(result: &CartTransformRunResult, mut out: impl io::Write) -> io::Result<()> {
    if result.is_empty() {
        return writeln!(out, "No changes");
    }

    let mut builder = Builder::default();
    let mut operation_rows = Vec::with_capacity(result.len());

    builder.push_record(["Line", "Title", "Merchandise", "Qty", "Price"]);

    let mut current_row = 1;

    for expand in result.expansions() {
        operation_rows.push(current_row);

        for (idx, item) in expand.expanded_cart_items.iter().enumerate() {
            let (line, title) = if idx == 0 {
                (expand.cart_line_id.as_str(), expand.title.as_str())
            } else {
                ("", "")
            };

            builder.push_record([
                line.to_string(),
                title.to_string(),
                item.merchandise_id.clone(),
                item.quantity.to_string(),
                item.price_per_unit().to_string(),
            ]);

            current_row += 1;
        }
    }

    let mut table = builder.build();
    let mut theme = Theme::from(Style::modern_rounded());
    let separator = HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤'));

    theme.remove_horizontal_lines();

    for row in operation_rows {
        theme.insert_horizontal_line(row, separator);
    }

    table.with(theme);
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(3..5), Alignment::right());

    writeln!(out, "{table}")?;
    writeln!(out, "{} line(s) expanded", result.len())
}
