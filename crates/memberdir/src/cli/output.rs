//! Output formatting utilities for CLI commands
//!
//! Provides consistent formatting for section banners, tables, and
//! truncated value previews.

use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, Color, ContentArrangement, Table};

/// Width of the decorative section markers
const RULE_WIDTH: usize = 46;

/// Print a section banner: the title over a full-width marker
pub fn print_banner(title: &str) {
    println!("{}", title);
    println!("{}", "=".repeat(RULE_WIDTH));
}

/// Print a thin section rule
pub fn print_rule() {
    println!("{}", "-".repeat(RULE_WIDTH));
}

/// Print a table with headers and rows
pub fn print_table(headers: &[&str], rows: Vec<Vec<String>>) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let header_cells: Vec<Cell> = headers
        .iter()
        .map(|h| Cell::new(h).fg(Color::Cyan))
        .collect();
    table.set_header(header_cells);

    for row in rows {
        table.add_row(row);
    }

    println!("{}", table);
}

/// Truncate a value for display, keeping at most `max` characters
pub fn truncate_value(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        value.to_string()
    } else {
        let head: String = value.chars().take(max).collect();
        format!("{}...", head)
    }
}
