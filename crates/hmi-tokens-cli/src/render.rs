//! Table and JSON rendering for token listings and audit reports.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde_json::{Value, json};

use hmi_tokens::{AuditReport, BorderRadiusTokens, IssueSeverity, RadiusToken};

/// Builds the `list` table: one row per token.
pub fn token_table(tokens: &BorderRadiusTokens) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Token"),
        header_cell("Value"),
        header_cell("Alias of"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (token, value) in tokens.entries() {
        table.add_row(vec![
            token_cell(token),
            Cell::new(value),
            match token.alias_of() {
                Some(canonical) => Cell::new(canonical),
                None => dim_cell("-"),
            },
        ]);
    }
    table
}

/// Builds the `list --format json` payload.
pub fn token_list_json(tokens: &BorderRadiusTokens) -> Value {
    Value::Array(
        tokens
            .entries()
            .map(|(token, value)| {
                json!({
                    "name": token.as_str(),
                    "value": value.get(),
                    "alias_of": token.alias_of().map(|canonical| canonical.as_str()),
                })
            })
            .collect(),
    )
}

/// Serializes the token set as a pretty JSON object keyed by token name.
pub fn export_json(tokens: &BorderRadiusTokens) -> serde_json::Result<String> {
    serde_json::to_string_pretty(tokens)
}

/// Builds the issue table for an audit report.
pub fn audit_table(report: &AuditReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Severity"),
        header_cell("Code"),
        header_cell("Token"),
        header_cell("Message"),
    ]);
    apply_issue_table_style(&mut table);
    for issue in &report.issues {
        table.add_row(vec![
            severity_cell(issue.severity),
            Cell::new(&issue.code),
            token_cell(issue.token),
            Cell::new(&issue.message),
        ]);
    }
    table
}

/// One-line summary printed after an audit.
pub fn audit_summary(report: &AuditReport) -> String {
    if report.is_clean() {
        format!("all {} tokens consistent", report.token_count)
    } else {
        format!(
            "{} tokens checked: {} error(s), {} warning(s)",
            report.token_count,
            report.error_count(),
            report.warning_count()
        )
    }
}

/// Returns true when the `audit` command should exit with a failure status.
///
/// Errors always fail. Warnings fail only when `deny_warnings` is set.
pub fn audit_failed(report: &AuditReport, deny_warnings: bool) -> bool {
    report.has_errors() || (deny_warnings && report.warning_count() > 0)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn apply_issue_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn token_cell(token: RadiusToken) -> Cell {
    if token.is_alias() {
        Cell::new(token).fg(Color::Blue)
    } else {
        Cell::new(token)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold)
    }
}

fn severity_cell(severity: IssueSeverity) -> Cell {
    match severity {
        IssueSeverity::Error => Cell::new("ERROR").fg(Color::Red),
        IssueSeverity::Warning => Cell::new("WARN").fg(Color::Yellow),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
