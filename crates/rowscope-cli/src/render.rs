//! Text rendering of view snapshots.

use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use rowscope_core::{CheckState, PageMarker};
use rowscope_engine::{ViewSnapshot, VisibleRow};

/// Render the rows plus the footer as plain text.
pub fn render_view(view: &ViewSnapshot) -> String {
    let mut out = String::new();
    if view.is_empty() {
        out.push_str("No results.\n");
    } else {
        out.push_str(&render_table(view).to_string());
        out.push('\n');
    }
    out.push_str(&render_footer(view));
    out.push('\n');
    out
}

fn render_table(view: &ViewSnapshot) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new(checkbox(view.select_all)),
            Cell::new("ID"),
            Cell::new("Name"),
            Cell::new("Email"),
            Cell::new("Balance"),
            Cell::new("Registered"),
            Cell::new("Status"),
        ]);

    for row in &view.rows {
        table.add_row(row_cells(row));
    }
    if let Some(column) = table.column_mut(4) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    table
}

fn row_cells(row: &VisibleRow) -> Vec<Cell> {
    let record = &row.record;
    vec![
        Cell::new(if row.selected { "[x]" } else { "[ ]" }),
        Cell::new(record.id.as_ref()),
        Cell::new(&record.name),
        Cell::new(&record.email),
        Cell::new(format_currency(record.balance)),
        Cell::new(record.registered_at.format("%Y-%m-%d")),
        Cell::new(record.status_label()),
    ]
}

fn render_footer(view: &ViewSnapshot) -> String {
    let mut lines = vec![format!(
        "{} of {} row(s) selected.",
        view.selected_filtered_count, view.total_filtered
    )];
    if view.selected_count > view.selected_filtered_count {
        lines.push(format!(
            "{} selected row(s) hidden by the current filter.",
            view.selected_count - view.selected_filtered_count
        ));
    }

    match &view.pagination_window {
        Some(window) => {
            let range = match view.range {
                Some((start, end)) => format!("{start}-{end}"),
                None => "0".to_string(),
            };
            lines.push(format!(
                "Page {} of {} ({} of {})  {}",
                view.current_page(),
                view.total_pages,
                range,
                view.total_filtered,
                render_window(window, view.current_page())
            ));
        }
        None => lines.push(format!("Showing all {} records", view.total_filtered)),
    }
    lines.join("\n")
}

/// Page picker with the current page in brackets.
pub fn render_window(window: &[PageMarker], current: usize) -> String {
    window
        .iter()
        .map(|marker| match marker {
            PageMarker::Page(n) if *n == current => format!("[{n}]"),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn checkbox(state: CheckState) -> &'static str {
    match state {
        CheckState::None => "[ ]",
        CheckState::Indeterminate => "[-]",
        CheckState::All => "[x]",
    }
}

/// US-dollar formatting with thousands separators: `$1,234.50`.
pub fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}${grouped}.{:02}", cents % 100)
}
