//! Matrix rendering for terminal display.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use rmx_ingest::format_numeric;
use rmx_model::{RoleBindings, TransitionMatrix};

/// Print the resolved role bindings.
pub fn print_roles(bindings: &RoleBindings) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![header_cell("Role"), header_cell("Column")]);
    table.add_row(vec![Cell::new("start-state"), Cell::new(&bindings.start)]);
    table.add_row(vec![Cell::new("end-state"), Cell::new(&bindings.end)]);
    table.add_row(vec![Cell::new("metric"), Cell::new(&bindings.metric)]);
    println!("{table}");
}

/// Print the matrix as a table: row labels down the side, column labels
/// across the top, missing cells rendered as "-".
pub fn print_matrix(matrix: &TransitionMatrix) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![header_cell("From \\ To")];
    header.extend(matrix.col_labels().iter().map(|label| header_cell(label)));
    table.set_header(header);

    for (label, cells) in matrix.rows() {
        let mut row = vec![Cell::new(label).add_attribute(Attribute::Bold)];
        row.extend(cells.iter().map(|cell| value_cell(*cell)));
        table.add_row(row);
    }
    println!("{table}");
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn value_cell(value: Option<f64>) -> Cell {
    let rendered = match value {
        Some(v) => format_numeric(v),
        None => "-".to_string(),
    };
    Cell::new(rendered).set_alignment(CellAlignment::Right)
}
