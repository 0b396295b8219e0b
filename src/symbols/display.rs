use super::table::{SymbolEntry, SymbolTable};

const HEADERS: [&str; 5] = ["ID", "Name", "Type", "Scope", "Value"];

fn value_cell(entry: &SymbolEntry) -> String {
    if !entry.is_initialized {
        return String::from("(uninitialized)");
    }

    match &entry.value {
        Some(value) => value.to_string(),
        None => String::from("N/A"),
    }
}

fn row(entry: &SymbolEntry) -> [String; 5] {
    [
        entry.id.to_string(),
        entry.name.clone(),
        entry.type_name.clone(),
        entry.scope.to_string(),
        value_cell(entry),
    ]
}

fn border(widths: &[usize; 5]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line
}

fn render_row(cells: &[String; 5], widths: &[usize; 5]) -> String {
    let mut line = String::from("|");
    for (cell, width) in cells.iter().zip(widths) {
        line.push_str(&format!(" {:<width$} |", cell, width = *width));
    }
    line
}

/// Renders the table as a bordered listing, one row per entry in bucket
/// order. Column widths fit the widest cell.
pub fn render_symbols(table: &SymbolTable) -> String {
    let header = HEADERS.map(String::from);
    let rows = table.iter().map(row).collect::<Vec<[String; 5]>>();

    let mut widths = header.clone().map(|cell| cell.chars().count());
    for cells in rows.iter() {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let separator = border(&widths);
    let mut out = String::new();

    out.push_str(&separator);
    out.push('\n');
    out.push_str(&render_row(&header, &widths));
    out.push('\n');
    out.push_str(&separator);
    out.push('\n');

    for cells in rows.iter() {
        out.push_str(&render_row(cells, &widths));
        out.push('\n');
    }

    if !rows.is_empty() {
        out.push_str(&separator);
        out.push('\n');
    }

    out
}
