use super::{
    sets::{FirstFollow, TerminalSet},
    symbols::{NonTerminal, Terminal},
    table::ParseTable,
};

const CELL_WIDTH: usize = 12;

pub fn render_set(name: &str, set: &TerminalSet) -> String {
    let members = set
        .iter()
        .map(|terminal| terminal.to_string())
        .collect::<Vec<String>>()
        .join(", ");
    format!("{}: {{ {} }}", name, members)
}

pub fn render_first_sets(sets: &FirstFollow) -> String {
    let mut out = String::from("FIRST sets:\n");
    for non_terminal in NonTerminal::ALL {
        out.push_str(&render_set(non_terminal.name(), sets.first_of(non_terminal)));
        out.push('\n');
    }
    out
}

pub fn render_follow_sets(sets: &FirstFollow) -> String {
    let mut out = String::from("FOLLOW sets:\n");
    for non_terminal in NonTerminal::ALL {
        out.push_str(&render_set(non_terminal.name(), sets.follow_of(non_terminal)));
        out.push('\n');
    }
    out
}

/// Renders the table as a grid of nonterminal rows and terminal columns.
/// Empty cells read `error`.
pub fn render_table(table: &ParseTable) -> String {
    let width = CELL_WIDTH;
    let mut out = String::from("Parse table:\n\n");

    out.push_str(&format!("{:<width$}", ""));
    for terminal in Terminal::ALL {
        out.push_str(&format!("{:<width$}", terminal.name()));
    }
    out.push('\n');

    out.push_str(&"-".repeat((Terminal::ALL.len() + 1) * CELL_WIDTH));
    out.push('\n');

    for non_terminal in NonTerminal::ALL {
        out.push_str(&format!("{:<width$}", non_terminal.name()));
        for terminal in Terminal::ALL {
            let cell = match table.lookup(non_terminal, terminal) {
                Some(production) => production.to_string(),
                None => String::from("error"),
            };
            out.push_str(&format!("{:<width$}", cell));
        }
        out.push('\n');
    }

    out
}
