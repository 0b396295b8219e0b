use std::{
    io::{self, Write},
    process,
};

use clap::Parser;
use decl_parser::{
    config::constants::DEFAULT_SOURCE_NAME,
    grammar::{
        display::{render_first_sets, render_follow_sets, render_table},
        grammar::Grammar,
        table::ParseTable,
    },
    parser::parser::parse_line,
    render_error,
    symbols::{display::render_symbols, table::SymbolTable},
};
use log::{debug, LevelFilter};

/// Table-driven LL(1) recognizer for variable declarations.
#[derive(Parser)]
#[command(name = "decl-parser", version, about = "Checks `<type> <identifier>` declarations")]
struct Cli {
    /// The declaration to check; read from stdin when omitted
    declaration: Vec<String>,

    /// Name shown for the input in diagnostics
    #[arg(long, default_value = DEFAULT_SOURCE_NAME)]
    source_name: String,

    /// Log every parser step to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Only report acceptance or the diagnostic
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn log_level(verbose: bool, quiet: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Error
    } else {
        LevelFilter::Warn
    }
}

fn init_logging(cli: &Cli) {
    env_logger::Builder::new()
        .filter_level(log_level(cli.verbose, cli.quiet))
        .format_timestamp(None)
        .init();
}

fn read_declaration(cli: &Cli) -> io::Result<String> {
    if !cli.declaration.is_empty() {
        return Ok(cli.declaration.join(" "));
    }

    print!("Enter a declaration: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\n', '\r']).to_string())
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    let table = match ParseTable::build(&Grammar::declarations()) {
        Ok(table) => table,
        Err(error) => {
            eprintln!("error: {}", error);
            process::exit(2);
        }
    };

    let line = match read_declaration(&cli) {
        Ok(line) => line,
        Err(error) => {
            eprintln!("error: failed to read the declaration: {}", error);
            process::exit(2);
        }
    };
    debug!("analysing {:?}", line);

    let mut symbols = SymbolTable::new();
    if let Err(error) = parse_line(&line, Some(cli.source_name.clone()), &table, &mut symbols) {
        eprint!("{}", render_error(&error, &line));
        process::exit(1);
    }

    println!("The declaration is syntactically correct!");
    if cli.quiet {
        return;
    }

    println!();
    println!("{}", render_first_sets(table.sets()));
    println!("{}", render_follow_sets(table.sets()));
    println!("{}", render_table(&table));
    println!("Symbol table after analysis:");
    print!("{}", render_symbols(&symbols));
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use log::LevelFilter;

    use super::{log_level, Cli};

    #[test]
    fn test_log_level_follows_flags() {
        assert_eq!(log_level(true, false), LevelFilter::Debug);
        assert_eq!(log_level(false, true), LevelFilter::Error);
        assert_eq!(log_level(false, false), LevelFilter::Warn);
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::try_parse_from(["decl-parser", "-v", "int", "counter"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.declaration, vec!["int", "counter"]);
        assert_eq!(cli.source_name, "shell");

        assert!(Cli::try_parse_from(["decl-parser", "-v", "-q"]).is_err());
    }
}
