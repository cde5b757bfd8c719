//! Terminal output for synthesis summaries

use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

/// How command results are rendered.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary table (default)
    #[default]
    Table,
    /// Machine-readable JSON
    Json,
}

/// Render summary rows in the selected format.
pub fn print_rows<T: Tabled + Serialize>(rows: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if rows.is_empty() {
                println!("{}", "No resources to report".yellow());
                return;
            }
            let table = Table::new(rows).with(Style::rounded()).to_string();
            println!("{table}");
        }
        OutputFormat::Json => match serde_json::to_string_pretty(rows) {
            Ok(json) => println!("{json}"),
            Err(err) => eprintln!("{} {err}", "✗".red().bold()),
        },
    }
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow().bold(), message);
}
