//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands that compare
//! scenarios share [`SelectionArgs`] and build their inputs through
//! [`session::Context`].

pub mod analyze;
pub mod check;
pub mod defaults;
pub mod export;
pub mod scenarios;
pub mod session;

use std::path::PathBuf;

use clap::Args;

/// Industry label used when `--industry` is not given.
pub const DEFAULT_INDUSTRY: &str = "Financial Services";

/// Session selection shared by `analyze` and `export`
#[derive(Args, Debug, Clone)]
pub struct SelectionArgs {
    /// Industry sector (e.g. "Energy", "Real Estate")
    #[arg(short, long, default_value = DEFAULT_INDUSTRY)]
    pub industry: String,

    /// Scenario to compare (repeat up to three times; industry defaults when omitted)
    #[arg(short, long = "scenario")]
    pub scenarios: Vec<String>,

    /// Sector exposure CSV file
    #[arg(short, long)]
    pub exposure: Option<PathBuf>,
}

/// Render rows as a box-drawn table.
pub(crate) fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let rule = |left: &str, mid: &str, right: &str| {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{}{}{}\n", left, segments.join(mid), right)
    };
    let line = |cells: &[String]| {
        let padded: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(i, w)| {
                let cell = cells.get(i).map(String::as_str).unwrap_or("");
                format!(" {:<w$} ", cell, w = *w)
            })
            .collect();
        format!("│{}│\n", padded.join("│"))
    };

    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    let mut out = rule("┌", "┬", "┐");
    out.push_str(&line(&header_cells));
    out.push_str(&rule("├", "┼", "┤"));
    for row in rows {
        out.push_str(&line(row));
    }
    out.push_str(&rule("└", "┴", "┘"));
    out
}
