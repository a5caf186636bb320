//! Terminal output helpers: banner, tables, colors.

use std::io::{self, IsTerminal, Write};

use owo_colors::OwoColorize;
use tabled::{Table, Tabled, settings::Style};

/// Color only when stdout is a terminal and `NO_COLOR` is unset.
pub fn should_color() -> bool {
    io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
}

/// Welcome banner shown once per session.
pub fn banner(out: &mut dyn Write, color: bool) -> io::Result<()> {
    let title = "Welcome to the RADkit Devices Tool";
    if color {
        writeln!(out, "{}", title.bold().cyan())?;
    } else {
        writeln!(out, "{title}")?;
    }
    writeln!(out, "{}", "-".repeat(title.len()))
}

/// Section heading ("Step 2 - Select Organization:").
pub fn step(out: &mut dyn Write, color: bool, text: &str) -> io::Result<()> {
    if color {
        writeln!(out, "{}", text.green())
    } else {
        writeln!(out, "{text}")
    }
}

pub fn render_table<R: Tabled>(rows: &[R]) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}
