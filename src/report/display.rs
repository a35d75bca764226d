// src/report/display.rs
use crate::report::compose::{HeaderStyle, VerticalRow};
use crate::report::models::BureauNotice;
use colored::Colorize;
use std::io::{self, Write};

/// Writes the per-bureau notices, one per line.
pub fn write_notices<W: Write>(out: &mut W, notices: &[BureauNotice]) -> io::Result<()> {
    for notice in notices {
        let line = match notice {
            BureauNotice::SectionFound { .. } => notice.to_string().green(),
            BureauNotice::NoAccountsFound { .. } => notice.to_string().yellow(),
            BureauNotice::SectionNotFound { .. } => notice.to_string().red(),
        };
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Writes the vertical summary. Headers are styled by account state; field
/// rows are `Field: value`.
pub fn write_rows<W: Write>(out: &mut W, rows: &[VerticalRow]) -> io::Result<()> {
    writeln!(out, "{}", "Organized Vertical Account Summary".bold())?;
    for row in rows {
        match row {
            VerticalRow::Header { label, style: HeaderStyle::Open } => {
                writeln!(out, "\n{}", label.bright_green().bold())?;
            }
            VerticalRow::Header { label, style: HeaderStyle::Inactive } => {
                writeln!(out, "\n{}", label.bright_black().on_white().bold())?;
            }
            VerticalRow::Field { .. } => {
                writeln!(out, "{} {}", format!("{}:", row.field()).bold(), row.value())?;
            }
        }
    }
    Ok(())
}
