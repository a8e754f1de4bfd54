use std::io::Write;

use cmdblock_core::error::Result;
use cmdblock_core::report::{ReportKind, ReportLine};
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};

/// Trait for converting report kinds to terminal colors
pub trait AsTermColor {
    fn as_crossterm_color(&self) -> Color;
}

impl AsTermColor for ReportKind {
    fn as_crossterm_color(&self) -> Color {
        match self {
            ReportKind::Command => Color::Cyan,
            ReportKind::Coordinate => Color::Yellow,
            ReportKind::ModifiedCoordinate => Color::Green,
            ReportKind::Unchanged => Color::Grey,
            ReportKind::Changed => Color::Magenta,
            ReportKind::Warning => Color::Red,
        }
    }
}

/// Writes each line in its kind's colour.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_report(lines: &[ReportLine], out: &mut impl Write) -> Result<()> {
    for line in lines {
        queue!(
            out,
            SetForegroundColor(line.kind.as_crossterm_color()),
            Print(&line.text),
            ResetColor,
            Print("\n")
        )?;
    }
    out.flush()?;
    Ok(())
}
