/// Console formatting module - Pure rendering concerns
///
/// This module handles console output for the change summary:
/// - Table layout and borders
/// - Color terminal output
/// - Text truncation and padding
///
/// It accepts pre-computed counts from the report module and renders them.
///
/// ## Output Flexibility
///
/// `TableWriter` writes to any `std::io::Write` destination, so the same
/// table can go to stderr (with colors) or into a string buffer for tests.

use crate::report::ChangeSummary;
use std::io::{self, Write};
use term::color::Color;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Width of the change-type column, including its padding
const LABEL_WIDTH: usize = 14;
/// Width of the count column, including its padding
const COUNT_WIDTH: usize = 9;

/// Writer for table output - configurable for color/plain text
pub struct TableWriter<W: Write> {
    writer: W,
    use_colors: bool,
}

impl<W: Write> TableWriter<W> {
    /// Create a new table writer
    pub fn new(writer: W, use_colors: bool) -> Self {
        Self { writer, use_colors }
    }

    /// Write formatted text, optionally with color
    fn write_colored(&mut self, text: &str, color: Color) -> io::Result<()> {
        if self.use_colors {
            if let Some(ref mut t) = term::stderr() {
                let _ = t.fg(color);
                let _ = t.write_all(text.as_bytes());
                let _ = t.reset();
                Ok(())
            } else {
                write!(self.writer, "{}", text)
            }
        } else {
            write!(self.writer, "{}", text)
        }
    }

    /// Write the whole change summary table
    pub fn write_summary_table(&mut self, title: &str, summary: &ChangeSummary) -> io::Result<()> {
        writeln!(self.writer, "{}", format_summary_header(title))?;

        for (label, count) in summary.rows() {
            let row = format!(
                "│ {} │ {} │",
                truncate_with_padding(label, LABEL_WIDTH - 2),
                format!("{:>width$}", count, width = COUNT_WIDTH - 2)
            );
            if count > 0 {
                self.write_colored(&row, change_color(label))?;
            } else {
                write!(self.writer, "{}", row)?;
            }
            writeln!(self.writer)?;
        }

        writeln!(self.writer, "├{:─<lw$}┼{:─<cw$}┤", "", "", lw = LABEL_WIDTH, cw = COUNT_WIDTH)?;
        writeln!(
            self.writer,
            "│ {} │ {:>width$} │",
            truncate_with_padding("Total", LABEL_WIDTH - 2),
            summary.total,
            width = COUNT_WIDTH - 2
        )?;
        writeln!(self.writer, "{}", format_summary_footer())
    }
}

/// Color used for a change-type row with a non-zero count
fn change_color(label: &str) -> Color {
    match label {
        "Create" => term::color::BRIGHT_GREEN,
        "Modify" => term::color::BRIGHT_YELLOW,
        "Delete" => term::color::BRIGHT_RED,
        _ => term::color::WHITE,
    }
}

/// Format the summary table header (title line plus column headings)
pub fn format_summary_header(title: &str) -> String {
    let inner = LABEL_WIDTH + COUNT_WIDTH + 1;
    let mut out = String::new();
    out.push_str(&format!("┌{:─<inner$}┐\n", "", inner = inner));
    out.push_str(&format!("│ {} │\n", truncate_with_padding(title, inner - 2)));
    out.push_str(&format!("├{:─<lw$}┬{:─<cw$}┤\n", "", "", lw = LABEL_WIDTH, cw = COUNT_WIDTH));
    out.push_str(&format!(
        "│ {} │ {} │\n",
        truncate_with_padding("Change", LABEL_WIDTH - 2),
        truncate_with_padding("Count", COUNT_WIDTH - 2)
    ));
    out.push_str(&format!("├{:─<lw$}┼{:─<cw$}┤", "", "", lw = LABEL_WIDTH, cw = COUNT_WIDTH));
    out
}

/// Format the summary table footer
pub fn format_summary_footer() -> String {
    format!("└{:─<lw$}┴{:─<cw$}┘", "", "", lw = LABEL_WIDTH, cw = COUNT_WIDTH)
}

/// Print the change summary table to stderr
pub fn print_summary_table(title: &str, summary: &ChangeSummary) {
    let stderr = io::stderr();
    let mut writer = TableWriter::new(stderr.lock(), true);
    if let Err(e) = writer.write_summary_table(title, summary) {
        log::debug!("Failed to print summary table: {}", e);
    }
}

/// Get display width of a string (accounting for Unicode)
pub fn display_width(s: &str) -> usize {
    // Use unicode-width crate for accurate width calculation
    UnicodeWidthStr::width(s)
}

/// Truncate and pad string to exact width
pub fn truncate_with_padding(s: &str, width: usize) -> String {
    let display_w = display_width(s);

    if display_w > width {
        let mut result = String::new();
        let mut current_width = 0;

        // Reserve space for "..."
        let target_width = if width >= 3 { width - 3 } else { width };

        for c in s.chars() {
            let c_width = UnicodeWidthChar::width(c).unwrap_or(1);
            if current_width + c_width > target_width {
                break;
            }
            result.push(c);
            current_width += c_width;
        }

        if width >= 3 {
            result.push_str("...");
            current_width += 3;
        }

        if current_width < width {
            result.push_str(&" ".repeat(width - current_width));
        }

        result
    } else {
        format!("{}{}", s, " ".repeat(width - display_w))
    }
}

#[cfg(test)]
#[path = "console_format_test.rs"]
mod console_format_test;
