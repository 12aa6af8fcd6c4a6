use colored::Colorize;
use std::io::{self, Write};

use super::types::{StatusLevel, StatusMessage};

/// Write a status message with its semantic color
pub fn write_status<W: Write>(out: &mut W, status: &StatusMessage) -> io::Result<()> {
    let text = match status.level {
        StatusLevel::Info => status.text.normal(),
        StatusLevel::Success => status.text.green(),
        StatusLevel::Warning => status.text.yellow(),
        StatusLevel::Error => status.text.red(),
    };
    writeln!(out, "{}", text)
}

/// Print an error "dialog" to stderr: title, message, then details
pub fn show_error(title: impl AsRef<str>, message: impl AsRef<str>, details: impl AsRef<str>) {
    let mut err = io::stderr().lock();
    let _ = writeln!(err, "{}", title.as_ref().red().bold());
    let _ = writeln!(err, "{}", message.as_ref());
    if !details.as_ref().is_empty() {
        for line in details.as_ref().lines() {
            let _ = writeln!(err, "  {}", line.dimmed());
        }
    }
}
