//! Diagnostic emitters.
//!
//! [`TextEmitter`] renders one diagnostic per line in the conventional
//! `file:line:col: severity[code]: message` shape understood by editors and
//! CI log parsers, with the optional note on an indented follow-up line.

use std::io::{self, Write};

use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, Severity};

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const WARNING: &str = "\x1b[1;33m"; // Bold yellow
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Returns "s" for plural counts, "" for singular.
#[inline]
fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Trait for emitting diagnostics.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Emit multiple diagnostics.
    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        for diag in diagnostics {
            self.emit(diag);
        }
    }

    /// Flush any buffered output.
    fn flush(&mut self);

    /// Emit a summary of errors/warnings.
    fn emit_summary(&mut self, error_count: usize, warning_count: usize);
}

/// Line-oriented emitter for one source file.
pub struct TextEmitter<'src, W: Write> {
    writer: W,
    file_name: &'src str,
    source: &'src str,
    lines: LineOffsetTable,
    colors: bool,
}

impl<'src, W: Write> TextEmitter<'src, W> {
    /// Create an emitter resolving spans against `source`.
    pub fn new(writer: W, file_name: &'src str, source: &'src str, colors: bool) -> Self {
        TextEmitter {
            writer,
            file_name,
            source,
            lines: LineOffsetTable::build(source),
            colors,
        }
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_severity(&mut self, severity: Severity) {
        let color = match severity {
            Severity::Error => colors::ERROR,
            Severity::Warning => colors::WARNING,
        };
        self.write_colored(&severity.to_string(), color);
    }
}

impl<'src> TextEmitter<'src, io::Stderr> {
    /// Emitter writing to standard error.
    pub fn stderr(file_name: &'src str, source: &'src str, colors: bool) -> Self {
        TextEmitter::new(io::stderr(), file_name, source, colors)
    }
}

impl<W: Write> DiagnosticEmitter for TextEmitter<'_, W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        let (line, col) = self
            .lines
            .offset_to_line_col(self.source, diagnostic.span.start);
        let _ = write!(self.writer, "{}:{line}:{col}: ", self.file_name);
        self.write_severity(diagnostic.severity);
        let _ = writeln!(
            self.writer,
            "[{}]: {}",
            diagnostic.code.as_str(),
            diagnostic.message
        );

        if let Some(note) = &diagnostic.note {
            let _ = write!(self.writer, "  = ");
            self.write_colored("note", colors::BOLD);
            let _ = writeln!(self.writer, ": {note}");
        }
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize, warning_count: usize) {
        if error_count == 0 && warning_count == 0 {
            return;
        }
        let _ = write!(self.writer, "{}: ", self.file_name);
        if error_count > 0 {
            self.write_colored("error", colors::ERROR);
            let _ = write!(
                self.writer,
                ": {error_count} error{}",
                plural_s(error_count)
            );
            if warning_count > 0 {
                let _ = write!(
                    self.writer,
                    ", {warning_count} warning{}",
                    plural_s(warning_count)
                );
            }
            let _ = writeln!(self.writer);
        } else {
            self.write_colored("warning", colors::WARNING);
            let _ = writeln!(
                self.writer,
                ": {warning_count} warning{}",
                plural_s(warning_count)
            );
        }
    }
}
