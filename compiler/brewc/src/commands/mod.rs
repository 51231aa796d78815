//! Command handlers for the `brewc` CLI.
//!
//! Each submodule implements one command. Handlers write to a caller
//! supplied writer so they can be driven from tests; shared helpers live
//! here in the module root.

use std::io::Write;
use std::path::Path;

use brew_diagnostic::emitter::{DiagnosticEmitter, TextEmitter};
use brew_diagnostic::Diagnostic;
use tracing::debug;

use crate::error::DriverError;

mod check;
mod inspect;

pub use check::{check_paths, collect_sources, CheckReport, FileReport};
pub use inspect::{lex_file, parse_file, tree_file, write_summary, write_tokens, write_tree};

/// Read a source file, classifying I/O failures.
pub fn read_file(path: &Path) -> Result<String, DriverError> {
    let content = std::fs::read_to_string(path).map_err(|e| DriverError::from_io(path, e))?;
    if u32::try_from(content.len()).is_err() {
        return Err(DriverError::TooLarge {
            path: path.to_path_buf(),
        });
    }
    debug!(path = %path.display(), bytes = content.len(), "read source");
    Ok(content)
}

/// Render `diagnostics` in `file:line:col: severity[code]: message` form.
pub fn render_diagnostics<W: Write>(
    out: W,
    file_name: &str,
    source: &str,
    diagnostics: &[Diagnostic],
    colors: bool,
) {
    let mut emitter = TextEmitter::new(out, file_name, source, colors);
    emitter.emit_all(diagnostics);
    let errors = diagnostics.iter().filter(|d| d.is_error()).count();
    emitter.emit_summary(errors, diagnostics.len() - errors);
    emitter.flush();
}
