//! `check`: parse every `.java` file under a set of paths.
//!
//! Files are parsed independently on the rayon pool. Each parse owns its
//! whole state, so the only shared data is the read-only file list; output
//! is rendered per file into a buffer and printed in path order afterwards.

use std::path::{Path, PathBuf};

use brew_parse::ParseOptions;
use rayon::prelude::*;
use tracing::{debug, instrument};

use super::{read_file, render_diagnostics};
use crate::error::DriverError;

/// Outcome of checking one file.
#[derive(Clone, Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub errors: usize,
    pub warnings: usize,
    /// Diagnostics rendered as text, empty for a clean file.
    pub rendered: String,
}

impl FileReport {
    pub fn is_clean(&self) -> bool {
        self.errors == 0 && self.warnings == 0
    }
}

/// Outcome of a whole `check` run, in path order.
#[derive(Debug, Default)]
pub struct CheckReport {
    pub files: Vec<FileReport>,
    /// Files that could not be read.
    pub failures: Vec<DriverError>,
}

impl CheckReport {
    pub fn error_count(&self) -> usize {
        self.files.iter().map(|f| f.errors).sum()
    }

    pub fn warning_count(&self) -> usize {
        self.files.iter().map(|f| f.warnings).sum()
    }

    /// True if any file had a syntax error or could not be read.
    pub fn has_errors(&self) -> bool {
        !self.failures.is_empty() || self.files.iter().any(|f| f.errors > 0)
    }
}

/// Expand `paths` into the sorted list of source files to check.
///
/// Directories are walked recursively for `*.java`; explicitly named files
/// are kept whatever their extension.
pub fn collect_sources(paths: &[PathBuf]) -> Result<Vec<PathBuf>, DriverError> {
    let mut sources = Vec::new();
    for path in paths {
        let meta = std::fs::metadata(path).map_err(|e| DriverError::from_io(path, e))?;
        if meta.is_dir() {
            walk(path, &mut sources)?;
        } else {
            sources.push(path.clone());
        }
    }
    sources.sort();
    sources.dedup();
    Ok(sources)
}

fn walk(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), DriverError> {
    let entries = std::fs::read_dir(dir).map_err(|e| DriverError::from_io(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| DriverError::from_io(dir, e))?;
        let path = entry.path();
        let file_type = entry
            .file_type()
            .map_err(|e| DriverError::from_io(&path, e))?;
        if file_type.is_dir() {
            walk(&path, out)?;
        } else if path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("java"))
        {
            out.push(path);
        }
    }
    Ok(())
}

/// Parse every source under `paths`.
#[instrument(level = "debug", skip_all, fields(paths = paths.len(), parallel = parallel))]
pub fn check_paths(
    paths: &[PathBuf],
    parallel: bool,
    colors: bool,
) -> Result<CheckReport, DriverError> {
    let sources = collect_sources(paths)?;
    debug!(files = sources.len(), "collected sources");

    let results: Vec<Result<FileReport, DriverError>> = if parallel {
        sources.par_iter().map(|p| check_file(p, colors)).collect()
    } else {
        sources.iter().map(|p| check_file(p, colors)).collect()
    };

    let mut report = CheckReport::default();
    for result in results {
        match result {
            Ok(file) => report.files.push(file),
            Err(err) => report.failures.push(err),
        }
    }
    Ok(report)
}

fn check_file(path: &Path, colors: bool) -> Result<FileReport, DriverError> {
    let source = read_file(path)?;
    let name = path.display().to_string();
    let result = brew_parse::parse_with_options(&source, &ParseOptions::new().with_file_name(&name));

    let errors = result.errors().count();
    let warnings = result.warnings().count();
    let mut rendered = Vec::new();
    if !result.diagnostics.is_empty() {
        render_diagnostics(&mut rendered, &name, &source, &result.diagnostics, colors);
    }
    debug!(file = %name, errors, warnings, "checked");
    Ok(FileReport {
        path: path.to_path_buf(),
        errors,
        warnings,
        rendered: String::from_utf8_lossy(&rendered).into_owned(),
    })
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
