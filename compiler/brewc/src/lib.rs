//! Brew driver library.
//!
//! Argument parsing, command handlers and logging setup for the `brewc`
//! binary. Everything that touches the file system lives here; the parser
//! crates only ever see source text.

pub mod commands;
pub mod config;
pub mod error;
mod tracing_setup;

pub use config::{Command, DriverConfig};
pub use error::DriverError;
pub use tracing_setup::init_tracing;

use std::io::{self, Write};

/// Run `config.command`, writing normal output to `out`.
///
/// Diagnostics from `check` go to stderr. Returns `true` when the command
/// found errors in its input.
pub fn run<W: Write>(config: &DriverConfig, out: &mut W) -> Result<bool, DriverError> {
    match &config.command {
        Command::Help => {
            write_usage(out)?;
            Ok(false)
        }
        Command::Version => {
            writeln!(out, "brewc {}", env!("CARGO_PKG_VERSION"))?;
            Ok(false)
        }
        Command::Lex(path) => commands::lex_file(out, path),
        Command::Parse(path) => commands::parse_file(out, path),
        Command::Tree(path) => commands::tree_file(out, path),
        Command::Check(paths) => {
            let report = commands::check_paths(paths, config.parallel, config.colors)?;
            let mut stderr = io::stderr().lock();
            for file in &report.files {
                if config.verbose && file.is_clean() {
                    writeln!(out, "ok {}", file.path.display())?;
                }
                stderr.write_all(file.rendered.as_bytes())?;
            }
            for failure in &report.failures {
                writeln!(stderr, "error: {failure}")?;
            }
            writeln!(
                out,
                "Checked {} file{}: {} error{}, {} warning{}",
                report.files.len(),
                plural_s(report.files.len()),
                report.error_count(),
                plural_s(report.error_count()),
                report.warning_count(),
                plural_s(report.warning_count()),
            )?;
            Ok(report.has_errors())
        }
    }
}

fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Print the help text.
pub fn write_usage<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Brew parser core")?;
    writeln!(out)?;
    writeln!(out, "Usage: brewc <command> [options]")?;
    writeln!(out)?;
    writeln!(out, "Commands:")?;
    writeln!(out, "  lex <file.java>      Tokenize and display tokens")?;
    writeln!(out, "  parse <file.java>    Parse and display a declaration summary")?;
    writeln!(out, "  tree <file.java>     Parse and display the syntax tree")?;
    writeln!(out, "  check <path>...      Parse every .java file under the paths")?;
    writeln!(out, "  help                 Show this help message")?;
    writeln!(out, "  version              Show version information")?;
    writeln!(out)?;
    writeln!(out, "Options:")?;
    writeln!(out, "  --color, --no-color  Force colored diagnostics on or off")?;
    writeln!(out, "  --no-parallel        Check files sequentially")?;
    writeln!(out, "  --verbose            List clean files during check")?;
    writeln!(out)?;
    writeln!(out, "Environment:")?;
    writeln!(out, "  RUST_LOG             Log filter, e.g. brew_parse=debug")?;
    writeln!(out, "  BREW_LOG_TREE        Render logs as an indented span tree")?;
    writeln!(out)?;
    writeln!(out, "Examples:")?;
    writeln!(out, "  brewc tree Main.java")?;
    writeln!(out, "  brewc check src/ --no-color")?;
    Ok(())
}
