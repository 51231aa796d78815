//! Command-line configuration.

use std::io::IsTerminal;
use std::path::PathBuf;

use crate::error::DriverError;

/// The subcommand to run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
    /// Tokenize one file and print the token stream.
    Lex(PathBuf),
    /// Parse one file and print a summary.
    Parse(PathBuf),
    /// Parse one file and print the syntax tree.
    Tree(PathBuf),
    /// Parse every `.java` file under the given paths.
    Check(Vec<PathBuf>),
    Help,
    Version,
}

/// Everything parsed from argv.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DriverConfig {
    pub command: Command,
    /// ANSI colors in diagnostics.
    pub colors: bool,
    /// Parse files on the rayon pool.
    pub parallel: bool,
    /// Print per-file status lines during `check`.
    pub verbose: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        DriverConfig {
            command: Command::Help,
            colors: false,
            parallel: true,
            verbose: false,
        }
    }
}

impl DriverConfig {
    /// Parse arguments, excluding the program name.
    ///
    /// Flags may appear anywhere; `-v` alone means `version`. Colors default
    /// to on when stderr is a terminal.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, DriverError> {
        let mut config = DriverConfig {
            colors: std::io::stderr().is_terminal(),
            ..DriverConfig::default()
        };
        let mut positional: Vec<&str> = Vec::new();

        for arg in args.iter().map(AsRef::as_ref) {
            match arg {
                "--no-color" => config.colors = false,
                "--color" => config.colors = true,
                "--no-parallel" => config.parallel = false,
                "--verbose" => config.verbose = true,
                "-v" if positional.is_empty() => positional.push("version"),
                "-v" => config.verbose = true,
                "--help" | "-h" => positional.insert(0, "help"),
                "--version" | "-V" => positional.insert(0, "version"),
                flag if flag.starts_with('-') && flag.len() > 1 => {
                    return Err(DriverError::usage(format!("unknown option '{flag}'")));
                }
                _ => positional.push(arg),
            }
        }

        let Some((&name, rest)) = positional.split_first() else {
            return Ok(config);
        };

        config.command = match name {
            "help" => Command::Help,
            "version" => Command::Version,
            "lex" => Command::Lex(single_file("lex", rest)?),
            "parse" => Command::Parse(single_file("parse", rest)?),
            "tree" => Command::Tree(single_file("tree", rest)?),
            "check" => {
                if rest.is_empty() {
                    return Err(DriverError::usage("Usage: brewc check <path>..."));
                }
                Command::Check(rest.iter().map(PathBuf::from).collect())
            }
            other => return Err(DriverError::UnknownCommand(other.to_string())),
        };
        Ok(config)
    }
}

fn single_file(command: &str, rest: &[&str]) -> Result<PathBuf, DriverError> {
    match rest {
        [path] => Ok(PathBuf::from(path)),
        [] => Err(DriverError::usage(format!("Usage: brewc {command} <file.java>"))),
        [_, extra, ..] => Err(DriverError::usage(format!(
            "unexpected argument '{extra}'\nUsage: brewc {command} <file.java>"
        ))),
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
