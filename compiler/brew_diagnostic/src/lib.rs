//! Diagnostic system for the Brew parser core.
//!
//! Every malformed construct is reported as a [`Diagnostic`] carrying:
//! - An error code for searchability
//! - A severity (error or warning)
//! - A clear message (what went wrong)
//! - A primary span (where it went wrong)
//! - An optional note (how the parser recovered)
//!
//! Diagnostics are values, never panics: a parse always returns its tree
//! together with the diagnostics gathered by a [`DiagnosticCollector`].

mod collector;
mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use collector::DiagnosticCollector;
pub use diagnostic::{Diagnostic, Severity};
pub use error_code::{ErrorCategory, ErrorCode};
