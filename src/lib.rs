//! # darja
//!
//! darja is an interactive interpreter for DarjaLang, a small toy language
//! with Algerian Darja keywords. Source is consumed one line at a time: each
//! line is lexed, parsed into a statement and evaluated against a session-wide
//! environment. A line holding only `khlas` ends the session.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::{self, BufRead};

use crate::interpreter::{
    environment::Environment,
    session::{Session, SessionConfig, Termination},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Statement` and `Expr` enums that represent the
/// syntactic structure of a DarjaLang line (or block) as a tree. The AST is
/// built by the parser and walked by the evaluator.
///
/// # Responsibilities
/// - Defines closed sum types for every statement and expression form.
/// - Attaches source positions to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for lexing, parsing, and evaluation.
///
/// Every failure in the interpreter is local to the line that caused it. The
/// error types carry the position of the failure and render as a single
/// diagnostic line.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line and column numbers for context.
/// - Unifies them under [`error::Diagnostic`] for reporting.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, the environment and
/// the session loop that drives them line by line.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and values.
/// - Owns the session state machine and its termination protocol.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Convert between `i64` and `f64` without silent data loss.
pub mod util;

/// Everything a finished run of [`run_source`] produced.
#[derive(Debug)]
pub struct RunReport {
    /// The text the session wrote: printed values and diagnostics.
    pub output:      String,
    /// Why the session ended.
    pub termination: Termination,
    /// The environment as it was when the session ended.
    pub environment: Environment,
    /// How many diagnostics were reported.
    pub diagnostics: usize,
}

/// Runs a whole DarjaLang source text through a fresh session.
///
/// The source is split into lines and fed to a [`Session`] exactly as the
/// interactive driver would feed console input. Output and diagnostics are
/// captured in the returned report instead of being written to a terminal.
///
/// # Errors
/// Only I/O failures are returned; language errors are part of the output.
///
/// # Examples
/// ```
/// use darja::{interpreter::value::core::Value, run_source};
///
/// let report = run_source("x = 2\ny = x + 3\nkteb y\nkhlas", Default::default()).unwrap();
///
/// assert_eq!(report.output, "5\n");
/// assert_eq!(report.environment.get("y"), Some(&Value::Integer(5)));
/// assert_eq!(report.diagnostics, 0);
/// ```
pub fn run_source(source: &str, config: SessionConfig) -> io::Result<RunReport> {
    let mut session = Session::new(config);
    let mut output = Vec::new();

    let termination = session.run(source.as_bytes().lines(), &mut output)?;

    Ok(RunReport { output: String::from_utf8_lossy(&output).into_owned(),
                   termination,
                   diagnostics: session.diagnostics(),
                   environment: session.into_environment() })
}
