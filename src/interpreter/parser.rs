/// Parser entry points shared by every grammar level.
///
/// Contains the `ParseResult` alias, the expression entry point, and the
/// control-flow statements (`ila`/`wila` conditionals and `mazal` loops).
pub mod core;

/// Unary and primary expressions.
///
/// Handles prefix operators, literals, variable references, builtin calls and
/// parenthesized expressions.
pub mod unary;

/// Binary operator parsing.
///
/// Implements the precedence levels from logical OR down to multiplication,
/// all left-associative.
pub mod binary;

/// Block parsing.
///
/// Parses `{ ... }` bodies of conditionals and loops, which may span several
/// input lines.
pub mod block;

/// Utility functions for the parser.
///
/// Provides token expectations, error construction, and comma-separated list
/// parsing.
pub mod utils;

/// Statement parsing.
///
/// Implements the top-level statement forms: termination, printing,
/// assignment, and expression statements, plus whole-line parsing with error
/// recovery.
pub mod statement;
