/// Binary operator evaluation logic.
///
/// Handles the execution of all binary operations in expressions, including
/// arithmetic, comparisons, and logical operators.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation and logical NOT.
pub mod unary;

/// Core evaluation logic.
///
/// Contains the `Evaluator`, the control flow result of a statement, the
/// output sink abstraction, and statement dispatch.
pub mod core;

/// Evaluation of conditionals and `mazal` loops.
///
/// Checks conditions, runs branch and loop bodies against the shared
/// environment, and enforces the optional iteration limit.
pub mod control_flow;

/// Utility functions for evaluation.
///
/// Provides expression dispatch and the helpers shared by evaluation logic.
pub mod utils;

/// Function evaluation.
///
/// Handles builtin function calls, argument checking, and return value
/// computation.
pub mod function;
