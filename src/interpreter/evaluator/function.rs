/// Built-in function implementations.
///
/// Contains the numeric and conversion builtins: `abs`, `sqrt`, `int`,
/// `float`, `str`, `len` and `type`.
pub mod builtin;
/// `min` and `max` function implementations.
///
/// Returns the minimum or maximum value from a list of arguments.
pub mod min_max;

/// Builtin dispatch.
///
/// Holds the table of builtin names with their arities and implementations,
/// and the evaluator method that checks a call against it.
pub mod core;
