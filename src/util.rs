/// Numeric conversion helpers.
///
/// This module provides functions for converting between integer and
/// floating-point types without silent data loss. The evaluator uses them for
/// mixed integer/float arithmetic and for the `int`, `float` and `len`
/// builtins.
///
/// All functions return a `Result`, which is `Ok` if the conversion is valid,
/// or an error if the value is out of range.
pub mod num;
