/// Operator dispatch.
///
/// Routes each binary operator to the handler for its operator class.
pub mod core;

/// Arithmetic on numbers and string concatenation.
///
/// Integer arithmetic is checked; mixed operands are promoted to floats.
pub mod scalar;

/// Ordering and equality comparisons.
pub mod comparison;

/// Logical `&&` and `||` on booleans.
pub mod logic;
