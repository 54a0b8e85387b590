/// Core value representation.
///
/// Defines the `Value` enum every expression evaluates to, its rendering for
/// `kteb`, and the checked accessors the evaluator uses to enforce types.
pub mod core;
