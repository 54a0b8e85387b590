/// The environment module holds the session's variables.
///
/// The environment maps each variable name to exactly one value. It is created
/// once per session, passed explicitly to the evaluator, and mutated only by
/// successful assignments.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks a parsed statement, evaluates its expressions, updates
/// the environment and emits printed text. It is the core execution engine of
/// the interpreter.
///
/// # Responsibilities
/// - Evaluates statements and expressions, performing all supported
///   operations.
/// - Handles assignment, printing, conditionals, and loops.
/// - Reports evaluation errors such as division by zero or type mismatches.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads raw source text and produces a lazy stream of tokens, each
/// corresponding to a meaningful language element such as a number, an
/// identifier, an operator, or a keyword. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind, text, and
///   position.
/// - Turns unrecognized characters into error tokens instead of failing.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the tokens of one line (or of a multi-line block) and
/// constructs the statement they describe.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (statements, expressions).
/// - Validates the grammar, reporting errors with position and a hint of what
///   was expected.
/// - Recognizes the `khlas` sentinel.
pub mod parser;
/// The session module drives the interpreter one input line at a time.
///
/// # Responsibilities
/// - Pulls lines from any line source and feeds them through lexer, parser and
///   evaluator.
/// - Collects multi-line blocks until their braces balance.
/// - Reports every error without ending the session.
/// - Implements the `Running` / `Terminated` state machine.
pub mod session;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum and its rendering.
/// - Provides checked conversions and type names for error messages.
pub mod value;
