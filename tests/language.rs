use std::fs;

use darja::{
    RunReport,
    ast::Statement,
    error::{EvalError, ParseError},
    interpreter::{
        environment::Environment,
        evaluator::core::Evaluator,
        lexer::{Position, tokenize},
        parser::statement::parse_line,
        session::{SessionConfig, Termination},
        value::core::Value,
    },
    run_source,
};
use walkdir::WalkDir;

#[test]
fn example_scripts_produce_expected_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "darja"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                             panic!("Failed to read {expected_path:?}: {e}")
                                                         });

        count += 1;
        let report = run(&source);
        assert_eq!(report.output, expected, "Script {path:?} produced unexpected output");
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

fn run(src: &str) -> RunReport {
    run_with(src, SessionConfig::default())
}

fn run_with(src: &str, config: SessionConfig) -> RunReport {
    run_source(src, config).unwrap_or_else(|e| panic!("In-memory run failed: {e}"))
}

fn assert_output(src: &str, expected: &str) {
    let report = run(src);
    assert_eq!(report.output, expected, "Script:\n{src}");
    assert_eq!(report.diagnostics, 0, "Script reported errors:\n{}", report.output);
}

fn assert_error(src: &str, fragment: &str) {
    let report = run(src);
    assert!(report.diagnostics > 0, "Script succeeded but was expected to fail:\n{src}");
    assert!(report.output.contains(fragment),
            "Expected {fragment:?} in output:\n{}",
            report.output);
}

#[test]
fn assignment_and_basic_arithmetic() {
    assert_output("x = 1 + 2\nkteb x", "3\n");
    assert_output("kteb 7 * 9, 8 - 5, 10 / 2, 7 % 3", "63 3 5 1\n");
    assert_output("kteb -7 / 2, -7 % 2", "-3 -1\n");
}

#[test]
fn operator_precedence_and_associativity() {
    assert_output("kteb 2 + 3 * 4", "14\n");
    assert_output("kteb (2 + 3) * 4", "20\n");
    assert_output("kteb 10 - 4 - 3", "3\n");
    assert_output("kteb 100 / 10 / 5", "2\n");
    assert_output("kteb -2 * 3", "-6\n");
    assert_output("kteb --4", "4\n");
    assert_output("kteb 2 < 3 && 3 < 4", "sah\n");
    assert_output("kteb sah || ghalet && ghalet", "sah\n");
    assert_output("kteb 1 < 2 == sah", "sah\n");
    assert_output("kteb !ghalet", "sah\n");
}

#[test]
fn floats_and_mixed_arithmetic() {
    assert_output("kteb 1.5 + 1.5", "3.0\n");
    assert_output("kteb 7.0 / 2", "3.5\n");
    assert_output("kteb 2 * 0.25", "0.5\n");
    assert_output("kteb 5.5 % 2", "1.5\n");
    assert_output("kteb 10000000000000000.0", "10000000000000000.0\n");
    assert_output("kteb 4294967296.0 * 4294967296.0", "18446744073709551616.0\n");
}

#[test]
fn strings_booleans_and_unit() {
    assert_output("kteb \"salam\" + \" \" + \"khoya\"", "salam khoya\n");
    assert_output("kteb \"a\\tb\"", "a\tb\n");
    assert_output("kteb \"say \\\"hi\\\"\"", "say \"hi\"\n");
    assert_output("kteb sah, ghalet, walou", "sah ghalet walou\n");
}

#[test]
fn comparisons() {
    assert_output("kteb 2 == 2.0", "sah\n");
    assert_output("kteb 3 != 4", "sah\n");
    assert_output("kteb \"a\" < \"b\"", "sah\n");
    assert_output("kteb 1 == \"1\"", "ghalet\n");
    assert_output("kteb walou == walou", "sah\n");
    assert_output("kteb 2.5 >= 3", "ghalet\n");
}

#[test]
fn logical_operators_short_circuit() {
    assert_output("kteb ghalet && y", "ghalet\n");
    assert_output("kteb sah || 1 / 0", "sah\n");
    assert_error("kteb sah && 1", "Type mismatch: expected a boolean, found integer");
}

#[test]
fn conditionals() {
    assert_output("x = 5\nila x > 3 {\n    kteb \"kbir\"\n} wila {\n    kteb \"sghir\"\n}",
                  "kbir\n");
    assert_output("x = 0\nila x > 0 {\nkteb 1\n} wila ila x < 0 {\nkteb 2\n} wila {\nkteb 3\n}",
                  "3\n");
    assert_output("ila sah { kteb 1 }", "1\n");
    assert_output("ila ghalet { kteb 1 }\nkteb 2", "2\n");
}

#[test]
fn loops_see_their_own_mutations() {
    assert_output("i = 0\ntotal = 0\nmazal i < 5 {\n    i = i + 1\n    total = total + i\n}\nkteb total",
                  "15\n");
    assert_output("i = 0\nmazal i < 6 {\n    ila i % 2 == 0 {\n        kteb i\n    }\n    i = i + 1\n}",
                  "0\n2\n4\n");
    assert_output("mazal ghalet {\n    kteb 1\n}", "");
}

#[test]
fn blocks_do_not_open_a_scope() {
    let report = run("ila sah {\n    inner = 42\n}");
    assert_eq!(report.environment.get("inner"), Some(&Value::Integer(42)));
}

#[test]
fn builtin_functions() {
    assert_output("kteb abs(-3), min(4, 2, 8), max(1, 2.5), sqrt(16)", "3 2 2.5 4.0\n");
    assert_output("kteb int(3.9), float(2), str(10) + \"!\", len(\"salam\"), type(walou)",
                  "3 2.0 10! 5 walou\n");
    assert_output("kteb type(1), type(1.0), type(sah), type(\"\")",
                  "integer float boolean string\n");
    assert_error("kteb foo(1)", "Unknown function 'foo'.");
    assert_error("kteb abs(1, 2)", "'abs' takes 1 argument(s) but 2 were given.");
    assert_error("kteb sqrt(-1)", "Invalid argument");
    assert_error("kteb len(5)", "Type mismatch: len() expects a string, found integer");
}

#[test]
fn division_by_zero_leaves_environment_unchanged() {
    let report = run("x = 1\nx = 1 / 0\nkteb x");
    assert_eq!(report.output, "Error on line 2, column 7: Division by zero.\n1\n");
    assert_eq!(report.environment.get("x"), Some(&Value::Integer(1)));

    assert_error("kteb 5 % 0", "Division by zero.");
    assert_error("kteb 1.0 / 0.0", "Division by zero.");
}

#[test]
fn overflow_is_reported() {
    assert_error("kteb 9223372036854775807 + 1", "Numeric overflow");
    assert_error("kteb 9223372036854775808", "Numeric overflow");
    assert_error("x = 3037000500 * 3037000500", "Numeric overflow");
    assert_error("kteb abs(-9223372036854775807 - 1)", "Numeric overflow");
}

#[test]
fn type_errors_are_reported() {
    assert_error("kteb 1 + \"a\"", "Type mismatch: cannot apply '+' to integer and string.");
    assert_error("ila 1 { kteb 1 }", "Type mismatch: expected a boolean, found integer");
    assert_error("kteb !1", "Type mismatch");
    assert_error("kteb -sah", "cannot negate a boolean");
    assert_error("kteb \"a\" < 1", "cannot apply '<' to string and integer");
}

#[test]
fn unbound_variable_reports_position() {
    let report = run("kteb y");
    assert_eq!(report.output, "Error on line 1, column 6: Unbound variable 'y'.\n");
}

#[test]
fn parse_errors_are_reported_and_skipped() {
    let report = run("x = 1 +\nkhlas");
    assert_eq!(report.output,
               "Error on line 1, column 8: Incomplete expression, expected an expression.\n");
    assert_eq!(report.diagnostics, 1);
    assert_eq!(report.termination, Termination::Sentinel { line: 2 });
    assert!(report.environment.is_empty());

    assert_error("kteb (1 + 2", "Error on line 1, column 6: Unmatched '('.");
    assert_error("x = 1 2", "Extra tokens after statement. Check your input: '2'");
    assert_error("x = $", "Error on line 1, column 5: Unrecognized character '$'.");
    assert_error("kteb \"open", "Unterminated string");
    assert_error("wila { kteb 1 }", "Unexpected token 'wila'");
}

#[test]
fn sentinel_ends_the_session() {
    let report = run("x = 1\nkhlas\nkteb x");
    assert_eq!(report.output, "");
    assert_eq!(report.termination, Termination::Sentinel { line: 2 });

    let report = run("khlas // bye");
    assert_eq!(report.termination, Termination::Sentinel { line: 1 });
}

#[test]
fn misplaced_sentinel_is_an_error() {
    assert_error("x = khlas", "'khlas' must stand alone on its own line.");
    assert_error("khlas 1", "'khlas' must stand alone on its own line.");
    assert_error("kteb 1 khlas", "'khlas' must stand alone on its own line.");
    assert_error("ila sah { khlas }", "'khlas' must stand alone on its own line.");

    let report = run("x = khlas\nx = 2");
    assert_eq!(report.termination, Termination::EndOfInput);
    assert_eq!(report.environment.get("x"), Some(&Value::Integer(2)));
}

#[test]
fn empty_input_terminates_quietly() {
    let report = run("");
    assert_eq!(report.output, "");
    assert_eq!(report.diagnostics, 0);
    assert_eq!(report.termination, Termination::EndOfInput);
}

#[test]
fn blank_lines_and_comments_are_ignored() {
    assert_output("// comment\n\nx = 1 // trailing\n   \nkteb x", "1\n");
}

#[test]
fn repeated_assignment_keeps_environment_size() {
    let report = run("x = 1\nx = 2\nx = x + 1\ny = x");
    assert_eq!(report.environment.len(), 2);
    assert_eq!(report.environment.get("x"), Some(&Value::Integer(3)));
    assert_eq!(report.environment.get("y"), Some(&Value::Integer(3)));
}

#[test]
fn unterminated_block_at_end_of_input() {
    let report = run("ila sah {\nkteb 1");
    assert_eq!(report.output,
               "Error on line 1, column 9: Block opened here is never closed.\n");
    assert_eq!(report.termination, Termination::EndOfInput);
}

#[test]
fn sentinel_inside_pending_block_terminates() {
    let report = run("mazal sah {\nkhlas\nkteb 1");
    assert_eq!(report.output,
               "Error on line 1, column 11: Block opened here is never closed.\n");
    assert_eq!(report.termination, Termination::Sentinel { line: 2 });
}

#[test]
fn loop_iteration_limit() {
    let config = SessionConfig { max_loop_iterations: Some(3),
                                 ..SessionConfig::default() };
    let report = run_with("i = 0\nmazal sah {\n    kteb i\n    i = i + 1\n}", config);

    assert_eq!(report.output,
               "0\n1\n2\nError on line 2, column 1: Loop exceeded the limit of 3 iterations.\n");
    assert_eq!(report.environment.get("i"), Some(&Value::Integer(3)));
}

#[test]
fn output_before_a_failing_iteration_is_kept() {
    let report = run("i = 3\nmazal sah {\n    kteb 10 / i\n    i = i - 1\n}");

    assert_eq!(report.output, "3\n5\n10\nError on line 3, column 13: Division by zero.\n");
    assert_eq!(report.environment.get("i"), Some(&Value::Integer(0)));
}

#[test]
fn echo_prints_expression_results() {
    let config = SessionConfig { echo_results: true,
                                 ..SessionConfig::default() };
    let report = run_with("1 + 1\nx = 2\nx\nwalou\nkteb 7", config);

    assert_eq!(report.output, "2\n2\n7\n");
}

#[test]
fn evaluating_an_unparsed_line_returns_its_parse_error() {
    let tokens: Vec<_> = tokenize("x = 1 +", 3).collect();
    let statement = parse_line(&tokens);
    let Statement::Invalid { error } = &statement else {
        panic!("expected an invalid statement");
    };

    let mut env = Environment::new();
    let mut printed: Vec<String> = Vec::new();
    let err = Evaluator::default().evaluate(&statement, &mut env, &mut printed)
                                  .unwrap_err();

    assert_eq!(err, EvalError::Unparsed(error.clone()));
    assert_eq!(err.position(), Position::new(3, 8));
    assert_eq!(err.to_string(), error.to_string());
    assert!(matches!(err, EvalError::Unparsed(ParseError::IncompleteExpression { .. })));
    assert!(env.is_empty());
    assert!(printed.is_empty());
}

#[test]
fn deep_nesting_does_not_stop_the_session() {
    let src = format!("x = {}1{}\ny = {}1\nkteb \"ba9i\"",
                      "(".repeat(10_000),
                      ")".repeat(10_000),
                      "-".repeat(10_000));
    let report = run(&src);

    assert_eq!(report.diagnostics, 2);
    assert_eq!(report.termination, Termination::EndOfInput);
    assert!(report.output.starts_with("Error on line 1, column 69: Expression is nested too deeply.\n"));
    assert!(report.output.ends_with("ba9i\n"));
}

#[test]
fn open_brace_on_a_bad_line_does_not_swallow_later_lines() {
    let report = run("x = {\ny = 2\nkteb y\nkhlas");

    assert_eq!(report.output,
               "Error on line 1, column 5: Unexpected token '{', expected an expression.\n2\n");
    assert_eq!(report.environment.get("y"), Some(&Value::Integer(2)));
    assert_eq!(report.termination, Termination::Sentinel { line: 4 });
}
