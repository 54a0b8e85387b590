use std::io::{self, Write};

use darja::interpreter::{
    session::{Session, SessionConfig, SessionState, Termination},
    value::core::Value,
};

fn output(buffer: &[u8]) -> &str {
    std::str::from_utf8(buffer).expect("session output is UTF-8")
}

#[test]
fn lines_are_evaluated_as_they_arrive() {
    let mut session = Session::new(SessionConfig::default());
    let mut out = Vec::new();

    session.feed_line("x = 4", &mut out).unwrap();
    assert_eq!(session.environment().get("x"), Some(&Value::Integer(4)));
    assert!(out.is_empty());

    session.feed_line("kteb x * 2", &mut out).unwrap();
    assert_eq!(output(&out), "8\n");
    assert_eq!(session.line_number(), 2);
    assert_eq!(session.state(), SessionState::Running);
}

#[test]
fn block_is_collected_until_braces_balance() {
    let mut session = Session::new(SessionConfig::default());
    let mut out = Vec::new();

    session.feed_line("ila sah {", &mut out).unwrap();
    assert!(session.awaiting_block());

    session.feed_line("    kteb \"dakhel\"", &mut out).unwrap();
    assert!(session.awaiting_block());
    assert!(out.is_empty());

    session.feed_line("}", &mut out).unwrap();
    assert!(!session.awaiting_block());
    assert_eq!(output(&out), "dakhel\n");
}

#[test]
fn sentinel_terminates_and_later_lines_are_ignored() {
    let mut session = Session::new(SessionConfig::default());
    let mut out = Vec::new();

    let state = session.feed_line("khlas", &mut out).unwrap();
    assert_eq!(state, SessionState::Terminated(Termination::Sentinel { line: 1 }));
    assert!(session.is_terminated());

    let state = session.feed_line("kteb 1", &mut out).unwrap();
    assert_eq!(state, SessionState::Terminated(Termination::Sentinel { line: 1 }));
    assert_eq!(session.line_number(), 1);
    assert!(out.is_empty());
}

#[test]
fn finish_keeps_the_first_termination_cause() {
    let mut session = Session::new(SessionConfig::default());
    let mut out = Vec::new();

    session.feed_line("x = 1", &mut out).unwrap();
    session.feed_line("khlas", &mut out).unwrap();

    assert_eq!(session.finish(&mut out).unwrap(), Termination::Sentinel { line: 2 });
}

#[test]
fn finish_reports_a_pending_block() {
    let mut session = Session::new(SessionConfig::default());
    let mut out = Vec::new();

    session.feed_line("x = 0", &mut out).unwrap();
    session.feed_line("mazal x < 3 {", &mut out).unwrap();
    session.feed_line("x = x + 1", &mut out).unwrap();

    assert_eq!(session.finish(&mut out).unwrap(), Termination::EndOfInput);
    assert_eq!(output(&out),
               "Error on line 2, column 13: Block opened here is never closed.\n");
    assert_eq!(session.diagnostics(), 1);
    assert_eq!(session.environment().get("x"), Some(&Value::Integer(0)));
}

#[test]
fn errors_never_end_the_session() {
    let mut session = Session::new(SessionConfig::default());
    let mut out = Vec::new();

    for line in ["kteb 1 / 0", "x = (", "kteb nope", "x = 5"] {
        let state = session.feed_line(line, &mut out).unwrap();
        assert_eq!(state, SessionState::Running);
    }

    assert_eq!(session.diagnostics(), 3);
    assert_eq!(session.environment().get("x"), Some(&Value::Integer(5)));
}

#[test]
fn run_stops_reading_after_the_sentinel() {
    let mut session = Session::new(SessionConfig::default());
    let mut out = Vec::new();
    let mut pulled = 0;

    let lines = ["kteb 1", "khlas", "kteb 2", "kteb 3"].into_iter().map(|line| {
                                                                    pulled += 1;
                                                                    Ok::<_, io::Error>(line.to_string())
                                                                });

    let end = session.run(lines, &mut out).unwrap();

    assert_eq!(end, Termination::Sentinel { line: 2 });
    assert_eq!(pulled, 2);
    assert_eq!(output(&out), "1\n");
}

#[test]
fn run_propagates_input_errors() {
    let mut session = Session::new(SessionConfig::default());
    let mut out = Vec::new();

    let lines = vec![Ok("kteb 1".to_string()),
                     Err(io::Error::new(io::ErrorKind::InvalidData, "bad line"))];

    let err = session.run(lines, &mut out).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    assert_eq!(output(&out), "1\n");
}

struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn output_failures_are_returned() {
    let mut session = Session::new(SessionConfig::default());

    let err = session.feed_line("kteb 1", &mut FailingWriter).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
}

#[test]
fn environment_outlives_the_session() {
    let mut session = Session::new(SessionConfig::default());
    let mut out = Vec::new();

    session.run(["a = 1", "b = \"zouj\""].map(|line| Ok::<_, io::Error>(line.to_string())), &mut out)
           .unwrap();

    let env = session.into_environment();
    assert_eq!(env.bindings(),
               vec![("a", &Value::Integer(1)), ("b", &Value::from("zouj"))]);
}

#[test]
fn malformed_line_with_open_brace_is_reported_alone() {
    let mut session = Session::new(SessionConfig::default());
    let mut out = Vec::new();

    let state = session.feed_line("x = {", &mut out).unwrap();
    assert_eq!(state, SessionState::Running);
    assert!(!session.awaiting_block());

    session.feed_line("y = 2", &mut out).unwrap();
    session.feed_line("kteb y", &mut out).unwrap();

    assert_eq!(output(&out),
               "Error on line 1, column 5: Unexpected token '{', expected an expression.\n2\n");
    assert_eq!(session.environment().get("y"), Some(&Value::Integer(2)));
    assert_eq!(session.environment().get("x"), None);
}

#[test]
fn broken_block_header_is_not_collected() {
    let mut session = Session::new(SessionConfig::default());
    let mut out = Vec::new();

    session.feed_line("ila x > {", &mut out).unwrap();
    assert!(!session.awaiting_block());
    assert_eq!(session.diagnostics(), 1);

    session.feed_line("kteb 1", &mut out).unwrap();
    assert!(output(&out).ends_with("1\n"));
}

#[test]
fn deeply_nested_lines_are_diagnostics() {
    let mut session = Session::new(SessionConfig::default());
    let mut out = Vec::new();

    let grouped = format!("x = {}1{}", "(".repeat(10_000), ")".repeat(10_000));
    let negated = format!("y = {}1", "-".repeat(10_000));

    for line in [grouped.as_str(), negated.as_str()] {
        let state = session.feed_line(line, &mut out).unwrap();
        assert_eq!(state, SessionState::Running);
    }
    session.feed_line("kteb \"mazal\"", &mut out).unwrap();

    assert_eq!(session.diagnostics(), 2);
    assert!(output(&out).contains("Expression is nested too deeply."));
    assert!(output(&out).ends_with("mazal\n"));
    assert!(session.environment().is_empty());
}

#[test]
fn deeply_nested_pending_block_is_a_diagnostic() {
    let mut session = Session::new(SessionConfig::default());
    let mut out = Vec::new();

    for _ in 0..100 {
        session.feed_line("ila sah {", &mut out).unwrap();
    }
    assert!(session.awaiting_block());
    for _ in 0..100 {
        session.feed_line("}", &mut out).unwrap();
    }

    assert!(!session.awaiting_block());
    assert_eq!(session.diagnostics(), 1);
    assert_eq!(session.state(), SessionState::Running);
}
