use std::io::{self, Write};

use crate::{
    ast::Statement,
    error::{Diagnostic, ParseError},
    interpreter::{
        environment::Environment,
        evaluator::core::{Evaluator, Flow, Output},
        lexer::{Position, Token, TokenKind, tokenize},
        parser::statement::parse_line,
        value::core::Value,
    },
};

/// Options a session is created with.
///
/// The defaults match a plain script run: results of expression statements
/// are not echoed and loops are unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionConfig {
    /// Print the value of every expression statement that is not `walou`.
    pub echo_results:        bool,
    /// Fail a `mazal` loop after this many iterations.
    pub max_loop_iterations: Option<u64>,
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// `khlas` was read on the given line.
    Sentinel {
        /// The line holding the sentinel.
        line: usize,
    },
    /// The line source ran out.
    EndOfInput,
}

/// The state of a session.
///
/// `Terminated` is absorbing: once reached, no further line is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Accepting lines.
    Running,
    /// Finished for the given reason.
    Terminated(Termination),
}

/// A block whose braces are not balanced yet.
struct PendingBlock {
    source:     String,
    first_line: usize,
    open:       Position,
    depth:      i64,
}

/// An interpreter session.
///
/// The session owns the environment and feeds input lines through the
/// lexer, parser and evaluator one at a time. Printed text and diagnostics
/// are written to the same output stream as soon as they are produced. No
/// error ends a session; only `khlas` alone on a line or the end of the
/// input does.
///
/// # Example
/// ```
/// use std::io::BufRead;
///
/// use darja::interpreter::{
///     session::{Session, SessionConfig, Termination},
///     value::core::Value,
/// };
///
/// let input = "x = 1 +\nx = 2\nkhlas\nx = 3\n";
/// let mut session = Session::new(SessionConfig::default());
/// let mut out = Vec::new();
///
/// let end = session.run(input.as_bytes().lines(), &mut out).unwrap();
///
/// assert_eq!(end, Termination::Sentinel { line: 3 });
/// assert_eq!(session.diagnostics(), 1);
/// assert_eq!(session.environment().get("x"), Some(&Value::Integer(2)));
/// assert!(String::from_utf8(out).unwrap().starts_with("Error on line 1, column 8:"));
/// ```
pub struct Session {
    environment:  Environment,
    evaluator:    Evaluator,
    echo_results: bool,
    state:        SessionState,
    line_number:  usize,
    pending:      Option<PendingBlock>,
    diagnostics:  usize,
}

impl Session {
    /// Creates a running session with an empty environment.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self { environment:  Environment::new(),
               evaluator:    Evaluator::new(config.max_loop_iterations),
               echo_results: config.echo_results,
               state:        SessionState::Running,
               line_number:  0,
               pending:      None,
               diagnostics:  0, }
    }

    /// Runs the session over a line source until it terminates.
    ///
    /// Lines are pulled one at a time; nothing after the sentinel line is
    /// read. When the source runs out first, the session ends with
    /// [`Termination::EndOfInput`].
    ///
    /// # Errors
    /// Returns the first I/O error from the line source or the output.
    pub fn run<L, W>(&mut self, lines: L, out: &mut W) -> io::Result<Termination>
        where L: IntoIterator<Item = io::Result<String>>,
              W: Write
    {
        for line in lines {
            if let SessionState::Terminated(cause) = self.feed_line(&line?, out)? {
                return Ok(cause);
            }
        }
        self.finish(out)
    }

    /// Processes one input line and returns the resulting state.
    ///
    /// A line that is a valid statement up to a `{` it leaves open starts a
    /// pending block; following lines are collected until the braces balance,
    /// and the whole block is then parsed and evaluated as one statement. Any
    /// other line with an unclosed `{` is reported on its own. `khlas` alone on a line while a
    /// block is pending reports the unterminated block and ends the session.
    ///
    /// Once the session is terminated, lines are ignored.
    ///
    /// # Errors
    /// Returns an I/O error if writing to `out` fails.
    pub fn feed_line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<SessionState> {
        if self.is_terminated() {
            return Ok(self.state);
        }
        self.line_number += 1;

        let tokens: Vec<Token> = tokenize(line, self.line_number).collect();

        if let Some(mut pending) = self.pending.take() {
            if is_sentinel_line(&tokens) {
                self.report(ParseError::UnterminatedBlock { position: pending.open }.into(),
                            out)?;
                self.state = SessionState::Terminated(Termination::Sentinel { line: self.line_number });
                return Ok(self.state);
            }

            pending.source.push('\n');
            pending.source.push_str(line);
            pending.depth += brace_balance(&tokens);
            if pending.depth > 0 {
                self.pending = Some(pending);
                return Ok(self.state);
            }

            let tokens: Vec<Token> = tokenize(&pending.source, pending.first_line).collect();
            self.execute(&tokens, out)?;
            return Ok(self.state);
        }

        if tokens.iter().all(|token| token.kind.is_terminator()) {
            return Ok(self.state);
        }

        let depth = brace_balance(&tokens);
        if depth > 0
           && opens_block(&tokens)
           && let Some(open) = first_unclosed_brace(&tokens)
        {
            self.pending = Some(PendingBlock { source: line.to_string(),
                                               first_line: self.line_number,
                                               open,
                                               depth });
            return Ok(self.state);
        }

        self.execute(&tokens, out)?;
        Ok(self.state)
    }

    /// Ends the session because the line source is exhausted.
    ///
    /// A block still pending is reported as unterminated. Calling this on an
    /// already terminated session just returns the original cause.
    ///
    /// # Errors
    /// Returns an I/O error if writing the diagnostic fails.
    pub fn finish<W: Write>(&mut self, out: &mut W) -> io::Result<Termination> {
        if let SessionState::Terminated(cause) = self.state {
            return Ok(cause);
        }
        if let Some(pending) = self.pending.take() {
            self.report(ParseError::UnterminatedBlock { position: pending.open }.into(),
                        out)?;
        }
        self.state = SessionState::Terminated(Termination::EndOfInput);
        Ok(Termination::EndOfInput)
    }

    /// Parses and evaluates the tokens of one complete statement.
    fn execute<W: Write>(&mut self, tokens: &[Token], out: &mut W) -> io::Result<()> {
        let statement = parse_line(tokens);
        let mut printer = LinePrinter { inner: &mut *out,
                                        error: None };

        let result = match statement {
            Statement::Invalid { error } => Err(Diagnostic::Parse(error)),
            statement => self.evaluator
                             .evaluate(&statement, &mut self.environment, &mut printer)
                             .map_err(Diagnostic::Eval),
        };

        if let Some(error) = printer.error {
            return Err(error);
        }

        match result {
            Ok(Flow::Continue(Some(value))) if self.echo_results && value != Value::Unit => {
                writeln!(out, "{value}")?;
            },
            Ok(Flow::Continue(_)) => {},
            Ok(Flow::Terminate) => {
                self.state = SessionState::Terminated(Termination::Sentinel { line: self.line_number });
            },
            Err(diagnostic) => self.report(diagnostic, out)?,
        }
        out.flush()
    }

    fn report<W: Write>(&mut self, diagnostic: Diagnostic, out: &mut W) -> io::Result<()> {
        self.diagnostics += 1;
        writeln!(out, "{diagnostic}")
    }

    /// The current state.
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Returns `true` once the session has terminated.
    #[must_use]
    pub const fn is_terminated(&self) -> bool {
        matches!(self.state, SessionState::Terminated(_))
    }

    /// Returns `true` while a multi-line block is being collected.
    ///
    /// Interactive drivers use this to show a continuation prompt.
    #[must_use]
    pub const fn awaiting_block(&self) -> bool {
        self.pending.is_some()
    }

    /// The number of lines read so far.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        self.line_number
    }

    /// The number of diagnostics reported so far.
    #[must_use]
    pub const fn diagnostics(&self) -> usize {
        self.diagnostics
    }

    /// The session's variables.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Consumes the session and returns its variables.
    #[must_use]
    pub fn into_environment(self) -> Environment {
        self.environment
    }
}

/// Writes printed lines to the session output, keeping the first failure.
struct LinePrinter<'w, W: Write> {
    inner: &'w mut W,
    error: Option<io::Error>,
}

impl<W: Write> Output for LinePrinter<'_, W> {
    fn emit(&mut self, text: String) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = writeln!(self.inner, "{text}").and_then(|()| self.inner.flush()) {
            self.error = Some(e);
        }
    }
}

/// Returns `true` if the only token on the line is `khlas`.
fn is_sentinel_line(tokens: &[Token]) -> bool {
    matches!(tokens,
             [Token { kind: TokenKind::Khlas, .. }, rest @ ..]
             if rest.iter().all(|token| token.kind.is_terminator()))
}

/// Returns `true` if the line parses as a statement whose only problem is a
/// block that is still open.
fn opens_block(tokens: &[Token]) -> bool {
    matches!(parse_line(tokens),
             Statement::Invalid { error: ParseError::UnterminatedBlock { .. } })
}

/// The number of `{` minus the number of `}`.
fn brace_balance(tokens: &[Token]) -> i64 {
    tokens.iter()
          .map(|token| match token.kind {
              TokenKind::LBrace => 1,
              TokenKind::RBrace => -1,
              _ => 0,
          })
          .sum()
}

/// Finds the outermost `{` left open at the end of the line, if any.
fn first_unclosed_brace(tokens: &[Token]) -> Option<Position> {
    let mut open = Vec::new();
    for token in tokens {
        match token.kind {
            TokenKind::LBrace => open.push(token.position),
            TokenKind::RBrace => {
                open.pop();
            },
            _ => {},
        }
    }
    open.first().copied()
}
