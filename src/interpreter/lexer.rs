use logos::Logos;

/// A position in the source input.
///
/// Both coordinates are 1-based. Columns count characters, not bytes, so a
/// diagnostic points at the character a user sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// The source line.
    pub line:   usize,
    /// The character column within the line.
    pub column: usize,
}

impl Position {
    /// Creates a position from a line and a column.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Represents the kind of a lexical token.
///
/// This enum defines every token the language recognizes. The three variants
/// without a pattern (`EndOfInput` and `Error`, plus the synthetic trailing
/// `EndOfLine`) are produced by [`Lexer`] itself rather than by the generated
/// state machine.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum TokenKind {
    /// Decimal literal tokens, such as `3.14`.
    #[regex(r"[0-9]+\.[0-9]+", parse_float)]
    Float(f64),
    /// Integer literal tokens, such as `42`.
    ///
    /// The digits are kept as written so that out-of-range literals are
    /// reported when they are evaluated rather than when they are read.
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Integer(String),
    /// String literal tokens, such as `"salam\n"`.
    #[regex(r#""([^"\\\n]|\\[^\n])*""#, parse_string)]
    Str(String),
    /// `sah` and `ghalet`.
    #[token("sah", parse_bool)]
    #[token("ghalet", parse_bool)]
    Bool(bool),
    /// `walou`, the unit value.
    #[token("walou")]
    Walou,
    /// `khlas`, the session sentinel.
    #[token("khlas")]
    Khlas,
    /// `kteb`
    #[token("kteb")]
    Kteb,
    /// `ila`
    #[token("ila")]
    Ila,
    /// `wila`
    #[token("wila")]
    Wila,
    /// `mazal`
    #[token("mazal")]
    Mazal,
    /// Identifier tokens; variable or function names such as `x` or `total_2`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip, allow_greedy = true)]
    Comment,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `=`
    #[token("=")]
    Equals,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `&&`
    #[token("&&")]
    AndAnd,
    /// `||`
    #[token("||")]
    OrOr,
    /// `!`
    #[token("!")]
    Bang,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// End of a source line.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        lex.extras.line_start = lex.span().end;
    })]
    EndOfLine,
    /// End of the token stream handed to the parser.
    EndOfInput,
    /// A character the language does not recognize.
    Error(char),
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// The coarse category of a token, used for "expected ..." hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenCategory {
    Identifier,
    Number,
    String,
    Operator,
    Keyword,
    EndOfLine,
    EndOfInput,
    Error,
}

impl std::fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Identifier => "identifier",
            Self::Number => "number",
            Self::String => "string",
            Self::Operator => "operator",
            Self::Keyword => "keyword",
            Self::EndOfLine => "end of line",
            Self::EndOfInput => "end of input",
            Self::Error => "invalid character",
        };
        write!(f, "{name}")
    }
}

impl TokenKind {
    /// Returns the category this token kind belongs to.
    ///
    /// # Example
    /// ```
    /// use darja::interpreter::lexer::{TokenCategory, TokenKind};
    ///
    /// assert_eq!(TokenKind::Khlas.category(), TokenCategory::Keyword);
    /// assert_eq!(TokenKind::Integer("7".into()).category(), TokenCategory::Number);
    /// ```
    #[must_use]
    pub const fn category(&self) -> TokenCategory {
        match self {
            Self::Float(_) | Self::Integer(_) => TokenCategory::Number,
            Self::Str(_) => TokenCategory::String,
            Self::Bool(_)
            | Self::Walou
            | Self::Khlas
            | Self::Kteb
            | Self::Ila
            | Self::Wila
            | Self::Mazal => TokenCategory::Keyword,
            Self::Identifier(_) => TokenCategory::Identifier,
            Self::EndOfLine | Self::Comment | Self::Ignored => TokenCategory::EndOfLine,
            Self::EndOfInput => TokenCategory::EndOfInput,
            Self::Error(_) => TokenCategory::Error,
            _ => TokenCategory::Operator,
        }
    }

    /// Returns `true` for the tokens that end a line or the whole input.
    #[must_use]
    pub const fn is_terminator(&self) -> bool {
        matches!(self, Self::EndOfLine | Self::EndOfInput)
    }
}

/// A token together with its source text and position.
///
/// Tokens are immutable once produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What the token is.
    pub kind:     TokenKind,
    /// The exact source text of the token.
    pub lexeme:   String,
    /// Where the token starts.
    pub position: Position,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, position: Position) -> Self {
        Self { kind,
               lexeme: lexeme.into(),
               position }
    }

    /// Creates the token that closes a statement's token stream.
    #[must_use]
    pub fn end_of_input(position: Position) -> Self {
        Self::new(TokenKind::EndOfInput, "", position)
    }

    /// A short human-readable description, used in diagnostics.
    #[must_use]
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::EndOfLine => "end of line".to_string(),
            TokenKind::EndOfInput => "end of input".to_string(),
            _ => format!("'{}'", self.lexeme),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number and the byte offset where that line starts,
/// so that every token can be given a line and a column.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

/// A lazy, finite token stream over one piece of source text.
///
/// The stream yields every token of the text in order, turns unrecognized
/// characters into single [`TokenKind::Error`] tokens instead of failing, and
/// always ends with one [`TokenKind::EndOfLine`] token after the last line.
pub struct Lexer<'src> {
    inner:    logos::Lexer<'src, TokenKind>,
    source:   &'src str,
    finished: bool,
}

impl Lexer<'_> {
    fn position_at(&self, offset: usize) -> Position {
        let line_start = self.inner.extras.line_start.min(offset);
        let column = self.source[line_start..offset].chars().count() + 1;
        Position::new(self.inner.extras.line, column)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        // The position must be taken before an `EndOfLine` callback bumps the
        // line counter, so compute it from the line that was current before.
        let line_before = self.inner.extras.line;
        let line_start_before = self.inner.extras.line_start;

        match self.inner.next() {
            Some(result) => {
                let span = self.inner.span();
                let slice = self.inner.slice();
                let column = self.source[line_start_before.min(span.start)..span.start].chars()
                                                                                        .count()
                             + 1;
                let position = Position::new(line_before, column);

                let kind = result.unwrap_or_else(|()| {
                                     TokenKind::Error(slice.chars().next().unwrap_or('\0'))
                                 });
                Some(Token::new(kind, slice, position))
            },
            None => {
                self.finished = true;
                let end = self.source.len();
                if self.source.ends_with('\n') {
                    // The final newline already produced an end-of-line token.
                    return None;
                }
                Some(Token::new(TokenKind::EndOfLine, "", self.position_at(end)))
            },
        }
    }
}

/// Converts source text into a lazy sequence of tokens.
///
/// The function is pure: the same text and starting line always produce the
/// same tokens. `first_line` is the absolute line number of the first line of
/// `source`, used only for positions.
///
/// # Example
/// ```
/// use darja::interpreter::lexer::{TokenKind, tokenize};
///
/// let kinds: Vec<TokenKind> = tokenize("x = 1 $", 3).map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            vec![TokenKind::Identifier("x".into()),
///                 TokenKind::Equals,
///                 TokenKind::Integer("1".into()),
///                 TokenKind::Error('$'),
///                 TokenKind::EndOfLine]);
/// ```
#[must_use]
pub fn tokenize(source: &str, first_line: usize) -> Lexer<'_> {
    Lexer { inner: TokenKind::lexer_with_extras(source,
                                                LexerExtras { line:       first_line,
                                                              line_start: 0, }),
            source,
            finished: false }
}

/// Parses a floating-point literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed floating-point value if successful.
/// - `None`: If the token slice is not a valid float.
fn parse_float(lex: &logos::Lexer<TokenKind>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Parses a boolean literal from the current token slice (`sah` or
/// `ghalet`).
fn parse_bool(lex: &logos::Lexer<TokenKind>) -> Option<bool> {
    match lex.slice() {
        "sah" => Some(true),
        "ghalet" => Some(false),
        _ => None,
    }
}

/// Strips the quotes from a string literal and resolves its escapes.
///
/// Supported escapes are `\n`, `\t`, `\"` and `\\`; any other escape makes the
/// literal invalid, which the lexer reports as an error token.
fn parse_string(lex: &logos::Lexer<TokenKind>) -> Option<String> {
    let slice = lex.slice();
    let body = &slice[1..slice.len() - 1];
    let mut text = String::with_capacity(body.len());
    let mut chars = body.chars();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next()? {
                'n' => text.push('\n'),
                't' => text.push('\t'),
                '"' => text.push('"'),
                '\\' => text.push('\\'),
                _ => return None,
            }
        } else {
            text.push(c);
        }
    }

    Some(text)
}
