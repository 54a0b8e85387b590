use darja::{
    ast::{BinaryOperator, Expr, LiteralValue, Statement, UnaryOperator},
    error::{LexError, ParseError},
    interpreter::{
        lexer::{Position, Token, tokenize},
        parser::{
            core::parse_expression,
            statement::parse_line,
            utils::{MAX_EXPRESSION_HEIGHT, MAX_NESTING_DEPTH},
        },
    },
};

fn parse(src: &str) -> Statement {
    let tokens: Vec<Token> = tokenize(src, 1).collect();
    parse_line(&tokens)
}

fn expr(src: &str) -> Expr {
    let tokens: Vec<Token> = tokenize(src, 1).collect();
    parse_expression(&mut tokens.iter().peekable(), 0).unwrap()
}

fn error(src: &str) -> ParseError {
    match parse(src) {
        Statement::Invalid { error } => error,
        other => panic!("Expected a parse error for {src:?}, got {other:?}"),
    }
}

/// Renders an expression with explicit parentheses so tree shapes are easy to
/// compare.
fn shape(expr: &Expr) -> String {
    match expr {
        Expr::Literal { value, .. } => match value {
            LiteralValue::Integer(digits) => digits.clone(),
            LiteralValue::Float(f) => f.to_string(),
            LiteralValue::Bool(b) => b.to_string(),
            LiteralValue::Str(s) => format!("{s:?}"),
            LiteralValue::Unit => "walou".to_string(),
        },
        Expr::Variable { name, .. } => name.clone(),
        Expr::UnaryOp { op, expr, .. } => format!("({op}{})", shape(expr)),
        Expr::BinaryOp { left, op, right, .. } => {
            format!("({} {op} {})", shape(left), shape(right))
        },
        Expr::Call { name, arguments, .. } => {
            let arguments: Vec<String> = arguments.iter().map(shape).collect();
            format!("{name}({})", arguments.join(", "))
        },
    }
}

#[test]
fn precedence_levels() {
    assert_eq!(shape(&expr("1 + 2 * 3")), "(1 + (2 * 3))");
    assert_eq!(shape(&expr("a || b && c")), "(a || (b && c))");
    assert_eq!(shape(&expr("a + 1 < b * 2")), "((a + 1) < (b * 2))");
    assert_eq!(shape(&expr("x == 1 && y != 2")), "((x == 1) && (y != 2))");
    assert_eq!(shape(&expr("-a * b")), "((-a) * b)");
    assert_eq!(shape(&expr("!a && b")), "((!a) && b)");
}

#[test]
fn binary_operators_are_left_associative() {
    assert_eq!(shape(&expr("a - b - c")), "((a - b) - c)");
    assert_eq!(shape(&expr("a / b % c")), "((a / b) % c)");
    assert_eq!(shape(&expr("a < b < c")), "((a < b) < c)");
    assert_eq!(shape(&expr("a || b || c")), "((a || b) || c)");
}

#[test]
fn unary_operators_nest() {
    assert_eq!(shape(&expr("--x")), "(-(-x))");
    assert_eq!(shape(&expr("!!sah")), "(!(!true))");
}

#[test]
fn grouping_and_calls() {
    assert_eq!(shape(&expr("(1 + 2) * 3")), "((1 + 2) * 3)");
    assert_eq!(shape(&expr("max(a, b + 1, min(c))")), "max(a, (b + 1), min(c))");
    assert_eq!(shape(&expr("type()")), "type()");
}

#[test]
fn operator_position() {
    let Expr::BinaryOp { op, position, .. } = expr("10 / x") else {
        panic!("expected a binary node");
    };
    assert_eq!(op, BinaryOperator::Div);
    assert_eq!(position, Position::new(1, 4));
}

#[test]
fn statements() {
    assert!(matches!(parse("x = 1"),
                     Statement::Assignment { ref name, .. } if name == "x"));
    assert!(matches!(parse("kteb 1, \"a\", x"),
                     Statement::Print { ref values, .. } if values.len() == 3));
    assert!(matches!(parse("x + 1"), Statement::Expression { .. }));
    assert!(matches!(parse("x == 1"), Statement::Expression { .. }));
    assert!(matches!(parse("khlas"), Statement::Termination { .. }));
}

#[test]
fn conditional_chain() {
    let Statement::Conditional { branches,
                                 otherwise,
                                 position, } =
        parse("ila a {\nkteb 1\n} wila ila b {\nkteb 2\n} wila {\nkteb 3\nkteb 4\n}")
    else {
        panic!("expected a conditional");
    };

    assert_eq!(position, Position::new(1, 1));
    assert_eq!(branches.len(), 2);
    assert_eq!(shape(&branches[1].condition), "b");
    assert_eq!(otherwise.map(|body| body.len()), Some(2));
}

#[test]
fn loop_with_nested_block() {
    let Statement::Loop { condition, body, .. } =
        parse("mazal i < 3 {\n    ila i == 1 { kteb i }\n    i = i + 1\n}")
    else {
        panic!("expected a loop");
    };

    assert_eq!(shape(&condition), "(i < 3)");
    assert_eq!(body.len(), 2);
    assert!(matches!(body[0], Statement::Conditional { .. }));
}

#[test]
fn empty_blocks_are_allowed() {
    assert!(matches!(parse("ila sah {}"), Statement::Conditional { .. }));
    assert!(matches!(parse("mazal ghalet {\n}"), Statement::Loop { ref body, .. } if body.is_empty()));
}

#[test]
fn incomplete_expressions() {
    assert_eq!(error("x = 1 +"),
               ParseError::IncompleteExpression { expected: "an expression",
                                                  position: Position::new(1, 8), });
    assert!(matches!(error("kteb"), ParseError::IncompleteExpression { .. }));
    assert!(matches!(error("x ="), ParseError::IncompleteExpression { .. }));
    assert!(matches!(error("ila sah"), ParseError::IncompleteExpression { .. }));
}

#[test]
fn unexpected_tokens() {
    assert!(matches!(error("x = * 2"), ParseError::UnexpectedToken { ref found, .. } if found == "'*'"));
    assert!(matches!(error("ila sah kteb 1"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(error("max(1 2)"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(error("ila sah { kteb 1 kteb 2 }"),
                     ParseError::UnexpectedToken { .. }));
}

#[test]
fn unmatched_delimiters() {
    assert_eq!(error("kteb (1 + 2"),
               ParseError::UnmatchedDelimiter { delimiter: '(',
                                                position:  Position::new(1, 6), });
    assert_eq!(error("kteb max(1, 2"),
               ParseError::UnmatchedDelimiter { delimiter: '(',
                                                position:  Position::new(1, 9), });
    assert!(matches!(error("kteb 1)"), ParseError::UnexpectedTrailingTokens { .. }));
}

#[test]
fn trailing_tokens() {
    assert_eq!(error("x = 1 2"),
               ParseError::UnexpectedTrailingTokens { token:    "'2'".to_string(),
                                                      position: Position::new(1, 7), });
}

#[test]
fn unterminated_block() {
    assert_eq!(error("ila sah {\nkteb 1"),
               ParseError::UnterminatedBlock { position: Position::new(1, 9) });
}

#[test]
fn misplaced_sentinel() {
    for src in ["x = khlas", "khlas 1", "kteb 1 khlas", "ila sah { khlas }", "mazal sah {\nkhlas\n}"] {
        assert!(matches!(error(src), ParseError::MisplacedSentinel { .. }),
                "{src:?} should misplace the sentinel");
    }
}

#[test]
fn lexical_errors_surface_through_the_parser() {
    assert_eq!(error("x = 1 # 2"),
               ParseError::Lexical(LexError::UnrecognizedCharacter { character: '#',
                                                                      position:  Position::new(1, 7), }));
    assert!(matches!(error("kteb \"bad \\q\""),
                     ParseError::Lexical(LexError::InvalidString { .. })));
}

#[test]
fn dangling_wila_is_rejected() {
    assert!(matches!(error("wila { kteb 1 }"),
                     ParseError::UnexpectedToken { ref found, .. } if found == "'wila'"));
}

#[test]
fn unary_operator_kinds() {
    let Expr::UnaryOp { op, .. } = expr("!x") else {
        panic!("expected a unary node");
    };
    assert_eq!(op, UnaryOperator::Not);
}

#[test]
fn deep_grouping_is_rejected() {
    let src = format!("x = {}1{}", "(".repeat(10_000), ")".repeat(10_000));
    assert_eq!(error(&src),
               ParseError::NestingTooDeep { position: Position::new(1, 5 + MAX_NESTING_DEPTH) });
}

#[test]
fn long_prefix_runs_are_rejected() {
    let src = format!("x = {}1", "-".repeat(10_000));
    assert!(matches!(error(&src), ParseError::NestingTooDeep { .. }));

    let src = format!("kteb {}sah", "!".repeat(10_000));
    assert!(matches!(error(&src), ParseError::NestingTooDeep { .. }));
}

#[test]
fn deep_calls_and_blocks_are_rejected() {
    let src = format!("kteb {}1{}", "abs(".repeat(1_000), ")".repeat(1_000));
    assert!(matches!(error(&src), ParseError::NestingTooDeep { .. }));

    let src = format!("{}{}", "ila sah { ".repeat(200), "}".repeat(200));
    assert!(matches!(error(&src), ParseError::NestingTooDeep { .. }));
}

#[test]
fn long_operator_chains_are_rejected() {
    let terms = vec!["1"; MAX_EXPRESSION_HEIGHT + 10];
    let src = format!("kteb {}", terms.join(" + "));
    assert!(matches!(error(&src), ParseError::NestingTooDeep { .. }));
}

#[test]
fn nesting_within_the_limits_parses() {
    let depth = MAX_NESTING_DEPTH - 1;
    let grouped = format!("{}x{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(shape(&expr(&grouped)), "x");

    let negated = format!("{}x", "-".repeat(depth));
    assert!(matches!(expr(&negated), Expr::UnaryOp { .. }));

    let terms = vec!["1"; MAX_EXPRESSION_HEIGHT - 1];
    assert_eq!(expr(&terms.join(" + ")).height(), MAX_EXPRESSION_HEIGHT - 1);
}
