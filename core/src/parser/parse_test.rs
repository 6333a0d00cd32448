use pretty_assertions::assert_eq;

use crate::parser::{
    BinaryOp, BoolOp, DEFAULT_MAX_DEPTH, Expr, ParseErrorKind, Position, Statement, UnaryOp,
    parse, parse_with_max_depth,
};

fn parse_one(source: &str) -> Statement {
    let mut statements =
        parse(source).unwrap_or_else(|e| panic!("Parsing failed: {}\n{}", source, e));
    assert_eq!(statements.len(), 1, "expected one statement in {:?}", source);
    statements.remove(0)
}

fn parse_expr(source: &str) -> Expr {
    match parse_one(source) {
        Statement::Expression(expr) => expr,
        other => panic!("expected an expression statement, got {:?}", other),
    }
}

fn parse_err(source: &str) -> ParseErrorKind {
    match parse(source) {
        Ok(statements) => panic!("expected {:?} to fail, parsed {:?}", source, statements),
        Err(e) => e.kind,
    }
}

fn a() -> Expr {
    Expr::ident("a")
}

fn b() -> Expr {
    Expr::ident("b")
}

#[test]
fn test_statements() {
    assert_eq!(parse_one("123;"), Statement::Expression(Expr::Number(123)));
    assert_eq!(
        parse_one("var a = 123;"),
        Statement::VarDef {
            name: "a".to_string(),
            expr: Expr::Number(123),
        }
    );
}

#[test]
fn test_literals_and_identifiers() {
    assert_eq!(parse_expr("123"), Expr::Number(123));
    assert_eq!(parse_expr("0XFF"), Expr::Number(255));
    assert_eq!(parse_expr("0xaa"), Expr::Number(170));
    assert_eq!(parse_expr("abc"), Expr::ident("abc"));
}

#[test]
fn test_unary_and_paren() {
    assert_eq!(
        parse_expr("-abc"),
        Expr::unary(UnaryOp::Neg, Expr::ident("abc"))
    );
    assert_eq!(parse_expr("!a"), Expr::unary(UnaryOp::Not, a()));
    assert_eq!(parse_expr("(abc)"), Expr::paren(Expr::ident("abc")));
    assert_eq!(
        parse_expr("--a"),
        Expr::unary(UnaryOp::Neg, Expr::unary(UnaryOp::Neg, a()))
    );
}

#[test]
fn test_binary_operators() {
    for (src, op) in [
        ("a+b", BinaryOp::Add),
        ("a-b", BinaryOp::Sub),
        ("a*b", BinaryOp::Mul),
        ("a/b", BinaryOp::Div),
        ("a%b", BinaryOp::Rem),
        ("a==b", BinaryOp::Eq),
        ("a!=b", BinaryOp::Neq),
        ("a>=b", BinaryOp::Ge),
        ("a>b", BinaryOp::Gt),
        ("a<=b", BinaryOp::Le),
        ("a<b", BinaryOp::Lt),
    ] {
        assert_eq!(parse_expr(src), Expr::binary(op, a(), b()), "{}", src);
    }
}

#[test]
fn test_logic_operators() {
    assert_eq!(parse_expr("a&&b"), Expr::logic(BoolOp::And, a(), b()));
    assert_eq!(parse_expr("a||b"), Expr::logic(BoolOp::Or, a(), b()));
}

#[test]
fn test_ternary() {
    assert_eq!(
        parse_expr("a?1:3"),
        Expr::ternary(a(), Expr::Number(1), Expr::Number(3))
    );
}

#[test]
fn test_membership() {
    assert_eq!(parse_expr("a in [1]"), Expr::membership(a(), [1]));
    assert_eq!(
        parse_expr("a in [1, 0x10, 3]"),
        Expr::membership(a(), [1, 16, 3])
    );
    // `in` binds tighter than arithmetic.
    assert_eq!(
        parse_expr("a + b in [2]"),
        Expr::binary(BinaryOp::Add, a(), Expr::membership(b(), [2]))
    );
}

#[test]
fn test_membership_errors() {
    assert!(matches!(
        parse_err("a in []"),
        ParseErrorKind::UnexpectedToken { .. }
    ));
    assert!(matches!(
        parse_err("a in [b]"),
        ParseErrorKind::UnexpectedToken { .. }
    ));
    assert!(matches!(
        parse_err("a in [1,]"),
        ParseErrorKind::UnexpectedToken { .. }
    ));
    assert!(matches!(
        parse_err("a in 1"),
        ParseErrorKind::UnexpectedToken { .. }
    ));
    assert_eq!(parse_err("[1, 2]"), ParseErrorKind::ArrayOutsideMembership);
}

#[test]
fn test_chained_comparison_is_rejected() {
    for src in ["a<b<c", "a<b>c", "a>=b<=c", "a<b==c", "a==b==c", "a==b!=c"] {
        assert!(
            matches!(parse_err(src), ParseErrorKind::ChainedComparison { .. }),
            "{} should be rejected",
            src
        );
    }
}

#[test]
fn test_comparison_separated_by_lower_precedence_is_accepted() {
    assert_eq!(
        parse_expr("a==b<c"),
        Expr::binary(
            BinaryOp::Eq,
            a(),
            Expr::binary(BinaryOp::Lt, b(), Expr::ident("c"))
        )
    );
    parse_expr("a<b && b<c");
    parse_expr("(a<b)<c");
    parse_expr("a<b ? b<c : 0");
}

#[test]
fn test_auto_termination() {
    assert_eq!(parse("a+1").unwrap(), parse("a+1;").unwrap());
    assert_eq!(parse("var x = 2").unwrap(), parse("var x = 2;").unwrap());
    assert!(parse("").unwrap().is_empty());
}

#[test]
fn test_multi_statement() {
    let statements = parse("var a=1;var b=a>10?a:10;a+b").unwrap();
    assert_eq!(statements.len(), 3);
    assert!(matches!(&statements[1], Statement::VarDef { name, .. } if name == "b"));
}

#[test]
fn test_missing_terminator() {
    // Multi-line input is not auto-terminated.
    let err = parse("var a = 1;\na + 1").unwrap_err();
    assert_eq!(
        err.kind,
        ParseErrorKind::MissingTerminator {
            found: "end of input".to_string()
        }
    );
    assert_eq!(err.position, Position::new(2, 6, 16));

    assert!(matches!(
        parse_err("1 2"),
        ParseErrorKind::MissingTerminator { .. }
    ));
}

#[test]
fn test_unexpected_tokens() {
    assert_eq!(
        parse_err("1 +"),
        ParseErrorKind::UnexpectedToken {
            expected: "expression".to_string(),
            found: "';'".to_string(),
        }
    );
    assert!(matches!(parse_err("var = 1"), ParseErrorKind::UnexpectedToken { .. }));
    assert!(matches!(parse_err("var a 1"), ParseErrorKind::UnexpectedToken { .. }));
    assert!(matches!(parse_err("(a"), ParseErrorKind::UnexpectedToken { .. }));
    assert!(matches!(parse_err("a ? 1"), ParseErrorKind::UnexpectedToken { .. }));
    assert!(matches!(parse_err("a @ b"), ParseErrorKind::MissingTerminator { .. }));
    assert!(matches!(parse_err(";"), ParseErrorKind::UnexpectedToken { .. }));
}

#[test]
fn test_invalid_number() {
    assert_eq!(
        parse_err("99999999999999999999"),
        ParseErrorKind::InvalidNumber {
            text: "99999999999999999999".to_string()
        }
    );
}

#[test]
fn test_failed_parse_returns_no_statements() {
    // The first statement is fine, but the whole input is rejected.
    assert!(parse("var a = 1; a <").is_err());
}

#[test]
fn test_max_depth() {
    let deep = format!("{}1{}", "(".repeat(20), ")".repeat(20));
    assert!(parse_with_max_depth(&deep, 64).is_ok());
    assert!(matches!(
        parse_with_max_depth(&deep, 10).unwrap_err().kind,
        ParseErrorKind::MaxDepthExceeded { max_depth: 10, .. }
    ));

    let negations = format!("{}1", "-".repeat(100));
    assert!(matches!(
        parse_with_max_depth(&negations, 50).unwrap_err().kind,
        ParseErrorKind::MaxDepthExceeded { .. }
    ));
}

#[test]
fn test_default_max_depth_fits_test_thread() {
    let nested = |levels: usize| format!("{}1{}", "(".repeat(levels), ")".repeat(levels));

    let statement = parse_one(&nested(DEFAULT_MAX_DEPTH - 1));
    assert!(matches!(statement, Statement::Expression(Expr::Paren(_))));
    assert!(matches!(
        parse(&nested(DEFAULT_MAX_DEPTH)).unwrap_err().kind,
        ParseErrorKind::MaxDepthExceeded { max_depth: DEFAULT_MAX_DEPTH, .. }
    ));

    let negations = format!("{}1", "-".repeat(DEFAULT_MAX_DEPTH - 1));
    assert!(parse(&negations).is_ok());
}

#[test]
fn test_long_chains_do_not_count_as_nesting() {
    for op in ["+", "*", "&&", "||"] {
        let source = vec!["1"; 200_000].join(op);
        let statements = parse(&source).unwrap();
        assert_eq!(statements.len(), 1, "{}", op);
        // Dropping the left-deep tree must not overflow either.
        drop(statements);
    }

    let membership = format!("a{}", " in [0]".repeat(100_000));
    assert!(parse(&membership).is_ok());
}

#[test]
fn test_failed_long_chain_is_dropped() {
    let source = format!("{} +", vec!["1"; 200_000].join("+"));
    assert!(matches!(
        parse(&source).unwrap_err().kind,
        ParseErrorKind::UnexpectedToken { .. }
    ));
}

#[test]
fn test_display_round_trip() {
    for src in [
        "a + b * (c - 1)",
        "var x = -a % 3",
        "!(a in [1, 2, 3]) && b || c",
        "a > 20 ? b + c : 20 * 5",
        "a == (b < c)",
    ] {
        let statement = parse_one(src);
        assert_eq!(parse_one(&statement.to_string()), statement, "{}", src);
    }
}
