use super::lexer::Scanner;
use super::token::{Position, TokenKind};

// Scan `src` and check the first token's kind and literal text.
fn assert_first_token(src: &str, kind: TokenKind, lit: &str) {
    let token = Scanner::new(src).scan();
    assert_eq!(token.kind, kind, "kind of first token in {:?}", src);
    assert_eq!(token.lit, lit, "literal of first token in {:?}", src);
}

fn kinds(src: &str) -> Vec<TokenKind> {
    Scanner::new(src).tokens().map(|t| t.kind).collect()
}

#[test]
fn test_keywords_and_identifiers() {
    assert_first_token("var", TokenKind::Var, "var");
    assert_first_token("in", TokenKind::In, "in");
    assert_first_token("abc", TokenKind::Ident, "abc");
    assert_first_token("_charge2", TokenKind::Ident, "_charge2");
    assert_first_token("variable", TokenKind::Ident, "variable");
    assert_first_token("inside", TokenKind::Ident, "inside");
}

#[test]
fn test_numbers() {
    assert_first_token("123", TokenKind::Number, "123");
    assert_first_token("0", TokenKind::Number, "0");
    assert_first_token("0xff", TokenKind::Number, "0XFF");
    assert_first_token("0x123abc", TokenKind::Number, "0X123ABC");
    assert_first_token("0X1a", TokenKind::Number, "0X1A");
}

#[test]
fn test_number_followed_by_letters_splits() {
    assert_eq!(
        kinds("12ab"),
        vec![TokenKind::Number, TokenKind::Ident, TokenKind::Semicolon]
    );
}

#[test]
fn test_single_char_punctuation() {
    for (src, kind) in [
        ("(", TokenKind::LParen),
        (")", TokenKind::RParen),
        (";", TokenKind::Semicolon),
        ("+", TokenKind::Plus),
        ("-", TokenKind::Minus),
        ("*", TokenKind::Star),
        ("/", TokenKind::Slash),
        ("%", TokenKind::Percent),
        ("[", TokenKind::LBracket),
        ("]", TokenKind::RBracket),
        (",", TokenKind::Comma),
        ("?", TokenKind::Question),
        (":", TokenKind::Colon),
        ("=", TokenKind::Assign),
        ("!", TokenKind::Not),
        (">", TokenKind::Gt),
        ("<", TokenKind::Lt),
    ] {
        assert_first_token(src, kind, src);
    }
}

#[test]
fn test_two_char_operators() {
    assert_first_token("==", TokenKind::Eq, "==");
    assert_first_token("!=", TokenKind::Ne, "!=");
    assert_first_token(">=", TokenKind::Ge, ">=");
    assert_first_token("<=", TokenKind::Le, "<=");
    assert_first_token("&&", TokenKind::And, "&&");
    assert_first_token("||", TokenKind::Or, "||");
}

#[test]
fn test_ampersand_and_pipe_always_consume_two_chars() {
    // The second character is swallowed whatever it is.
    assert_eq!(
        kinds("a&b"),
        vec![TokenKind::Ident, TokenKind::And, TokenKind::Semicolon]
    );
    assert_eq!(
        kinds("a|b"),
        vec![TokenKind::Ident, TokenKind::Or, TokenKind::Semicolon]
    );
}

#[test]
fn test_auto_termination() {
    assert_eq!(
        kinds("a + 1"),
        vec![
            TokenKind::Ident,
            TokenKind::Plus,
            TokenKind::Number,
            TokenKind::Semicolon
        ]
    );
    // Already terminated: no extra `;`.
    assert_eq!(kinds("a;"), vec![TokenKind::Ident, TokenKind::Semicolon]);
    assert_eq!(kinds("a;  "), vec![TokenKind::Ident, TokenKind::Semicolon]);
    // Multi-line input is never auto-terminated.
    assert_eq!(kinds("a\n+ 1"), vec![
        TokenKind::Ident,
        TokenKind::Plus,
        TokenKind::Number
    ]);
    assert!(kinds("").is_empty());
    assert!(kinds("   ").is_empty());
}

#[test]
fn test_positions() {
    let mut scanner = Scanner::new("var a = 1;\n  a + 22;");
    let positions: Vec<Position> = scanner.tokens().map(|t| t.pos).collect();
    assert_eq!(
        positions,
        vec![
            Position::new(1, 1, 0),
            Position::new(1, 5, 4),
            Position::new(1, 7, 6),
            Position::new(1, 9, 8),
            Position::new(1, 10, 9),
            Position::new(2, 3, 13),
            Position::new(2, 5, 15),
            Position::new(2, 7, 17),
            Position::new(2, 9, 19),
        ]
    );
    let eof = scanner.scan();
    assert_eq!(eof.kind, TokenKind::Eof);
    assert_eq!(eof.pos, Position::new(2, 10, 20));
}

#[test]
fn test_illegal_character() {
    let token = Scanner::new("@").scan();
    assert_eq!(token.kind, TokenKind::Illegal);
    assert_eq!(token.lit, "@");
}

#[test]
fn test_eof_is_sticky() {
    let mut scanner = Scanner::new("1;");
    assert_eq!(scanner.scan().kind, TokenKind::Number);
    assert_eq!(scanner.scan().kind, TokenKind::Semicolon);
    assert_eq!(scanner.scan().kind, TokenKind::Eof);
    assert_eq!(scanner.scan().kind, TokenKind::Eof);
}
