//! Hand-written scanner turning source text into tokens.

use crate::parser::token::{Position, Token, TokenKind};

/// Character scanner with line/column bookkeeping.
///
/// Single-line input that does not already end with `;` gets a virtual
/// terminator appended, so `a + 1` is accepted the same way as `a + 1;`.
pub struct Scanner {
    src: Vec<char>,
    offset: usize,
    line_head: usize,
    line: usize,
}

impl Scanner {
    pub fn new(source: &str) -> Self {
        let mut src: Vec<char> = source.chars().collect();
        if needs_terminator(source) {
            src.push(';');
        }
        Self {
            src,
            offset: 0,
            line_head: 0,
            line: 0,
        }
    }

    /// Scan the next token. Returns `TokenKind::Eof` once the input is
    /// exhausted, and keeps returning it on further calls.
    pub fn scan(&mut self) -> Token {
        self.skip_whitespace();
        let pos = self.position();

        let Some(ch) = self.peek() else {
            return Token::new(TokenKind::Eof, "", pos);
        };

        if is_letter(ch) {
            let lit = self.scan_identifier();
            let kind = TokenKind::keyword(&lit).unwrap_or(TokenKind::Ident);
            return Token::new(kind, lit, pos);
        }
        if ch.is_ascii_digit() {
            return Token::new(TokenKind::Number, self.scan_number(), pos);
        }

        let kind = match ch {
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            ';' => TokenKind::Semicolon,
            ',' => TokenKind::Comma,
            '?' => TokenKind::Question,
            ':' => TokenKind::Colon,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '%' => TokenKind::Percent,
            // `&` and `|` always take two characters, whatever the second one is.
            '&' => return self.pair(TokenKind::And, "&&", pos),
            '|' => return self.pair(TokenKind::Or, "||", pos),
            '=' => return self.with_eq(TokenKind::Eq, TokenKind::Assign, pos),
            '!' => return self.with_eq(TokenKind::Ne, TokenKind::Not, pos),
            '>' => return self.with_eq(TokenKind::Ge, TokenKind::Gt, pos),
            '<' => return self.with_eq(TokenKind::Le, TokenKind::Lt, pos),
            _ => TokenKind::Illegal,
        };
        self.bump();
        Token::new(kind, ch.to_string(), pos)
    }

    /// Iterate over the remaining tokens, stopping before end of input.
    pub fn tokens(&mut self) -> impl Iterator<Item = Token> + '_ {
        core::iter::from_fn(move || {
            let token = self.scan();
            (token.kind != TokenKind::Eof).then_some(token)
        })
    }

    fn pair(&mut self, kind: TokenKind, lit: &str, pos: Position) -> Token {
        self.bump();
        self.bump();
        Token::new(kind, lit, pos)
    }

    fn with_eq(&mut self, combined: TokenKind, single: TokenKind, pos: Position) -> Token {
        let mut lit = String::with_capacity(2);
        lit.extend(self.peek());
        self.bump();
        if self.peek() == Some('=') {
            lit.push('=');
            self.bump();
            Token::new(combined, lit, pos)
        } else {
            Token::new(single, lit, pos)
        }
    }

    fn peek(&self) -> Option<char> {
        self.src.get(self.offset).copied()
    }

    fn peek_next(&self) -> Option<char> {
        self.src.get(self.offset + 1).copied()
    }

    fn bump(&mut self) {
        if let Some(ch) = self.peek() {
            if ch == '\n' {
                self.line_head = self.offset + 1;
                self.line += 1;
            }
            self.offset += 1;
        }
    }

    fn position(&self) -> Position {
        Position::new(self.line + 1, self.offset - self.line_head + 1, self.offset)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(is_whitespace) {
            self.bump();
        }
    }

    fn scan_identifier(&mut self) -> String {
        let mut lit = String::new();
        while let Some(ch) = self.peek().filter(|&c| is_letter(c) || c.is_ascii_digit()) {
            lit.push(ch);
            self.bump();
        }
        lit
    }

    /// Scans a decimal digit run, or a `0x`/`0X` hex literal whose text is
    /// normalized to `0X` followed by uppercase digits.
    fn scan_number(&mut self) -> String {
        let mut lit = String::new();
        if self.peek() == Some('0') && matches!(self.peek_next(), Some('x' | 'X')) {
            lit.push_str("0X");
            self.bump();
            self.bump();
            while let Some(ch) = self.peek().filter(char::is_ascii_hexdigit) {
                lit.push(ch.to_ascii_uppercase());
                self.bump();
            }
        } else {
            while let Some(ch) = self.peek().filter(char::is_ascii_digit) {
                lit.push(ch);
                self.bump();
            }
        }
        lit
    }
}

fn needs_terminator(source: &str) -> bool {
    let trimmed = source.trim_end();
    !trimmed.trim_start().is_empty() && !source.contains('\n') && !trimmed.ends_with(';')
}

fn is_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r')
}
