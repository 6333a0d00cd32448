use core::fmt;

/// Location of a token in the source text.
///
/// `line` and `column` are 1-based. `offset` is the 0-based character index of
/// the token start, used when rendering diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl Position {
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Eof,
    Ident,
    Number,

    // Keywords
    Var,
    In,

    // Punctuation
    LParen,
    RParen,
    LBracket,
    RBracket,
    Semicolon,
    Comma,
    Question,
    Colon,
    Assign,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Not,

    // Comparison
    Eq,
    Ne,
    Ge,
    Gt,
    Le,
    Lt,

    // Logic
    And,
    Or,

    /// A character the scanner does not recognize.
    Illegal,
}

impl TokenKind {
    pub fn keyword(ident: &str) -> Option<TokenKind> {
        match ident {
            "var" => Some(TokenKind::Var),
            "in" => Some(TokenKind::In),
            _ => None,
        }
    }

    pub fn is_equality(self) -> bool {
        matches!(self, TokenKind::Eq | TokenKind::Ne)
    }

    pub fn is_relational(self) -> bool {
        matches!(
            self,
            TokenKind::Ge | TokenKind::Gt | TokenKind::Le | TokenKind::Lt
        )
    }

    pub fn is_comparison(self) -> bool {
        self.is_equality() || self.is_relational()
    }
}

/// A scanned token. Tokens are consumed by the parser as soon as they are
/// produced and never stored in the AST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Literal text; hex number literals are normalized to uppercase.
    pub lit: String,
    pub pos: Position,
}

impl Token {
    pub fn new(kind: TokenKind, lit: impl Into<String>, pos: Position) -> Self {
        Self {
            kind,
            lit: lit.into(),
            pos,
        }
    }

    /// Human readable form for error messages.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Eof => "end of input".to_string(),
            TokenKind::Ident => format!("identifier '{}'", self.lit),
            TokenKind::Number => format!("number '{}'", self.lit),
            _ => format!("'{}'", self.lit),
        }
    }
}
