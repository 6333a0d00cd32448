//! Recursive-descent parser with explicit precedence levels.
//!
//! Precedence, lowest to highest:
//!
//! | level          | operators                | associativity          |
//! |----------------|--------------------------|------------------------|
//! | ternary        | `? :`                    | right                  |
//! | logical or     | `\|\|`                   | left                   |
//! | logical and    | `&&`                     | left                   |
//! | equality       | `==` `!=`                | does not chain         |
//! | relational     | `>=` `>` `<=` `<`        | does not chain         |
//! | additive       | `+` `-`                  | left                   |
//! | multiplicative | `*` `/` `%`              | left                   |
//! | unary          | `-` `!`                  | prefix                 |
//! | primary        | literals, `( )`, `in [ ]`| postfix `in`           |

use crate::parser::{
    BinaryOp, BoolOp, Expr, LiteralSet, ParseError, ParseErrorKind, Statement, UnaryOp,
    lexer::Scanner,
    token::{Token, TokenKind},
};
use crate::syntax::int_literal::parse_int_literal;

/// Default maximum nesting depth accepted by [`parse`].
///
/// Every level of parentheses recurses through all precedence methods, so this
/// stays small enough for a 2 MiB thread stack in debug builds.
pub const DEFAULT_MAX_DEPTH: usize = 64;

type Result<T> = core::result::Result<T, ParseError>;

/// Parse a program into its statements.
///
/// # Example
///
/// ```
/// use calc_core::parser::{parse, Statement};
///
/// let program = parse("var a = 1; a + 2").unwrap();
/// assert_eq!(program.len(), 2);
/// assert!(matches!(program[0], Statement::VarDef { .. }));
/// ```
pub fn parse(source: &str) -> Result<Vec<Statement>> {
    parse_with_max_depth(source, DEFAULT_MAX_DEPTH)
}

/// Parse with a custom limit on expression nesting.
pub fn parse_with_max_depth(source: &str, max_depth: usize) -> Result<Vec<Statement>> {
    Parser::new(source, max_depth).parse_program()
}

struct Parser {
    scanner: Scanner,
    current: Token,
    depth: usize,
    max_depth: usize,
}

impl Parser {
    fn new(source: &str, max_depth: usize) -> Self {
        let mut scanner = Scanner::new(source);
        let current = scanner.scan();
        Self {
            scanner,
            current,
            depth: 0,
            max_depth,
        }
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    fn advance(&mut self) -> Token {
        let next = self.scanner.scan();
        core::mem::replace(&mut self.current, next)
    }

    fn expect(&mut self, kind: TokenKind, expected: &str) -> Result<Token> {
        if self.at(kind) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(expected))
        }
    }

    fn unexpected(&self, expected: &str) -> ParseError {
        self.error(ParseErrorKind::UnexpectedToken {
            expected: expected.to_string(),
            found: self.current.describe(),
        })
    }

    fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, self.current.pos)
    }

    /// Run `f` one nesting level deeper, failing once `max_depth` is reached.
    fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        if self.depth >= self.max_depth {
            return Err(self.error(ParseErrorKind::MaxDepthExceeded {
                depth: self.depth + 1,
                max_depth: self.max_depth,
            }));
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    // -- Statements -------------------------------------

    fn parse_program(&mut self) -> Result<Vec<Statement>> {
        let mut statements = Vec::new();
        while !self.at(TokenKind::Eof) {
            statements.push(self.parse_statement()?);
        }
        Ok(statements)
    }

    fn parse_statement(&mut self) -> Result<Statement> {
        let statement = if self.at(TokenKind::Var) {
            self.advance();
            let name = self.expect(TokenKind::Ident, "variable name")?.lit;
            self.expect(TokenKind::Assign, "'='")?;
            let expr = self.parse_expr()?;
            Statement::VarDef { name, expr }
        } else {
            Statement::Expression(self.parse_expr()?)
        };

        if !self.at(TokenKind::Semicolon) {
            return Err(self.error(ParseErrorKind::MissingTerminator {
                found: self.current.describe(),
            }));
        }
        self.advance();
        Ok(statement)
    }

    // -- Expressions ------------------------------------

    fn parse_expr(&mut self) -> Result<Expr> {
        self.nested(Self::parse_ternary)
    }

    fn parse_ternary(&mut self) -> Result<Expr> {
        let cond = self.parse_or()?;
        if !self.at(TokenKind::Question) {
            return Ok(cond);
        }
        self.advance();
        let then_branch = self.parse_expr()?;
        self.expect(TokenKind::Colon, "':'")?;
        let else_branch = self.parse_expr()?;
        Ok(Expr::ternary(cond, then_branch, else_branch))
    }

    fn parse_or(&mut self) -> Result<Expr> {
        let mut left = self.parse_and()?;
        while self.at(TokenKind::Or) {
            self.advance();
            let right = self.parse_and()?;
            left = Expr::logic(BoolOp::Or, left, right);
        }
        Ok(left)
    }

    fn parse_and(&mut self) -> Result<Expr> {
        let mut left = self.parse_equality()?;
        while self.at(TokenKind::And) {
            self.advance();
            let right = self.parse_equality()?;
            left = Expr::logic(BoolOp::And, left, right);
        }
        Ok(left)
    }

    fn parse_equality(&mut self) -> Result<Expr> {
        let left = self.parse_relational()?;
        if !self.current.kind.is_equality() {
            return Ok(left);
        }
        self.parse_comparison_rhs(left, Self::parse_relational)
    }

    fn parse_relational(&mut self) -> Result<Expr> {
        let left = self.parse_additive()?;
        if !self.current.kind.is_relational() {
            return Ok(left);
        }
        self.parse_comparison_rhs(left, Self::parse_additive)
    }

    /// Consume a comparison operator and its right operand. A second
    /// comparison operator right after it is rejected.
    fn parse_comparison_rhs(
        &mut self,
        left: Expr,
        operand: fn(&mut Self) -> Result<Expr>,
    ) -> Result<Expr> {
        let op = self.binary_op()?;
        self.advance();
        let right = operand(self)?;
        if self.current.kind.is_comparison() {
            return Err(self.error(ParseErrorKind::ChainedComparison {
                op: self.current.lit.clone(),
            }));
        }
        Ok(Expr::binary(op, left, right))
    }

    fn parse_additive(&mut self) -> Result<Expr> {
        let mut left = self.parse_multiplicative()?;
        while matches!(self.current.kind, TokenKind::Plus | TokenKind::Minus) {
            let op = self.binary_op()?;
            self.advance();
            let right = self.parse_multiplicative()?;
            left = Expr::binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_multiplicative(&mut self) -> Result<Expr> {
        let mut left = self.parse_unary()?;
        while matches!(
            self.current.kind,
            TokenKind::Star | TokenKind::Slash | TokenKind::Percent
        ) {
            let op = self.binary_op()?;
            self.advance();
            let right = self.parse_unary()?;
            left = Expr::binary(op, left, right);
        }
        Ok(left)
    }

    fn binary_op(&self) -> Result<BinaryOp> {
        BinaryOp::from_token(self.current.kind).ok_or_else(|| self.unexpected("operator"))
    }

    fn parse_unary(&mut self) -> Result<Expr> {
        let op = match self.current.kind {
            TokenKind::Minus => UnaryOp::Neg,
            TokenKind::Not => UnaryOp::Not,
            _ => return self.parse_primary(),
        };
        self.advance();
        let expr = self.nested(Self::parse_unary)?;
        Ok(Expr::unary(op, expr))
    }

    fn parse_primary(&mut self) -> Result<Expr> {
        let mut expr = self.parse_atom()?;
        while self.at(TokenKind::In) {
            self.advance();
            let set = self.parse_literal_set()?;
            expr = Expr::In {
                value: Box::new(expr),
                set,
            };
        }
        Ok(expr)
    }

    fn parse_atom(&mut self) -> Result<Expr> {
        match self.current.kind {
            TokenKind::Number => Ok(Expr::Number(self.parse_number()?)),
            TokenKind::Ident => Ok(Expr::Ident(self.advance().lit)),
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expr()?;
                self.expect(TokenKind::RParen, "')'")?;
                Ok(Expr::paren(inner))
            }
            TokenKind::LBracket => Err(self.error(ParseErrorKind::ArrayOutsideMembership)),
            _ => Err(self.unexpected("expression")),
        }
    }

    fn parse_number(&mut self) -> Result<i64> {
        let value = parse_int_literal(&self.current.lit).map_err(|_| {
            self.error(ParseErrorKind::InvalidNumber {
                text: self.current.lit.clone(),
            })
        })?;
        self.advance();
        Ok(value)
    }

    /// `[n1, n2, ...]`: at least one number literal.
    fn parse_literal_set(&mut self) -> Result<LiteralSet> {
        self.expect(TokenKind::LBracket, "'['")?;
        let mut set = LiteralSet::new();
        loop {
            if !self.at(TokenKind::Number) {
                return Err(self.unexpected("number literal"));
            }
            set.push(self.parse_number()?);
            if !self.at(TokenKind::Comma) {
                break;
            }
            self.advance();
        }
        self.expect(TokenKind::RBracket, "']'")?;
        Ok(set)
    }
}
