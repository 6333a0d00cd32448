use core::{fmt, mem};

use smallvec::SmallVec;

use crate::parser::{BinaryOp, BoolOp, UnaryOp};

/// Literal set of a membership test. Most rule sets are short, so a handful
/// of values are stored inline.
pub type LiteralSet = SmallVec<[i64; 4]>;

/// A top-level, `;`-terminated unit of a program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// Evaluate an expression and yield its value.
    Expression(Expr),
    /// `var name = expr`: evaluate and bind into the environment.
    VarDef { name: String, expr: Expr },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Number(i64),
    Ident(String),
    Unary {
        op: UnaryOp,
        expr: Box<Expr>,
    },
    /// Explicit grouping, kept so the tree prints back the way it was written.
    Paren(Box<Expr>),
    /// Arithmetic or comparison.
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// Short-circuiting `&&` / `||`.
    Logic {
        op: BoolOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// `value in [n1, n2, ...]`; the set is fixed at parse time.
    In {
        value: Box<Expr>,
        set: LiteralSet,
    },
    Ternary {
        cond: Box<Expr>,
        then_branch: Box<Expr>,
        else_branch: Box<Expr>,
    },
}

impl Expr {
    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Ident(name.into())
    }

    pub fn unary(op: UnaryOp, expr: Expr) -> Self {
        Expr::Unary {
            op,
            expr: Box::new(expr),
        }
    }

    pub fn paren(expr: Expr) -> Self {
        Expr::Paren(Box::new(expr))
    }

    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn logic(op: BoolOp, left: Expr, right: Expr) -> Self {
        Expr::Logic {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn membership(value: Expr, set: impl IntoIterator<Item = i64>) -> Self {
        Expr::In {
            value: Box::new(value),
            set: set.into_iter().collect(),
        }
    }

    pub fn ternary(cond: Expr, then_branch: Expr, else_branch: Expr) -> Self {
        Expr::Ternary {
            cond: Box::new(cond),
            then_branch: Box::new(then_branch),
            else_branch: Box::new(else_branch),
        }
    }
}

// Operator chains like `1 + 1 + ... + 1` nest as deep as they are long, so
// the tree is torn down with an explicit stack instead of recursive drop glue.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut expr) = pending.pop() {
            expr.detach_children(&mut pending);
        }
    }
}

impl Expr {
    /// Move every non-leaf child into `out`, leaving placeholders behind.
    fn detach_children(&mut self, out: &mut Vec<Expr>) {
        let mut take = |child: &mut Box<Expr>| {
            if !matches!(**child, Expr::Number(_) | Expr::Ident(_)) {
                out.push(mem::replace(&mut **child, Expr::Number(0)));
            }
        };
        match self {
            Expr::Number(_) | Expr::Ident(_) => {}
            Expr::Unary { expr, .. } | Expr::Paren(expr) | Expr::In { value: expr, .. } => {
                take(expr)
            }
            Expr::Binary { left, right, .. } | Expr::Logic { left, right, .. } => {
                take(left);
                take(right);
            }
            Expr::Ternary {
                cond,
                then_branch,
                else_branch,
            } => {
                take(cond);
                take(then_branch);
                take(else_branch);
            }
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(value) => write!(f, "{value}"),
            Expr::Ident(name) => f.write_str(name),
            Expr::Unary { op, expr } => write!(f, "{op}{expr}"),
            Expr::Paren(expr) => write!(f, "({expr})"),
            Expr::Binary { op, left, right } => write!(f, "{left} {op} {right}"),
            Expr::Logic { op, left, right } => write!(f, "{left} {op} {right}"),
            Expr::In { value, set } => {
                write!(f, "{value} in [")?;
                for (i, n) in set.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{n}")?;
                }
                f.write_str("]")
            }
            Expr::Ternary {
                cond,
                then_branch,
                else_branch,
            } => write!(f, "{cond} ? {then_branch} : {else_branch}"),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Expression(expr) => write!(f, "{expr};"),
            Statement::VarDef { name, expr } => write!(f, "var {name} = {expr};"),
        }
    }
}
