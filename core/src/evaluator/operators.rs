//! Binary and unary operator implementations.

use crate::{
    evaluator::EvalError,
    parser::{BinaryOp, UnaryOp},
};

/// Evaluate a binary operation on two integers.
///
/// Uses wrapping arithmetic to prevent panics on overflow.
/// Division by zero returns an error. Comparisons yield 1 or 0.
pub(super) fn eval_binary(op: BinaryOp, left: i64, right: i64) -> Result<i64, EvalError> {
    match op {
        BinaryOp::Add => Ok(left.wrapping_add(right)),
        BinaryOp::Sub => Ok(left.wrapping_sub(right)),
        BinaryOp::Mul => Ok(left.wrapping_mul(right)),
        BinaryOp::Div | BinaryOp::Rem if right == 0 => Err(EvalError::DivisionByZero { op }),
        // Wrapping variants handle the i64::MIN / -1 case
        BinaryOp::Div => Ok(left.wrapping_div(right)),
        BinaryOp::Rem => Ok(left.wrapping_rem(right)),
        BinaryOp::Eq => Ok(from_bool(left == right)),
        BinaryOp::Neq => Ok(from_bool(left != right)),
        BinaryOp::Ge => Ok(from_bool(left >= right)),
        BinaryOp::Gt => Ok(from_bool(left > right)),
        BinaryOp::Le => Ok(from_bool(left <= right)),
        BinaryOp::Lt => Ok(from_bool(left < right)),
    }
}

pub(super) fn eval_unary(op: UnaryOp, value: i64) -> i64 {
    match op {
        UnaryOp::Neg => value.wrapping_neg(),
        UnaryOp::Not => from_bool(value == 0),
    }
}

pub(super) fn from_bool(b: bool) -> i64 {
    i64::from(b)
}
