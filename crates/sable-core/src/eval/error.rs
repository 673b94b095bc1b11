//! Runtime evaluation errors.

use crate::ast::BinaryOp;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    #[error("undefined variable '{name}'")]
    UndefinedVariable { name: String },

    #[error("division by zero in '{operator}'")]
    DivisionByZero { operator: BinaryOp },

    #[error("invalid operation '{operator}': {reason}")]
    InvalidOperation {
        operator: BinaryOp,
        reason: &'static str,
    },
}

impl EvalError {
    pub(crate) fn overflow(operator: BinaryOp) -> Self {
        EvalError::InvalidOperation {
            operator,
            reason: "integer overflow",
        }
    }
}
