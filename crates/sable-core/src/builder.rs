//! Validating constructors for AST nodes
//!
//! One constructor per node variant. Operands are accepted as `Expr`,
//! `Option<Expr>` or the `Result` of another constructor, so nested calls
//! compose and an absent operand is reported instead of producing a
//! half-built tree.

use tracing::trace;

use crate::ast::{Assignment, Binary, BinaryOp, Block, Expr, Return, Stmt, Value, Variable};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("{node} is missing its {operand} operand")]
    MissingOperand {
        node: &'static str,
        operand: &'static str,
    },
    #[error("{node} requires a non-empty identifier")]
    EmptyIdentifier { node: &'static str },
}

/// Anything that can stand in for a required sub-expression.
pub trait Operand {
    fn into_operand(self) -> Result<Option<Expr>, BuildError>;
}

impl Operand for Expr {
    fn into_operand(self) -> Result<Option<Expr>, BuildError> {
        Ok(Some(self))
    }
}

impl Operand for Option<Expr> {
    fn into_operand(self) -> Result<Option<Expr>, BuildError> {
        Ok(self)
    }
}

impl Operand for Result<Expr, BuildError> {
    fn into_operand(self) -> Result<Option<Expr>, BuildError> {
        self.map(Some)
    }
}

fn require(
    operand: impl Operand,
    node: &'static str,
    which: &'static str,
) -> Result<Expr, BuildError> {
    operand
        .into_operand()?
        .ok_or(BuildError::MissingOperand {
            node,
            operand: which,
        })
}

pub fn binary(op: BinaryOp, left: impl Operand, right: impl Operand) -> Result<Expr, BuildError> {
    let left = require(left, op.name(), "left")?;
    let right = require(right, op.name(), "right")?;
    trace!(op = op.name(), "built binary expression");
    Ok(Expr::Binary(Binary {
        op,
        left: Box::new(left),
        right: Box::new(right),
    }))
}

pub fn plus(left: impl Operand, right: impl Operand) -> Result<Expr, BuildError> {
    binary(BinaryOp::Plus, left, right)
}

pub fn minus(left: impl Operand, right: impl Operand) -> Result<Expr, BuildError> {
    binary(BinaryOp::Minus, left, right)
}

pub fn times(left: impl Operand, right: impl Operand) -> Result<Expr, BuildError> {
    binary(BinaryOp::Times, left, right)
}

pub fn float_div(left: impl Operand, right: impl Operand) -> Result<Expr, BuildError> {
    binary(BinaryOp::FloatDiv, left, right)
}

pub fn int_div(left: impl Operand, right: impl Operand) -> Result<Expr, BuildError> {
    binary(BinaryOp::IntDiv, left, right)
}

pub fn modulus(left: impl Operand, right: impl Operand) -> Result<Expr, BuildError> {
    binary(BinaryOp::Modulus, left, right)
}

pub fn power(left: impl Operand, right: impl Operand) -> Result<Expr, BuildError> {
    binary(BinaryOp::Exponentiation, left, right)
}

pub fn literal(value: impl Into<Value>) -> Expr {
    let value = value.into();
    trace!(%value, "built literal");
    Expr::Literal(value)
}

pub fn int(value: i64) -> Expr {
    literal(value)
}

pub fn float(value: f64) -> Expr {
    literal(value)
}

pub fn variable(name: &str) -> Result<Expr, BuildError> {
    let variable = Variable::try_from(name)?;
    trace!(name, "built variable");
    Ok(Expr::Variable(variable))
}

pub fn assign(target: &str, value: impl Operand) -> Result<Stmt, BuildError> {
    let target = Variable::try_from(target)
        .map_err(|_| BuildError::EmptyIdentifier { node: "assignment" })?;
    let value = require(value, "assignment", "value")?;
    trace!(target = target.name(), "built assignment");
    Ok(Stmt::Assignment(Assignment { target, value }))
}

pub fn ret(value: impl Operand) -> Result<Stmt, BuildError> {
    let value = require(value, "return", "value")?;
    trace!("built return");
    Ok(Stmt::Return(Return { value }))
}

pub fn block(statements: Vec<Stmt>) -> Stmt {
    trace!(statements = statements.len(), "built block");
    Stmt::Block(Block { statements })
}

/// Builds a block from fallible statements, stopping at the first error.
pub fn try_block(
    statements: impl IntoIterator<Item = Result<Stmt, BuildError>>,
) -> Result<Stmt, BuildError> {
    let statements = statements.into_iter().collect::<Result<Vec<_>, _>>()?;
    Ok(block(statements))
}
