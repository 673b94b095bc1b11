//! Evaluation pass
//!
//! Interprets the AST against a chain of value scopes. Each block evaluates
//! in a fresh scope whose parent is the scope it was entered with, so inner
//! assignments never leak outward. A `return` stops the innermost block and
//! every block enclosing it.

mod error;
mod operators;

pub use error::EvalError;

use tracing::debug;

use crate::ast::{Assignment, Binary, Block, Expr, Return, Stmt, Value, Variable};
use crate::semantic::{ScopeId, ScopeTree};
use crate::visitor::Pass;

/// Value bindings for the evaluator.
pub type Environment = ScopeTree<Value>;

/// How a statement finished.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Completion {
    /// Execution continues; carries the statement's value, if it has one.
    Normal(Option<Value>),
    /// A `return` was executed.
    Return(Value),
}

impl Completion {
    pub fn value(self) -> Option<Value> {
        match self {
            Completion::Normal(value) => value,
            Completion::Return(value) => Some(value),
        }
    }
}

pub struct Evaluator<'s> {
    scopes: &'s mut Environment,
}

impl<'s> Evaluator<'s> {
    pub fn new(scopes: &'s mut Environment) -> Self {
        Self { scopes }
    }

    /// Runs `root` in `scope`. `None` is the result of a block that neither
    /// returns nor ends with a value-producing statement.
    pub fn run(&mut self, root: &Stmt, scope: ScopeId<Value>) -> Result<Option<Value>, EvalError> {
        let result = root.accept(self, scope);
        match &result {
            Ok(completion) => debug!(?completion, "evaluation finished"),
            Err(err) => debug!(%err, "evaluation failed"),
        }
        result.map(Completion::value)
    }

    pub fn eval_expr(&mut self, expr: &Expr, scope: ScopeId<Value>) -> Result<Value, EvalError> {
        expr.accept(self, scope)
    }
}

/// Evaluates `root` in `scope`, declaring assignment targets into the chain.
pub fn evaluate(
    root: &Stmt,
    scopes: &mut Environment,
    scope: ScopeId<Value>,
) -> Result<Option<Value>, EvalError> {
    Evaluator::new(scopes).run(root, scope)
}

/// Evaluates a closed expression in an empty environment.
pub fn evaluate_expr(expr: &Expr) -> Result<Value, EvalError> {
    let (mut scopes, global) = Environment::with_root();
    Evaluator::new(&mut scopes).eval_expr(expr, global)
}

impl<'ast> Pass<'ast> for Evaluator<'_> {
    type Input = ScopeId<Value>;
    type ExprOutput = Result<Value, EvalError>;
    type StmtOutput = Result<Completion, EvalError>;

    fn visit_literal(&mut self, value: Value, _scope: ScopeId<Value>) -> Result<Value, EvalError> {
        Ok(value)
    }

    fn visit_variable(
        &mut self,
        variable: &'ast Variable,
        scope: ScopeId<Value>,
    ) -> Result<Value, EvalError> {
        self.scopes
            .lookup(scope, variable.name())
            .copied()
            .ok_or_else(|| EvalError::UndefinedVariable {
                name: variable.name().to_string(),
            })
    }

    fn visit_binary(
        &mut self,
        binary: &'ast Binary,
        scope: ScopeId<Value>,
    ) -> Result<Value, EvalError> {
        let left = binary.left.accept(self, scope)?;
        let right = binary.right.accept(self, scope)?;
        operators::eval_binary(binary.op, left, right)
    }

    fn visit_assignment(
        &mut self,
        assignment: &'ast Assignment,
        scope: ScopeId<Value>,
    ) -> Result<Completion, EvalError> {
        let value = assignment.value.accept(self, scope)?;
        self.scopes.declare(scope, assignment.target.name(), value);
        Ok(Completion::Normal(Some(value)))
    }

    fn visit_return(
        &mut self,
        ret: &'ast Return,
        scope: ScopeId<Value>,
    ) -> Result<Completion, EvalError> {
        ret.value.accept(self, scope).map(Completion::Return)
    }

    fn visit_block(
        &mut self,
        block: &'ast Block,
        scope: ScopeId<Value>,
    ) -> Result<Completion, EvalError> {
        let local = self.scopes.create_scope(Some(scope));
        let mut last = None;

        for stmt in &block.statements {
            match stmt.accept(self, local)? {
                Completion::Return(value) => return Ok(Completion::Return(value)),
                Completion::Normal(value) => last = value,
            }
        }

        Ok(Completion::Normal(last))
    }
}
