//! Visitor pattern for AST traversal.
//!
//! Every node exposes `accept`, which selects the matching [`Pass`] method.

mod traits;

pub use traits::Pass;

use crate::ast::{Assignment, Binary, Block, Expr, Return, Stmt};

impl Expr {
    pub fn accept<'ast, P: Pass<'ast>>(&'ast self, pass: &mut P, input: P::Input) -> P::ExprOutput {
        match self {
            Expr::Literal(value) => pass.visit_literal(*value, input),
            Expr::Variable(variable) => pass.visit_variable(variable, input),
            Expr::Binary(binary) => binary.accept(pass, input),
        }
    }
}

impl Binary {
    pub fn accept<'ast, P: Pass<'ast>>(&'ast self, pass: &mut P, input: P::Input) -> P::ExprOutput {
        pass.visit_binary(self, input)
    }
}

impl Stmt {
    pub fn accept<'ast, P: Pass<'ast>>(&'ast self, pass: &mut P, input: P::Input) -> P::StmtOutput {
        match self {
            Stmt::Assignment(assignment) => assignment.accept(pass, input),
            Stmt::Return(ret) => ret.accept(pass, input),
            Stmt::Block(block) => block.accept(pass, input),
        }
    }
}

impl Assignment {
    pub fn accept<'ast, P: Pass<'ast>>(&'ast self, pass: &mut P, input: P::Input) -> P::StmtOutput {
        pass.visit_assignment(self, input)
    }
}

impl Return {
    pub fn accept<'ast, P: Pass<'ast>>(&'ast self, pass: &mut P, input: P::Input) -> P::StmtOutput {
        pass.visit_return(self, input)
    }
}

impl Block {
    pub fn accept<'ast, P: Pass<'ast>>(&'ast self, pass: &mut P, input: P::Input) -> P::StmtOutput {
        pass.visit_block(self, input)
    }
}
