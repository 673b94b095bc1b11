//! Pass trait for double dispatch over AST nodes.

use crate::ast::{Assignment, Binary, Block, Return, Value, Variable};

/// An analysis or transformation over the AST.
///
/// A pass supplies one method per node variant. Nodes call back into the pass
/// through `accept`, handing over the pass-specific `Input`; expression
/// variants produce `ExprOutput` and statement variants `StmtOutput`.
///
/// The `'ast` lifetime lets passes keep references to the nodes they visit
/// (the control-flow graph stores statements as vertices).
pub trait Pass<'ast> {
    type Input;
    type ExprOutput;
    type StmtOutput;

    fn visit_literal(&mut self, value: Value, input: Self::Input) -> Self::ExprOutput;

    fn visit_variable(&mut self, variable: &'ast Variable, input: Self::Input)
    -> Self::ExprOutput;

    /// Covers every operator in [`BinaryOp`](crate::ast::BinaryOp); passes
    /// match on `binary.op` exhaustively.
    fn visit_binary(&mut self, binary: &'ast Binary, input: Self::Input) -> Self::ExprOutput;

    fn visit_assignment(
        &mut self,
        assignment: &'ast Assignment,
        input: Self::Input,
    ) -> Self::StmtOutput;

    fn visit_return(&mut self, ret: &'ast Return, input: Self::Input) -> Self::StmtOutput;

    fn visit_block(&mut self, block: &'ast Block, input: Self::Input) -> Self::StmtOutput;
}
