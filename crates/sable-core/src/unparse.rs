//! Unparse pass: renders the AST back to indented source text.

use crate::ast::{Assignment, Binary, Block, Expr, Return, Stmt, Value, Variable};
use crate::visitor::Pass;

pub const DEFAULT_INDENT: usize = 4;

/// Renders nodes at a given nesting level. Binary operators are always fully
/// parenthesized; statements are prefixed with `level * indent` spaces.
#[derive(Debug, Clone, Copy)]
pub struct Unparser {
    indent: usize,
}

impl Default for Unparser {
    fn default() -> Self {
        Self::new()
    }
}

impl Unparser {
    pub fn new() -> Self {
        Self::with_indent(DEFAULT_INDENT)
    }

    pub fn with_indent(indent: usize) -> Self {
        Self { indent }
    }

    fn pad(&self, level: usize) -> String {
        " ".repeat(level * self.indent)
    }
}

pub fn unparse(stmt: &Stmt, level: usize) -> String {
    stmt.accept(&mut Unparser::new(), level)
}

pub fn unparse_expr(expr: &Expr) -> String {
    expr.accept(&mut Unparser::new(), 0)
}

impl<'ast> Pass<'ast> for Unparser {
    type Input = usize;
    type ExprOutput = String;
    type StmtOutput = String;

    fn visit_literal(&mut self, value: Value, _level: usize) -> String {
        value.to_string()
    }

    fn visit_variable(&mut self, variable: &'ast Variable, _level: usize) -> String {
        variable.name().to_string()
    }

    fn visit_binary(&mut self, binary: &'ast Binary, level: usize) -> String {
        format!(
            "({} {} {})",
            binary.left.accept(self, level),
            binary.op.symbol(),
            binary.right.accept(self, level)
        )
    }

    fn visit_assignment(&mut self, assignment: &'ast Assignment, level: usize) -> String {
        format!(
            "{}{} = {}",
            self.pad(level),
            assignment.target.name(),
            assignment.value.accept(self, level)
        )
    }

    fn visit_return(&mut self, ret: &'ast Return, level: usize) -> String {
        format!("{}return {}", self.pad(level), ret.value.accept(self, level))
    }

    fn visit_block(&mut self, block: &'ast Block, level: usize) -> String {
        let mut out = format!("{}{{\n", self.pad(level));
        for stmt in &block.statements {
            out.push_str(&stmt.accept(self, level + 1));
            out.push('\n');
        }
        out.push_str(&self.pad(level));
        out.push('}');
        out
    }
}
