//! Abstract syntax tree for the Sable language
//!
//! The node set is closed: expressions are literals, variables and binary
//! operators; statements are assignments, returns and blocks. Nodes carry no
//! behaviour of their own. Every analysis is a [`Pass`](crate::visitor::Pass)
//! dispatched through `accept`.

mod value;

pub use value::Value;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::builder::BuildError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinaryOp {
    Plus,
    Minus,
    Times,
    FloatDiv,
    IntDiv,
    Modulus,
    Exponentiation,
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 7] = [
        BinaryOp::Plus,
        BinaryOp::Minus,
        BinaryOp::Times,
        BinaryOp::FloatDiv,
        BinaryOp::IntDiv,
        BinaryOp::Modulus,
        BinaryOp::Exponentiation,
    ];

    /// Source lexeme. `/` is floating division, `//` integral division.
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Plus => "+",
            BinaryOp::Minus => "-",
            BinaryOp::Times => "*",
            BinaryOp::FloatDiv => "/",
            BinaryOp::IntDiv => "//",
            BinaryOp::Modulus => "%",
            BinaryOp::Exponentiation => "**",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BinaryOp::Plus => "plus",
            BinaryOp::Minus => "minus",
            BinaryOp::Times => "times",
            BinaryOp::FloatDiv => "float_div",
            BinaryOp::IntDiv => "int_div",
            BinaryOp::Modulus => "modulus",
            BinaryOp::Exponentiation => "exponentiation",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A variable reference. The identifier is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Variable {
    name: String,
}

impl Variable {
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl TryFrom<String> for Variable {
    type Error = BuildError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        if name.is_empty() {
            return Err(BuildError::EmptyIdentifier { node: "variable" });
        }
        Ok(Self { name })
    }
}

impl TryFrom<&str> for Variable {
    type Error = BuildError;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        Self::try_from(name.to_string())
    }
}

impl From<Variable> for String {
    fn from(variable: Variable) -> Self {
        variable.name
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Binary {
    pub op: BinaryOp,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expr {
    Literal(Value),
    Variable(Variable),
    Binary(Binary),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub target: Variable,
    pub value: Expr,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Return {
    pub value: Expr,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Block {
    pub statements: Vec<Stmt>,
}

impl Block {
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stmt {
    Assignment(Assignment),
    Return(Return),
    Block(Block),
}

impl Stmt {
    /// Number of assignment and return statements in this subtree.
    pub fn statement_count(&self) -> usize {
        match self {
            Stmt::Assignment(_) | Stmt::Return(_) => 1,
            Stmt::Block(block) => block.statements.iter().map(Stmt::statement_count).sum(),
        }
    }
}

impl From<Block> for Stmt {
    fn from(block: Block) -> Self {
        Stmt::Block(block)
    }
}

impl From<Assignment> for Stmt {
    fn from(assignment: Assignment) -> Self {
        Stmt::Assignment(assignment)
    }
}

impl From<Return> for Stmt {
    fn from(ret: Return) -> Self {
        Stmt::Return(ret)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::unparse::unparse_expr(self))
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::unparse::unparse(self, 0))
    }
}
