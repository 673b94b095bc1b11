//! Name resolution pass
//!
//! Checks that every variable read is declared somewhere along the scope
//! chain. The result is a plain boolean: an unresolved name is an expected
//! analysis outcome, not an error. Traversal never stops early, so every
//! assignment in the tree still declares its target.

use tracing::debug;

use crate::ast::{Assignment, Binary, Block, Return, Stmt, Value, Variable};
use crate::visitor::Pass;

use super::scope::{ScopeId, ScopeTree};

/// Resolution only tracks whether a name is declared.
pub type Declarations = ScopeTree<()>;

pub struct NameResolver<'s> {
    scopes: &'s mut Declarations,
    unresolved: Vec<String>,
}

impl<'s> NameResolver<'s> {
    pub fn new(scopes: &'s mut Declarations) -> Self {
        Self {
            scopes,
            unresolved: Vec::new(),
        }
    }

    /// Names that failed to resolve so far, in visit order. A name read
    /// twice without a declaration appears twice.
    pub fn unresolved(&self) -> &[String] {
        &self.unresolved
    }

    pub fn into_unresolved(self) -> Vec<String> {
        self.unresolved
    }

    pub fn resolve(&mut self, root: &Stmt, scope: ScopeId<()>) -> bool {
        let valid = root.accept(self, scope);
        debug!(valid, scopes = self.scopes.len(), "name resolution finished");
        valid
    }
}

/// Resolves `root` against `scope`, declaring assignment targets as it goes.
pub fn resolve_names(root: &Stmt, scopes: &mut Declarations, scope: ScopeId<()>) -> bool {
    NameResolver::new(scopes).resolve(root, scope)
}

impl<'ast> Pass<'ast> for NameResolver<'_> {
    type Input = ScopeId<()>;
    type ExprOutput = bool;
    type StmtOutput = bool;

    fn visit_literal(&mut self, _value: Value, _scope: ScopeId<()>) -> bool {
        true
    }

    fn visit_variable(&mut self, variable: &'ast Variable, scope: ScopeId<()>) -> bool {
        let found = self.scopes.contains(scope, variable.name());
        if !found {
            debug!(name = variable.name(), "unresolved variable");
            self.unresolved.push(variable.name().to_string());
        }
        found
    }

    fn visit_binary(&mut self, binary: &'ast Binary, scope: ScopeId<()>) -> bool {
        // Both sides are visited before combining.
        let left = binary.left.accept(self, scope);
        let right = binary.right.accept(self, scope);
        left && right
    }

    fn visit_assignment(&mut self, assignment: &'ast Assignment, scope: ScopeId<()>) -> bool {
        let valid = assignment.value.accept(self, scope);
        self.scopes.declare(scope, assignment.target.name(), ());
        valid
    }

    fn visit_return(&mut self, ret: &'ast Return, scope: ScopeId<()>) -> bool {
        ret.value.accept(self, scope)
    }

    fn visit_block(&mut self, block: &'ast Block, scope: ScopeId<()>) -> bool {
        let local = self.scopes.create_scope(Some(scope));
        block
            .statements
            .iter()
            .fold(true, |valid, stmt| stmt.accept(self, local) && valid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{assign, block, int, plus, ret, try_block, variable};

    fn resolve(stmt: &Stmt) -> (bool, Declarations, ScopeId<()>) {
        let (mut scopes, global) = Declarations::with_root();
        let valid = resolve_names(stmt, &mut scopes, global);
        (valid, scopes, global)
    }

    #[test]
    fn literals_always_resolve() {
        let (mut scopes, global) = Declarations::with_root();
        let expr = int(4);

        assert!(expr.accept(&mut NameResolver::new(&mut scopes), global));
    }

    #[test]
    fn variable_resolves_through_parent_chain() {
        let (mut scopes, global) = Declarations::with_root();
        scopes.declare(global, "x", ());
        let inner = scopes.create_scope(Some(global));
        let expr = variable("x").unwrap();

        assert!(expr.accept(&mut NameResolver::new(&mut scopes), inner));
    }

    #[test]
    fn undeclared_variable_is_invalid() {
        let (valid, _, _) = resolve(&try_block([ret(variable("x"))]).unwrap());
        assert!(!valid);
    }

    #[test]
    fn assignment_declares_even_with_invalid_initializer() {
        let (mut scopes, global) = Declarations::with_root();
        let stmt = assign("x", plus(variable("missing"), int(1))).unwrap();

        let valid = resolve_names(&stmt, &mut scopes, global);

        assert!(!valid);
        assert!(scopes.contains(global, "x"));
    }

    #[test]
    fn self_referencing_assignment_is_invalid_but_declares() {
        let (mut scopes, global) = Declarations::with_root();
        let stmt = assign("x", variable("x")).unwrap();

        assert!(!resolve_names(&stmt, &mut scopes, global));
        assert!(scopes.contains(global, "x"));
    }

    #[test]
    fn binary_visits_both_sides_and_conjoins() {
        let (mut scopes, global) = Declarations::with_root();
        scopes.declare(global, "a", ());
        let expr = plus(variable("missing"), variable("a")).unwrap();

        assert!(!expr.accept(&mut NameResolver::new(&mut scopes), global));
    }

    #[test]
    fn binary_reports_unresolved_names_on_both_sides() {
        let (mut scopes, global) = Declarations::with_root();
        let expr = plus(variable("a"), variable("b")).unwrap();
        let mut resolver = NameResolver::new(&mut scopes);

        assert!(!expr.accept(&mut resolver, global));
        assert_eq!(resolver.into_unresolved(), vec!["a", "b"]);
    }

    #[test]
    fn block_continues_after_failure() {
        let stmt = try_block([
            assign("y", variable("missing")),
            assign("z", int(1)),
            ret(plus(variable("y"), variable("z"))),
        ])
        .unwrap();

        let (valid, scopes, global) = resolve(&stmt);

        assert!(!valid);
        let block_scope = scopes.children(global).next().unwrap();
        assert!(block_scope.declares("y"));
        assert!(block_scope.declares("z"));
    }

    #[test]
    fn sequential_declarations_resolve() {
        let stmt = try_block([
            assign("x", int(1)),
            assign("y", plus(variable("x"), int(2))),
            ret(variable("y")),
        ])
        .unwrap();

        let (valid, _, _) = resolve(&stmt);
        assert!(valid);
    }

    #[test]
    fn nested_block_sees_outer_names() {
        let inner = try_block([ret(variable("x"))]).unwrap();
        let stmt = block(vec![assign("x", int(1)).unwrap(), inner]);

        let (valid, _, _) = resolve(&stmt);
        assert!(valid);
    }

    #[test]
    fn outer_block_does_not_see_inner_names() {
        let inner = try_block([assign("x", int(1))]).unwrap();
        let stmt = block(vec![inner, ret(variable("x")).unwrap()]);

        let (valid, _, _) = resolve(&stmt);
        assert!(!valid);
    }

    #[test]
    fn records_unresolved_names_in_order() {
        let (mut scopes, global) = Declarations::with_root();
        let stmt = try_block([
            assign("a", variable("b")),
            ret(plus(variable("c"), variable("a"))),
        ])
        .unwrap();

        let mut resolver = NameResolver::new(&mut scopes);
        assert!(!resolver.resolve(&stmt, global));
        assert_eq!(resolver.into_unresolved(), vec!["b", "c"]);
    }

    #[test]
    fn empty_block_is_valid() {
        let (valid, scopes, _) = resolve(&block(Vec::new()));

        assert!(valid);
        assert_eq!(scopes.len(), 2);
    }
}
