//! Scope tables for variable bindings
//!
//! Scopes live in an arena and point at their parent by id, so a nested
//! block can read through the chain without ever owning or mutating its
//! ancestors. The slot type is generic: name resolution only records that a
//! name exists, the evaluator stores values.

use std::collections::HashMap;

use id_arena::{Arena, Id};
use tracing::trace;

pub type ScopeId<T> = Id<Scope<T>>;

#[derive(Debug)]
pub struct Scope<T> {
    pub id: ScopeId<T>,
    pub parent: Option<ScopeId<T>>,
    pub children: Vec<ScopeId<T>>,
    bindings: HashMap<String, T>,
}

impl<T> Scope<T> {
    /// Local lookup only; does not consult the parent chain.
    pub fn get(&self, name: &str) -> Option<&T> {
        self.bindings.get(name)
    }

    pub fn declares(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn bindings(&self) -> impl Iterator<Item = (&str, &T)> {
        self.bindings.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[derive(Debug)]
pub struct ScopeTree<T> {
    arena: Arena<Scope<T>>,
    root: Option<ScopeId<T>>,
}

impl<T> Default for ScopeTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ScopeTree<T> {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Creates a tree holding a single, parentless scope.
    pub fn with_root() -> (Self, ScopeId<T>) {
        let mut tree = Self::new();
        let root = tree.create_scope(None);
        (tree, root)
    }

    pub fn create_scope(&mut self, parent: Option<ScopeId<T>>) -> ScopeId<T> {
        let id = self.arena.alloc_with_id(|id| Scope {
            id,
            parent,
            children: Vec::new(),
            bindings: HashMap::new(),
        });

        if let Some(parent_id) = parent {
            self.arena[parent_id].children.push(id);
        }

        if self.root.is_none() {
            self.root = Some(id);
        }

        id
    }

    pub fn root(&self) -> Option<ScopeId<T>> {
        self.root
    }

    pub fn get(&self, id: ScopeId<T>) -> &Scope<T> {
        &self.arena[id]
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.len() == 0
    }

    pub fn parent(&self, id: ScopeId<T>) -> Option<&Scope<T>> {
        self.arena[id].parent.map(|p| &self.arena[p])
    }

    pub fn children(&self, id: ScopeId<T>) -> impl Iterator<Item = &Scope<T>> {
        self.arena[id].children.iter().map(|&c| &self.arena[c])
    }

    pub fn ancestors(&self, id: ScopeId<T>) -> AncestorIter<'_, T> {
        AncestorIter {
            tree: self,
            current: Some(id),
        }
    }

    pub fn is_descendant_of(&self, scope: ScopeId<T>, ancestor: ScopeId<T>) -> bool {
        self.ancestors(scope).any(|s| s.id == ancestor)
    }

    /// Inserts or overwrites `name` in `scope` itself. Ancestors are never touched.
    pub fn declare(&mut self, scope: ScopeId<T>, name: &str, value: T) {
        trace!(name, "declare");
        self.arena[scope].bindings.insert(name.to_string(), value);
    }

    /// Finds `name` in the nearest scope of the chain starting at `scope`.
    pub fn lookup(&self, scope: ScopeId<T>, name: &str) -> Option<&T> {
        self.ancestors(scope).find_map(|s| s.bindings.get(name))
    }

    pub fn contains(&self, scope: ScopeId<T>, name: &str) -> bool {
        self.lookup(scope, name).is_some()
    }

    /// The scope whose binding `lookup` would return.
    pub fn declaring_scope(&self, scope: ScopeId<T>, name: &str) -> Option<ScopeId<T>> {
        self.ancestors(scope)
            .find(|s| s.declares(name))
            .map(|s| s.id)
    }
}

pub struct AncestorIter<'a, T> {
    tree: &'a ScopeTree<T>,
    current: Option<ScopeId<T>>,
}

impl<'a, T> Iterator for AncestorIter<'a, T> {
    type Item = &'a Scope<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let current_id = self.current?;
        let scope = &self.tree.arena[current_id];
        self.current = scope.parent;
        Some(scope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_scope_becomes_root() {
        let (tree, global) = ScopeTree::<i64>::with_root();

        assert_eq!(tree.root(), Some(global));
        assert!(tree.get(global).parent.is_none());
        assert!(tree.get(global).children.is_empty());
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn nested_scopes_have_correct_parent() {
        let (mut tree, global) = ScopeTree::<i64>::with_root();
        let outer = tree.create_scope(Some(global));
        let inner = tree.create_scope(Some(outer));

        assert_eq!(tree.get(inner).parent, Some(outer));
        assert_eq!(tree.get(outer).parent, Some(global));
        assert_eq!(tree.get(global).children, vec![outer]);
        assert_eq!(tree.get(outer).children, vec![inner]);
    }

    #[test]
    fn declare_then_lookup_in_same_scope() {
        let (mut tree, global) = ScopeTree::with_root();
        tree.declare(global, "x", 1);

        assert_eq!(tree.lookup(global, "x"), Some(&1));
        assert!(tree.contains(global, "x"));
        assert!(!tree.contains(global, "y"));
    }

    #[test]
    fn lookup_delegates_to_parent_chain() {
        let (mut tree, global) = ScopeTree::with_root();
        let block = tree.create_scope(Some(global));
        let nested = tree.create_scope(Some(block));
        tree.declare(global, "x", 1);

        assert_eq!(tree.lookup(nested, "x"), Some(&1));
        assert_eq!(tree.declaring_scope(nested, "x"), Some(global));
    }

    #[test]
    fn declare_never_reaches_parent() {
        let (mut tree, global) = ScopeTree::with_root();
        let block = tree.create_scope(Some(global));
        tree.declare(block, "x", 1);

        assert!(tree.contains(block, "x"));
        assert!(!tree.contains(global, "x"));
        assert!(tree.get(global).is_empty());
    }

    #[test]
    fn shadowing_hides_without_altering_ancestor() {
        let (mut tree, global) = ScopeTree::with_root();
        let block = tree.create_scope(Some(global));
        tree.declare(global, "x", 1);
        tree.declare(block, "x", 2);

        assert_eq!(tree.lookup(block, "x"), Some(&2));
        assert_eq!(tree.lookup(global, "x"), Some(&1));
        assert_eq!(tree.declaring_scope(block, "x"), Some(block));
    }

    #[test]
    fn redeclaring_overwrites_local_slot() {
        let (mut tree, global) = ScopeTree::with_root();
        tree.declare(global, "x", 1);
        tree.declare(global, "x", 5);

        assert_eq!(tree.lookup(global, "x"), Some(&5));
        assert_eq!(tree.get(global).len(), 1);
    }

    #[test]
    fn sibling_scopes_do_not_see_each_other() {
        let (mut tree, global) = ScopeTree::with_root();
        let first = tree.create_scope(Some(global));
        let second = tree.create_scope(Some(global));
        tree.declare(first, "x", ());

        assert!(tree.contains(first, "x"));
        assert!(!tree.contains(second, "x"));
        assert_eq!(tree.children(global).count(), 2);
    }

    #[test]
    fn ancestors_iterator_walks_to_root() {
        let (mut tree, global) = ScopeTree::<()>::with_root();
        let block = tree.create_scope(Some(global));
        let nested = tree.create_scope(Some(block));

        let chain: Vec<_> = tree.ancestors(nested).map(|s| s.id).collect();

        assert_eq!(chain, vec![nested, block, global]);
        assert!(tree.is_descendant_of(nested, global));
        assert!(!tree.is_descendant_of(global, nested));
    }
}
