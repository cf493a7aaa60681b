//! Environment for binding scoping during evaluation.
//!
//! Uses a scope stack. Bindings are introduced by successful matches
//! and are immutable; a case's bindings live exactly as long as its
//! guard and body evaluation, so scopes are pushed and popped around
//! each taken case.

use rustc_hash::FxHashMap;

use sieve_extract::Value;
use sieve_ir::Name;

/// Scope stack of name → value bindings.
///
/// The root scope is always present; the host pre-populates it with any
/// outer bindings before handing the environment to the evaluator.
#[derive(Debug)]
pub struct Environment {
    scopes: Vec<FxHashMap<Name, Value>>,
}

impl Environment {
    /// Create an environment with an empty root scope.
    pub fn new() -> Self {
        Environment {
            scopes: vec![FxHashMap::default()],
        }
    }

    /// Push a new innermost scope.
    pub fn push_scope(&mut self) {
        self.scopes.push(FxHashMap::default());
    }

    /// Pop the innermost scope. The root scope is never popped.
    pub fn pop_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    /// Define a binding in the innermost scope.
    pub fn define(&mut self, name: Name, value: Value) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name, value);
        }
    }

    /// Look up a binding, innermost scope first.
    pub fn lookup(&self, name: Name) -> Option<Value> {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.get(&name).cloned())
    }

    /// Current scope depth (the root scope counts as 1).
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn name(raw: u32) -> Name {
        Name::from_raw(raw)
    }

    #[test]
    fn define_and_lookup() {
        let mut env = Environment::new();
        env.define(name(1), Value::Int(42));
        assert_eq!(env.lookup(name(1)), Some(Value::Int(42)));
        assert_eq!(env.lookup(name(2)), None);
    }

    #[test]
    fn inner_scope_shadows_outer() {
        let mut env = Environment::new();
        env.define(name(1), Value::Int(1));
        env.push_scope();
        env.define(name(1), Value::Int(2));
        assert_eq!(env.lookup(name(1)), Some(Value::Int(2)));
        env.pop_scope();
        assert_eq!(env.lookup(name(1)), Some(Value::Int(1)));
    }

    #[test]
    fn popped_bindings_disappear() {
        let mut env = Environment::new();
        env.push_scope();
        env.define(name(7), Value::string("snot"));
        env.pop_scope();
        assert_eq!(env.lookup(name(7)), None);
    }

    #[test]
    fn root_scope_survives_pop() {
        let mut env = Environment::new();
        env.define(name(1), Value::Bool(true));
        env.pop_scope();
        env.pop_scope();
        assert_eq!(env.depth(), 1);
        assert_eq!(env.lookup(name(1)), Some(Value::Bool(true)));
    }

    #[test]
    fn outer_bindings_visible_from_inner_scope() {
        let mut env = Environment::new();
        env.define(name(1), Value::Int(10));
        env.push_scope();
        assert_eq!(env.lookup(name(1)), Some(Value::Int(10)));
    }
}
