//! Lexical environment: a name -> value mapping with an optional outer
//! frame, forming the chain that makes closures work.
//!
//! `Environment` is a cheap-to-clone handle (`Rc<RefCell<_>>`) so that a
//! `Function` object can capture the environment it was defined in and
//! keep it alive for as long as the closure is reachable, per spec's
//! closure-lifetime requirement.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::object::Object;

#[derive(Debug, Default)]
struct EnvInner {
    store: HashMap<String, Rc<Object>>,
    outer: Option<Environment>,
}

#[derive(Debug, Clone)]
pub struct Environment(Rc<RefCell<EnvInner>>);

impl Environment {
    pub fn new() -> Self {
        Environment(Rc::new(RefCell::new(EnvInner::default())))
    }

    /// Creates a new frame whose `outer` is `self` — used when a function
    /// call opens its own scope on top of its captured environment.
    pub fn enclosed(outer: &Environment) -> Self {
        Environment(Rc::new(RefCell::new(EnvInner {
            store: HashMap::new(),
            outer: Some(outer.clone()),
        })))
    }

    /// Looks up `name` in this frame, falling back to `outer` frames.
    pub fn get(&self, name: &str) -> Option<Rc<Object>> {
        let inner = self.0.borrow();
        match inner.store.get(name) {
            Some(value) => Some(Rc::clone(value)),
            None => inner.outer.as_ref().and_then(|outer| outer.get(name)),
        }
    }

    /// Binds `name` to `value` in *this* frame only; never walks `outer`.
    pub fn set(&self, name: impl Into<String>, value: Rc<Object>) {
        self.0.borrow_mut().store.insert(name.into(), value);
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get_in_same_frame() {
        let env = Environment::new();
        env.set("x", Rc::new(Object::Integer(5)));
        assert_eq!(env.get("x").as_deref(), Some(&Object::Integer(5)));
    }

    #[test]
    fn get_delegates_to_outer() {
        let outer = Environment::new();
        outer.set("x", Rc::new(Object::Integer(5)));
        let inner = Environment::enclosed(&outer);
        assert_eq!(inner.get("x").as_deref(), Some(&Object::Integer(5)));
    }

    #[test]
    fn set_never_writes_through_to_outer() {
        let outer = Environment::new();
        let inner = Environment::enclosed(&outer);
        inner.set("x", Rc::new(Object::Integer(5)));
        assert!(outer.get("x").is_none());
    }

    #[test]
    fn missing_name_is_absent() {
        let env = Environment::new();
        assert!(env.get("missing").is_none());
    }

    #[test]
    fn inner_binding_shadows_outer() {
        let outer = Environment::new();
        outer.set("x", Rc::new(Object::Integer(1)));
        let inner = Environment::enclosed(&outer);
        inner.set("x", Rc::new(Object::Integer(2)));
        assert_eq!(inner.get("x").as_deref(), Some(&Object::Integer(2)));
        assert_eq!(outer.get("x").as_deref(), Some(&Object::Integer(1)));
    }
}
