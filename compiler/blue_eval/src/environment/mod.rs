//! Lexical environments.
//!
//! An [`Environment`] is a handle to one scope of bindings plus a link to the
//! scope that encloses it. Handles are cheap to clone and share the scope:
//! a binding made through one handle is visible through every other.
//!
//! Function values keep a handle to the scope they were declared in, so a
//! scope lives as long as any closure over it. A declared function is stored
//! by its declaration only; its closure is rebuilt on lookup, so a scope that
//! declares functions is still freed once nothing outside refers to it.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;
#[cfg(test)]
use std::rc::Weak;

use blue_ir::FunctionLiteral;

use crate::{FunctionObject, Object};

/// Single-threaded shared, mutable cell for scope storage.
///
/// All scope allocation goes through [`LocalScope::new`].
#[repr(transparent)]
pub(crate) struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub(crate) fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    /// True if both handles point at the same allocation.
    #[inline]
    pub(crate) fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    #[cfg(test)]
    pub(crate) fn downgrade(&self) -> Weak<RefCell<T>> {
        Rc::downgrade(&self.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// One slot in a scope.
enum Binding {
    Value(Object),
    /// A function declared in this scope. Its captured scope is the scope
    /// holding the slot, so the closure is built on lookup instead of
    /// stored; a scope never owns a handle to itself.
    Declared(Rc<FunctionLiteral>),
}

/// Bindings of one scope.
pub(crate) struct Scope {
    bindings: FxHashMap<String, Binding>,
    outer: Option<Environment>,
}

/// Handle to a scope.
#[derive(Clone)]
pub struct Environment {
    scope: LocalScope<Scope>,
}

impl Environment {
    /// A fresh top-level scope.
    pub fn new() -> Self {
        Environment {
            scope: LocalScope::new(Scope {
                bindings: FxHashMap::default(),
                outer: None,
            }),
        }
    }

    /// A fresh scope whose lookups fall back to `outer`.
    #[must_use]
    pub fn enclosed(outer: &Environment) -> Self {
        Environment {
            scope: LocalScope::new(Scope {
                bindings: FxHashMap::default(),
                outer: Some(outer.clone()),
            }),
        }
    }

    /// Look `name` up in this scope, then outward.
    pub fn get(&self, name: &str) -> Option<Object> {
        let mut env = self.clone();
        loop {
            let outer = {
                let scope = env.scope.borrow();
                match scope.bindings.get(name) {
                    Some(Binding::Value(value)) => return Some(value.clone()),
                    Some(Binding::Declared(literal)) => {
                        let function = FunctionObject::new(Rc::clone(literal), env.clone());
                        return Some(Object::Function(function));
                    }
                    None => scope.outer.clone()?,
                }
            };
            env = outer;
        }
    }

    /// Bind `name` in this scope, replacing any existing binding here.
    /// Enclosing scopes are never touched.
    pub fn set(&self, name: impl Into<String>, value: Object) {
        self.scope
            .borrow_mut()
            .bindings
            .insert(name.into(), Binding::Value(value));
    }

    /// Declare a function in this scope under its own name and return the
    /// function value, which captures this scope.
    pub fn declare(&self, literal: &Rc<FunctionLiteral>) -> Object {
        self.scope.borrow_mut().bindings.insert(
            literal.name.name.clone(),
            Binding::Declared(Rc::clone(literal)),
        );
        Object::Function(FunctionObject::new(Rc::clone(literal), self.clone()))
    }

    /// Names bound in this scope, sorted.
    pub fn local_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.scope.borrow().bindings.keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// True if both handles refer to the same scope.
    pub fn ptr_eq(&self, other: &Environment) -> bool {
        self.scope.ptr_eq(&other.scope)
    }

    #[cfg(test)]
    pub(crate) fn downgrade(&self) -> Weak<RefCell<Scope>> {
        self.scope.downgrade()
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

// Names only: values may be functions whose captured scope is this one.
impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("names", &self.local_names())
            .field("has_outer", &self.scope.borrow().outer.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests;
