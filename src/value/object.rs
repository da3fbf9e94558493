//! Heap objects and their shared-ownership pointer.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt::{Debug, Display};
use std::ops::Deref;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::syntax::ast;
use crate::value::Value;

/// Shared owner of a heap object.
///
/// Reference counted; every clone is another owner and the object is
/// dropped together with its last owner. Instances may form cycles
/// through their fields, in which case the cycle leaks — Mython accepts
/// this.
pub struct Ptr<T> {
  inner: Rc<T>,
}

impl<T> Ptr<T> {
  pub fn alloc(value: T) -> Self {
    Self {
      inner: Rc::new(value),
    }
  }

  /// Identity, not structural, equality.
  pub fn ptr_eq(&self, other: &Ptr<T>) -> bool {
    Rc::ptr_eq(&self.inner, &other.inner)
  }

  pub fn addr(&self) -> usize {
    Rc::as_ptr(&self.inner) as usize
  }

  pub fn refs(&self) -> usize {
    Rc::strong_count(&self.inner)
  }
}

impl<T> Deref for Ptr<T> {
  type Target = T;

  fn deref(&self) -> &Self::Target {
    &self.inner
  }
}

impl<T> Clone for Ptr<T> {
  fn clone(&self) -> Self {
    Self {
      inner: Rc::clone(&self.inner),
    }
  }
}

impl<T: Debug> Debug for Ptr<T> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    Debug::fmt(&*self.inner, f)
  }
}

impl<T: Display> Display for Ptr<T> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    Display::fmt(&*self.inner, f)
  }
}

/// A name→value table with deterministic iteration order.
pub type Table = IndexMap<String, Value>;

/// An immutable string object.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Str {
  data: String,
}

impl Str {
  pub fn new(data: impl Into<String>) -> Self {
    Self { data: data.into() }
  }

  pub fn as_str(&self) -> &str {
    &self.data
  }
}

impl Deref for Str {
  type Target = str;

  fn deref(&self) -> &Self::Target {
    &self.data
  }
}

impl Display for Str {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.data)
  }
}

/// A user-defined class: a name, an ordered method table, and at most one
/// parent class.
pub struct Class {
  pub name: String,
  pub methods: IndexMap<String, Rc<ast::Func>>,
  pub parent: Option<Ptr<Class>>,
}

impl Class {
  /// Resolve a method through the inheritance chain. The first class
  /// declaring the name wins, regardless of arity.
  pub fn method(&self, name: &str) -> Option<&Rc<ast::Func>> {
    match self.methods.get(name) {
      Some(method) => Some(method),
      None => self.parent.as_ref().and_then(|parent| parent.method(name)),
    }
  }

  /// True iff the resolved method takes exactly `n_args` parameters.
  pub fn has_method(&self, name: &str, n_args: usize) -> bool {
    self
      .method(name)
      .map(|method| method.params.len() == n_args)
      .unwrap_or(false)
  }
}

impl Display for Class {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "<class `{}`>", self.name)
  }
}

impl Debug for Class {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Class")
      .field("name", &self.name)
      .field("methods", &self.methods.keys().collect::<Vec<_>>())
      .field("parent", &self.parent.as_ref().map(|p| &p.name))
      .finish()
  }
}

/// A runtime object of a user-defined class. The field table is mutated
/// through shared pointers, hence the interior mutability.
#[derive(Debug)]
pub struct Instance {
  class: Ptr<Class>,
  fields: RefCell<Table>,
}

impl Instance {
  pub fn new(class: Ptr<Class>) -> Self {
    Self {
      class,
      fields: RefCell::new(Table::new()),
    }
  }

  pub fn class(&self) -> &Ptr<Class> {
    &self.class
  }

  pub fn fields(&self) -> Ref<'_, Table> {
    self.fields.borrow()
  }

  pub fn fields_mut(&self) -> RefMut<'_, Table> {
    self.fields.borrow_mut()
  }

  pub fn get_field(&self, name: &str) -> Option<Value> {
    self.fields.borrow().get(name).cloned()
  }

  pub fn set_field(&self, name: impl Into<String>, value: Value) {
    self.fields.borrow_mut().insert(name.into(), value);
  }
}
