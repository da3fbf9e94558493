//! The tree-walking evaluator.
//!
//! Every statement and expression is executed by a `match` over the node
//! kind, against a closure (the active name scope) and the interpreter's
//! output sink. Two things can interrupt execution: a real error, and a
//! `return` unwinding to the nearest method-body boundary. They travel in
//! the same `Result` channel but as distinct [`Unwind`] variants, so a
//! method boundary can catch one without ever swallowing the other.

mod binop;
mod call;
mod cmp;
mod truth;

use std::io::Write;

use indexmap::IndexMap;

use crate::ctx::Output;
use crate::error::{Error, Result, RuntimeError};
use crate::syntax::ast;
use crate::value::object::{Class, Instance, Ptr};
use crate::value::Value;

pub use truth::truthiness;

/// A name scope: every method call gets a fresh one.
pub type Closure = IndexMap<String, Value>;

/// Why evaluation of a node did not complete.
pub(crate) enum Unwind {
  Error(Error),
  /// The return-signal. Not an error: it carries the method's result up
  /// to the enclosing method body, which is the only place that may
  /// catch it.
  Return(Value),
}

impl From<Error> for Unwind {
  fn from(value: Error) -> Self {
    Unwind::Error(value)
  }
}

impl From<RuntimeError> for Unwind {
  fn from(value: RuntimeError) -> Self {
    Unwind::Error(Error::Runtime(value))
  }
}

pub(crate) type Flow<T> = std::result::Result<T, Unwind>;

/// The scope statements execute in: top-level code runs directly in the
/// global closure, method bodies in their own. Loads from a method scope
/// fall back to the globals; stores never do.
pub(crate) enum Scope<'a> {
  Global,
  Method(&'a mut Closure),
}

pub struct Interp {
  globals: Closure,
  stdout: Box<dyn Output>,
}

impl Interp {
  pub fn new(stdout: Box<dyn Output>) -> Self {
    Self {
      globals: Closure::new(),
      stdout,
    }
  }

  pub fn io(&self) -> &dyn Output {
    &*self.stdout
  }

  pub fn globals(&self) -> &Closure {
    &self.globals
  }

  pub fn globals_mut(&mut self) -> &mut Closure {
    &mut self.globals
  }

  /// Execute a whole program against the global closure.
  pub fn run(&mut self, module: &ast::Module) -> Result<Value> {
    match self.execute_block(&module.body, &mut Scope::Global) {
      Ok(()) => Ok(Value::none()),
      // The parser rejects `return` outside of methods, but the signal
      // must not leak to the embedder either way.
      Err(Unwind::Return(_)) => Err(Error::runtime("return outside of a method")),
      Err(Unwind::Error(e)) => Err(e),
    }
  }

  pub(crate) fn execute_block(&mut self, stmts: &[ast::Stmt], scope: &mut Scope) -> Flow<()> {
    for stmt in stmts {
      self.execute_stmt(stmt, scope)?;
    }
    Ok(())
  }

  fn execute_stmt(&mut self, stmt: &ast::Stmt, scope: &mut Scope) -> Flow<()> {
    match stmt {
      ast::Stmt::Assign(assign) => {
        let value = self.eval_expr(&assign.value, scope)?;
        self.store(scope, assign.name.clone(), value);
      }
      ast::Stmt::SetField(set) => {
        let object = self.load_path(&set.object.path, scope)?;
        let Value::Instance(instance) = object else {
          return Err(
            RuntimeError::new(format!(
              "cannot assign field `{}` of a {}",
              set.field,
              object.type_name()
            ))
            .into(),
          );
        };
        let value = self.eval_expr(&set.value, scope)?;
        instance.set_field(set.field.clone(), value);
      }
      ast::Stmt::If(branch) => {
        let cond = self.eval_expr(&branch.cond, scope)?;
        if truthiness(&cond) {
          self.execute_block(&branch.body, scope)?;
        } else if let Some(else_body) = &branch.else_body {
          self.execute_block(else_body, scope)?;
        }
      }
      ast::Stmt::Return(ret) => {
        let value = match &ret.value {
          Some(expr) => self.eval_expr(expr, scope)?,
          None => Value::none(),
        };
        return Err(Unwind::Return(value));
      }
      ast::Stmt::Class(def) => {
        let class = self.create_class(def, scope)?;
        self.store(scope, def.name.clone(), Value::Class(class));
      }
      ast::Stmt::Print(print) => self.print(&print.values, scope)?,
      ast::Stmt::Expr(expr) => {
        self.eval_expr(expr, scope)?;
      }
    }
    Ok(())
  }

  pub(crate) fn eval_expr(&mut self, expr: &ast::Expr, scope: &mut Scope) -> Flow<Value> {
    match expr {
      ast::Expr::Literal(lit) => Ok(match &**lit {
        ast::Literal::None => Value::none(),
        ast::Literal::Int(value) => Value::int(*value),
        ast::Literal::Bool(value) => Value::bool(*value),
        ast::Literal::String(value) => Value::str(value.clone()),
      }),
      ast::Expr::GetVar(var) => self.load_path(&var.path, scope),
      ast::Expr::Binary(binary) => {
        // Both operands always evaluate, `and`/`or` included: Mython
        // logic operators do not short-circuit.
        let left = self.eval_expr(&binary.left, scope)?;
        let right = self.eval_expr(&binary.right, scope)?;
        use ast::BinaryOp::*;
        match binary.op {
          Add => binop::add(self, left, right),
          Sub | Mul | Div => binop::arith(binary.op, left, right),
          And => Ok(Value::bool(truthiness(&left) && truthiness(&right))),
          Or => Ok(Value::bool(truthiness(&left) || truthiness(&right))),
          Eq | Neq | Less | LessEq | More | MoreEq => cmp::compare(self, binary.op, left, right),
        }
      }
      ast::Expr::Not(arg) => {
        let value = self.eval_expr(arg, scope)?;
        Ok(Value::bool(!truthiness(&value)))
      }
      ast::Expr::CallMethod(call) => {
        let object = self.eval_expr(&call.object, scope)?;
        match object.as_instance() {
          Some(instance) if instance.class().has_method(&call.name, call.args.len()) => {
            let instance = instance.clone();
            let args = self.eval_args(&call.args, scope)?;
            self.call_method(&instance, &call.name, args)
          }
          // No such method, or not an instance at all: silently `None`.
          _ => Ok(Value::none()),
        }
      }
      ast::Expr::New(new) => {
        let value = self.load_name(&new.class, scope)?;
        let Value::Class(class) = value else {
          return Err(RuntimeError::new(format!("`{}` is not a class", new.class)).into());
        };
        let instance = Ptr::alloc(Instance::new(class.clone()));
        if class.has_method("__init__", new.args.len()) {
          let args = self.eval_args(&new.args, scope)?;
          self.call_method(&instance, "__init__", args)?;
        }
        Ok(Value::Instance(instance))
      }
      ast::Expr::Stringify(arg) => {
        let value = self.eval_expr(arg, scope)?;
        let text = self.stringify(&value)?;
        Ok(Value::str(text))
      }
    }
  }

  fn eval_args(&mut self, args: &[ast::Expr], scope: &mut Scope) -> Flow<Vec<Value>> {
    let mut values = Vec::with_capacity(args.len());
    for arg in args {
      values.push(self.eval_expr(arg, scope)?);
    }
    Ok(values)
  }

  fn create_class(&mut self, def: &ast::ClassDef, scope: &mut Scope) -> Flow<Ptr<Class>> {
    let parent = match &def.parent {
      Some(name) => {
        let value = self.load_name(name, scope)?;
        let Value::Class(parent) = value else {
          return Err(RuntimeError::new(format!("`{name}` is not a class")).into());
        };
        Some(parent)
      }
      None => None,
    };
    let mut methods = IndexMap::with_capacity(def.methods.len());
    for method in &def.methods {
      methods.insert(method.name.clone(), method.clone());
    }
    Ok(Ptr::alloc(Class {
      name: def.name.clone(),
      methods,
      parent,
    }))
  }

  fn load_name(&self, name: &str, scope: &Scope) -> Flow<Value> {
    let found = match scope {
      Scope::Global => self.globals.get(name),
      Scope::Method(closure) => closure.get(name).or_else(|| self.globals.get(name)),
    };
    match found {
      Some(value) => Ok(value.clone()),
      None => Err(RuntimeError::new(format!("undefined variable `{name}`")).into()),
    }
  }

  /// Resolve a dotted name path: the head in the scope, every further
  /// segment as an instance field.
  fn load_path(&mut self, path: &[String], scope: &mut Scope) -> Flow<Value> {
    let (head, rest) = path.split_first().expect("a name path is never empty");
    let mut value = self.load_name(head, scope)?;
    for name in rest {
      let Value::Instance(instance) = &value else {
        return Err(
          RuntimeError::new(format!(
            "cannot read field `{name}` of a {}",
            value.type_name()
          ))
          .into(),
        );
      };
      let Some(field) = instance.get_field(name) else {
        return Err(RuntimeError::new(format!("undefined field `{name}`")).into());
      };
      value = field;
    }
    Ok(value)
  }

  fn store(&mut self, scope: &mut Scope, name: String, value: Value) {
    match scope {
      Scope::Global => self.globals.insert(name, value),
      Scope::Method(closure) => closure.insert(name, value),
    };
  }

  /// `print`: arguments render one by one, space separated, then a
  /// single newline. Each argument is written before the next one is
  /// evaluated.
  fn print(&mut self, values: &[ast::Expr], scope: &mut Scope) -> Flow<()> {
    for (i, expr) in values.iter().enumerate() {
      if i > 0 {
        self.write(" ")?;
      }
      let value = self.eval_expr(expr, scope)?;
      let text = self.stringify(&value)?;
      self.write(&text)?;
    }
    self.write("\n")?;
    Ok(())
  }

  /// The textual form shared by `print` and `str(...)`. Instances with a
  /// zero-argument `__str__` dispatch to it and render its result;
  /// everything else renders through `Display`.
  pub(crate) fn stringify(&mut self, value: &Value) -> Flow<String> {
    if let Value::Instance(instance) = value {
      if instance.class().has_method("__str__", 0) {
        let instance = instance.clone();
        let result = self.call_method(&instance, "__str__", vec![])?;
        return self.stringify(&result);
      }
    }
    Ok(value.to_string())
  }

  fn write(&mut self, text: &str) -> Flow<()> {
    self
      .stdout
      .write_all(text.as_bytes())
      .map_err(|e| RuntimeError::new(format!("failed to write output: {e}")))?;
    Ok(())
  }
}
