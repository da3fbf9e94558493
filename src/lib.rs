//! An interpreter for Mython, a small dynamically-typed, indentation-
//! structured language. Programs are lexed into an explicit
//! INDENT/DEDENT token stream, parsed into a statement tree, and
//! executed directly by a tree-walking evaluator — no bytecode.
//!
//! ```
//! let vm = mython::Mython::builder().with_io(Vec::<u8>::new()).build();
//! vm.eval("print 2 * 3 + 4").unwrap();
//! let out = vm.io::<Vec<u8>>().unwrap();
//! assert_eq!(&out[..], b"10\n");
//! ```

mod ctx;
mod error;
mod eval;
mod span;
pub mod syntax;
pub mod value;

use std::cell::{Ref, RefCell};

pub use ctx::Output;
pub use error::{Error, Result, RuntimeError};
pub use eval::{truthiness, Closure, Interp};
pub use span::Span;
pub use syntax::SyntaxError;
pub use value::Value;

/// A Mython virtual machine: an evaluator, its global closure, and an
/// output sink. Globals persist across `eval` calls, so feeding it one
/// statement at a time works the way a REPL should.
pub struct Mython {
  interp: RefCell<Interp>,
}

impl Mython {
  pub fn builder() -> MythonBuilder {
    MythonBuilder { stdout: None }
  }

  /// Lex and parse without executing.
  pub fn check(&self, src: &str) -> Result<()> {
    syntax::parse(src)?;
    Ok(())
  }

  /// Run a program. The result is the program's value, which for a
  /// Mython program is always `None`; its observable effect is whatever
  /// it printed to the sink.
  pub fn eval(&self, src: &str) -> Result<Value> {
    let module = syntax::parse(src)?;
    self.interp.borrow_mut().run(&module)
  }

  /// Borrow the output sink back as its concrete type, e.g. the
  /// `Vec<u8>` capture buffer installed with [`MythonBuilder::with_io`].
  pub fn io<T: 'static>(&self) -> Option<Ref<'_, T>> {
    match Ref::filter_map(self.interp.borrow(), |interp| {
      interp.io().as_any().downcast_ref()
    }) {
      Ok(v) => Some(v),
      _ => None,
    }
  }

  pub fn globals(&self) -> Globals {
    Globals { vm: self }
  }
}

impl Default for Mython {
  fn default() -> Self {
    Self::builder().build()
  }
}

pub struct Globals<'a> {
  vm: &'a Mython,
}

impl<'a> Globals<'a> {
  pub fn get(&self, name: &str) -> Option<Value> {
    self.vm.interp.borrow().globals().get(name).cloned()
  }

  pub fn set(&mut self, name: impl Into<String>, value: Value) {
    self
      .vm
      .interp
      .borrow_mut()
      .globals_mut()
      .insert(name.into(), value);
  }
}

pub struct MythonBuilder {
  stdout: Option<Box<dyn Output>>,
}

impl MythonBuilder {
  pub fn with_io<T: Output + 'static>(mut self, stdout: T) -> Self {
    let _ = self.stdout.replace(Box::new(stdout));
    self
  }

  pub fn build(mut self) -> Mython {
    let stdout = self
      .stdout
      .take()
      .unwrap_or_else(|| Box::new(std::io::stdout()));
    Mython {
      interp: RefCell::new(Interp::new(stdout)),
    }
  }
}

#[cfg(test)]
mod tests;
