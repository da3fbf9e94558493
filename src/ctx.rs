//! The interpreter's view of the outside world: a single line-oriented
//! output sink. `print` statements and `__str__` dispatch write here and
//! nowhere else.

use std::any::Any;
use std::io::Write;

/// Anything the interpreter may print to.
///
/// Blanket-implemented for every `Write + Any` type, so a `Vec<u8>` works
/// as an in-memory capture buffer (the tests and `Stringify` rely on
/// this), and `std::io::Stdout` works for the real thing.
pub trait Output: Write + Any {
  fn as_any(&self) -> &dyn Any;
}

impl<T: Write + Any> Output for T {
  fn as_any(&self) -> &dyn Any {
    self
  }
}
