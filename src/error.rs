use std::error::Error as StdError;
use std::fmt::Display;

use crate::syntax::SyntaxError;

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Any error the interpreter can surface to the embedder.
///
/// Lexing and parsing failures come out as [`Error::Syntax`], everything
/// that goes wrong while executing a program as [`Error::Runtime`]. There
/// is no third channel: function returns unwind through the evaluator via
/// a dedicated control signal that never escapes a method body.
#[derive(Debug)]
pub enum Error {
  Syntax(SyntaxError),
  Runtime(RuntimeError),
}

impl From<SyntaxError> for Error {
  fn from(value: SyntaxError) -> Self {
    Error::Syntax(value)
  }
}

impl From<RuntimeError> for Error {
  fn from(value: RuntimeError) -> Self {
    Error::Runtime(value)
  }
}

impl Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Error::Syntax(e) => {
        write!(f, "{e}")
      }
      Error::Runtime(e) => {
        write!(f, "{e}")
      }
    }
  }
}

impl StdError for Error {}

/// A fatal evaluation error. Mython has no user-level handlers, so the
/// current `eval` aborts and the message surfaces as-is.
#[derive(Clone, Debug, thiserror::Error)]
#[error("{message}")]
pub struct RuntimeError {
  pub message: String,
}

impl RuntimeError {
  pub fn new(message: impl ToString) -> Self {
    Self {
      message: message.to_string(),
    }
  }
}

impl Error {
  pub fn runtime(message: impl ToString) -> Self {
    Error::Runtime(RuntimeError::new(message))
  }
}
