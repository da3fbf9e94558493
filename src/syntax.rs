pub mod ast;
pub mod lexer;
pub mod parser;

use beef::lean::Cow;

pub use ast::Module;
pub use parser::parse;

use crate::span::Span;

pub type Result<T, E = SyntaxError> = std::result::Result<T, E>;

/// An error produced while lexing or parsing, pointing at the offending
/// span of source.
#[derive(Clone, Debug)]
pub struct SyntaxError {
  pub message: Cow<'static, str>,
  pub span: Span,
}

impl SyntaxError {
  pub fn new(message: impl Into<Cow<'static, str>>, span: impl Into<Span>) -> Self {
    let message = message.into();
    let span = span.into();
    SyntaxError { message, span }
  }
}

impl std::error::Error for SyntaxError {}

impl std::fmt::Display for SyntaxError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let SyntaxError { message, span } = self;
    write!(f, "error at {span}: {message}")
  }
}
