#![deny(unused_must_use)]

use super::ast;
use super::lexer::TokenKind::*;
use super::lexer::{Lexer, Token, TokenKind};
use super::{Result, SyntaxError};
use crate::span::Span;

/// Parse a whole program into its statement tree.
///
/// The parser runs directly off the lexer's `current()`/`bump()` stream:
/// statements end at `Tok_Newline`, suites are delimited by `Tok_Indent`
/// and `Tok_Dedent`. Errors are fatal, there is no recovery.
pub fn parse(src: &str) -> Result<ast::Module> {
  let lexer = Lexer::new(src)?;
  let parser = Parser::new(lexer);
  parser.module()
}

macro_rules! fail {
  ($span:expr, $($msg:tt)+) => {
    return Err(SyntaxError::new(format!($($msg)+), $span))
  };
}

struct Parser<'src> {
  lex: Lexer<'src>,
  /// Set while parsing a method body; `return` is rejected elsewhere.
  in_method: bool,
}

impl<'src> Parser<'src> {
  fn new(lex: Lexer<'src>) -> Self {
    Self {
      lex,
      in_method: false,
    }
  }

  fn module(mut self) -> Result<ast::Module> {
    let mut module = ast::Module::new();
    while !self.current().is(Tok_Eof) {
      if self.bump_if(Tok_Newline)? {
        continue;
      }
      let stmt = self.stmt()?;
      module.body.push(stmt);
    }
    Ok(module)
  }

  #[inline]
  fn previous(&self) -> &Token {
    self.lex.previous()
  }

  #[inline]
  fn current(&self) -> &Token {
    self.lex.current()
  }

  /// Move forward by one token, returning the previous one.
  #[inline]
  fn bump(&mut self) -> Result<&Token> {
    self.lex.bump()?;
    Ok(self.previous())
  }

  #[inline]
  fn bump_if(&mut self, kind: TokenKind) -> Result<bool> {
    if self.current().is(&kind) {
      self.bump()?;
      Ok(true)
    } else {
      Ok(false)
    }
  }

  #[inline]
  fn bump_if_char(&mut self, c: u8) -> Result<bool> {
    if self.current().kind == Tok_Char(c) {
      self.bump()?;
      Ok(true)
    } else {
      Ok(false)
    }
  }

  #[inline]
  fn expect(&mut self, kind: TokenKind) -> Result<()> {
    let name = kind.name();
    if self.bump_if(kind)? {
      Ok(())
    } else {
      Err(SyntaxError::new(
        format!("expected `{name}`"),
        self.current().span,
      ))
    }
  }

  #[inline]
  fn expect_char(&mut self, c: u8) -> Result<()> {
    if self.bump_if_char(c)? {
      Ok(())
    } else {
      Err(SyntaxError::new(
        format!("expected `{}`", c as char),
        self.current().span,
      ))
    }
  }

  fn ident(&mut self) -> Result<String> {
    match &self.current().kind {
      Lit_Ident(name) => {
        let name = name.clone();
        self.bump()?;
        Ok(name)
      }
      _ => fail!(self.current().span, "expected identifier"),
    }
  }
}

mod expr;
mod stmt;

impl<'src> Parser<'src> {
  // On average, a single parse method consumes between 10 and 700 bytes
  // of stack space. Assuming ~50 recursive calls per dive and 700 bytes
  // of stack space per call, we'll require 50 * 700 = 35k bytes of stack
  // space in order to dive. For future proofing, we round this value up
  // to 64k bytes.
  const MINIMUM_STACK_REQUIRED: usize = 64_000;

  // On WASM, remaining_stack() will always return None. Stack overflow
  // panics are converted to exceptions and handled by the host, which
  // means a `try { ... } catch { ... }` around the parse entry point is
  // enough to properly handle this case.
  #[cfg(any(target_family = "wasm", not(feature = "check-recursion-limit")))]
  fn check_recursion_limit(&self, _span: Span) -> Result<()> {
    Ok(())
  }

  #[cfg(all(not(target_family = "wasm"), feature = "check-recursion-limit"))]
  fn check_recursion_limit(&self, span: Span) -> Result<()> {
    if stacker::remaining_stack()
      .map(|available| available > Self::MINIMUM_STACK_REQUIRED)
      .unwrap_or(true)
    {
      Ok(())
    } else {
      Err(SyntaxError::new("nesting limit reached", span))
    }
  }
}

#[cfg(test)]
mod tests;
