use std::collections::HashSet;
use std::rc::Rc;

use super::*;

impl<'src> Parser<'src> {
  pub(super) fn stmt(&mut self) -> Result<ast::Stmt> {
    match self.current().kind {
      Kw_Class => self.class_stmt(),
      Kw_If => self.if_stmt(),
      _ => self.simple_stmt(),
    }
  }

  fn class_stmt(&mut self) -> Result<ast::Stmt> {
    self.expect(Kw_Class)?;
    let name = self.ident()?;
    let parent = if self.bump_if_char(b'(')? {
      let parent = self.ident()?;
      self.expect_char(b')')?;
      Some(parent)
    } else {
      None
    };
    self.expect_char(b':')?;

    // A class body is always an indented block of `def`s.
    self.expect(Tok_Newline)?;
    self.expect(Tok_Indent)?;

    let mut names = HashSet::new();
    let mut methods = Vec::new();
    loop {
      if self.bump_if(Tok_Dedent)? || self.current().is(Tok_Eof) {
        break;
      }
      let method = self.method()?;
      if !names.insert(method.name.clone()) {
        fail!(self.previous().span, "duplicate method `{}`", method.name);
      }
      methods.push(Rc::new(method));
    }

    Ok(ast::class_stmt(name, parent, methods))
  }

  fn method(&mut self) -> Result<ast::Func> {
    self.expect(Kw_Def)?;
    let name = self.ident()?;
    self.expect_char(b'(')?;
    let mut params: Vec<String> = Vec::new();
    if self.current().kind != Tok_Char(b')') {
      loop {
        let param = self.ident()?;
        if params.contains(&param) {
          fail!(self.previous().span, "duplicate parameter `{param}`");
        }
        params.push(param);
        if !self.bump_if_char(b',')? {
          break;
        }
      }
    }
    self.expect_char(b')')?;
    self.expect_char(b':')?;

    let in_method = std::mem::replace(&mut self.in_method, true);
    let body = self.body();
    self.in_method = in_method;

    Ok(ast::Func {
      name,
      params,
      body: body?,
    })
  }

  fn if_stmt(&mut self) -> Result<ast::Stmt> {
    self.expect(Kw_If)?;
    let cond = self.expr()?;
    self.expect_char(b':')?;
    let body = self.body()?;
    let else_body = if self.bump_if(Kw_Else)? {
      self.expect_char(b':')?;
      Some(self.body()?)
    } else {
      None
    };
    Ok(ast::if_stmt(cond, body, else_body))
  }

  /// A suite: either a single simple statement on the same line, or an
  /// indented block.
  fn body(&mut self) -> Result<Vec<ast::Stmt>> {
    self.check_recursion_limit(self.current().span)?;
    if self.bump_if(Tok_Newline)? {
      self.expect(Tok_Indent)?;
      let mut body = vec![self.stmt()?];
      loop {
        if self.bump_if(Tok_Dedent)? || self.current().is(Tok_Eof) {
          break;
        }
        body.push(self.stmt()?);
      }
      Ok(body)
    } else {
      Ok(vec![self.simple_stmt()?])
    }
  }

  fn simple_stmt(&mut self) -> Result<ast::Stmt> {
    let stmt = match self.current().kind {
      Kw_Return => self.return_stmt()?,
      Kw_Print => self.print_stmt()?,
      _ => self.assign_stmt()?,
    };
    self.end_of_stmt()?;
    Ok(stmt)
  }

  fn return_stmt(&mut self) -> Result<ast::Stmt> {
    if !self.in_method {
      fail!(self.current().span, "return outside of a method");
    }

    self.expect(Kw_Return)?;
    let value = if self.at_end_of_stmt() {
      None
    } else {
      Some(self.expr()?)
    };
    Ok(ast::return_stmt(value))
  }

  fn print_stmt(&mut self) -> Result<ast::Stmt> {
    self.expect(Kw_Print)?;
    let mut values = Vec::new();
    if !self.at_end_of_stmt() {
      values.push(self.expr()?);
      while self.bump_if_char(b',')? {
        values.push(self.expr()?);
      }
    }
    Ok(ast::print_stmt(values))
  }

  fn assign_stmt(&mut self) -> Result<ast::Stmt> {
    let target = self.expr()?;

    if self.bump_if_char(b'=')? {
      let target_span = self.previous().span;
      let ast::Expr::GetVar(target) = target else {
        fail!(target_span, "invalid assignment target");
      };
      let value = self.expr()?;
      let mut path = target.path;
      let field = path.pop().expect("a name path is never empty");
      if path.is_empty() {
        return Ok(ast::assign_stmt(field, value));
      }
      return Ok(ast::set_field_stmt(ast::GetVar { path }, field, value));
    }

    Ok(ast::expr_stmt(target))
  }

  /// Simple statements end at a newline. At the very end of input the
  /// lexer may owe dedents before the synthetic final newline, so a
  /// dedent (left for the enclosing suite) or EOF also terminates.
  fn at_end_of_stmt(&self) -> bool {
    matches!(self.current().kind, Tok_Newline | Tok_Dedent | Tok_Eof)
  }

  fn end_of_stmt(&mut self) -> Result<()> {
    if self.bump_if(Tok_Newline)? {
      return Ok(());
    }
    if matches!(self.current().kind, Tok_Dedent | Tok_Eof) {
      return Ok(());
    }
    Err(SyntaxError::new(
      format!("unexpected `{}`", self.current().kind),
      self.current().span,
    ))
  }
}
