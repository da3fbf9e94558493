use super::*;

impl<'src> Parser<'src> {
  pub(super) fn expr(&mut self) -> Result<ast::Expr> {
    self.or_expr()
  }

  fn or_expr(&mut self) -> Result<ast::Expr> {
    let mut left = self.and_expr()?;
    while self.bump_if(Kw_Or)? {
      let right = self.and_expr()?;
      left = ast::expr_binary(ast::BinaryOp::Or, left, right);
    }
    Ok(left)
  }

  fn and_expr(&mut self) -> Result<ast::Expr> {
    let mut left = self.not_expr()?;
    while self.bump_if(Kw_And)? {
      let right = self.not_expr()?;
      left = ast::expr_binary(ast::BinaryOp::And, left, right);
    }
    Ok(left)
  }

  fn not_expr(&mut self) -> Result<ast::Expr> {
    if self.bump_if(Kw_Not)? {
      let right = self.not_expr()?;
      return Ok(ast::expr_not(right));
    }
    self.cmp_expr()
  }

  fn cmp_expr(&mut self) -> Result<ast::Expr> {
    let mut left = self.add_expr()?;
    loop {
      let op = match self.current().kind {
        Op_EqualEqual => ast::BinaryOp::Eq,
        Op_BangEqual => ast::BinaryOp::Neq,
        Op_LessEqual => ast::BinaryOp::LessEq,
        Op_MoreEqual => ast::BinaryOp::MoreEq,
        Tok_Char(b'<') => ast::BinaryOp::Less,
        Tok_Char(b'>') => ast::BinaryOp::More,
        _ => break,
      };
      self.bump()?; // bump operator
      let right = self.add_expr()?;
      left = ast::expr_binary(op, left, right);
    }
    Ok(left)
  }

  fn add_expr(&mut self) -> Result<ast::Expr> {
    let mut left = self.mul_expr()?;
    loop {
      let op = match self.current().kind {
        Tok_Char(b'+') => ast::BinaryOp::Add,
        Tok_Char(b'-') => ast::BinaryOp::Sub,
        _ => break,
      };
      self.bump()?; // bump operator
      let right = self.mul_expr()?;
      left = ast::expr_binary(op, left, right);
    }
    Ok(left)
  }

  fn mul_expr(&mut self) -> Result<ast::Expr> {
    let mut left = self.postfix_expr()?;
    loop {
      let op = match self.current().kind {
        Tok_Char(b'*') => ast::BinaryOp::Mul,
        Tok_Char(b'/') => ast::BinaryOp::Div,
        _ => break,
      };
      self.bump()?; // bump operator
      let right = self.postfix_expr()?;
      left = ast::expr_binary(op, left, right);
    }
    Ok(left)
  }

  fn postfix_expr(&mut self) -> Result<ast::Expr> {
    let mut expr = self.primary_expr()?;
    while self.bump_if_char(b'.')? {
      let name = self.ident()?;
      if self.current().kind == Tok_Char(b'(') {
        let args = self.call_args()?;
        expr = ast::expr_call_method(expr, name, args);
      } else {
        // A plain field read is only defined on a name path.
        let ast::Expr::GetVar(ref mut var) = expr else {
          fail!(self.previous().span, "invalid field access");
        };
        var.path.push(name);
      }
    }
    Ok(expr)
  }

  fn primary_expr(&mut self) -> Result<ast::Expr> {
    self.check_recursion_limit(self.current().span)?;

    let token = self.current().clone();
    match token.kind {
      Lit_None => {
        self.bump()?;
        Ok(ast::lit::none())
      }
      Lit_True => {
        self.bump()?;
        Ok(ast::lit::bool(true))
      }
      Lit_False => {
        self.bump()?;
        Ok(ast::lit::bool(false))
      }
      Lit_Int(value) => {
        self.bump()?;
        Ok(ast::lit::int(value))
      }
      Lit_Str(value) => {
        self.bump()?;
        Ok(ast::lit::str(value))
      }
      Lit_Ident(name) => {
        self.bump()?;
        if self.current().kind == Tok_Char(b'(') {
          let args = self.call_args()?;
          if name == "str" {
            if args.len() != 1 {
              fail!(token.span, "`str` takes a single argument");
            }
            let arg = args.into_iter().next().unwrap();
            return Ok(ast::expr_stringify(arg));
          }
          return Ok(ast::expr_new(name, args));
        }
        Ok(ast::expr_get_var(vec![name]))
      }
      Tok_Char(b'(') => {
        self.bump()?;
        let expr = self.expr()?;
        self.expect_char(b')')?;
        Ok(expr)
      }
      _ => fail!(token.span, "unexpected `{}`", token.kind),
    }
  }

  fn call_args(&mut self) -> Result<Vec<ast::Expr>> {
    let mut args = Vec::new();
    self.expect_char(b'(')?;
    if self.current().kind != Tok_Char(b')') {
      args.push(self.expr()?);
      while self.bump_if_char(b',')? {
        args.push(self.expr()?);
      }
    }
    self.expect_char(b')')?;
    Ok(args)
  }
}
