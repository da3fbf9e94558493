#![allow(non_camel_case_types)]

use std::borrow::Borrow;
use std::fmt;
use std::mem::discriminant;

use super::SyntaxError;
use crate::span::Span;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
  pub kind: TokenKind,
  pub span: Span,
}

impl Token {
  /// Same variant, payload ignored. Full equality (payload included) is
  /// the derived `PartialEq`.
  pub fn is(&self, kind: impl Borrow<TokenKind>) -> bool {
    discriminant(&self.kind) == discriminant(kind.borrow())
  }
}

/// Turns source text into the token stream consumed by the parser.
///
/// Block structure is resolved here: leading whitespace becomes explicit
/// `Tok_Indent`/`Tok_Dedent` pairs, physical line ends become at most one
/// `Tok_Newline`. The stream surface is `current()` to peek and `bump()`
/// to advance; after the end of input `bump()` keeps yielding `Tok_Eof`.
///
/// A dedent may cross several levels at once. Only one `Tok_Dedent` is
/// produced per `bump()`, so the remaining levels are kept in a queued
/// counter and drained by the following calls.
pub struct Lexer<'src> {
  src: &'src str,
  pos: usize,
  previous: Token,
  current: Token,
  /// Established indentation width in spaces, always even.
  open_indent: usize,
  /// Dedent tokens still owed after a multi-level dedent or at EOF.
  queued_dedents: usize,
  /// True right after a `Tok_Newline` was produced, i.e. the next real
  /// character decides the line's indentation.
  at_line_start: bool,
  /// A real token was produced since the last `Tok_Newline`. Drives both
  /// newline collapsing and the synthetic final newline at EOF.
  line_open: bool,
}

impl<'src> Lexer<'src> {
  pub fn new(src: &'src str) -> Result<Self, SyntaxError> {
    let end = src.len();
    let eof = Token {
      kind: TokenKind::Tok_Eof,
      span: (end..end).into(),
    };

    let mut lex = Self {
      src,
      pos: 0,
      previous: eof.clone(),
      current: eof,
      open_indent: 0,
      queued_dedents: 0,
      at_line_start: false,
      line_open: false,
    };
    lex.bump()?;

    Ok(lex)
  }

  #[inline]
  pub fn previous(&self) -> &Token {
    &self.previous
  }

  #[inline]
  pub fn current(&self) -> &Token {
    &self.current
  }

  /// Move forward by one token, returning the new current one.
  pub fn bump(&mut self) -> Result<&Token, SyntaxError> {
    let next = self.next_token()?;
    std::mem::swap(&mut self.previous, &mut self.current);
    self.current = next;
    Ok(&self.current)
  }

  #[inline]
  fn peek(&self) -> Option<u8> {
    self.src.as_bytes().get(self.pos).copied()
  }

  fn next_token(&mut self) -> Result<Token, SyntaxError> {
    if self.queued_dedents > 0 {
      self.queued_dedents -= 1;
      self.open_indent -= 2;
      return Ok(self.token_here(TokenKind::Tok_Dedent));
    }

    loop {
      if self.at_line_start {
        if let Some(token) = self.line_start()? {
          return Ok(token);
        }
        continue;
      }

      let Some(c) = self.peek() else { break };
      match c {
        b'\n' => {
          self.pos += 1;
          self.at_line_start = true;
          if self.line_open {
            self.line_open = false;
            let span = Span::from(self.pos - 1..self.pos);
            return Ok(Token {
              kind: TokenKind::Tok_Newline,
              span,
            });
          }
        }
        b' ' | b'\t' | b'\r' => self.pos += 1,
        b'#' => self.skip_comment(),
        b'\'' | b'"' => return self.string(c),
        c if is_punct(c) => return Ok(self.punct(c)),
        _ => return self.word(),
      }
    }

    // End of input: close any open blocks one dedent per call, then
    // terminate an unterminated final line, then yield `Tok_Eof` forever.
    if self.open_indent > 0 {
      self.open_indent -= 2;
      return Ok(self.token_here(TokenKind::Tok_Dedent));
    }
    if self.line_open {
      self.line_open = false;
      return Ok(self.token_here(TokenKind::Tok_Newline));
    }
    Ok(self.token_here(TokenKind::Tok_Eof))
  }

  /// Measure the indentation of the upcoming line and compare it against
  /// the established width. Blank and comment-only lines never count.
  ///
  /// Returns a token when the line opens or closes a block, `None` when
  /// lexing should continue with the line's first real token.
  fn line_start(&mut self) -> Result<Option<Token>, SyntaxError> {
    let line_start = self.pos;
    let mut width = 0;
    while self.peek() == Some(b' ') {
      self.pos += 1;
      width += 1;
    }

    match self.peek() {
      None => {
        self.at_line_start = false;
        Ok(None)
      }
      Some(b'\n') | Some(b'\r') => {
        self.pos += 1;
        Ok(None)
      }
      Some(b'#') => {
        self.skip_comment();
        Ok(None)
      }
      Some(_) => {
        if width % 2 != 0 {
          return Err(SyntaxError::new("Bad indent", line_start..self.pos));
        }
        self.at_line_start = false;
        let span = Span::from(line_start..self.pos);
        if width > self.open_indent {
          // The grammar never opens more than one block per line.
          self.open_indent = width;
          Ok(Some(Token {
            kind: TokenKind::Tok_Indent,
            span,
          }))
        } else if width < self.open_indent {
          self.queued_dedents = (self.open_indent - width) / 2 - 1;
          self.open_indent -= 2;
          Ok(Some(Token {
            kind: TokenKind::Tok_Dedent,
            span,
          }))
        } else {
          Ok(None)
        }
      }
    }
  }

  fn skip_comment(&mut self) {
    while !matches!(self.peek(), None | Some(b'\n')) {
      self.pos += 1;
    }
  }

  fn string(&mut self, quote: u8) -> Result<Token, SyntaxError> {
    let start = self.pos;
    self.pos += 1;
    let mut value = String::new();
    loop {
      match self.peek() {
        // An unterminated literal ends at EOF with what was read so far.
        None => break,
        Some(c) if c == quote => {
          self.pos += 1;
          break;
        }
        Some(b'\\') => {
          let escape_start = self.pos;
          self.pos += 1;
          let decoded = match self.peek() {
            Some(b'n') => '\n',
            Some(b't') => '\t',
            Some(b'r') => '\r',
            Some(b'"') => '"',
            Some(b'\'') => '\'',
            Some(b'\\') => '\\',
            _ => {
              let end = (self.pos + 1).min(self.src.len());
              return Err(SyntaxError::new("invalid escape sequence", escape_start..end));
            }
          };
          value.push(decoded);
          self.pos += 1;
        }
        // Raw line breaks inside a literal are dropped.
        Some(b'\n') | Some(b'\r') => self.pos += 1,
        Some(_) => {
          let c = self.src[self.pos..].chars().next().unwrap();
          value.push(c);
          self.pos += c.len_utf8();
        }
      }
    }
    self.line_open = true;
    Ok(Token {
      kind: TokenKind::Lit_Str(value),
      span: (start..self.pos).into(),
    })
  }

  fn punct(&mut self, c: u8) -> Token {
    let start = self.pos;
    self.pos += 1;
    let kind = if self.peek() == Some(b'=') {
      let two = match c {
        b'=' => Some(TokenKind::Op_EqualEqual),
        b'!' => Some(TokenKind::Op_BangEqual),
        b'<' => Some(TokenKind::Op_LessEqual),
        b'>' => Some(TokenKind::Op_MoreEqual),
        _ => None,
      };
      match two {
        Some(kind) => {
          self.pos += 1;
          kind
        }
        None => TokenKind::Tok_Char(c),
      }
    } else {
      TokenKind::Tok_Char(c)
    };
    self.line_open = true;
    Token {
      kind,
      span: (start..self.pos).into(),
    }
  }

  /// A run of characters ending at whitespace, a line end, or one of the
  /// statement punctuators. Classified as a keyword, a number, or an
  /// identifier after the fact — `123abc` is a single identifier, not a
  /// number followed by a name.
  fn word(&mut self) -> Result<Token, SyntaxError> {
    let start = self.pos;
    while let Some(c) = self.peek() {
      if is_word_end(c) {
        break;
      }
      self.pos += 1;
    }
    let lexeme = &self.src[start..self.pos];
    let span = Span::from(start..self.pos);

    let kind = match lexeme {
      "class" => TokenKind::Kw_Class,
      "return" => TokenKind::Kw_Return,
      "if" => TokenKind::Kw_If,
      "else" => TokenKind::Kw_Else,
      "def" => TokenKind::Kw_Def,
      "print" => TokenKind::Kw_Print,
      "and" => TokenKind::Kw_And,
      "or" => TokenKind::Kw_Or,
      "not" => TokenKind::Kw_Not,
      "None" => TokenKind::Lit_None,
      "True" => TokenKind::Lit_True,
      "False" => TokenKind::Lit_False,
      _ if lexeme.bytes().all(|c| c.is_ascii_digit()) => {
        let value = lexeme
          .parse::<i32>()
          .map_err(|e| SyntaxError::new(format!("invalid number {e}"), span))?;
        TokenKind::Lit_Int(value)
      }
      _ => TokenKind::Lit_Ident(lexeme.to_owned()),
    };

    self.line_open = true;
    Ok(Token { kind, span })
  }

  fn token_here(&self, kind: TokenKind) -> Token {
    Token {
      kind,
      span: (self.pos..self.pos).into(),
    }
  }
}

fn is_punct(c: u8) -> bool {
  matches!(
    c,
    b'-' | b'*' | b'/' | b'+' | b'!' | b'<' | b'>' | b'=' | b':' | b'(' | b')' | b',' | b'.'
  )
}

/// Word terminators. Note that `<`, `>` and quotes do *not* end a word:
/// they only start a token of their own in first position.
fn is_word_end(c: u8) -> bool {
  matches!(
    c,
    b' '
      | b'\t'
      | b'\r'
      | b'\n'
      | b'='
      | b':'
      | b'*'
      | b'-'
      | b'/'
      | b'+'
      | b'!'
      | b'#'
      | b'('
      | b')'
      | b','
      | b'.'
  )
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
  // Keywords
  Kw_Class,
  Kw_Return,
  Kw_If,
  Kw_Else,
  Kw_Def,
  Kw_Print,
  Kw_And,
  Kw_Or,
  Kw_Not,

  // Literals
  Lit_None,
  Lit_True,
  Lit_False,
  Lit_Int(i32),
  Lit_Str(String),
  Lit_Ident(String),

  // Two-character comparison operators
  Op_EqualEqual,
  Op_BangEqual,
  Op_LessEqual,
  Op_MoreEqual,

  // Block structure
  Tok_Newline,
  Tok_Indent,
  Tok_Dedent,

  /// Any other single punctuation byte.
  Tok_Char(u8),

  Tok_Eof,
}

impl TokenKind {
  pub fn name(&self) -> &'static str {
    match self {
      TokenKind::Kw_Class => "class",
      TokenKind::Kw_Return => "return",
      TokenKind::Kw_If => "if",
      TokenKind::Kw_Else => "else",
      TokenKind::Kw_Def => "def",
      TokenKind::Kw_Print => "print",
      TokenKind::Kw_And => "and",
      TokenKind::Kw_Or => "or",
      TokenKind::Kw_Not => "not",
      TokenKind::Lit_None => "None",
      TokenKind::Lit_True => "True",
      TokenKind::Lit_False => "False",
      TokenKind::Lit_Int(_) => "number",
      TokenKind::Lit_Str(_) => "string",
      TokenKind::Lit_Ident(_) => "identifier",
      TokenKind::Op_EqualEqual => "==",
      TokenKind::Op_BangEqual => "!=",
      TokenKind::Op_LessEqual => "<=",
      TokenKind::Op_MoreEqual => ">=",
      TokenKind::Tok_Newline => "<newline>",
      TokenKind::Tok_Indent => "<indent>",
      TokenKind::Tok_Dedent => "<dedent>",
      TokenKind::Tok_Char(_) => "<char>",
      TokenKind::Tok_Eof => "<eof>",
    }
  }
}

impl fmt::Display for TokenKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      TokenKind::Tok_Char(c) => write!(f, "{}", *c as char),
      kind => write!(f, "{}", kind.name()),
    }
  }
}

/// Iterator over the remaining tokens, EOF excluded. A lexer error ends
/// the stream after the tokens preceding it.
pub struct Tokens<'src> {
  lexer: Lexer<'src>,
  error: Option<SyntaxError>,
  done: bool,
}

impl<'src> Tokens<'src> {
  pub fn new(lexer: Lexer<'src>) -> Self {
    Self {
      lexer,
      error: None,
      done: false,
    }
  }
}

impl<'src> Iterator for Tokens<'src> {
  type Item = Result<Token, SyntaxError>;

  fn next(&mut self) -> Option<Self::Item> {
    if self.done {
      return None;
    }
    if let Some(e) = self.error.take() {
      self.done = true;
      return Some(Err(e));
    }
    let token = self.lexer.current().clone();
    if token.is(TokenKind::Tok_Eof) {
      self.done = true;
      return None;
    }
    if let Err(e) = self.lexer.bump() {
      self.error = Some(e);
    }
    Some(Ok(token))
  }
}
