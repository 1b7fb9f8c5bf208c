use diagnostic::{DiagnosticEngine, LexicalError, Position};

use crate::token::{Token, TokenKind};

/// What the accumulator currently believes it is building.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AccumKind {
  Constant,
  Variable,
}

/// The in-progress token the lexer is extending, one character at a time.
#[derive(Debug, Clone)]
struct Accum {
  kind: AccumKind,
  start: Position,
  last: Position,
  text: String,
  has_dot: bool,
}

/// The kind of the most recently *finalized* token, used by the
/// per-character dispatch table (§4.1) to decide whether `(`, `)`, an
/// operator, or `,` is being used legally at this position. Tracked
/// separately from [`TokenKind`] because "nothing yet" and "a trailing
/// dot" aren't token kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Context {
  Start,
  Constant,
  ConstantTrailingDot,
  Variable,
  Operator,
  LeftParen,
  RightParen,
  Delimiter,
}

/// Converts source text into a token stream plus a list of lexical
/// diagnostics (§4.1). Never fails outright: unrecognized characters are
/// skipped and diagnosed, and scanning always runs to completion.
pub struct Lexer<'a> {
  source: &'a str,
  chars: Vec<(Position, char)>,
  tokens: Vec<Token>,
  accum: Option<Accum>,
  gap_start: Option<Position>,
  context: Context,
  open_parens: Vec<Position>,
}

impl<'a> Lexer<'a> {
  pub fn new(source: &'a str) -> Self {
    Self {
      source,
      chars: source.char_indices().collect(),
      tokens: Vec::new(),
      accum: None,
      gap_start: None,
      context: Context::Start,
      open_parens: Vec::new(),
    }
  }

  /// Runs the lexer to completion, recording diagnostics into `engine`.
  /// An empty source yields an empty token list and no diagnostics (§8
  /// scenario 1) — the "empty tree" sentinel is the parser's concern, not
  /// the lexer's.
  pub fn tokenize(mut self, engine: &mut DiagnosticEngine) -> Vec<Token> {
    log::trace!("lexing {} byte(s) of source", self.source.len());
    let mut i = 0;
    while i < self.chars.len() {
      let (pos, c) = self.chars[i];

      if c.is_whitespace() {
        if self.accum.is_some() && self.gap_start.is_none() {
          self.gap_start = Some(pos);
        }
        i += 1;
        continue;
      }

      if c.is_ascii_digit() || c == '.' {
        self.feed_digit_or_dot(c, pos, engine);
      } else if c.is_ascii_alphabetic() || c == '_' {
        self.feed_letter(c, pos, engine);
      } else if c == '(' {
        self.finalize_accum();
        self.feed_left_paren(pos, engine);
      } else if c == ')' {
        self.finalize_accum();
        self.feed_right_paren(pos, engine);
      } else if "+-*/^".contains(c) {
        self.finalize_accum();
        self.feed_operator(c, pos, engine);
      } else if c == ',' {
        self.finalize_accum();
        self.feed_delimiter(pos, engine);
      } else {
        self.finalize_accum();
        engine.report(LexicalError::UnknownSymbol {
          symbol: c.to_string(),
          position: pos,
        });
      }

      i += 1;
    }

    self.finalize_accum();
    self.validate_trailing(engine);
    self.promote_functions();
    log::trace!(
      "lexed {} token(s), {} diagnostic(s)",
      self.tokens.len(),
      engine.len()
    );
    self.tokens
  }

  fn push(&mut self, token: Token) {
    self.tokens.push(token);
  }

  /// Digits and `.` either start a new `Constant` or extend whatever is
  /// currently open (always an extension, per §4.1's table: a `Constant`
  /// takes more digits or a (possibly repeated) dot, a `Variable` takes
  /// digits freely and tolerates a dot with a diagnostic).
  fn feed_digit_or_dot(&mut self, c: char, pos: Position, engine: &mut DiagnosticEngine) {
    self.flush_gap_diagnostic(c, pos, engine);

    match &mut self.accum {
      None => {
        self.accum = Some(Accum {
          kind: AccumKind::Constant,
          start: pos,
          last: pos,
          text: c.to_string(),
          has_dot: c == '.',
        });
      },
      Some(accum) => {
        if c == '.' {
          if accum.has_dot {
            engine.report(LexicalError::InvalidSymbol {
              symbol: ".".to_string(),
              position: pos,
            });
          } else if accum.kind == AccumKind::Variable {
            engine.report(LexicalError::UnexpectedSymbol {
              symbol: ".".to_string(),
              position: pos,
            });
          }
          accum.has_dot = true;
        }
        accum.text.push(c);
        accum.last = pos;
      },
    }
  }

  /// Letters and `_` either start a new `Variable`, extend one, or
  /// promote a pure-numeric `Constant` into a `Variable` (with a
  /// diagnostic, since a numeral directly followed by a letter is a
  /// malformed identifier — §4.1's "mixed id").
  fn feed_letter(&mut self, c: char, pos: Position, engine: &mut DiagnosticEngine) {
    self.flush_gap_diagnostic(c, pos, engine);

    match &mut self.accum {
      None => {
        self.accum = Some(Accum {
          kind: AccumKind::Variable,
          start: pos,
          last: pos,
          text: c.to_string(),
          has_dot: false,
        });
      },
      Some(accum) => {
        if accum.kind == AccumKind::Constant {
          engine.report(LexicalError::InvalidSymbol {
            symbol: c.to_string(),
            position: pos,
          });
          accum.kind = AccumKind::Variable;
        }
        accum.text.push(c);
        accum.last = pos;
      },
    }
  }

  /// If a whitespace gap was pending and this character is about to
  /// extend the open accumulator anyway, the gap itself is the thing
  /// being flagged (§4.1: "83 234" is one Constant but flagged).
  fn flush_gap_diagnostic(&mut self, extending: char, _pos: Position, engine: &mut DiagnosticEngine) {
    if self.accum.is_some() {
      if let Some(gap) = self.gap_start.take() {
        engine.report(LexicalError::UnexpectedSymbol {
          symbol: extending.to_string(),
          position: gap,
        });
      }
    }
  }

  fn feed_left_paren(&mut self, pos: Position, engine: &mut DiagnosticEngine) {
    if matches!(self.context, Context::Constant | Context::ConstantTrailingDot | Context::RightParen) {
      engine.report(LexicalError::UnexpectedLeftParen { position: pos });
    }
    self.open_parens.push(pos);
    self.push(Token::single(TokenKind::Parenthesis, "(", pos));
    self.context = Context::LeftParen;
  }

  fn feed_right_paren(&mut self, pos: Position, engine: &mut DiagnosticEngine) {
    if matches!(
      self.context,
      Context::Start | Context::Operator | Context::ConstantTrailingDot | Context::Delimiter
    ) {
      engine.report(LexicalError::UnexpectedRightParen { position: pos });
    }
    self.open_parens.pop();
    self.push(Token::single(TokenKind::Parenthesis, ")", pos));
    self.context = Context::RightParen;
  }

  fn feed_operator(&mut self, c: char, pos: Position, engine: &mut DiagnosticEngine) {
    let prefix_position = matches!(
      self.context,
      Context::Start | Context::Operator | Context::LeftParen | Context::Delimiter
    );
    let unary_capable = c == '+' || c == '-';

    if prefix_position && !unary_capable {
      engine.report(LexicalError::InvalidOperator {
        symbol: c.to_string(),
        position: pos,
      });
    }

    self.push(Token::single(TokenKind::Operator, c.to_string(), pos));
    self.context = Context::Operator;
  }

  fn feed_delimiter(&mut self, pos: Position, engine: &mut DiagnosticEngine) {
    if matches!(
      self.context,
      Context::Start | Context::Operator | Context::LeftParen | Context::ConstantTrailingDot | Context::Delimiter
    ) {
      engine.report(LexicalError::UnexpectedDelimiter {
        symbol: ",".to_string(),
        position: pos,
      });
    }
    self.push(Token::single(TokenKind::Delimiter, ",", pos));
    self.context = Context::Delimiter;
  }

  fn finalize_accum(&mut self) {
    let Some(accum) = self.accum.take() else {
      return;
    };
    self.gap_start = None;

    let kind = match accum.kind {
      AccumKind::Constant => TokenKind::Constant,
      AccumKind::Variable => TokenKind::Variable,
    };

    self.context = if kind == TokenKind::Constant && accum.text.ends_with('.') {
      Context::ConstantTrailingDot
    } else if kind == TokenKind::Constant {
      Context::Constant
    } else {
      Context::Variable
    };

    self.push(Token::new(kind, accum.text, accum.start, accum.last));
  }

  /// §4.1: "a trailing non-unary operator, lone `.`, lone unopened `(`,
  /// or dangling `,` is diagnosed at the position of its last occurrence
  /// in the source."
  fn validate_trailing(&mut self, engine: &mut DiagnosticEngine) {
    if let Some(last) = self.tokens.last() {
      if last.kind == TokenKind::Operator && matches!(last.lexeme.as_str(), "*" | "/" | "^") {
        engine.report(LexicalError::InvalidOperator {
          symbol: last.lexeme.clone(),
          position: last.start,
        });
      }

      if last.kind == TokenKind::Constant && last.lexeme == "." {
        engine.report(LexicalError::InvalidSymbol {
          symbol: ".".to_string(),
          position: last.start,
        });
      }

      if last.kind == TokenKind::Delimiter {
        engine.report(LexicalError::UnexpectedDelimiter {
          symbol: ",".to_string(),
          position: last.start,
        });
      }
    }

    if let Some(&unmatched) = self.open_parens.last() {
      engine.report(LexicalError::UnexpectedLeftParen { position: unmatched });
    }
  }

  /// Reclassifies any `Variable` token whose lexeme names a built-in
  /// function (§4.1: "Function promotion").
  fn promote_functions(&mut self) {
    for token in self.tokens.iter_mut() {
      if token.kind == TokenKind::Variable && crate::token::arity_of(&token.lexeme).is_some() {
        token.kind = TokenKind::Function;
      }
    }
  }

  /// Returns the source text this lexer was constructed with.
  pub fn source(&self) -> &'a str {
    self.source
  }
}

/// Convenience entry point mirroring the teacher's `Scanner::scan`.
pub fn lex(source: &str, engine: &mut DiagnosticEngine) -> Vec<Token> {
  Lexer::new(source).tokenize(engine)
}
