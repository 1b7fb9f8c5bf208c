use ast::{BinaryOp, Node, UnaryOp};
use diagnostic::SyntacticError;
use lexer::{arity_of, Token, TokenKind};

/// Recursive-descent parser over a finished token stream (§4.2).
///
/// Precedence ladder, loosest to tightest: additive (`+ -`) < the single
/// multiplicative level shared by `* / ^` < unary < primary. All binary
/// levels are left-associative, `^` included — this grammar parses
/// `a ^ b ^ c` as `(a ^ b) ^ c`, not the usual right-associative reading.
pub struct Parser {
  tokens: Vec<Token>,
  current: usize,
}

impl Parser {
  pub fn new(tokens: Vec<Token>) -> Self {
    Self { tokens, current: 0 }
  }

  /// Parses the whole token stream into a single tree. An empty stream
  /// is not an error: it yields the empty-tree sentinel (§4.2).
  pub fn parse(mut self) -> Result<Node, SyntacticError> {
    if self.tokens.is_empty() {
      return Ok(Node::empty());
    }

    let tree = self.parse_additive()?;

    if !self.is_at_end() {
      let token = self.peek();
      return Err(SyntacticError::UnexpectedToken {
        lexeme: token.lexeme.clone(),
        position: token.start,
      });
    }

    log::trace!("parsed {} token(s) into one tree", self.tokens.len());
    Ok(tree)
  }

  fn parse_additive(&mut self) -> Result<Node, SyntacticError> {
    let mut lhs = self.parse_multiplicative()?;

    while !self.is_at_end() {
      let token = self.peek();
      let op = match token.lexeme.as_str() {
        "+" if token.kind == TokenKind::Operator => BinaryOp::Add,
        "-" if token.kind == TokenKind::Operator => BinaryOp::Sub,
        _ => break,
      };
      let token = self.advance().clone();
      let rhs = self.parse_multiplicative()?;
      lhs = Node::binary(op, token, lhs, rhs);
    }

    Ok(lhs)
  }

  fn parse_multiplicative(&mut self) -> Result<Node, SyntacticError> {
    let mut lhs = self.parse_unary()?;

    while !self.is_at_end() {
      let token = self.peek();
      let op = match token.lexeme.as_str() {
        "*" if token.kind == TokenKind::Operator => BinaryOp::Mul,
        "/" if token.kind == TokenKind::Operator => BinaryOp::Div,
        "^" if token.kind == TokenKind::Operator => BinaryOp::Pow,
        _ => break,
      };
      let token = self.advance().clone();
      let rhs = self.parse_unary()?;
      lhs = Node::binary(op, token, lhs, rhs);
    }

    Ok(lhs)
  }

  fn parse_unary(&mut self) -> Result<Node, SyntacticError> {
    if !self.is_at_end() {
      let token = self.peek();
      let op = match token.lexeme.as_str() {
        "+" if token.kind == TokenKind::Operator => Some(UnaryOp::Plus),
        "-" if token.kind == TokenKind::Operator => Some(UnaryOp::Neg),
        _ => None,
      };
      if let Some(op) = op {
        let token = self.advance().clone();
        let expr = self.parse_unary()?;
        return Ok(Node::unary(op, token, expr));
      }
    }

    self.parse_primary()
  }

  fn parse_primary(&mut self) -> Result<Node, SyntacticError> {
    if self.is_at_end() {
      let position = self.tokens.last().map(|t| t.end + 1).unwrap_or(0);
      return Err(SyntacticError::UnexpectedToken {
        lexeme: String::new(),
        position,
      });
    }

    let token = self.peek().clone();

    match token.kind {
      TokenKind::Constant | TokenKind::Variable => {
        self.advance();
        Ok(Node::leaf(token))
      }
      TokenKind::Parenthesis if token.lexeme == "(" => {
        self.advance();
        let inner = self.parse_additive()?;
        self.expect_right_paren(&token)?;
        Ok(inner)
      }
      TokenKind::Function => {
        self.advance();
        self.parse_call(token)
      }
      _ => Err(SyntacticError::UnexpectedToken {
        lexeme: token.lexeme,
        position: token.start,
      }),
    }
  }

  fn parse_call(&mut self, name_token: Token) -> Result<Node, SyntacticError> {
    let opening = if self.is_at_end() {
      None
    } else {
      let next = self.peek();
      (next.kind == TokenKind::Parenthesis && next.lexeme == "(").then(|| next.clone())
    };

    let Some(opening) = opening else {
      return Err(SyntacticError::FunctionNotCalled {
        name: name_token.lexeme.clone(),
        position: name_token.start,
      });
    };
    self.advance();

    let Some(arity) = arity_of(&name_token.lexeme) else {
      return Err(SyntacticError::UndefinedFunction {
        name: name_token.lexeme.clone(),
        position: name_token.start,
      });
    };

    let mut args = Vec::new();
    let is_empty_call = !self.is_at_end()
      && self.peek().kind == TokenKind::Parenthesis
      && self.peek().lexeme == ")";

    if !is_empty_call {
      loop {
        args.push(self.parse_additive()?);
        if self.is_at_end() {
          break;
        }
        let token = self.peek();
        if token.kind == TokenKind::Delimiter && token.lexeme == "," {
          self.advance();
          continue;
        }
        break;
      }
    }

    self.expect_right_paren(&opening)?;

    if args.len() != arity {
      return Err(SyntacticError::ArgCountMismatch {
        name: name_token.lexeme.clone(),
        expected: arity,
        actual: args.len(),
        position: name_token.start,
      });
    }

    Ok(Node::call(name_token.lexeme.clone(), name_token, args))
  }

  fn expect_right_paren(&mut self, opening: &Token) -> Result<(), SyntacticError> {
    if !self.is_at_end() {
      let token = self.peek();
      if token.kind == TokenKind::Parenthesis && token.lexeme == ")" {
        self.advance();
        return Ok(());
      }
    }
    Err(SyntacticError::MissingRightParenthesis {
      position: opening.start,
    })
  }

  fn peek(&self) -> &Token {
    &self.tokens[self.current]
  }

  fn advance(&mut self) -> &Token {
    let token = &self.tokens[self.current];
    self.current += 1;
    token
  }

  fn is_at_end(&self) -> bool {
    self.current >= self.tokens.len()
  }
}

/// Parses a finished token stream into a single tree (§4.2).
pub fn parse(tokens: Vec<Token>) -> Result<Node, SyntacticError> {
  Parser::new(tokens).parse()
}
