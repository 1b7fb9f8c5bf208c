use thiserror::Error;

use crate::position::Position;

/// The syntactic diagnostic family (§4.2, §7).
///
/// Unlike [`crate::lexical::LexicalError`], the parser fails fast: the
/// first one of these halts parsing, since meaningful recovery would need
/// resynchronization this core doesn't implement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntacticError {
  #[error("unexpected token '{lexeme}' at position {position}")]
  UnexpectedToken { lexeme: String, position: Position },

  #[error("missing right parenthesis for the one opened at position {position}")]
  MissingRightParenthesis { position: Position },

  #[error("function '{name}' used as a value without being called")]
  FunctionNotCalled { name: String, position: Position },

  #[error("'{name}' is not a defined function")]
  UndefinedFunction { name: String, position: Position },

  #[error("function '{name}' expects {expected} argument(s), found {actual}")]
  ArgCountMismatch {
    name: String,
    expected: usize,
    actual: usize,
    position: Position,
  },
}

impl SyntacticError {
  pub fn position(&self) -> Position {
    match self {
      Self::UnexpectedToken { position, .. }
      | Self::MissingRightParenthesis { position }
      | Self::FunctionNotCalled { position, .. }
      | Self::UndefinedFunction { position, .. }
      | Self::ArgCountMismatch { position, .. } => *position,
    }
  }
}
