//! Converts source text into a token stream plus lexical diagnostics
//! (§4.1). See [`lexer::Lexer`] for the state machine and [`token`] for
//! the token/function-table types.

pub mod lexer;
pub mod token;

pub use lexer::{lex, Lexer};
pub use token::{arity_of, Token, TokenKind, FUNCTION_TABLE};
