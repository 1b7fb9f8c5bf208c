//! Shared diagnostic plumbing for every pipeline stage.
//!
//! Two independent error families live here (§7 of the design doc):
//! [`lexical::LexicalError`] (recoverable, aggregated by
//! [`engine::DiagnosticEngine`]) and [`syntactic::SyntacticError`] (fatal,
//! surfaced as a plain `Result` from the parser). [`diagnostic::Diagnostic`]
//! is the stable `{kind, message, symbol, position}` record external
//! collaborators consume (§6).

pub mod diagnostic;
pub mod engine;
pub mod lexical;
pub mod position;
pub mod syntactic;

pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use engine::DiagnosticEngine;
pub use lexical::LexicalError;
pub use position::Position;
pub use syntactic::SyntacticError;
