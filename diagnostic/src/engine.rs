use std::collections::HashSet;

use crate::diagnostic::Diagnostic;
use crate::lexical::LexicalError;
use crate::position::Position;

/// Aggregates the lexical diagnostic family for one lex pass.
///
/// Mirrors the teacher's `DiagnosticEngine` (error/warning counters, a
/// flat `Vec<Diagnostic>`), narrowed to the lexical family only: the
/// syntactic family is a single fatal [`crate::syntactic::SyntacticError`]
/// returned directly by the parser, never aggregated here (§7: "never
/// aggregated across stages").
#[derive(Debug, Default)]
pub struct DiagnosticEngine {
  diagnostics: Vec<Diagnostic>,
  seen_positions: HashSet<Position>,
}

impl DiagnosticEngine {
  pub fn new() -> Self {
    Self::default()
  }

  /// Records `error`, unless a diagnostic at the same position was
  /// already recorded (§4.1, §9: "keyed by position; a hash-set of
  /// positions guards insertion").
  pub fn report(&mut self, error: LexicalError) {
    let position = error.position();
    if self.seen_positions.insert(position) {
      self.diagnostics.push(Diagnostic::from(error));
    }
  }

  pub fn has_errors(&self) -> bool {
    !self.diagnostics.is_empty()
  }

  pub fn len(&self) -> usize {
    self.diagnostics.len()
  }

  pub fn is_empty(&self) -> bool {
    self.diagnostics.is_empty()
  }

  pub fn diagnostics(&self) -> &[Diagnostic] {
    &self.diagnostics
  }

  pub fn into_diagnostics(self) -> Vec<Diagnostic> {
    self.diagnostics
  }
}
