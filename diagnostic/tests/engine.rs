use diagnostic::{DiagnosticEngine, LexicalError};

#[test]
fn reports_are_deduplicated_by_position() {
  let mut engine = DiagnosticEngine::new();

  engine.report(LexicalError::UnknownSymbol {
    symbol: "$".to_string(),
    position: 4,
  });
  engine.report(LexicalError::UnknownSymbol {
    symbol: "$".to_string(),
    position: 4,
  });

  assert_eq!(engine.len(), 1);
  assert!(engine.has_errors());
}

#[test]
fn distinct_positions_are_kept() {
  let mut engine = DiagnosticEngine::new();

  engine.report(LexicalError::UnknownSymbol {
    symbol: "$".to_string(),
    position: 0,
  });
  engine.report(LexicalError::InvalidSymbol {
    symbol: ".".to_string(),
    position: 4,
  });

  assert_eq!(engine.len(), 2);
}

#[test]
fn empty_engine_has_no_errors() {
  let engine = DiagnosticEngine::new();
  assert!(!engine.has_errors());
  assert!(engine.is_empty());
}
