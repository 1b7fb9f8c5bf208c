#[cfg(test)]
mod lexer_tests {
  use diagnostic::DiagnosticEngine;
  use lexer::{lex, TokenKind};

  #[test]
  fn empty_source_yields_no_tokens() {
    let mut engine = DiagnosticEngine::new();
    let tokens = lex("", &mut engine);

    assert!(tokens.is_empty());
    assert!(!engine.has_errors());
  }

  #[test]
  fn simple_expression_tokenizes_cleanly() {
    let mut engine = DiagnosticEngine::new();
    let tokens = lex("a + b * c", &mut engine);

    assert!(!engine.has_errors());
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
      kinds,
      vec![
        TokenKind::Variable,
        TokenKind::Operator,
        TokenKind::Variable,
        TokenKind::Operator,
        TokenKind::Variable,
      ]
    );
  }

  #[test]
  fn functions_are_promoted_after_lexing() {
    let mut engine = DiagnosticEngine::new();
    let tokens = lex("sin(cos(4))", &mut engine);

    assert!(!engine.has_errors());
    assert_eq!(tokens[0].kind, TokenKind::Function);
    assert_eq!(tokens[0].lexeme, "sin");
    assert_eq!(tokens[2].kind, TokenKind::Function);
    assert_eq!(tokens[2].lexeme, "cos");
  }

  #[test]
  fn whitespace_interior_to_a_constant_is_flagged_but_merged() {
    let mut engine = DiagnosticEngine::new();
    let tokens = lex("83 234", &mut engine);

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Constant);
    assert_eq!(tokens[0].lexeme, "83234");
    assert!(engine.has_errors());
  }

  #[test]
  fn whitespace_between_two_separate_tokens_is_not_flagged() {
    let mut engine = DiagnosticEngine::new();
    let tokens = lex("a + b", &mut engine);

    assert!(!engine.has_errors());
    assert_eq!(tokens.len(), 3);
  }

  #[test]
  fn token_text_matches_its_own_lexeme() {
    let source = "sin(x) + 42";
    let mut engine = DiagnosticEngine::new();
    let tokens = lex(source, &mut engine);

    for token in &tokens {
      assert_eq!(token.text(source), token.lexeme);
    }
  }

  #[test]
  fn dangling_dot_is_diagnosed() {
    let mut engine = DiagnosticEngine::new();
    let _tokens = lex("8 + .", &mut engine);

    assert!(engine.has_errors());
  }

  #[test]
  fn unknown_character_is_skipped_and_diagnosed() {
    let mut engine = DiagnosticEngine::new();
    let tokens = lex("a $ b", &mut engine);

    assert!(engine.has_errors());
    assert_eq!(tokens.len(), 2);
  }

  #[test]
  fn repeated_position_diagnostics_are_deduplicated() {
    let mut engine = DiagnosticEngine::new();
    let _tokens = lex("@@", &mut engine);

    // Two distinct '@' characters at two distinct positions: both kept.
    assert_eq!(engine.len(), 2);
  }

  #[test]
  fn single_char_tokens_have_equal_start_and_end() {
    let mut engine = DiagnosticEngine::new();
    let tokens = lex("(a)", &mut engine);

    assert_eq!(tokens[0].start, tokens[0].end);
    assert_eq!(tokens[2].start, tokens[2].end);
  }
}
