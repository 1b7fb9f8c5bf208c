use ast::{BinaryOp, Node};
use diagnostic::{DiagnosticEngine, SyntacticError};
use lexer::lex;
use parser::parse;

fn parse_source(source: &str) -> Result<Node, SyntacticError> {
  let mut engine = DiagnosticEngine::new();
  let tokens = lex(source, &mut engine);
  assert!(!engine.has_errors(), "unexpected lexical errors in {source:?}");
  parse(tokens)
}

#[test]
fn empty_source_yields_the_empty_sentinel() {
  let tree = parse_source("").unwrap();
  assert!(tree.is_empty());
}

#[test]
fn additive_binds_looser_than_multiplicative() {
  let tree = parse_source("a + b * c").unwrap();
  let Node::Binary { op, left, right, .. } = &tree else {
    panic!("expected a binary root");
  };
  assert_eq!(*op, BinaryOp::Add);
  assert!(matches!(left.as_ref(), Node::Leaf { .. }));
  assert!(matches!(right.as_ref(), Node::Binary { op: BinaryOp::Mul, .. }));
}

#[test]
fn star_slash_and_caret_share_one_left_associative_level() {
  // a * b ^ c must parse as (a * b) ^ c, not a * (b ^ c).
  let tree = parse_source("a * b ^ c").unwrap();
  let Node::Binary { op, left, .. } = &tree else {
    panic!("expected a binary root");
  };
  assert_eq!(*op, BinaryOp::Pow);
  assert!(matches!(left.as_ref(), Node::Binary { op: BinaryOp::Mul, .. }));
}

#[test]
fn parentheses_produce_no_wrapper_node() {
  let tree = parse_source("(a + b) * c").unwrap();
  let Node::Binary { op, left, .. } = &tree else {
    panic!("expected a binary root");
  };
  assert_eq!(*op, BinaryOp::Mul);
  assert!(matches!(left.as_ref(), Node::Binary { op: BinaryOp::Add, .. }));
}

#[test]
fn function_call_with_correct_arity_succeeds() {
  let tree = parse_source("sin(x)").unwrap();
  let Node::Function { name, args, .. } = &tree else {
    panic!("expected a function node");
  };
  assert_eq!(name, "sin");
  assert_eq!(args.len(), 1);
}

#[test]
fn nullary_function_call_parses_with_no_arguments() {
  let tree = parse_source("rand()").unwrap();
  let Node::Function { args, .. } = &tree else {
    panic!("expected a function node");
  };
  assert!(args.is_empty());
}

#[test]
fn wrong_arity_is_an_arg_count_mismatch() {
  let err = parse_source("sin()").unwrap_err();
  assert_eq!(
    err,
    SyntacticError::ArgCountMismatch {
      name: "sin".into(),
      expected: 1,
      actual: 0,
      position: 0,
    }
  );
}

#[test]
fn function_token_not_followed_by_a_paren_is_an_error() {
  let err = parse_source("sin + 1").unwrap_err();
  assert!(matches!(err, SyntacticError::FunctionNotCalled { .. }));
}

#[test]
fn missing_closing_paren_is_reported() {
  let err = parse_source("(a + b").unwrap_err();
  assert!(matches!(err, SyntacticError::MissingRightParenthesis { .. }));
}

#[test]
fn a_top_level_comma_is_an_unexpected_token() {
  let err = parse_source("a, b").unwrap_err();
  assert!(matches!(err, SyntacticError::UnexpectedToken { .. }));
}

#[test]
fn unary_minus_nests_to_the_right() {
  let tree = parse_source("- - x").unwrap();
  let Node::Unary { expr, .. } = &tree else {
    panic!("expected a unary root");
  };
  assert!(matches!(expr.as_ref(), Node::Unary { .. }));
}
