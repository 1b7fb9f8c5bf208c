use ast::{assign_ids, BinaryOp, Node, UnaryOp};
use lexer::{Token, TokenKind};

fn var(name: &str) -> Node {
  Node::leaf(Token::single(TokenKind::Variable, name, 0))
}

fn num(value: &str) -> Node {
  Node::leaf(Token::single(TokenKind::Constant, value, 0))
}

fn op(symbol: &str) -> Token {
  Token::single(TokenKind::Operator, symbol, 0)
}

#[test]
fn empty_tree_has_no_token() {
  let empty = Node::empty();
  assert!(empty.is_empty());
  assert!(empty.token().is_none());
  assert!(empty.children().is_empty());
}

#[test]
fn leaf_is_not_an_operator_node() {
  assert!(!var("x").is_operator_node());
}

#[test]
fn binary_node_exposes_both_children_in_order() {
  let tree = Node::binary(BinaryOp::Add, op("+"), var("a"), var("b"));
  let children = tree.children();
  assert_eq!(children.len(), 2);
  assert_eq!(children[0].token().unwrap().lexeme, "a");
  assert_eq!(children[1].token().unwrap().lexeme, "b");
}

#[test]
fn assign_ids_gives_every_node_a_nonzero_id_and_children_precede_parents() {
  let mut tree = Node::binary(
    BinaryOp::Mul,
    op("*"),
    var("a"),
    Node::binary(BinaryOp::Add, op("+"), var("b"), var("c")),
  );

  let count = assign_ids(&mut tree);
  assert_eq!(count, 5);

  let Node::Binary { id: root_id, right, .. } = &tree else {
    panic!("expected a binary root");
  };
  let Node::Binary {
    id: right_id, left, right: inner_right, ..
  } = right.as_ref()
  else {
    panic!("expected a binary right child");
  };

  assert!(left.id() < *right_id);
  assert!(inner_right.id() < *right_id);
  assert!(*right_id < *root_id);
}

#[test]
fn display_renders_plain_infix_for_flat_sums() {
  let tree = Node::binary(BinaryOp::Add, op("+"), var("a"), var("b"));
  assert_eq!(tree.to_string(), "a + b");
}

#[test]
fn display_parenthesizes_a_lower_precedence_child() {
  // (a + b) * c must keep its parentheses or it would print as a + b * c.
  let tree = Node::binary(
    BinaryOp::Mul,
    op("*"),
    Node::binary(BinaryOp::Add, op("+"), var("a"), var("b")),
    var("c"),
  );
  assert_eq!(tree.to_string(), "(a + b) * c");
}

#[test]
fn display_parenthesizes_a_same_precedence_right_child_of_a_left_associative_op() {
  // a - (b - c) is not the same value as (a - b) - c, so the structure
  // must survive the round trip through Display.
  let tree = Node::binary(
    BinaryOp::Sub,
    op("-"),
    var("a"),
    Node::binary(BinaryOp::Sub, op("-"), var("b"), var("c")),
  );
  assert_eq!(tree.to_string(), "a - (b - c)");
}

#[test]
fn display_parenthesizes_a_right_child_at_the_same_multiplicative_level() {
  // `*`, `/` and `^` share one left-associative precedence level (§4.2),
  // so a ^ (b * c) must keep its parentheses.
  let tree = Node::binary(
    BinaryOp::Pow,
    op("^"),
    var("a"),
    Node::binary(BinaryOp::Mul, op("*"), var("b"), var("c")),
  );
  assert_eq!(tree.to_string(), "a ^ (b * c)");
}

#[test]
fn display_parenthesizes_an_operator_operand_of_unary_minus() {
  let tree = Node::unary(
    UnaryOp::Neg,
    op("-"),
    Node::binary(BinaryOp::Add, op("+"), var("a"), var("b")),
  );
  assert_eq!(tree.to_string(), "-(a + b)");
}

#[test]
fn display_does_not_parenthesize_a_leaf_operand_of_unary_minus() {
  let tree = Node::unary(UnaryOp::Neg, op("-"), num("5"));
  assert_eq!(tree.to_string(), "-5");
}

#[test]
fn display_renders_function_calls_with_comma_separated_args() {
  let tree = Node::call(
    "max",
    Token::single(TokenKind::Function, "max", 0),
    vec![var("a"), var("b")],
  );
  assert_eq!(tree.to_string(), "max(a, b)");
}
