use ast::{BinaryOp, Node, UnaryOp};
use lexer::Token;

use crate::synth::is_one_leaf;

/// Pass 4 (§4.3 step 4): pushes a leading unary minus inward through
/// `+` and `*`.
pub fn open(node: Node) -> Node {
  match node {
    Node::Leaf { .. } => node,
    Node::Binary {
      op, token, left, right,
    } => Node::binary(op, token, open(*left), open(*right)),
    Node::Function { name, token, args } => {
      Node::call(name, token, args.into_iter().map(open).collect())
    }
    Node::Unary {
      op: UnaryOp::Plus,
      token,
      expr,
    } => Node::unary(UnaryOp::Plus, token, open(*expr)),
    Node::Unary {
      op: UnaryOp::Neg,
      token,
      expr,
    } => open_under_neg(token, *expr),
  }
}

fn open_under_neg(token: Token, expr: Node) -> Node {
  match expr {
    Node::Binary {
      op: BinaryOp::Add,
      token: add_token,
      left,
      right,
    } => {
      let neg_left = Node::unary(UnaryOp::Neg, token.clone(), *left);
      let neg_right = Node::unary(UnaryOp::Neg, token, *right);
      Node::binary(BinaryOp::Add, add_token, open(neg_left), open(neg_right))
    }
    Node::Binary {
      op: BinaryOp::Mul,
      token: mul_token,
      left,
      right,
    } => {
      // The sign must not land inside a recognized `1/x` denominator
      // pattern, so it goes to the left operand by default and only
      // reroutes to the right when the left operand is that pattern.
      if is_one_leaf_denominator(&left) {
        let neg_right = Node::unary(UnaryOp::Neg, token, *right);
        Node::binary(BinaryOp::Mul, mul_token, open(*left), open(neg_right))
      } else {
        let neg_left = Node::unary(UnaryOp::Neg, token, *left);
        Node::binary(BinaryOp::Mul, mul_token, open(neg_left), open(*right))
      }
    }
    other => Node::unary(UnaryOp::Neg, token, open(other)),
  }
}

fn is_one_leaf_denominator(node: &Node) -> bool {
  matches!(node, Node::Binary { op: BinaryOp::Div, left, .. } if is_one_leaf(left))
}
