use ast::{BinaryOp, Node, UnaryOp};
use lexer::Token;

use crate::synth::{is_one_leaf, is_zero_leaf, zero_at};

/// Pass 1 (§4.3 step 1): collapses `x - x`, the additive and
/// multiplicative identities, and `-0`, bottom-up, re-examining a node
/// whenever one of its children changed until the tree stops moving.
///
/// A single bottom-up sweep already reaches the fixed point for these
/// purely local rules (a parent's pattern is always matched against its
/// children's *final* simplified form), but the outer loop is kept so
/// the "repeatedly rewrite until fixed point" contract holds literally
/// even if a future rule needs more than one sweep.
pub fn simplify_to_fixed_point(mut tree: Node) -> Node {
  const MAX_SWEEPS: usize = 64;
  for _ in 0..MAX_SWEEPS {
    let before = tree.to_string();
    tree = simplify_once(tree);
    if tree.to_string() == before {
      break;
    }
  }
  tree
}

fn simplify_once(node: Node) -> Node {
  match node {
    Node::Leaf { .. } => node,
    Node::Unary { op, token, expr } => {
      let expr = simplify_once(*expr);
      if op == UnaryOp::Neg && is_zero_leaf(&expr) {
        expr
      } else {
        Node::unary(op, token, expr)
      }
    }
    Node::Function { name, token, args } => {
      Node::call(name, token, args.into_iter().map(simplify_once).collect())
    }
    Node::Binary {
      op, token, left, right,
    } => {
      let left = simplify_once(*left);
      let right = simplify_once(*right);
      apply_identity(op, token, left, right)
    }
  }
}

fn apply_identity(op: BinaryOp, token: Token, left: Node, right: Node) -> Node {
  match op {
    BinaryOp::Sub => {
      if same_leaf(&left, &right) {
        let position = left.token().map(|t| t.start).unwrap_or(token.start);
        return zero_at(position);
      }
      if is_zero_leaf(&left) {
        return Node::unary(UnaryOp::Neg, token, right);
      }
      if is_zero_leaf(&right) {
        return left;
      }
      Node::binary(op, token, left, right)
    }
    BinaryOp::Add => {
      if is_zero_leaf(&left) {
        right
      } else if is_zero_leaf(&right) {
        left
      } else {
        Node::binary(op, token, left, right)
      }
    }
    BinaryOp::Mul => {
      if is_zero_leaf(&left) {
        left
      } else if is_zero_leaf(&right) {
        right
      } else if is_one_leaf(&left) {
        right
      } else if is_one_leaf(&right) {
        left
      } else {
        Node::binary(op, token, left, right)
      }
    }
    BinaryOp::Div => {
      if is_one_leaf(&right) {
        left
      } else if is_zero_leaf(&left) && !is_zero_leaf(&right) {
        left
      } else {
        Node::binary(op, token, left, right)
      }
    }
    BinaryOp::Pow => Node::binary(op, token, left, right),
  }
}

fn same_leaf(left: &Node, right: &Node) -> bool {
  matches!(
    (left, right),
    (Node::Leaf { token: Some(lt), .. }, Node::Leaf { token: Some(rt), .. }) if lt.lexeme == rt.lexeme
  )
}
