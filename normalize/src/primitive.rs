use ast::{BinaryOp, Node, UnaryOp};

use crate::synth::{is_one_leaf, one_at};

/// Pass 2 (§4.3 step 2): rewrites every `a - b` as `a + (-b)` and every
/// `a / b` as `a * (1/b)`. The synthesized `1` anchors at the original
/// operator's position; both the multiplication wrapper and the inner
/// `1/b` reuse that same operator token, since position provenance
/// lives in the token while the node's `op` field carries the actual
/// semantics. A division whose left operand is already the literal `1`
/// is the recognized denominator pattern itself and is left alone, so
/// normalizing an already-canonical tree is a no-op.
pub fn reduce(node: Node) -> Node {
  match node {
    Node::Leaf { .. } => node,
    Node::Unary { op, token, expr } => Node::unary(op, token, reduce(*expr)),
    Node::Function { name, token, args } => {
      Node::call(name, token, args.into_iter().map(reduce).collect())
    }
    Node::Binary {
      op, token, left, right,
    } => {
      let left = reduce(*left);
      let right = reduce(*right);
      match op {
        BinaryOp::Sub => {
          let negated = Node::unary(UnaryOp::Neg, token.clone(), right);
          Node::binary(BinaryOp::Add, token, left, negated)
        }
        BinaryOp::Div if is_one_leaf(&left) => Node::binary(op, token, left, right),
        BinaryOp::Div => {
          let one = one_at(token.start);
          let reciprocal = Node::binary(BinaryOp::Div, token.clone(), one, right);
          Node::binary(BinaryOp::Mul, token, left, reciprocal)
        }
        _ => Node::binary(op, token, left, right),
      }
    }
  }
}
