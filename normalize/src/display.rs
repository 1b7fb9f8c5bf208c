use ast::{BinaryOp, Node, UnaryOp};

use crate::synth::is_one_leaf;

/// Pass 6 (§4.3 step 6, optional): re-sugars `a + (-b)` back to `a - b`
/// and `a * (1/b)` back to `a / b` for a human-friendly rendering. Only
/// the right operand is checked for the unary-minus/reciprocal shape,
/// since that is the shape passes 2 and 4 actually produce; arithmetic
/// meaning is unchanged either way.
pub fn resugar(node: Node) -> Node {
  match node {
    Node::Leaf { .. } => node,
    Node::Unary { op, token, expr } => Node::unary(op, token, resugar(*expr)),
    Node::Function { name, token, args } => {
      Node::call(name, token, args.into_iter().map(resugar).collect())
    }
    Node::Binary {
      op: BinaryOp::Add,
      token,
      left,
      right,
    } => {
      let is_negated_right = matches!(right.as_ref(), Node::Unary { op: UnaryOp::Neg, .. });

      if is_negated_right {
        match *right {
          Node::Unary { expr, .. } => {
            Node::binary(BinaryOp::Sub, token, resugar(*left), resugar(*expr))
          }
          _ => unreachable!("is_negated_right guarantees a Unary shape"),
        }
      } else {
        Node::binary(BinaryOp::Add, token, resugar(*left), resugar(*right))
      }
    }
    Node::Binary {
      op: BinaryOp::Mul,
      token,
      left,
      right,
    } => {
      let is_reciprocal = matches!(
        right.as_ref(),
        Node::Binary { op: BinaryOp::Div, left: one, .. } if is_one_leaf(one)
      );

      if is_reciprocal {
        match *right {
          Node::Binary { right: denom, .. } => {
            Node::binary(BinaryOp::Div, token, resugar(*left), resugar(*denom))
          }
          _ => unreachable!("is_reciprocal guarantees a Binary shape"),
        }
      } else {
        Node::binary(BinaryOp::Mul, token, resugar(*left), resugar(*right))
      }
    }
    Node::Binary {
      op, token, left, right,
    } => Node::binary(op, token, resugar(*left), resugar(*right)),
  }
}
