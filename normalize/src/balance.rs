use ast::{BinaryOp, Node};
use lexer::Token;

/// Pass 5 (§4.3 step 5): rebuilds every `+`/`*` run so the two sides of
/// each node differ in height by at most one.
///
/// Rather than the single-rotation procedure sketched informally (graft
/// one grandchild across, form a new node, recurse and converge), this
/// flattens the maximal same-operator run into an operand list and
/// rebuilds it by pairwise merging — a standard balanced-merge
/// construction that lands on the same invariant directly instead of
/// converging to it step by step.
pub fn balance(node: Node) -> Node {
  match node {
    Node::Leaf { .. } => node,
    Node::Unary { op, token, expr } => Node::unary(op, token, balance(*expr)),
    Node::Function { name, token, args } => {
      Node::call(name, token, args.into_iter().map(balance).collect())
    }
    Node::Binary {
      op, token, left, right,
    } if op.is_commutative() => {
      let mut operands = Vec::new();
      flatten(op, *left, &mut operands);
      flatten(op, *right, &mut operands);
      rebuild(op, &token, operands)
    }
    Node::Binary {
      op, token, left, right,
    } => Node::binary(op, token, balance(*left), balance(*right)),
  }
}

fn flatten(op: BinaryOp, node: Node, out: &mut Vec<Node>) {
  match node {
    Node::Binary {
      op: child_op, left, right, ..
    } if child_op == op => {
      flatten(op, *left, out);
      flatten(op, *right, out);
    }
    other => out.push(balance(other)),
  }
}

fn rebuild(op: BinaryOp, token: &Token, mut operands: Vec<Node>) -> Node {
  if operands.len() == 1 {
    return operands.pop().expect("checked len == 1");
  }

  while operands.len() > 1 {
    let mut next = Vec::with_capacity((operands.len() + 1) / 2);
    let mut iter = operands.into_iter();
    while let Some(a) = iter.next() {
      match iter.next() {
        Some(b) => next.push(Node::binary(op, token.clone(), a, b)),
        None => next.push(a),
      }
    }
    operands = next;
  }

  operands.pop().expect("loop exits with exactly one operand")
}
