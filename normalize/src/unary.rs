use ast::{Node, UnaryOp};

/// Pass 3 (§4.3 step 3): collapses every run of nested unary operators
/// into at most one unary-minus. An odd number of minuses in the run
/// survives as a single minus; an even number (unary-plus never
/// counts) vanishes entirely.
pub fn collapse(node: Node) -> Node {
  match node {
    Node::Leaf { .. } => node,
    Node::Binary {
      op, token, left, right,
    } => Node::binary(op, token, collapse(*left), collapse(*right)),
    Node::Function { name, token, args } => {
      Node::call(name, token, args.into_iter().map(collapse).collect())
    }
    Node::Unary { .. } => collapse_chain(node),
  }
}

fn collapse_chain(node: Node) -> Node {
  let mut neg_count = 0usize;
  let mut chain_token = None;
  let mut current = node;

  while let Node::Unary { op, token, expr } = current {
    if op == UnaryOp::Neg {
      neg_count += 1;
    }
    if chain_token.is_none() {
      chain_token = Some(token);
    }
    current = *expr;
  }

  let inner = collapse(current);

  if neg_count % 2 == 1 {
    Node::unary(
      UnaryOp::Neg,
      chain_token.expect("the while loop ran at least once"),
      inner,
    )
  } else {
    inner
  }
}
