//! The four-variant arithmetic-expression AST (§3), shared by the
//! parser, the normalizer, and the equivalence generators. The same
//! [`Node`] type represents both the parser's raw tree and the
//! normalizer's canonical parallel tree; [`assign_ids`] is what turns
//! the latter's nodes into stably-identified ones (§9).

pub mod node;
pub mod operator;

pub use node::{Node, NodeId};
pub use operator::{BinaryOp, UnaryOp};

/// Walks `node` post-order, assigning each node the next sequential
/// [`NodeId`] starting at `1` (`0` is reserved for "unassigned"). Called
/// once by the normalizer when a canonical parallel tree is finished, so
/// that identity comparisons across cloned trees compare these ids
/// rather than addresses.
pub fn assign_ids(node: &mut Node) -> NodeId {
  let mut next = 1;
  assign_ids_from(node, &mut next);
  next - 1
}

fn assign_ids_from(node: &mut Node, next: &mut NodeId) {
  for child in node.children_mut() {
    assign_ids_from(child, next);
  }
  node.set_id(*next);
  *next += 1;
}
