use std::collections::HashMap;

use ast::{Node, NodeId};

use crate::config::Config;

/// A single dispatchable unit of work: one Binary or Function subtree of
/// the CPT (§4.5: "operation nodes ... every Binary or Function subtree
/// from the CPT, in post-order"). Leaves and Unary nodes are never
/// operations themselves; a Unary wrapping an operation is transparent
/// for dependency purposes (see [`core_operand`]).
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
  pub id: NodeId,
  pub tacts: f64,
  /// Ids of the Binary/Function operands (through any Unary wrapper)
  /// that must be in `operations_fulfilled` before this operation can be
  /// dispatched.
  pub dependencies: Vec<NodeId>,
}

/// Flattens `cpt` into its post-order operation list, plus an index from
/// id back to the node so the pipeline can inspect operand shapes and
/// leaf contents during dispatch.
pub fn collect_operations(cpt: &Node, config: &Config) -> (Vec<Operation>, HashMap<NodeId, &Node>) {
  let mut operations = Vec::new();
  let mut by_id = HashMap::new();
  walk(cpt, config, &mut operations, &mut by_id);
  (operations, by_id)
}

fn walk<'a>(
  node: &'a Node,
  config: &Config,
  operations: &mut Vec<Operation>,
  by_id: &mut HashMap<NodeId, &'a Node>,
) {
  for child in node.children() {
    walk(child, config, operations, by_id);
  }

  if matches!(node, Node::Binary { .. } | Node::Function { .. }) {
    let id = node.id();
    by_id.insert(id, node);
    operations.push(Operation {
      id,
      tacts: config.tacts_for(node),
      dependencies: dependency_ids(node),
    });
  }
}

/// Unwraps a chain of Unary wrappers down to the node they ultimately
/// sign; a Binary/Function operand hiding under `-x` still counts as an
/// operand that must finish before its consumer can dispatch.
pub fn core_operand(node: &Node) -> &Node {
  match node {
    Node::Unary { expr, .. } => core_operand(expr),
    other => other,
  }
}

fn dependency_ids(node: &Node) -> Vec<NodeId> {
  node
    .children()
    .into_iter()
    .filter_map(|child| match core_operand(child) {
      Node::Binary { id, .. } | Node::Function { id, .. } => Some(*id),
      _ => None,
    })
    .collect()
}

/// True when every operand of `node` is already a leaf (no nested
/// Binary/Function, through Unary) — §4.5 dispatch rule 1.
pub fn is_flat_ready(node: &Node) -> bool {
  node
    .children()
    .iter()
    .all(|child| matches!(core_operand(child), Node::Leaf { .. }))
}

/// The operator an operation contributes to congeneric-fill matching
/// (§4.5 rule 3, `+`/`*` only); `None` for anything else, including
/// function calls.
pub fn congeneric_operator(node: &Node) -> Option<ast::BinaryOp> {
  match node {
    Node::Binary { op, .. } if matches!(op, ast::BinaryOp::Add | ast::BinaryOp::Mul) => Some(*op),
    _ => None,
  }
}

/// Every distinct leaf lexeme reachable under `node`, used as a crude
/// proxy for "operand" when checking congeneric overlap.
pub fn leaf_lexemes(node: &Node) -> std::collections::HashSet<String> {
  let mut out = std::collections::HashSet::new();
  collect_leaf_lexemes(node, &mut out);
  out
}

fn collect_leaf_lexemes(node: &Node, out: &mut std::collections::HashSet<String>) {
  if let Node::Leaf {
    token: Some(token), ..
  } = node
  {
    out.insert(token.lexeme.clone());
  }
  for child in node.children() {
    collect_leaf_lexemes(child, out);
  }
}
