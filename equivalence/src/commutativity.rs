use ast::Node;

use crate::common::{assign_ids_to_all, cartesian_product, dedup_by_string};

/// Produces every CPT reachable by swapping operand order at `+`/`*`
/// nodes (§4.4). Each Binary node with a commutative operator emits the
/// cross product of its children's variant sets twice — once per
/// operand order — and every other node form passes its children's
/// variants through unchanged.
pub fn generate_commutative_variants(tree: &Node) -> Vec<Node> {
  let mut variants = expand(tree);
  assign_ids_to_all(&mut variants);
  log::trace!("commutativity generator produced {} variant(s)", variants.len());
  variants
}

fn expand(node: &Node) -> Vec<Node> {
  let raw = match node {
    Node::Leaf { .. } => vec![node.clone()],
    Node::Unary { op, token, expr } => expand(expr)
      .into_iter()
      .map(|v| Node::unary(*op, token.clone(), v))
      .collect(),
    Node::Function { name, token, args } => {
      let per_arg: Vec<Vec<Node>> = args.iter().map(expand).collect();
      cartesian_product(&per_arg)
        .into_iter()
        .map(|combo| Node::call(name.clone(), token.clone(), combo))
        .collect()
    }
    Node::Binary { op, token, left, right } => {
      let lefts = expand(left);
      let rights = expand(right);
      let mut out = Vec::with_capacity(lefts.len() * rights.len() * 2);
      for l in &lefts {
        for r in &rights {
          out.push(Node::binary(*op, token.clone(), l.clone(), r.clone()));
          if op.is_commutative() {
            out.push(Node::binary(*op, token.clone(), r.clone(), l.clone()));
          }
        }
      }
      out
    }
  };
  dedup_by_string(raw)
}
