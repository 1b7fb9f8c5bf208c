//! Converts a parsed AST into the canonical parallel tree (CPT) of §3
//! through a fixed pipeline of passes (§4.3): identity simplification,
//! primitive reduction, unary collapse, bracket opening, and depth
//! balancing. An optional sixth pass re-sugars the CPT for display.

mod balance;
mod bracket;
mod display;
mod identity;
mod primitive;
mod synth;
mod unary;

use ast::Node;

/// Runs passes 1 through 5 on a deep copy of `tree`, producing the
/// canonical parallel tree and assigning every node a stable id (§9).
pub fn normalize(tree: &Node) -> Node {
  log::trace!("normalizing a tree of height {}", height(tree));

  let mut cpt = tree.clone();
  cpt = identity::simplify_to_fixed_point(cpt);
  cpt = primitive::reduce(cpt);
  cpt = unary::collapse(cpt);
  cpt = bracket::open(cpt);
  cpt = balance::balance(cpt);

  let node_count = ast::assign_ids(&mut cpt);
  log::trace!("assigned {} stable id(s) to the canonical tree", node_count);
  cpt
}

/// Runs [`normalize`] and then the optional display pass (§4.3 step 6),
/// re-introducing `-` and `/` sugar without changing arithmetic meaning.
pub fn normalize_for_display(tree: &Node) -> Node {
  let mut cpt = normalize(tree);
  cpt = display::resugar(cpt);
  ast::assign_ids(&mut cpt);
  cpt
}

fn height(node: &Node) -> usize {
  match node.children().as_slice() {
    [] => 1,
    children => 1 + children.iter().map(|c| height(c)).max().unwrap_or(0),
  }
}
