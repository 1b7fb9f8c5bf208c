use std::collections::HashSet;

use ast::Node;

/// Deep-copies every variant in `nodes` and keeps only the first of each
/// group that stringifies the same way (§4.4: "deduplicate by
/// structural equality of the stringified CPT").
pub fn dedup_by_string(nodes: Vec<Node>) -> Vec<Node> {
  let mut seen = HashSet::new();
  nodes.into_iter().filter(|n| seen.insert(n.to_string())).collect()
}

/// The cartesian product of a function-call's per-argument variant
/// lists, in argument order. A call with no arguments yields the single
/// empty combination.
pub fn cartesian_product(lists: &[Vec<Node>]) -> Vec<Vec<Node>> {
  lists.iter().fold(vec![vec![]], |acc, list| {
    let mut next = Vec::with_capacity(acc.len() * list.len().max(1));
    for combo in &acc {
      for item in list {
        let mut extended = combo.clone();
        extended.push(item.clone());
        next.push(extended);
      }
    }
    next
  })
}

/// Assigns a fresh, independent stable-id numbering to every variant
/// (§9): each variant is its own tree, so ids only need to be unique
/// within it, not across the whole returned set.
pub fn assign_ids_to_all(variants: &mut [Node]) {
  for variant in variants.iter_mut() {
    ast::assign_ids(variant);
  }
}
