use std::collections::{HashMap, HashSet, VecDeque};

use ast::{Node, NodeId};

use crate::config::Config;
use crate::operations::{collect_operations, congeneric_operator, is_flat_ready, leaf_lexemes, Operation};

/// One pipeline tact: a snapshot of every layer slot and the tacts that
/// step cost (§3, §4.5).
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
  pub tacts: f64,
  pub layers: Vec<Option<NodeId>>,
}

/// The per-variant simulation result (§3, §6).
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationData {
  pub steps: Vec<Step>,
  pub sequential: f64,
  pub dynamic: f64,
  pub acceleration: f64,
  pub efficiency: f64,
}

/// Runs the conveyor simulation over `cpt` with `config`'s layer count
/// and tact-cost table. The empty-tree sentinel produces zero-valued
/// results and no steps (§7).
pub fn simulate(cpt: &Node, config: &Config) -> SimulationData {
  let (operations, by_id) = collect_operations(cpt, config);

  if operations.is_empty() {
    return SimulationData {
      steps: Vec::new(),
      sequential: 0.0,
      dynamic: 0.0,
      acceleration: 0.0,
      efficiency: 0.0,
    };
  }

  let sequential = config.layers as f64 * operations.iter().map(|op| op.tacts).sum::<f64>();
  let ops_by_id: HashMap<NodeId, &Operation> = operations.iter().map(|op| (op.id, op)).collect();

  let mut pending: Vec<NodeId> = operations.iter().map(|op| op.id).collect();
  let mut fulfilled: HashSet<NodeId> = HashSet::new();
  let mut layers: VecDeque<Option<NodeId>> = std::iter::repeat(None).take(config.layers).collect();
  let mut steps = Vec::new();

  while fulfilled.len() < operations.len() {
    let dispatched = select_dispatch(&pending, &fulfilled, &by_id, &ops_by_id, &layers);
    if let Some(id) = dispatched {
      pending.retain(|&p| p != id);
    }

    if let Some(retired) = layers.pop_back().flatten() {
      fulfilled.insert(retired);
    }
    layers.push_front(dispatched);

    let tacts = layers
      .iter()
      .flatten()
      .map(|id| ops_by_id[id].tacts)
      .fold(0.0_f64, f64::max);

    log::trace!(
      "pipeline step: dispatched={:?}, tacts={}, fulfilled={}/{}",
      dispatched,
      tacts,
      fulfilled.len(),
      operations.len()
    );

    // A step with every layer empty (tacts == 0) only arises on the
    // iteration that retires the last pending op with nothing left to
    // dispatch; the original drops it the same way (§8: "every step has
    // tacts > 0").
    if tacts > 0.0 {
      steps.push(Step {
        tacts,
        layers: layers.iter().copied().collect(),
      });
    }
  }

  let dynamic = steps.iter().map(|s| s.tacts).sum::<f64>();
  let acceleration = sequential / dynamic;
  let efficiency = acceleration / config.layers as f64;

  SimulationData {
    steps,
    sequential,
    dynamic,
    acceleration,
    efficiency,
  }
}

fn select_dispatch(
  pending: &[NodeId],
  fulfilled: &HashSet<NodeId>,
  by_id: &HashMap<NodeId, &Node>,
  ops_by_id: &HashMap<NodeId, &Operation>,
  layers: &VecDeque<Option<NodeId>>,
) -> Option<NodeId> {
  if pending.is_empty() {
    return None;
  }

  // Rule 1: flat-ready.
  if let Some(&id) = pending.iter().find(|&&id| is_flat_ready(by_id[&id])) {
    return Some(id);
  }

  // Rule 2: dependency-ready.
  if let Some(&id) = pending
    .iter()
    .find(|&&id| ops_by_id[&id].dependencies.iter().all(|d| fulfilled.contains(d)))
  {
    return Some(id);
  }

  // Rule 3: congeneric fill — heuristic by design (§9): the source this
  // behavior is carried from prints debug output and gives up after the
  // first mismatch rather than exhaustively searching every layer, so
  // an absent match here is expected, not a bug to work around.
  congeneric_fill(pending, by_id, layers)
}

fn congeneric_fill(
  pending: &[NodeId],
  by_id: &HashMap<NodeId, &Node>,
  layers: &VecDeque<Option<NodeId>>,
) -> Option<NodeId> {
  for &candidate in pending {
    let candidate_node = by_id[&candidate];
    let Some(candidate_op) = congeneric_operator(candidate_node) else {
      continue;
    };
    let candidate_leaves = leaf_lexemes(candidate_node);

    let found = layers.iter().flatten().any(|layer_id| {
      let layer_node = by_id[layer_id];
      congeneric_operator(layer_node) == Some(candidate_op) && !leaf_lexemes(layer_node).is_disjoint(&candidate_leaves)
    });

    if found {
      log::debug!("congeneric-fill dispatching node {candidate} to chain a populated layer");
      return Some(candidate);
    }
  }
  None
}
