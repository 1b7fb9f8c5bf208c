use serde::{Deserialize, Serialize};

/// The tact-cost calibration table (§4.5). Values are kept configurable
/// so a collaborator can tune them, but the relative ordering the
/// defaults encode — `+`/`-` cheapest, then `*`, then `/`, then `^`,
/// function calls costliest — is load-bearing for every scenario in §8.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
  pub add_sub_tacts: f64,
  pub mul_tacts: f64,
  pub div_tacts: f64,
  pub pow_tacts: f64,
  pub call_tacts: f64,
  /// Number of parallel functional layers `L` the conveyor is modeled
  /// with.
  pub layers: usize,
}

impl Default for Config {
  fn default() -> Self {
    Config {
      add_sub_tacts: 1.0,
      mul_tacts: 2.0,
      div_tacts: 5.0,
      pow_tacts: 7.0,
      call_tacts: 10.0,
      layers: 4,
    }
  }
}

impl Config {
  pub fn tacts_for(&self, node: &ast::Node) -> f64 {
    match node {
      ast::Node::Binary { op, .. } => match op {
        ast::BinaryOp::Add | ast::BinaryOp::Sub => self.add_sub_tacts,
        ast::BinaryOp::Mul => self.mul_tacts,
        ast::BinaryOp::Div => self.div_tacts,
        ast::BinaryOp::Pow => self.pow_tacts,
      },
      ast::Node::Function { .. } => self.call_tacts,
      ast::Node::Unary { .. } | ast::Node::Leaf { .. } => 0.0,
    }
  }
}
