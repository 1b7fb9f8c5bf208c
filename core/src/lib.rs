//! Wires the four core subsystems together end to end (§2, §6):
//! `text -> Lexer -> Parser -> Normalizer -> {CommutativityGen,
//! DistributivityGen} -> PipelineSimulator`. This is the only crate that
//! knows about every stage; each stage crate only depends on the ones
//! upstream of it.
//!
//! Console/file reporting, JSON serialization, graph visualization and
//! an interactive REPL are explicitly out of scope (§1) — this crate
//! exposes [`analyze`] as the stable library boundary those external
//! collaborators would consume, and its `main.rs` binary is a thin
//! manual-inspection driver, not a report renderer.

use ast::Node;
use diagnostic::{Diagnostic, DiagnosticEngine, SyntacticError};
use simulate::{Config, SimulationData};

/// Every stable result contract of §6, gathered from one run of the
/// pipeline over a single source string.
#[derive(Debug, Clone)]
pub struct AnalysisResult {
  /// The finished token stream (§6: ordered `{kind, lexeme, start, end}`
  /// records). Always present, even when lexing produced diagnostics.
  pub tokens: Vec<lexer::Token>,

  /// The aggregate lexical diagnostic family (§7). A non-empty list
  /// means parsing and everything downstream did not run.
  pub diagnostics: Vec<Diagnostic>,

  /// The single fatal syntactic diagnostic (§7), when parsing failed.
  /// `Some` means normalization and everything downstream did not run.
  pub syntax_error: Option<SyntacticError>,

  /// The parser's raw tree, before normalization. The empty-tree
  /// sentinel (§4.2) when the source held no tokens, or the default
  /// empty node when an earlier stage refused to run.
  pub ast: Node,

  /// The canonical parallel tree (§3, §4.3).
  pub cpt: Node,

  /// The simulation run directly over [`Self::cpt`] (§7: the empty
  /// sentinel yields a zero-valued entry here, not an absent one).
  pub simulation: SimulationData,

  /// Every CPT the equivalence generators produce (§4.4), deduplicated
  /// by stringified form (§4.4, §6) and in generation order
  /// (commutativity first, then distributivity) so truncation by a
  /// caller stays stable (§5). Empty when [`Self::cpt`] is the empty
  /// sentinel (§7: "no variants are produced").
  pub variants: Vec<Node>,

  /// [`SimulationData`] for each entry of [`Self::variants`], aligned
  /// 1:1 and in the same order.
  pub variant_simulations: Vec<SimulationData>,
}

impl AnalysisResult {
  /// True once a pipeline stage has refused to run (§7): either the
  /// lexical family is non-empty, or parsing hit a fatal error.
  pub fn has_errors(&self) -> bool {
    !self.diagnostics.is_empty() || self.syntax_error.is_some()
  }

  fn halted(tokens: Vec<lexer::Token>, diagnostics: Vec<Diagnostic>, syntax_error: Option<SyntacticError>) -> Self {
    Self {
      tokens,
      diagnostics,
      syntax_error,
      ast: Node::empty(),
      cpt: Node::empty(),
      simulation: simulate::simulate(&Node::empty(), &Config::default()),
      variants: Vec::new(),
      variant_simulations: Vec::new(),
    }
  }
}

/// Runs the full pipeline over `source` with the default tact-cost
/// calibration table. See [`analyze_with_config`] to supply your own.
pub fn analyze(source: &str) -> AnalysisResult {
  analyze_with_config(source, &Config::default())
}

/// Runs the full pipeline over `source` (§2): lex, parse, normalize,
/// generate equivalence variants, simulate every resulting tree.
///
/// Never panics on malformed input: lexical errors are aggregated and
/// halt the pipeline after lexing (§7); the first syntactic error halts
/// it after parsing. Both cases return an [`AnalysisResult`] with the
/// downstream fields left at their empty/zero defaults.
pub fn analyze_with_config(source: &str, config: &Config) -> AnalysisResult {
  let mut engine = DiagnosticEngine::new();
  let tokens = lexer::lex(source, &mut engine);

  if engine.has_errors() {
    log::debug!("lexing produced {} diagnostic(s), halting before parse", engine.len());
    return AnalysisResult::halted(tokens, engine.into_diagnostics(), None);
  }
  let diagnostics = engine.into_diagnostics();

  let ast = match parser::parse(tokens.clone()) {
    Ok(tree) => tree,
    Err(error) => {
      log::debug!("parsing failed fatally: {error}");
      return AnalysisResult::halted(tokens, diagnostics, Some(error));
    },
  };

  let cpt = normalize::normalize(&ast);
  let simulation = simulate::simulate(&cpt, config);

  let variants = if cpt.is_empty() {
    Vec::new()
  } else {
    let mut all = equivalence::generate_commutative_variants(&cpt);
    all.extend(equivalence::generate_distributive_variants(&cpt));
    dedup_variants(all)
  };
  let variant_simulations = variants.iter().map(|variant| simulate::simulate(variant, config)).collect();

  log::trace!(
    "analysis complete: {} token(s), {} variant(s)",
    tokens.len(),
    variants.len()
  );

  AnalysisResult {
    tokens,
    diagnostics,
    syntax_error: None,
    ast,
    cpt,
    simulation,
    variants,
    variant_simulations,
  }
}

/// Deduplicates by stringified tree form (§4.4), keeping the first
/// occurrence of each distinct string and therefore the caller-visible
/// generation order (commutativity's output before distributivity's).
fn dedup_variants(nodes: Vec<Node>) -> Vec<Node> {
  let mut seen = std::collections::HashSet::new();
  nodes.into_iter().filter(|n| seen.insert(n.to_string())).collect()
}
