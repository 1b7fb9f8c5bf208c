use ast::Node;
use diagnostic::DiagnosticEngine;
use equivalence::{generate_commutative_variants, generate_distributive_variants};
use lexer::lex;
use normalize::normalize;
use parser::parse;
use proptest::prelude::*;

fn arithmetic_expression() -> impl Strategy<Value = String> {
  let atom = prop_oneof!["[a-z]", "[1-9]"];

  (atom.clone(), proptest::collection::vec(("[+\\-*/]", atom), 0..5)).prop_map(
    |(first, rest)| {
      let mut out = first;
      for (op, atom) in rest {
        out.push(' ');
        out.push_str(&op);
        out.push(' ');
        out.push_str(&atom);
      }
      out
    },
  )
}

fn leaves(node: &Node) -> Vec<String> {
  match node {
    Node::Leaf { token: Some(t), .. } => vec![t.lexeme.clone()],
    Node::Leaf { token: None, .. } => vec![],
    other => other.children().iter().flat_map(|c| leaves(c)).collect::<Vec<_>>(),
  }
}

fn sorted(mut v: Vec<String>) -> Vec<String> {
  v.sort();
  v
}

proptest! {
  // §8: every commutativity variant is a rearrangement, never a change
  // of which leaves appear or how many times.
  #[test]
  fn commutative_variants_preserve_the_leaf_multiset(source in arithmetic_expression()) {
    let mut engine = DiagnosticEngine::new();
    let tokens = lex(&source, &mut engine);
    prop_assume!(!engine.has_errors());

    if let Ok(tree) = parse(tokens) {
      let cpt = normalize(&tree);
      let expected = sorted(leaves(&cpt));
      for variant in generate_commutative_variants(&cpt) {
        prop_assert_eq!(sorted(leaves(&variant)), expected.clone());
      }
    }
  }

  // Same property for distributivity: expansion redistributes factors,
  // it never invents or drops a leaf.
  #[test]
  fn distributive_variants_preserve_the_leaf_multiset(source in arithmetic_expression()) {
    let mut engine = DiagnosticEngine::new();
    let tokens = lex(&source, &mut engine);
    prop_assume!(!engine.has_errors());

    if let Ok(tree) = parse(tokens) {
      let cpt = normalize(&tree);
      let expected = sorted(leaves(&cpt));
      for variant in generate_distributive_variants(&cpt) {
        prop_assert_eq!(sorted(leaves(&variant)), expected.clone());
      }
    }
  }

  // Every variant the generators emit is always its own first variant:
  // the original CPT's string form appears in both generators' output.
  #[test]
  fn each_generator_always_includes_the_original_form(source in arithmetic_expression()) {
    let mut engine = DiagnosticEngine::new();
    let tokens = lex(&source, &mut engine);
    prop_assume!(!engine.has_errors());

    if let Ok(tree) = parse(tokens) {
      let cpt = normalize(&tree);
      let original = cpt.to_string();
      let commutative: Vec<String> = generate_commutative_variants(&cpt).iter().map(|v| v.to_string()).collect();
      let distributive: Vec<String> = generate_distributive_variants(&cpt).iter().map(|v| v.to_string()).collect();
      prop_assert!(commutative.contains(&original));
      prop_assert!(distributive.contains(&original));
    }
  }
}
