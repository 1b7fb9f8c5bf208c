use ast::{BinaryOp, Node};
use diagnostic::Position;
use lexer::{Token, TokenKind};

use crate::common::dedup_by_string;

/// Produces every CPT reachable by distributing a `*` over a `+` it
/// touches, in either direction (§4.4). `/` chains are deliberately not
/// given special treatment here: the canonical parallel tree a variant
/// is built from never contains a bare division (§4.3 pass 2 rewrites
/// every `a / b` into the `1/b` reciprocal leaf pattern), so there is no
/// numerator/denominator grouping left to perform by the time this
/// generator runs — a plain recursive pass-through already preserves
/// those nodes faithfully.
pub fn generate_distributive_variants(tree: &Node) -> Vec<Node> {
  let mut variants = expand(tree);
  crate::common::assign_ids_to_all(&mut variants);
  log::trace!("distributivity generator produced {} variant(s)", variants.len());
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
      crate::common::cartesian_product(&per_arg)
        .into_iter()
        .map(|combo| Node::call(name.clone(), token.clone(), combo))
        .collect()
    }
    Node::Binary {
      op: BinaryOp::Mul,
      token,
      left,
      right,
    } => distribute_mul(token, left, right),
    Node::Binary { op, token, left, right } => {
      let lefts = expand(left);
      let rights = expand(right);
      let mut out = Vec::with_capacity(lefts.len() * rights.len());
      for l in &lefts {
        for r in &rights {
          out.push(Node::binary(*op, token.clone(), l.clone(), r.clone()));
        }
      }
      out
    }
  };
  dedup_by_string(raw)
}

/// Every equivalent form of `left * right`: the plain product of each
/// operand's own variants, plus — whenever an operand is itself a sum —
/// the product distributed over that sum's summands, one-sided and (if
/// both sides are sums) fully expanded.
fn distribute_mul(token: &Token, left: &Node, right: &Node) -> Vec<Node> {
  let left_variants = expand(left);
  let right_variants = expand(right);
  let left_summands: Vec<Vec<Node>> = left_variants.iter().map(plus_summands).collect();
  let right_summands: Vec<Vec<Node>> = right_variants.iter().map(plus_summands).collect();

  let mut out = Vec::new();
  for (l, l_terms) in left_variants.iter().zip(left_summands.iter()) {
    for (r, r_terms) in right_variants.iter().zip(right_summands.iter()) {
      // Undistributed form.
      out.push(Node::binary(BinaryOp::Mul, token.clone(), l.clone(), r.clone()));

      // Distribute over the left sum: (a + b) * r -> a*r + b*r.
      if l_terms.len() > 1 {
        let products: Vec<Node> = l_terms
          .iter()
          .map(|t| Node::binary(BinaryOp::Mul, token.clone(), t.clone(), r.clone()))
          .collect();
        out.push(sum_of(token, products));
      }

      // Distribute over the right sum: l * (a + b) -> l*a + l*b.
      if r_terms.len() > 1 {
        let products: Vec<Node> = r_terms
          .iter()
          .map(|t| Node::binary(BinaryOp::Mul, token.clone(), l.clone(), t.clone()))
          .collect();
        out.push(sum_of(token, products));
      }

      // Fully expanded: every left term against every right term.
      if l_terms.len() > 1 && r_terms.len() > 1 {
        let mut products = Vec::with_capacity(l_terms.len() * r_terms.len());
        for lt in l_terms {
          for rt in r_terms {
            products.push(Node::binary(BinaryOp::Mul, token.clone(), lt.clone(), rt.clone()));
          }
        }
        out.push(sum_of(token, products));
      }
    }
  }
  out
}

/// Flattens a maximal chain of `+` nodes into its summands, left to
/// right. A node that isn't itself an Add is its own single summand.
fn plus_summands(node: &Node) -> Vec<Node> {
  match node {
    Node::Binary {
      op: BinaryOp::Add,
      left,
      right,
      ..
    } => {
      let mut terms = plus_summands(left);
      terms.extend(plus_summands(right));
      terms
    }
    _ => vec![node.clone()],
  }
}

/// Rebuilds a left-associative sum out of `terms`, synthesizing `+`
/// tokens anchored at `anchor`'s position since the expansion introduces
/// additions that have no single source operator to reuse.
fn sum_of(anchor: &Token, terms: Vec<Node>) -> Node {
  let mut iter = terms.into_iter();
  let first = iter.next().expect("distribution always yields at least one term");
  iter.fold(first, |acc, term| {
    Node::binary(BinaryOp::Add, plus_token(anchor.start), acc, term)
  })
}

fn plus_token(position: Position) -> Token {
  Token::single(TokenKind::Operator, "+", position)
}
