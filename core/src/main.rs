use std::fs;

use anyhow::{Context, Result};

/// Thin manual-inspection driver (§1's Non-goals keep console reporting,
/// JSON export, graph visualization and an interactive REPL out of scope
/// — real reporting is an external collaborator's job). Mirrors the
/// teacher's `Compiler`-in-`main` argument-count dispatch: one file
/// argument runs the pipeline over it and prints the four result
/// contracts of §6 in plain debug form; anything else is a usage error.
fn main() -> Result<()> {
  env_logger::init();

  let args: Vec<String> = std::env::args().collect();
  match args.as_slice() {
    [_] => {
      log::error!("no source file given");
      eprintln!("usage: pipelex <file>");
      std::process::exit(64);
    },
    [_, path] => run_file(path),
    _ => {
      eprintln!("usage: pipelex <file>");
      std::process::exit(64);
    },
  }
}

fn run_file(path: &str) -> Result<()> {
  let source = fs::read_to_string(path).with_context(|| format!("could not read file: {path}"))?;
  let result = pipelex_core::analyze(&source);

  println!("tokens: {:#?}", result.tokens);

  if !result.diagnostics.is_empty() {
    println!("lexical diagnostics: {:#?}", result.diagnostics);
    std::process::exit(65);
  }

  if let Some(error) = &result.syntax_error {
    println!("syntax error: {error}");
    std::process::exit(65);
  }

  println!("ast: {}", result.ast);
  println!("canonical parallel tree: {}", result.cpt);
  println!("simulation: {:#?}", result.simulation);
  println!(
    "{} variant(s), {} simulation(s)",
    result.variants.len(),
    result.variant_simulations.len()
  );
  for (variant, data) in result.variants.iter().zip(result.variant_simulations.iter()) {
    println!("  {variant}  acceleration={:.3} efficiency={:.3}", data.acceleration, data.efficiency);
  }

  Ok(())
}
