//! Recursive-descent construction of an [`ast::Node`] tree from a
//! finished token stream (§4.2). See [`parser::Parser`] for the grammar.

pub mod parser;

pub use parser::{parse, Parser};
