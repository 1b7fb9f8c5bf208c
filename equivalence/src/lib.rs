mod commutativity;
mod common;
mod distributivity;

pub use commutativity::generate_commutative_variants;
pub use distributivity::generate_distributive_variants;
