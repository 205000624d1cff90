pub mod field;
pub mod visit;

pub use field::*;
pub use visit::*;
