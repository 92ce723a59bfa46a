pub mod matrix;
pub mod tree;

pub use matrix::*;
pub use tree::*;
