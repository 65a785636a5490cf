pub mod contraction;
pub mod cycle;
pub mod selection;
pub mod tree;
