pub mod breakdown;
pub mod constraints;
pub mod filter;
pub mod solver;
pub mod word_loader;
