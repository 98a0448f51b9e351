pub mod filter;
pub mod summary_model;
