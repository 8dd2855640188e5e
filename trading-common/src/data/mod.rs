// data/mod.rs
pub mod types;
