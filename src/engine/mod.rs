// src/engine/mod.rs

mod engine;
pub mod extract;
pub mod types;

pub use engine::PageAdapter;
pub use types::*;
