// src/lib.rs

#[macro_use]
pub mod macros;

pub mod aggregate;
pub mod cli;
pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod fallback;
pub mod model;
pub mod progress;
pub mod render;
pub mod sources;
pub mod store;
pub mod validate;
