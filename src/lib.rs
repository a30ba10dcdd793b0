// src/lib.rs

pub mod bank;
pub mod config;
pub mod distribution;
pub mod error;
pub mod import;
pub mod models;
pub mod pattern;
pub mod pipeline;
pub mod seed;
pub mod store;
pub mod utils;
pub mod verify;

// Re-export the pipeline entry point for convenience.
pub use pipeline::run_import;
