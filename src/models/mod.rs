// src/models/mod.rs

pub mod branch;
pub mod pool;
pub mod question;
