// src/data_analysis/mod.rs

pub mod columnar;

// src/data_analysis/mod.rs
