// src/plot_functions/mod.rs

pub mod plot_telemetry_log;

// src/plot_functions/mod.rs
