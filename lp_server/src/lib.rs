//! HTTP adapter for the simulated live poker tables.

pub mod api;
pub mod config;
