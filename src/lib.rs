//! Single-cabin elevator simulation scheduled with the LOOK algorithm.

pub mod cli;
pub mod config;
pub mod elevator;
pub mod shared;
pub mod simulation;
