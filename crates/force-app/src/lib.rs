//! Application layer - config and console input session

pub mod config;
pub mod input;
