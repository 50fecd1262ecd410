//! CLI command handlers

pub mod config;
pub mod path;
pub mod relate;
