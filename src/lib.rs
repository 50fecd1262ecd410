//! Shared library for `Kintrace`
//! Contains the graph core used by both the CLI and library consumers

pub mod config;
pub mod core;
pub mod logger;

pub use crate::core::models;
