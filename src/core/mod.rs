//! Core module for the family-graph domain

pub mod loader;
pub mod models;
pub mod normalize;
pub mod path;
pub mod relationship;
pub mod report;

/// Returns the current version of the `Kintrace` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
