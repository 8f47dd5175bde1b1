//! Command-line front ends for the two registries.

pub mod flights;
pub mod workers;
