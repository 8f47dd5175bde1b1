//! Flight registry: airports and the flights between them.

pub mod models;
pub mod repository;

pub use models::{Airport, Flight};
pub use repository::FlightRepository;

/// Textual timestamp format used on the CLI and in storage.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";
