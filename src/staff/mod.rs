//! Worker registry: posts and the workers assigned to them.

pub mod models;
pub mod repository;

pub use models::{Post, Worker};
pub use repository::StaffRepository;
