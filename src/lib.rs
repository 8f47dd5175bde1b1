pub mod cli;
pub mod error;
pub mod flights;
pub mod staff;
pub mod table;

pub use error::{RegistryError, Result};
