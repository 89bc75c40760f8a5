pub mod catalog;
pub mod errors;
pub mod library;
pub mod membership;

pub use errors::{LibraryError, Result};
