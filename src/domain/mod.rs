pub mod book;
pub mod commands;
pub mod errors;
pub mod member;
pub mod validation;
pub mod value_objects;

pub use book::{Book, BookStatistics};
pub use errors::*;
pub use member::{Member, MemberStatistics};
pub use value_objects::*;
