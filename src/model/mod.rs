pub mod course;
pub mod database;
pub mod layout;
pub mod rating;

pub use course::*;
pub use database::*;
pub use layout::*;
pub use rating::*;
