pub mod catalog;
pub mod circulation;
pub mod commands;
pub mod errors;
pub mod events;
pub mod filter;
pub mod value_objects;

pub use catalog::*;
pub use errors::*;
pub use events::*;
pub use filter::BookFilter;
pub use value_objects::*;
