//! Data models for the curriculum board

pub mod course;
pub mod id;
pub mod state;
pub mod term;

pub use course::Course;
pub use id::new_id;
pub use state::{RootState, Theme};
pub use term::Term;
