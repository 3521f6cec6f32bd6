//! Domain model for the analytics engine.

pub mod session;

pub use session::{Discipline, SessionRecord};
