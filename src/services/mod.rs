//! Application services on top of the database layer.
//!
//! Services borrow the open [`crate::db::db::Db`] (and the [`crate::libs::config::Config`]
//! where defaults are needed) and propagate storage errors to their caller unchanged.

pub mod appointments;
pub mod categories;

pub use appointments::AppointmentService;
pub use categories::{CategoryService, SeedReport};
