//! Core library modules for the agenda application.
//!
//! - **Records**: [`category`], [`subcategory`], [`appointment`]
//! - **Infrastructure**: [`config`], [`data_storage`], [`context`], [`timestamp`]
//! - **Output**: [`messages`], [`view`], [`formatter`]
//!
//! ```rust,no_run
//! use agenda::libs::{config::Config, context::AppContext};
//!
//! let ctx = AppContext::open(Config::read()?)?;
//! let today = chrono::Local::now().date_naive();
//! for appointment in ctx.appointments().list_by_date(today)? {
//!     println!("{}", appointment);
//! }
//! ctx.close()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod appointment;
pub mod category;
pub mod config;
pub mod context;
pub mod data_storage;
pub mod formatter;
pub mod messages;
pub mod subcategory;
pub mod timestamp;
pub mod view;
