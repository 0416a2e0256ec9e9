//! # Agenda
//!
//! A single-user appointment calendar stored in a local SQLite file. Appointments are
//! organized under a two-level category/subcategory taxonomy seeded on first run.
//!
//! ## Layers
//!
//! - [`db`]: the connection and typed CRUD per table
//! - [`services`]: category seeding, date-range queries and the overlap check
//! - [`libs`]: records, configuration, messages and terminal views
//! - [`commands`]: the `agenda` command line
//!
//! ## Usage
//!
//! ```rust
//! use agenda::db::db::Db;
//! use agenda::libs::{appointment::NewAppointment, config::Config, context::AppContext};
//! use chrono::NaiveDate;
//!
//! let ctx = AppContext::with_db(Config::default(), Db::open_in_memory()?)?;
//! let perso = ctx.categories().find_category("Perso")?.expect("seeded");
//! let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
//! let id = ctx.appointments().create(&NewAppointment::new(
//!     "Rendez-vous médecin",
//!     day.and_hms_opt(10, 30, 0).unwrap(),
//!     day.and_hms_opt(11, 30, 0).unwrap(),
//!     perso.id,
//! ))?;
//! assert_eq!(ctx.appointments().list_by_date(day)?[0].id, id);
//! ctx.close()?;
//! # Ok::<(), agenda::db::StoreError>(())
//! ```

pub mod commands;
pub mod db;
pub mod libs;
pub mod services;
