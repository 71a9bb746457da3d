//! # hoteldesk
//!
//! A menu-driven console client for a PostgreSQL hotel-management schema:
//! customers, rooms, bookings, maintenance companies, repairs, repair
//! requests, and staff assignments.
//!
//! The process opens one blocking connection at startup, loops on a fixed
//! 17-entry menu, prompts for the fields of the chosen operation, executes a
//! parameterized SQL statement, and renders query results as tab-separated
//! tables framed by a dashed banner.
//!
//! ## Modules
//!
//! - [`cli`] - command-line argument definitions
//! - [`console`] - prompt/parse/validate loop over injectable streams
//! - [`db`] - the `Database` seam, table rendering, and the PostgreSQL backend
//! - [`field`] - pure input validators and calendar-date rules
//! - [`menu`] - the main interaction loop and choice dispatch
//! - [`ops`] - the seventeen operation handlers
//! - [`session`] - the context threaded through every handler
//! - [`ui`] - greeting, menu text, and banner framing

pub mod cli;
pub mod console;
pub mod db;
pub mod field;
pub mod menu;
pub mod ops;
pub mod session;
pub mod ui;
