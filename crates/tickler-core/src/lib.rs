//! # Tickler Core Library
//!
//! A small task list that understands when things are due.
//!
//! ## Core Modules
//!
//! - [`extract`]: Natural-language date/time extraction from task text
//! - [`models`]: Task data structures and the add-task flow
//! - [`db`]: Database connection and migration management
//! - [`repository`]: Data access layer with Repository pattern
//! - [`reminder`]: Tracking which due tasks have already been announced
//! - [`error`]: Error types
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use tickler_core::extract::extract;
//!
//! let now = NaiveDate::from_ymd_opt(2024, 1, 15)
//!     .unwrap()
//!     .and_hms_opt(9, 0, 0)
//!     .unwrap();
//! let result = extract("Lunch at noon tomorrow", now);
//!
//! assert_eq!(result.date_string(), "2024-01-16");
//! assert_eq!(result.time_string(), "12:00");
//! assert_eq!(result.clean_text, "Lunch");
//! ```

pub mod db;
pub mod error;
pub mod extract;
pub mod models;
pub mod reminder;
pub mod repository;
