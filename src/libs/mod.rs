//! Core library modules of hrdash.
//!
//! ## Features
//!
//! - **Domain**: Work intervals, daily records and monthly summaries
//! - **Accounting**: Duration arithmetic with the lunch rule
//! - **Notifications**: Transport abstraction, buffered subscriptions, feeds
//! - **Infrastructure**: Configuration, data storage, messaging
//! - **User Interface**: Table rendering and formatting
//!
//! ## Usage
//!
//! ```rust
//! use chrono::NaiveTime;
//! use hrdash::libs::accounting::elapsed;
//!
//! let start = NaiveTime::from_hms_opt(9, 0, 0);
//! let end = NaiveTime::from_hms_opt(11, 30, 0);
//! assert_eq!(elapsed(start, end).to_string(), "02:30");
//! ```

pub mod accounting;
pub mod config;
pub mod data_storage;
pub mod feed;
pub mod formatter;
pub mod messages;
pub mod notification;
pub mod transport;
pub mod view;
pub mod workday;
