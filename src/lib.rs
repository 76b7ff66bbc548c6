//! # hrdash - HR dashboard client
//!
//! A command-line client for an HR dashboard API, plus the client-side core
//! that any front end of the dashboard needs.
//!
//! ## Features
//!
//! - **Work Accounting**: Regular shift, overtime and lunch deduction per day
//! - **Monthly Summaries**: Per-worker totals folded from daily records
//! - **Live Notifications**: Buffered, de-duplicated push events per category
//! - **Feeds**: History and live items merged without duplicates
//! - **HR API**: Daily records, hour updates, assignments, announcements, leaves
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hrdash::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
