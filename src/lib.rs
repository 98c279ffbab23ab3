//! node-balance - daily balance reports for Lightning routing nodes
//!
//! Pulls the `bos accounting` CSV exports of a node, classifies every row into
//! a financial category, totals them over a daily and a lifetime scope and
//! renders a report for delivery to a Telegram chat.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Records, categories, amounts and scope totals
//! - `sources`: Where exports come from (bos, saved files)
//! - `services`: Parsing, classification and aggregation
//! - `reports`: The daily balance report
//! - `delivery`: Message chunking and delivery sinks
//! - `display`: Table and JSON renderings
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use node_balance::services::{aggregate, collect_exports, run_plan};
//! use node_balance::sources::DirectorySource;
//! use node_balance::reports::DailyBalanceReport;
//!
//! let blobs = collect_exports(&DirectorySource::new("exports"), &run_plan())?;
//! let report = DailyBalanceReport::from_aggregation("My Node", aggregate(&blobs))?;
//! println!("{}", report.render());
//! ```

pub mod cli;
pub mod config;
pub mod delivery;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod sources;

pub use error::{BalanceError, BalanceResult};
