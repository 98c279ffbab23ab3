//! Service layer for node-balance
//!
//! Parsing, classification and aggregation of accounting exports.

pub mod aggregation;
pub mod classifier;
pub mod import;

pub use aggregation::{aggregate, collect_exports, feed_records, run_plan, Aggregation, ExportBlob};
pub use classifier::{classify, Classification, RULES};
pub use import::{parse_export, ColumnMapping};
