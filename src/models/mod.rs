//! Core data models for node-balance
//!
//! This module contains the data structures of the accounting domain:
//! parsed export records, categories, amounts and per-scope totals.

pub mod category;
pub mod record;
pub mod sats;
pub mod scope;

pub use category::Category;
pub use record::{ExportKind, Record, Scope};
pub use sats::{Sats, SatsParseError};
pub use scope::{BreakdownLine, ScopeAccumulator, ScopeSnapshot};
