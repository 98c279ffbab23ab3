//! Export sources
//!
//! Where the raw CSV exports of a run come from: the `bos` command line
//! tool on the node, or a directory of previously saved exports.

pub mod bos;
pub mod directory;

use std::fmt;

use crate::error::BalanceResult;
use crate::models::{ExportKind, Scope};

pub use bos::BosCli;
pub use directory::DirectorySource;

/// One export to obtain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExportRequest {
    pub kind: ExportKind,
    /// Daily requests are filtered to the run's date, lifetime ones are not
    pub scope: Scope,
}

impl ExportRequest {
    pub fn new(kind: ExportKind, scope: Scope) -> Self {
        Self { kind, scope }
    }
}

impl fmt::Display for ExportRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.scope, self.kind)
    }
}

/// Something that can produce the CSV text of an export
///
/// Calls are blocking. Any failure is an `ExternalCall` error.
pub trait ExportSource {
    fn fetch(&self, request: &ExportRequest) -> BalanceResult<String>;
}
