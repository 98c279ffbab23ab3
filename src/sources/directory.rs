//! Saved exports on disk
//!
//! Reads `<category>.csv` for daily exports and `<category>-lifetime.csv`
//! for lifetime exports, e.g. `chain-fees.csv` or `forwards-lifetime.csv`.

use std::path::{Path, PathBuf};

use crate::error::{BalanceError, BalanceResult};
use crate::models::Scope;

use super::{ExportRequest, ExportSource};

/// Export source backed by a directory of CSV files
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory the exports are read from
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File holding a given export
    pub fn file_for(&self, request: &ExportRequest) -> PathBuf {
        let name = match request.scope {
            Scope::Daily => format!("{}.csv", request.kind.slug()),
            Scope::Lifetime => format!("{}-lifetime.csv", request.kind.slug()),
        };
        self.dir.join(name)
    }
}

impl ExportSource for DirectorySource {
    fn fetch(&self, request: &ExportRequest) -> BalanceResult<String> {
        let path = self.file_for(request);
        std::fs::read_to_string(&path).map_err(|e| {
            BalanceError::ExternalCall(format!("failed to read {}: {}", path.display(), e))
        })
    }
}
