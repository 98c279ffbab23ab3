//! `bos accounting` runner
//!
//! Invokes the Balance of Satoshis CLI once per export request and returns
//! its CSV output.

use std::path::PathBuf;
use std::process::Command;

use crate::error::{BalanceError, BalanceResult};
use crate::models::Scope;

use super::{ExportRequest, ExportSource};

/// Runs `bos accounting <category> ... --disable-fiat --csv`
#[derive(Debug, Clone)]
pub struct BosCli {
    /// Path to the bos executable
    bos_path: PathBuf,
    /// Day of month for daily exports
    day: u32,
    /// Month for daily exports
    month: u32,
}

impl BosCli {
    pub fn new(bos_path: impl Into<PathBuf>, day: u32, month: u32) -> Self {
        Self {
            bos_path: bos_path.into(),
            day,
            month,
        }
    }

    /// Arguments passed to bos for a request
    pub fn args(&self, request: &ExportRequest) -> Vec<String> {
        let mut args = vec!["accounting".to_string(), request.kind.slug().to_string()];
        if request.scope == Scope::Daily {
            args.extend([
                "--date".to_string(),
                self.day.to_string(),
                "--month".to_string(),
                self.month.to_string(),
            ]);
        }
        args.extend(["--disable-fiat".to_string(), "--csv".to_string()]);
        args
    }
}

impl ExportSource for BosCli {
    fn fetch(&self, request: &ExportRequest) -> BalanceResult<String> {
        let args = self.args(request);
        log::debug!("Running {} {}", self.bos_path.display(), args.join(" "));

        let output = Command::new(&self.bos_path)
            .args(&args)
            .output()
            .map_err(|e| {
                BalanceError::ExternalCall(format!(
                    "failed to run {}: {}",
                    self.bos_path.display(),
                    e
                ))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(BalanceError::ExternalCall(format!(
                "bos accounting {} failed (exit {}): {}",
                request.kind,
                output.status.code().unwrap_or(-1),
                stderr.trim(),
            )));
        }

        String::from_utf8(output.stdout).map_err(|_| {
            BalanceError::ExternalCall(format!(
                "bos accounting {} produced non UTF-8 output",
                request.kind
            ))
        })
    }
}
