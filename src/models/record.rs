//! Export kinds, scopes and the parsed record model
//!
//! A record is one row of a `bos accounting` CSV export. The export kind is
//! the semantic source of the row; the classifier needs it alongside the row
//! itself to pick a category.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::sats::Sats;

/// The accounting exports a run pulls from the node
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExportKind {
    /// Outgoing payments, including circular rebalances
    Payments,
    /// Routed forwards
    Forwards,
    /// Settled incoming invoices
    Invoices,
    /// On-chain transaction fees
    ChainFees,
    /// On-chain sends
    ChainSends,
    /// On-chain receives
    ChainReceives,
}

impl ExportKind {
    /// All export kinds, in report order
    pub const ALL: [ExportKind; 6] = [
        ExportKind::Payments,
        ExportKind::Forwards,
        ExportKind::Invoices,
        ExportKind::ChainFees,
        ExportKind::ChainSends,
        ExportKind::ChainReceives,
    ];

    /// The category name `bos accounting` expects for this export
    pub fn slug(&self) -> &'static str {
        match self {
            ExportKind::Payments => "payments",
            ExportKind::Forwards => "forwards",
            ExportKind::Invoices => "invoices",
            ExportKind::ChainFees => "chain-fees",
            ExportKind::ChainSends => "chain-sends",
            ExportKind::ChainReceives => "chain-receives",
        }
    }

    /// Whether only the first attributed row of this export is counted
    ///
    /// Invoices of a day beyond the first annotated one are ignored, matching
    /// the reports operators already compare against.
    pub fn attributes_first_row_only(&self) -> bool {
        matches!(self, ExportKind::Invoices)
    }
}

impl fmt::Display for ExportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

/// Temporal window a set of exports is accumulated over
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Exports filtered to a single day
    Daily,
    /// Unfiltered exports covering the node's whole history
    Lifetime,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Daily => write!(f, "daily"),
            Scope::Lifetime => write!(f, "lifetime"),
        }
    }
}

/// One parsed export row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Date column, verbatim
    pub date: String,
    /// Transaction type tag (e.g. "fee:network")
    pub transaction_type: String,
    /// Signed amount in satoshis
    pub amount: Sats,
    /// Free-text notes, possibly empty
    pub notes: String,
}

impl Record {
    /// Create a new record
    pub fn new(
        date: impl Into<String>,
        transaction_type: impl Into<String>,
        amount: Sats,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            transaction_type: transaction_type.into(),
            amount,
            notes: notes.into(),
        }
    }

    /// Whether the notes column carries anything
    pub fn has_notes(&self) -> bool {
        !self.notes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_slugs() {
        let slugs: Vec<_> = ExportKind::ALL.iter().map(|k| k.slug()).collect();
        assert_eq!(
            slugs,
            vec![
                "payments",
                "forwards",
                "invoices",
                "chain-fees",
                "chain-sends",
                "chain-receives"
            ]
        );
        assert_eq!(ExportKind::ChainFees.to_string(), "chain-fees");
    }

    #[test]
    fn test_first_row_only_applies_to_invoices() {
        for kind in ExportKind::ALL {
            assert_eq!(
                kind.attributes_first_row_only(),
                kind == ExportKind::Invoices
            );
        }
    }

    #[test]
    fn test_has_notes() {
        let record = Record::new("2025-01-01", "fee:network", Sats::zero(), "");
        assert!(!record.has_notes());
        let record = Record::new("2025-01-01", "fee:network", Sats::zero(), "x");
        assert!(record.has_notes());
    }
}
