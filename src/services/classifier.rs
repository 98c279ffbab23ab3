//! Category classifier
//!
//! Maps a row and the export it came from to a category through a fixed,
//! priority-ordered rule table. Classification is a pure function of
//! `(export kind, transaction type, notes)`.

use crate::models::{Category, ExportKind};

/// Notes `bos` attaches to the fee of a circular rebalance
pub const REBALANCE_NOTE: &str = "Circular payment routing fee";

/// Transaction type of off-chain network fees
pub const NETWORK_FEE_TYPE: &str = "fee:network";

/// Row predicate of a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// Matches every row
    Always,
    /// Notes equal the given text exactly
    NotesEqual(&'static str),
    /// Notes are non-empty
    NotesPresent,
    /// Notes are non-empty and the type equals the given tag
    NotesPresentWithType(&'static str),
    /// Notes are empty and the type equals the given tag
    NotesEmptyWithType(&'static str),
}

impl Condition {
    fn matches(&self, transaction_type: &str, notes: &str) -> bool {
        match self {
            Condition::Always => true,
            Condition::NotesEqual(expected) => notes == *expected,
            Condition::NotesPresent => !notes.is_empty(),
            Condition::NotesPresentWithType(tag) => !notes.is_empty() && transaction_type == *tag,
            Condition::NotesEmptyWithType(tag) => notes.is_empty() && transaction_type == *tag,
        }
    }
}

/// One entry of the rule table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub kind: ExportKind,
    pub condition: Condition,
    pub category: Category,
    /// Whether the row's notes become its display label
    pub labelled: bool,
}

const fn rule(kind: ExportKind, condition: Condition, category: Category, labelled: bool) -> Rule {
    Rule {
        kind,
        condition,
        category,
        labelled,
    }
}

/// Classification rules, evaluated top to bottom; the first match wins.
///
/// A rebalance note takes precedence over the annotated network fee rule,
/// and network fees without notes count as rebalance fees. Other payments
/// (ordinary spending) and invoices without notes match nothing.
pub const RULES: &[Rule] = &[
    rule(ExportKind::Payments, Condition::NotesEqual(REBALANCE_NOTE), Category::RebalanceFee, false),
    rule(
        ExportKind::Payments,
        Condition::NotesPresentWithType(NETWORK_FEE_TYPE),
        Category::OffChainOtherFee,
        true,
    ),
    rule(
        ExportKind::Payments,
        Condition::NotesEmptyWithType(NETWORK_FEE_TYPE),
        Category::RebalanceFee,
        false,
    ),
    rule(ExportKind::Forwards, Condition::Always, Category::ForwardIncome, false),
    rule(ExportKind::Invoices, Condition::NotesPresent, Category::OffChainOtherIncome, true),
    rule(ExportKind::ChainFees, Condition::Always, Category::ChainFee, true),
    rule(ExportKind::ChainSends, Condition::Always, Category::ChainSend, true),
    rule(ExportKind::ChainReceives, Condition::Always, Category::ChainReceive, true),
];

/// Result of classifying one row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub category: Category,
    /// Display label for itemized rows
    pub label: Option<String>,
}

/// Classify a row, or `None` if no rule of its export kind matches
pub fn classify(kind: ExportKind, transaction_type: &str, notes: &str) -> Option<Classification> {
    RULES
        .iter()
        .filter(|r| r.kind == kind)
        .find(|r| r.condition.matches(transaction_type, notes))
        .map(|r| Classification {
            category: r.category,
            label: r.labelled.then(|| notes.to_string()),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(kind: ExportKind, transaction_type: &str, notes: &str) -> Option<Category> {
        classify(kind, transaction_type, notes).map(|c| c.category)
    }

    #[test]
    fn test_rebalance_note_wins_over_network_fee() {
        let c = classify(ExportKind::Payments, NETWORK_FEE_TYPE, REBALANCE_NOTE).unwrap();
        assert_eq!(c.category, Category::RebalanceFee);
        assert_eq!(c.label, None);
    }

    #[test]
    fn test_annotated_network_fee_is_other_fee() {
        let c = classify(ExportKind::Payments, "fee:network", "rebalance to peer X").unwrap();
        assert_eq!(c.category, Category::OffChainOtherFee);
        assert_eq!(c.label.as_deref(), Some("rebalance to peer X"));
    }

    #[test]
    fn test_unannotated_network_fee_is_rebalance() {
        assert_eq!(
            category(ExportKind::Payments, "fee:network", ""),
            Some(Category::RebalanceFee)
        );
    }

    #[test]
    fn test_ordinary_payments_are_not_attributed() {
        assert_eq!(category(ExportKind::Payments, "spend", "paid coffee invoice"), None);
        assert_eq!(category(ExportKind::Payments, "spend", ""), None);
    }

    #[test]
    fn test_unconditional_exports() {
        for (kind, expected) in [
            (ExportKind::Forwards, Category::ForwardIncome),
            (ExportKind::ChainFees, Category::ChainFee),
            (ExportKind::ChainSends, Category::ChainSend),
            (ExportKind::ChainReceives, Category::ChainReceive),
        ] {
            assert_eq!(category(kind, "", ""), Some(expected));
            assert_eq!(category(kind, "anything", "some note"), Some(expected));
        }
    }

    #[test]
    fn test_chain_rows_are_labelled_with_notes() {
        let c = classify(ExportKind::ChainSends, "spend", "channel open").unwrap();
        assert_eq!(c.label.as_deref(), Some("channel open"));
        let c = classify(ExportKind::ChainFees, "fee", "").unwrap();
        assert_eq!(c.label.as_deref(), Some(""));
    }

    #[test]
    fn test_invoices_need_notes() {
        assert_eq!(category(ExportKind::Invoices, "income", ""), None);
        let c = classify(ExportKind::Invoices, "income", "donation").unwrap();
        assert_eq!(c.category, Category::OffChainOtherIncome);
        assert_eq!(c.label.as_deref(), Some("donation"));
    }

    #[test]
    fn test_classification_is_deterministic() {
        let inputs = [
            (ExportKind::Payments, "fee:network", REBALANCE_NOTE),
            (ExportKind::Payments, "fee:network", "x"),
            (ExportKind::Invoices, "income", ""),
            (ExportKind::ChainReceives, "income", "y"),
        ];
        for (kind, t, n) in inputs {
            assert_eq!(classify(kind, t, n), classify(kind, t, n));
        }
    }

    #[test]
    fn test_every_export_kind_has_a_rule() {
        for kind in ExportKind::ALL {
            assert!(RULES.iter().any(|r| r.kind == kind), "no rule for {kind}");
        }
    }
}
