//! Per-scope running totals
//!
//! A `ScopeAccumulator` is created fresh for each run and scope, receives
//! additions while exports are aggregated, then is frozen into a read-only
//! `ScopeSnapshot` for the report builder. Accumulators never share state.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use super::category::Category;
use super::record::Scope;
use super::sats::Sats;

/// One individually listed transaction beneath a category subtotal
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakdownLine {
    /// Notes of the row
    pub label: String,
    /// Amount of the row
    pub amount: Sats,
    /// Transaction type shown after the amount
    pub transaction_type: String,
}

impl fmt::Display for BreakdownLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Type:{} : {} SATS Transaction Type: {}",
            self.label, self.amount, self.transaction_type
        )
    }
}

/// Running totals for one scope
#[derive(Debug, Clone)]
pub struct ScopeAccumulator {
    scope: Scope,
    totals: BTreeMap<Category, Sats>,
    breakdowns: BTreeMap<Category, Vec<BreakdownLine>>,
    entries: usize,
}

impl ScopeAccumulator {
    /// Create an empty accumulator for a scope
    pub fn new(scope: Scope) -> Self {
        Self {
            scope,
            totals: BTreeMap::new(),
            breakdowns: BTreeMap::new(),
            entries: 0,
        }
    }

    /// The scope this accumulator covers
    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// Add an amount to a category's running total
    pub fn add(&mut self, category: Category, amount: Sats) {
        *self.totals.entry(category).or_default() += amount;
        self.entries += 1;
    }

    /// Append one itemized line to a category's breakdown
    ///
    /// Identical labels are kept; every qualifying row gets its own line.
    pub fn append_breakdown(
        &mut self,
        category: Category,
        label: impl Into<String>,
        amount: Sats,
        transaction_type: impl Into<String>,
    ) {
        self.breakdowns
            .entry(category)
            .or_default()
            .push(BreakdownLine {
                label: label.into(),
                amount,
                transaction_type: transaction_type.into(),
            });
    }

    /// Running total for one category
    pub fn total(&self, category: Category) -> Sats {
        self.totals.get(&category).copied().unwrap_or_default()
    }

    /// Snapshot of every category's total; categories never fed are zero
    pub fn totals(&self) -> BTreeMap<Category, Sats> {
        Category::ALL
            .into_iter()
            .map(|c| (c, self.total(c)))
            .collect()
    }

    /// Sum of every category total
    pub fn grand_total(&self) -> Sats {
        self.totals.values().sum()
    }

    /// Itemized lines recorded for a category, in arrival order
    pub fn breakdown(&self, category: Category) -> &[BreakdownLine] {
        self.breakdowns
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of amounts added so far
    pub fn entries(&self) -> usize {
        self.entries
    }

    /// End the mutation phase
    pub fn freeze(self) -> ScopeSnapshot {
        ScopeSnapshot {
            scope: self.scope,
            totals: self.totals(),
            breakdowns: self.breakdowns,
            entries: self.entries,
        }
    }
}

/// Frozen totals of one scope
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScopeSnapshot {
    scope: Scope,
    totals: BTreeMap<Category, Sats>,
    breakdowns: BTreeMap<Category, Vec<BreakdownLine>>,
    entries: usize,
}

impl ScopeSnapshot {
    /// The scope these totals cover
    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// Total for one category
    pub fn total(&self, category: Category) -> Sats {
        self.totals.get(&category).copied().unwrap_or_default()
    }

    /// Every category's total
    pub fn totals(&self) -> &BTreeMap<Category, Sats> {
        &self.totals
    }

    /// Sum of every category total
    pub fn grand_total(&self) -> Sats {
        self.totals.values().sum()
    }

    /// Itemized lines for a category
    pub fn breakdown(&self, category: Category) -> &[BreakdownLine] {
        self.breakdowns
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of amounts that were accumulated
    pub fn entries(&self) -> usize {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sats(v: rust_decimal::Decimal) -> Sats {
        Sats::from(v)
    }

    #[test]
    fn test_add_accumulates_per_category() {
        let mut acc = ScopeAccumulator::new(Scope::Daily);
        acc.add(Category::ForwardIncome, sats(dec!(10)));
        acc.add(Category::ForwardIncome, sats(dec!(2.5)));
        acc.add(Category::RebalanceFee, sats(dec!(-4)));

        assert_eq!(acc.total(Category::ForwardIncome), sats(dec!(12.5)));
        assert_eq!(acc.total(Category::RebalanceFee), sats(dec!(-4)));
        assert_eq!(acc.total(Category::ChainFee), Sats::zero());
        assert_eq!(acc.grand_total(), sats(dec!(8.5)));
        assert_eq!(acc.entries(), 3);
    }

    #[test]
    fn test_totals_lists_every_category() {
        let acc = ScopeAccumulator::new(Scope::Lifetime);
        let totals = acc.totals();
        assert_eq!(totals.len(), Category::ALL.len());
        assert!(totals.values().all(Sats::is_zero));
    }

    #[test]
    fn test_breakdown_keeps_duplicates_in_order() {
        let mut acc = ScopeAccumulator::new(Scope::Daily);
        acc.append_breakdown(Category::OffChainOtherFee, "peer X", sats(dec!(-1)), "fee:network");
        acc.append_breakdown(Category::OffChainOtherFee, "peer X", sats(dec!(-1)), "fee:network");
        acc.append_breakdown(Category::OffChainOtherFee, "peer Y", sats(dec!(-2)), "fee:network");

        let labels: Vec<_> = acc
            .breakdown(Category::OffChainOtherFee)
            .iter()
            .map(|l| l.label.as_str())
            .collect();
        assert_eq!(labels, vec!["peer X", "peer X", "peer Y"]);
        assert!(acc.breakdown(Category::ChainFee).is_empty());
    }

    #[test]
    fn test_breakdown_line_display() {
        let line = BreakdownLine {
            label: "rebalance to peer X".into(),
            amount: sats(dec!(-30)),
            transaction_type: "fee:network".into(),
        };
        assert_eq!(
            line.to_string(),
            "Type:rebalance to peer X : -30.00 SATS Transaction Type: fee:network"
        );
    }

    #[test]
    fn test_freeze_preserves_state() {
        let mut acc = ScopeAccumulator::new(Scope::Daily);
        acc.add(Category::ChainReceive, sats(dec!(100000)));
        acc.append_breakdown(Category::ChainReceive, "deposit", sats(dec!(100000)), "chain-receive");

        let snapshot = acc.freeze();
        assert_eq!(snapshot.scope(), Scope::Daily);
        assert_eq!(snapshot.total(Category::ChainReceive), sats(dec!(100000)));
        assert_eq!(snapshot.totals().len(), Category::ALL.len());
        assert_eq!(snapshot.breakdown(Category::ChainReceive).len(), 1);
        assert_eq!(snapshot.entries(), 1);
    }
}
