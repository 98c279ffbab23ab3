//! Daily Balance Report
//!
//! Combines the frozen Daily and Lifetime totals of a run into the message
//! sent to the operator. Markup is Telegram HTML: section headers are bold
//! and sit on their own line.

use std::fmt;

use crate::error::BalanceResult;
use crate::models::{BreakdownLine, Category, Sats, Scope, ScopeSnapshot};
use crate::services::Aggregation;

/// Report over one day and the node's whole history
#[derive(Debug, Clone)]
pub struct DailyBalanceReport {
    node_name: String,
    daily: ScopeSnapshot,
    lifetime: ScopeSnapshot,
}

impl DailyBalanceReport {
    /// Build a report from frozen totals
    pub fn new(node_name: impl Into<String>, daily: ScopeSnapshot, lifetime: ScopeSnapshot) -> Self {
        debug_assert_eq!(daily.scope(), Scope::Daily);
        debug_assert_eq!(lifetime.scope(), Scope::Lifetime);
        Self {
            node_name: node_name.into(),
            daily,
            lifetime,
        }
    }

    /// Build a report from a finished aggregation
    ///
    /// Refuses aggregations with failed exports so a report with missing
    /// sections is never produced. The first failure is returned; all of them
    /// were logged during aggregation.
    pub fn from_aggregation(
        node_name: impl Into<String>,
        aggregation: Aggregation,
    ) -> BalanceResult<Self> {
        let Aggregation {
            daily,
            lifetime,
            failures,
        } = aggregation;

        if let Some(first) = failures.into_iter().next() {
            return Err(first);
        }

        Ok(Self::new(node_name, daily, lifetime))
    }

    pub fn node_name(&self) -> &str {
        &self.node_name
    }

    pub fn daily(&self) -> &ScopeSnapshot {
        &self.daily
    }

    pub fn lifetime(&self) -> &ScopeSnapshot {
        &self.lifetime
    }

    /// Forward income plus rebalance fees (stored negative) for the day
    pub fn daily_profit(&self) -> Sats {
        self.daily.total(Category::ForwardIncome) + self.daily.total(Category::RebalanceFee)
    }

    /// Daily profit including the other off-chain income and fees
    pub fn off_chain_operation_profit(&self) -> Sats {
        self.daily.total(Category::ForwardIncome)
            + self.daily.total(Category::OffChainOtherIncome)
            + self.daily.total(Category::OffChainOtherFee)
            + self.daily.total(Category::RebalanceFee)
    }

    /// Forward income plus rebalance fees over the node's history
    pub fn lifetime_profit(&self) -> Sats {
        self.lifetime.total(Category::ForwardIncome) + self.lifetime.total(Category::RebalanceFee)
    }

    /// Render the message text
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn write_breakdown(&self, f: &mut fmt::Formatter<'_>, category: Category) -> fmt::Result {
        for line in self.daily.breakdown(category) {
            writeln!(f, "  {}", escaped_line(line))?;
        }
        Ok(())
    }
}

impl fmt::Display for DailyBalanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let daily = &self.daily;

        writeln!(f, "<b>⚡️ {} - Daily Balance</b>", escape_html(&self.node_name))?;
        writeln!(f, "Forwards Income: {} sats", daily.total(Category::ForwardIncome))?;
        writeln!(f, "Rebalance Costs: {} sats", daily.total(Category::RebalanceFee))?;
        writeln!(f, "Daily Profit: {} sats", self.daily_profit())?;

        writeln!(f, "\n<b>Others Off-Chain Spend:</b>")?;
        self.write_breakdown(f, Category::OffChainOtherFee)?;
        writeln!(f, "Total: {} sats", daily.total(Category::OffChainOtherFee))?;

        writeln!(f, "\n<b>Others Off-Chain Incomes:</b>")?;
        self.write_breakdown(f, Category::OffChainOtherIncome)?;
        writeln!(f, "Total: {} sats", daily.total(Category::OffChainOtherIncome))?;
        writeln!(
            f,
            "Off-chain Operation Profit: {} sats",
            self.off_chain_operation_profit()
        )?;

        writeln!(f, "\n<b>On-chain Balance</b>")?;
        writeln!(f, "On-chain Fees:")?;
        self.write_breakdown(f, Category::ChainFee)?;
        writeln!(f, "On-chain Sends:")?;
        self.write_breakdown(f, Category::ChainSend)?;
        writeln!(f, "On-chain Receives:")?;
        self.write_breakdown(f, Category::ChainReceive)?;

        writeln!(
            f,
            "\nLifetime forwards: {} sats",
            self.lifetime.total(Category::ForwardIncome)
        )?;
        writeln!(
            f,
            "Lifetime costs: {} sats",
            self.lifetime.total(Category::RebalanceFee)
        )?;
        write!(f, "Lifetime Profit: {} sats", self.lifetime_profit())
    }
}

fn escaped_line(line: &BreakdownLine) -> BreakdownLine {
    BreakdownLine {
        label: escape_html(&line.label),
        amount: line.amount,
        transaction_type: escape_html(&line.transaction_type),
    }
}

/// Escape text for Telegram's HTML parse mode
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScopeAccumulator;
    use rust_decimal_macros::dec;

    fn sats(v: rust_decimal::Decimal) -> Sats {
        Sats::from(v)
    }

    fn sample_report() -> DailyBalanceReport {
        let mut daily = ScopeAccumulator::new(Scope::Daily);
        daily.add(Category::ForwardIncome, sats(dec!(1500.5)));
        daily.add(Category::RebalanceFee, sats(dec!(-500)));
        daily.add(Category::OffChainOtherFee, sats(dec!(-30)));
        daily.append_breakdown(Category::OffChainOtherFee, "rebalance to peer X", sats(dec!(-30)), "fee:network");
        daily.add(Category::OffChainOtherIncome, sats(dec!(2100)));
        daily.append_breakdown(Category::OffChainOtherIncome, "donation <3", sats(dec!(2100)), "income");
        daily.add(Category::ChainFee, sats(dec!(-210)));
        daily.append_breakdown(Category::ChainFee, "sweep", sats(dec!(-210)), "chain-fee");

        let mut lifetime = ScopeAccumulator::new(Scope::Lifetime);
        lifetime.add(Category::ForwardIncome, sats(dec!(100000)));
        lifetime.add(Category::RebalanceFee, sats(dec!(-40000.333)));

        DailyBalanceReport::new("My Node", daily.freeze(), lifetime.freeze())
    }

    #[test]
    fn test_profit_lines() {
        let report = sample_report();
        assert_eq!(report.daily_profit(), sats(dec!(1000.5)));
        assert_eq!(report.off_chain_operation_profit(), sats(dec!(3070.5)));
        assert_eq!(report.lifetime_profit(), sats(dec!(59999.667)));
    }

    #[test]
    fn test_render_full_document() {
        let expected = "<b>⚡️ My Node - Daily Balance</b>\n\
Forwards Income: 1500.50 sats\n\
Rebalance Costs: -500.00 sats\n\
Daily Profit: 1000.50 sats\n\
\n\
<b>Others Off-Chain Spend:</b>\n\
\x20 Type:rebalance to peer X : -30.00 SATS Transaction Type: fee:network\n\
Total: -30.00 sats\n\
\n\
<b>Others Off-Chain Incomes:</b>\n\
\x20 Type:donation &lt;3 : 2100.00 SATS Transaction Type: income\n\
Total: 2100.00 sats\n\
Off-chain Operation Profit: 3070.50 sats\n\
\n\
<b>On-chain Balance</b>\n\
On-chain Fees:\n\
\x20 Type:sweep : -210.00 SATS Transaction Type: chain-fee\n\
On-chain Sends:\n\
On-chain Receives:\n\
\n\
Lifetime forwards: 100000.00 sats\n\
Lifetime costs: -40000.33 sats\n\
Lifetime Profit: 59999.67 sats";

        assert_eq!(sample_report().render(), expected);
    }

    #[test]
    fn test_render_is_reproducible() {
        assert_eq!(sample_report().render(), sample_report().render());
    }

    #[test]
    fn test_empty_report() {
        let report = DailyBalanceReport::new(
            "n",
            ScopeAccumulator::new(Scope::Daily).freeze(),
            ScopeAccumulator::new(Scope::Lifetime).freeze(),
        );
        let text = report.render();
        assert!(text.contains("Daily Profit: 0.00 sats"));
        assert!(text.ends_with("Lifetime Profit: 0.00 sats"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a & b <c>"), "a &amp; b &lt;c&gt;");
        assert_eq!(escape_html("plain"), "plain");
    }
}
