//! Financial categories
//!
//! Every attributed export row lands in exactly one of these buckets.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of buckets a transaction row is classified into
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Fees paid for circular rebalances (negative)
    RebalanceFee,
    /// Fees earned routing forwards
    ForwardIncome,
    /// Annotated network fees that are not rebalances
    OffChainOtherFee,
    /// Annotated incoming invoices
    OffChainOtherIncome,
    /// On-chain transaction fees
    ChainFee,
    /// On-chain sends
    ChainSend,
    /// On-chain receives
    ChainReceive,
}

impl Category {
    /// All categories, in report order
    pub const ALL: [Category; 7] = [
        Category::RebalanceFee,
        Category::ForwardIncome,
        Category::OffChainOtherFee,
        Category::OffChainOtherIncome,
        Category::ChainFee,
        Category::ChainSend,
        Category::ChainReceive,
    ];

    /// Whether rows of this category are listed individually in the report
    pub fn is_itemized(&self) -> bool {
        !matches!(self, Category::RebalanceFee | Category::ForwardIncome)
    }

    /// Fixed transaction type shown on breakdown lines, if the category has one
    ///
    /// On-chain rows are tagged by category; off-chain rows keep their own type.
    pub fn breakdown_type(&self) -> Option<&'static str> {
        match self {
            Category::ChainFee => Some("chain-fee"),
            Category::ChainSend => Some("chain-send"),
            Category::ChainReceive => Some("chain-receive"),
            _ => None,
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::RebalanceFee => "Rebalance Fees",
            Category::ForwardIncome => "Forward Income",
            Category::OffChainOtherFee => "Other Off-Chain Fees",
            Category::OffChainOtherIncome => "Other Off-Chain Income",
            Category::ChainFee => "On-Chain Fees",
            Category::ChainSend => "On-Chain Sends",
            Category::ChainReceive => "On-Chain Receives",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_itemized_categories() {
        let itemized: Vec<_> = Category::ALL
            .into_iter()
            .filter(|c| c.is_itemized())
            .collect();
        assert_eq!(
            itemized,
            vec![
                Category::OffChainOtherFee,
                Category::OffChainOtherIncome,
                Category::ChainFee,
                Category::ChainSend,
                Category::ChainReceive,
            ]
        );
    }

    #[test]
    fn test_breakdown_type() {
        assert_eq!(Category::ChainSend.breakdown_type(), Some("chain-send"));
        assert_eq!(Category::OffChainOtherFee.breakdown_type(), None);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Category::OffChainOtherIncome).unwrap();
        assert_eq!(json, "\"off_chain_other_income\"");
    }
}
