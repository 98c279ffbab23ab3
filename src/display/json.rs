//! JSON output
//!
//! Machine-readable form of a report: both scope snapshots and the derived
//! profit lines.

use serde::Serialize;

use crate::error::BalanceResult;
use crate::models::{Sats, ScopeSnapshot};
use crate::reports::DailyBalanceReport;

/// Current output schema version
pub const JSON_SCHEMA_VERSION: &str = "1.0.0";

/// Serializable view of a report
#[derive(Debug, Serialize)]
pub struct ReportJson<'a> {
    pub schema_version: &'static str,
    pub app_version: &'static str,
    pub node_name: &'a str,
    pub daily: &'a ScopeSnapshot,
    pub lifetime: &'a ScopeSnapshot,
    pub profits: Profits,
}

/// Derived profit lines
#[derive(Debug, Serialize)]
pub struct Profits {
    pub daily: Sats,
    pub off_chain_operation: Sats,
    pub lifetime: Sats,
}

impl<'a> ReportJson<'a> {
    pub fn new(report: &'a DailyBalanceReport) -> Self {
        Self {
            schema_version: JSON_SCHEMA_VERSION,
            app_version: env!("CARGO_PKG_VERSION"),
            node_name: report.node_name(),
            daily: report.daily(),
            lifetime: report.lifetime(),
            profits: Profits {
                daily: report.daily_profit(),
                off_chain_operation: report.off_chain_operation_profit(),
                lifetime: report.lifetime_profit(),
            },
        }
    }
}

/// Pretty-printed JSON for a report
pub fn report_to_json(report: &DailyBalanceReport) -> BalanceResult<String> {
    Ok(serde_json::to_string_pretty(&ReportJson::new(report))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Scope, ScopeAccumulator};
    use rust_decimal_macros::dec;

    #[test]
    fn test_json_shape() {
        let mut daily = ScopeAccumulator::new(Scope::Daily);
        daily.add(Category::ForwardIncome, Sats::from(dec!(40)));
        daily.add(Category::RebalanceFee, Sats::from(dec!(-15)));
        daily.append_breakdown(Category::ChainFee, "sweep", Sats::from(dec!(-2)), "chain-fee");
        daily.add(Category::ChainFee, Sats::from(dec!(-2)));
        let report = DailyBalanceReport::new(
            "alpha",
            daily.freeze(),
            ScopeAccumulator::new(Scope::Lifetime).freeze(),
        );

        let json = report_to_json(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["node_name"], "alpha");
        assert_eq!(value["daily"]["scope"], "daily");
        assert_eq!(value["daily"]["totals"]["forward_income"], "40");
        assert_eq!(value["daily"]["breakdowns"]["chain_fee"][0]["label"], "sweep");
        assert_eq!(value["profits"]["daily"], "25");
        assert_eq!(value["lifetime"]["entries"], 0);
    }
}
