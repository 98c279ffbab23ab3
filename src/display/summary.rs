//! Terminal summary table
//!
//! Per-category totals of both scopes side by side, plus the profit lines.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::Category;
use crate::reports::DailyBalanceReport;

#[derive(Tabled)]
struct TotalsRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Daily")]
    daily: String,
    #[tabled(rename = "Lifetime")]
    lifetime: String,
}

/// Format the totals of a report as a table
pub fn format_totals_table(report: &DailyBalanceReport) -> String {
    let mut rows: Vec<TotalsRow> = Category::ALL
        .into_iter()
        .map(|category| TotalsRow {
            category: category.to_string(),
            daily: report.daily().total(category).to_string(),
            lifetime: report.lifetime().total(category).to_string(),
        })
        .collect();

    rows.push(TotalsRow {
        category: "Profit".to_string(),
        daily: report.daily_profit().to_string(),
        lifetime: report.lifetime_profit().to_string(),
    });
    rows.push(TotalsRow {
        category: "Off-Chain Operation Profit".to_string(),
        daily: report.off_chain_operation_profit().to_string(),
        lifetime: String::new(),
    });

    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Sats, Scope, ScopeAccumulator};
    use rust_decimal_macros::dec;

    #[test]
    fn test_table_lists_categories_and_profits() {
        let mut daily = ScopeAccumulator::new(Scope::Daily);
        daily.add(Category::ForwardIncome, Sats::from(dec!(1234.567)));
        let mut lifetime = ScopeAccumulator::new(Scope::Lifetime);
        lifetime.add(Category::RebalanceFee, Sats::from(dec!(-10)));

        let report = DailyBalanceReport::new("n", daily.freeze(), lifetime.freeze());
        let table = format_totals_table(&report);

        for category in Category::ALL {
            assert!(table.contains(category.display_name()));
        }
        assert!(table.contains("1234.57"));
        assert!(table.contains("-10.00"));
        assert!(table.contains("Off-Chain Operation Profit"));
    }
}
