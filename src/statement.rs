use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::events::Event;
use crate::types::EntryKind;

/// one line of the client statement
///
/// Fields are rounded to two decimals when the row is built; the engine's
/// running state stays unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementRow {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Transaction Type")]
    pub kind: EntryKind,
    #[serde(rename = "Amount")]
    pub amount: Money,
    #[serde(rename = "Balance After Transaction")]
    pub balance: Money,
    #[serde(rename = "Client Rate (%)")]
    pub client_rate: Rate,
    #[serde(rename = "Cumulative ROI")]
    pub roi: Money,
    #[serde(rename = "Total Value")]
    pub total_value: Money,
}

impl StatementRow {
    /// snapshot the post-application aggregates as a presentation row
    pub fn snapshot(
        date: NaiveDate,
        kind: EntryKind,
        amount: Money,
        balance: Money,
        client_rate: Rate,
        roi: Money,
    ) -> Self {
        Self {
            date,
            kind,
            amount: amount.round_dp(2),
            balance: balance.round_dp(2),
            client_rate: client_rate.round_dp(2),
            roi: roi.round_dp(2),
            total_value: (balance + roi).round_dp(2),
        }
    }
}

/// totals taken from the final statement row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub principal: Money,
    pub roi: Money,
    pub total_value: Money,
}

impl Totals {
    pub fn from_row(row: &StatementRow) -> Self {
        Self {
            principal: row.balance,
            roi: row.roi,
            total_value: row.total_value,
        }
    }
}

/// one point of the charting series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub principal: Money,
    pub roi: Money,
    pub total_value: Money,
}

/// the full statement produced by one engine run
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub client_name: String,
    pub account_number: String,
    pub maturity_date: NaiveDate,
    pub rows: Vec<StatementRow>,
    pub totals: Totals,
    pub events: Vec<Event>,
}

impl Statement {
    /// export file name, e.g. "Ada Obi_0012345678_statement.csv"
    pub fn file_name(&self, extension: &str) -> String {
        format!(
            "{}_{}_statement.{}",
            self.client_name, self.account_number, extension
        )
    }

    /// date-indexed series for charting collaborators
    pub fn series(&self) -> Vec<SeriesPoint> {
        self.rows
            .iter()
            .map(|row| SeriesPoint {
                date: row.date,
                principal: row.balance,
                roi: row.roi,
                total_value: row.total_value,
            })
            .collect()
    }

    /// the synthetic maturity row, appended last by the engine
    pub fn maturity_row(&self) -> Option<&StatementRow> {
        self.rows.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_row() -> StatementRow {
        StatementRow::snapshot(
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            EntryKind::Deposit,
            Money::from_major(100_000),
            Money::from_str_exact("100000.123456").unwrap(),
            Rate::from_percentage(dec!(13.664)),
            Money::from_str_exact("0.987654").unwrap(),
        )
    }

    #[test]
    fn test_snapshot_rounds_to_two_decimals() {
        let row = sample_row();
        assert_eq!(row.balance, Money::from_str_exact("100000.12").unwrap());
        assert_eq!(row.client_rate, Rate::from_percentage(dec!(13.66)));
        assert_eq!(row.roi, Money::from_str_exact("0.99").unwrap());
        // total value comes from the unrounded aggregates
        assert_eq!(row.total_value, Money::from_str_exact("100001.11").unwrap());
    }

    #[test]
    fn test_totals_mirror_final_row() {
        let row = sample_row();
        let totals = Totals::from_row(&row);
        assert_eq!(totals.principal, row.balance);
        assert_eq!(totals.roi, row.roi);
        assert_eq!(totals.total_value, row.total_value);
    }

    #[test]
    fn test_file_name() {
        let statement = Statement {
            client_name: "Ada Obi".to_string(),
            account_number: "0012345678".to_string(),
            maturity_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            rows: vec![sample_row()],
            totals: Totals::from_row(&sample_row()),
            events: Vec::new(),
        };
        assert_eq!(
            statement.file_name("csv"),
            "Ada Obi_0012345678_statement.csv"
        );
        assert_eq!(
            statement.file_name("xlsx"),
            "Ada Obi_0012345678_statement.xlsx"
        );
    }

    #[test]
    fn test_series_tracks_rows() {
        let row = sample_row();
        let statement = Statement {
            client_name: "Ada Obi".to_string(),
            account_number: "0012345678".to_string(),
            maturity_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            rows: vec![row],
            totals: Totals::from_row(&row),
            events: Vec::new(),
        };
        let series = statement.series();
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].date, row.date);
        assert_eq!(series[0].principal, row.balance);
        assert_eq!(series[0].total_value, row.total_value);
    }
}
