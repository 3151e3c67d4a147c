/// serialization of statements for the presentation layer
use chrono::NaiveDate;
use serde::Serialize;
use std::io::Write;

use crate::statement::{Statement, StatementRow, Totals};

/// write the statement rows as delimited text with the standard column set
pub fn write_csv<W: Write>(statement: &Statement, writer: W) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in &statement.rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// render the statement as a CSV string
pub fn to_csv_string(statement: &Statement) -> Result<String, csv::Error> {
    let mut buffer = Vec::new();
    write_csv(statement, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// serializable view of a statement
#[derive(Debug, Serialize)]
pub struct StatementView {
    pub client_name: String,
    pub account_number: String,
    pub maturity_date: NaiveDate,
    pub totals: Totals,
    pub rows: Vec<StatementRow>,
}

impl StatementView {
    pub fn from_statement(statement: &Statement) -> Self {
        Self {
            client_name: statement.client_name.clone(),
            account_number: statement.account_number.clone(),
            maturity_date: statement.maturity_date,
            totals: statement.totals,
            rows: statement.rows.clone(),
        }
    }
}

/// render the statement as pretty-printed json
pub fn to_json_pretty(statement: &Statement) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&StatementView::from_statement(statement))
}
