use chrono::NaiveDate;
use thiserror::Error;

use crate::decimal::Money;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("no transactions supplied")]
    EmptyInput,

    #[error("invalid transaction at index {index} ({date}): {message}")]
    InvalidTransaction {
        index: usize,
        date: NaiveDate,
        message: String,
    },

    #[error("insufficient funds at index {index} ({date}): available {available}, requested {requested}")]
    InsufficientFunds {
        index: usize,
        date: NaiveDate,
        available: Money,
        requested: Money,
    },
}

pub type Result<T> = std::result::Result<T, LedgerError>;
