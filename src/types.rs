use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::decimal::Money;

/// unique identifier for a deposit lot
pub type LotId = Uuid;

/// kind of cash transaction entered by the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Deposit => write!(f, "Deposit"),
            TransactionKind::Withdrawal => write!(f, "Withdrawal"),
        }
    }
}

/// a single cash transaction against the account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    pub kind: TransactionKind,
    pub amount: Money,
}

impl Transaction {
    pub fn new(date: NaiveDate, kind: TransactionKind, amount: Money) -> Self {
        Self { date, kind, amount }
    }

    /// deposit on the given date
    pub fn deposit(date: NaiveDate, amount: Money) -> Self {
        Self::new(date, TransactionKind::Deposit, amount)
    }

    /// withdrawal on the given date
    pub fn withdrawal(date: NaiveDate, amount: Money) -> Self {
        Self::new(date, TransactionKind::Withdrawal, amount)
    }
}

/// kind of statement entry; the engine appends one synthetic Maturity entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    Deposit,
    Withdrawal,
    Maturity,
}

impl From<TransactionKind> for EntryKind {
    fn from(kind: TransactionKind) -> Self {
        match kind {
            TransactionKind::Deposit => EntryKind::Deposit,
            TransactionKind::Withdrawal => EntryKind::Withdrawal,
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Deposit => write!(f, "Deposit"),
            EntryKind::Withdrawal => write!(f, "Withdrawal"),
            EntryKind::Maturity => write!(f, "Maturity"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_constructors() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let txn = Transaction::deposit(date, Money::from_major(1_000));
        assert_eq!(txn.kind, TransactionKind::Deposit);
        assert_eq!(txn.amount, Money::from_major(1_000));

        let txn = Transaction::withdrawal(date, Money::from_major(250));
        assert_eq!(txn.kind, TransactionKind::Withdrawal);
    }

    #[test]
    fn test_entry_kind_display() {
        assert_eq!(EntryKind::Deposit.to_string(), "Deposit");
        assert_eq!(EntryKind::Withdrawal.to_string(), "Withdrawal");
        assert_eq!(EntryKind::Maturity.to_string(), "Maturity");
        assert_eq!(EntryKind::from(TransactionKind::Withdrawal), EntryKind::Withdrawal);
    }
}
