use chrono::{Duration, NaiveDate};
use log::debug;
use uuid::Uuid;

use crate::config::StatementConfig;
use crate::decimal::Money;
use crate::errors::{LedgerError, Result};
use crate::events::{Event, EventStore};
use crate::interest::{compound_interest, elapsed_days};
use crate::statement::{Statement, StatementRow, Totals};
use crate::types::{EntryKind, LotId, Transaction, TransactionKind};

/// one deposit tracked with its own accrual clock
///
/// Interest is capitalized into `principal` at every accrual step, so the
/// principal of a surviving lot includes everything it has earned so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepositLot {
    pub id: LotId,
    pub principal: Money,
    pub opened: NaiveDate,
    pub last_accrual: NaiveDate,
    pub accrued_roi: Money,
}

impl DepositLot {
    fn open(date: NaiveDate, amount: Money) -> Self {
        Self {
            id: Uuid::new_v4(),
            principal: amount,
            opened: date,
            last_accrual: date,
            accrued_roi: Money::ZERO,
        }
    }

    fn is_consumed(&self) -> bool {
        self.principal.is_zero()
    }
}

/// deposit-ledger accrual engine
///
/// A pure function of the transaction list and the configuration: every run
/// owns its lot set and event store, and repeated runs over the same input
/// produce identical statements.
#[derive(Debug)]
pub struct LedgerEngine {
    config: StatementConfig,
}

impl LedgerEngine {
    /// create an engine, rejecting invalid configuration up front
    pub fn new(config: StatementConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &StatementConfig {
        &self.config
    }

    /// compute the statement for the given transactions
    pub fn run(&self, transactions: &[Transaction]) -> Result<Statement> {
        if transactions.is_empty() {
            return Err(LedgerError::EmptyInput);
        }

        let mut sorted = transactions.to_vec();
        // stable sort: same-date entries keep their insertion order
        sorted.sort_by_key(|txn| txn.date);
        self.validate_transactions(&sorted)?;

        let opened_on = sorted[0].date;
        let maturity_date = opened_on + Duration::days(i64::from(self.config.tenor_days));
        debug!(
            "statement run for {} ({}): {} transactions, maturity {}",
            self.config.client_name,
            self.config.account_number,
            sorted.len(),
            maturity_date
        );

        let mut lots: Vec<DepositLot> = Vec::new();
        let mut events = EventStore::new();
        let mut rows: Vec<StatementRow> = Vec::with_capacity(sorted.len() + 1);
        // runs across lot lifetimes: interest earned by a lot stays counted
        // after the lot is consumed
        let mut cumulative_roi = Money::ZERO;

        for (index, txn) in sorted.iter().enumerate() {
            // accrue before applying, so the transaction's own amount earns
            // nothing for the zero-length interval ending on its date
            cumulative_roi += self.accrue_lots(&mut lots, txn.date, &mut events)?;

            match txn.kind {
                TransactionKind::Deposit => {
                    if !txn.amount.is_zero() {
                        let lot = DepositLot::open(txn.date, txn.amount);
                        events.emit(Event::LotOpened {
                            lot_id: lot.id,
                            date: txn.date,
                            amount: txn.amount,
                        });
                        lots.push(lot);
                    }
                }
                TransactionKind::Withdrawal => {
                    self.apply_withdrawal(&mut lots, index, txn, &mut events)?;
                }
            }

            rows.push(self.snapshot(txn.date, txn.kind.into(), txn.amount, &lots, cumulative_roi)?);
        }

        // remaining whole days up to maturity
        cumulative_roi += self.accrue_lots(&mut lots, maturity_date, &mut events)?;

        events.emit(Event::MaturityReached {
            date: maturity_date,
            principal: aggregate_principal(&lots),
            roi: cumulative_roi,
        });
        let maturity_row = self.snapshot(
            maturity_date,
            EntryKind::Maturity,
            Money::ZERO,
            &lots,
            cumulative_roi,
        )?;
        let totals = Totals::from_row(&maturity_row);
        rows.push(maturity_row);
        debug!(
            "statement complete: principal {}, roi {}, total value {}",
            totals.principal, totals.roi, totals.total_value
        );

        Ok(Statement {
            client_name: self.config.client_name.clone(),
            account_number: self.config.account_number.clone(),
            maturity_date,
            rows,
            totals,
            events: events.take_events(),
        })
    }

    fn validate_transactions(&self, sorted: &[Transaction]) -> Result<()> {
        for (index, txn) in sorted.iter().enumerate() {
            if txn.amount.is_negative() {
                return Err(LedgerError::InvalidTransaction {
                    index,
                    date: txn.date,
                    message: format!("negative amount {}", txn.amount),
                });
            }
        }

        if sorted[0].kind == TransactionKind::Withdrawal {
            return Err(LedgerError::InvalidTransaction {
                index: 0,
                date: sorted[0].date,
                message: "withdrawal precedes any deposit".to_string(),
            });
        }

        Ok(())
    }

    /// accrue every lot up to `date`, capitalizing the interest earned;
    /// returns the total interest across all lots
    fn accrue_lots(
        &self,
        lots: &mut [DepositLot],
        date: NaiveDate,
        events: &mut EventStore,
    ) -> Result<Money> {
        let mut total = Money::ZERO;
        for lot in lots.iter_mut() {
            let days = elapsed_days(lot.last_accrual, date);
            if days == 0 {
                continue;
            }

            // the lot's own principal picks its band
            let rate = self
                .config
                .tiers
                .client_rate(lot.principal, self.config.base_rate)?;
            let interest = compound_interest(lot.principal, rate, days);

            lot.principal += interest;
            lot.accrued_roi += interest;
            lot.last_accrual = date;
            total += interest;

            events.emit(Event::InterestAccrued {
                lot_id: lot.id,
                date,
                days,
                rate,
                amount: interest,
                new_principal: lot.principal,
            });
        }

        Ok(total)
    }

    /// consume a withdrawal from the lots, oldest first
    fn apply_withdrawal(
        &self,
        lots: &mut Vec<DepositLot>,
        index: usize,
        txn: &Transaction,
        events: &mut EventStore,
    ) -> Result<()> {
        let available = aggregate_principal(lots);
        if txn.amount > available {
            return Err(LedgerError::InsufficientFunds {
                index,
                date: txn.date,
                available,
                requested: txn.amount,
            });
        }

        // stable sort: lots opened the same day are consumed in opening order
        lots.sort_by_key(|lot| lot.opened);

        let mut remaining = txn.amount;
        let mut lots_touched = 0u32;
        for lot in lots.iter_mut() {
            if remaining.is_zero() {
                break;
            }

            let taken = lot.principal.min(remaining);
            lot.principal -= taken;
            remaining -= taken;
            lots_touched += 1;

            if lot.is_consumed() {
                events.emit(Event::LotConsumed {
                    lot_id: lot.id,
                    date: txn.date,
                });
            }
        }

        lots.retain(|lot| !lot.is_consumed());
        debug!(
            "withdrawal of {} on {} consumed {} lot(s)",
            txn.amount, txn.date, lots_touched
        );
        events.emit(Event::WithdrawalApplied {
            date: txn.date,
            amount: txn.amount,
            lots_touched,
        });

        Ok(())
    }

    fn snapshot(
        &self,
        date: NaiveDate,
        kind: EntryKind,
        amount: Money,
        lots: &[DepositLot],
        roi: Money,
    ) -> Result<StatementRow> {
        let balance = aggregate_principal(lots);
        // the display rate reflects the whole account, not a single lot
        let rate = self.config.tiers.client_rate(balance, self.config.base_rate)?;
        Ok(StatementRow::snapshot(date, kind, amount, balance, rate, roi))
    }
}

fn aggregate_principal(lots: &[DepositLot]) -> Money {
    lots.iter()
        .fold(Money::ZERO, |sum, lot| sum + lot.principal)
}
