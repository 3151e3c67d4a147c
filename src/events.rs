use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::types::LotId;

/// all events emitted while computing a statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    LotOpened {
        lot_id: LotId,
        date: NaiveDate,
        amount: Money,
    },
    InterestAccrued {
        lot_id: LotId,
        date: NaiveDate,
        days: u32,
        rate: Rate,
        amount: Money,
        new_principal: Money,
    },
    WithdrawalApplied {
        date: NaiveDate,
        amount: Money,
        lots_touched: u32,
    },
    LotConsumed {
        lot_id: LotId,
        date: NaiveDate,
    },
    MaturityReached {
        date: NaiveDate,
        principal: Money,
        roi: Money,
    },
}

/// event store for collecting events during a run
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn emit(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }
}
