use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{LedgerError, Result};

/// one band of the margin schedule
///
/// A band covers all amounts up to and including `upper_bound`; the final
/// band has no bound and covers everything above the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarginTier {
    pub upper_bound: Option<Money>,
    pub margin: Rate,
}

impl MarginTier {
    /// band bounded above by `upper_bound` (inclusive)
    pub fn up_to(upper_bound: Money, margin: Rate) -> Self {
        Self {
            upper_bound: Some(upper_bound),
            margin,
        }
    }

    /// final unbounded band
    pub fn unbounded(margin: Rate) -> Self {
        Self {
            upper_bound: None,
            margin,
        }
    }
}

/// ordered margin schedule partitioning the non-negative amounts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierSchedule {
    tiers: Vec<MarginTier>,
}

impl TierSchedule {
    /// build a schedule, rejecting one that does not partition the
    /// non-negative amounts
    pub fn new(tiers: Vec<MarginTier>) -> Result<Self> {
        let schedule = Self { tiers };
        schedule.validate()?;
        Ok(schedule)
    }

    /// the three-band schedule the product shipped with
    pub fn standard(margin_low: Rate, margin_mid: Rate, margin_high: Rate) -> Self {
        Self {
            tiers: vec![
                MarginTier::up_to(Money::from_major(50_000), margin_low),
                MarginTier::up_to(Money::from_major(499_000), margin_mid),
                MarginTier::unbounded(margin_high),
            ],
        }
    }

    pub fn tiers(&self) -> &[MarginTier] {
        &self.tiers
    }

    /// check the schedule is exhaustive and non-overlapping
    pub fn validate(&self) -> Result<()> {
        if self.tiers.is_empty() {
            return Err(LedgerError::InvalidConfiguration {
                message: "margin schedule has no tiers".to_string(),
            });
        }

        for (i, tier) in self.tiers.iter().enumerate() {
            if tier.margin.is_negative() {
                return Err(LedgerError::InvalidConfiguration {
                    message: format!("tier {} has negative margin {}", i, tier.margin),
                });
            }

            let last = i == self.tiers.len() - 1;
            match tier.upper_bound {
                None if !last => {
                    return Err(LedgerError::InvalidConfiguration {
                        message: format!("tier {} is unbounded but not last", i),
                    });
                }
                Some(bound) if last => {
                    return Err(LedgerError::InvalidConfiguration {
                        message: format!(
                            "final tier must be unbounded, found bound {}",
                            bound
                        ),
                    });
                }
                Some(bound) => {
                    if bound.is_negative() {
                        return Err(LedgerError::InvalidConfiguration {
                            message: format!("tier {} has negative bound {}", i, bound),
                        });
                    }
                    if i > 0 {
                        // bounds must strictly increase so bands cannot overlap
                        let previous = self.tiers[i - 1].upper_bound.unwrap_or(Money::ZERO);
                        if bound <= previous {
                            return Err(LedgerError::InvalidConfiguration {
                                message: format!(
                                    "tier bounds must increase: {} follows {}",
                                    bound, previous
                                ),
                            });
                        }
                    }
                }
                None => {}
            }
        }

        Ok(())
    }

    /// largest margin in the schedule
    pub fn max_margin(&self) -> Rate {
        self.tiers
            .iter()
            .map(|t| t.margin)
            .max()
            .unwrap_or(Rate::ZERO)
    }

    /// margin for the band containing `amount`
    ///
    /// An amount equal to a band's upper bound belongs to that band
    /// (inclusive "<=" convention).
    pub fn margin_for(&self, amount: Money) -> Result<Rate> {
        if amount.is_negative() {
            return Err(LedgerError::InvalidConfiguration {
                message: format!("cannot resolve rate for negative amount {}", amount),
            });
        }

        for tier in &self.tiers {
            match tier.upper_bound {
                Some(bound) if amount <= bound => return Ok(tier.margin),
                Some(_) => continue,
                None => return Ok(tier.margin),
            }
        }

        // validate() guarantees an unbounded final tier
        Err(LedgerError::InvalidConfiguration {
            message: "margin schedule does not cover all amounts".to_string(),
        })
    }

    /// client rate at `amount`: base rate less the band's margin
    pub fn client_rate(&self, amount: Money, base_rate: Rate) -> Result<Rate> {
        Ok(base_rate - self.margin_for(amount)?)
    }
}

impl Default for TierSchedule {
    /// margins the original product seeded its form with
    fn default() -> Self {
        Self::standard(
            Rate::from_percentage(dec!(2)),
            Rate::from_percentage(dec!(3)),
            Rate::from_percentage(dec!(4)),
        )
    }
}
