use serde::{Deserialize, Serialize};

use crate::decimal::Rate;
use crate::errors::{LedgerError, Result};
use crate::rates::TierSchedule;

/// configuration for one statement computation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementConfig {
    pub client_name: String,
    pub account_number: String,
    pub base_rate: Rate,
    pub tiers: TierSchedule,
    pub tenor_days: u32,
}

impl StatementConfig {
    pub fn new(
        client_name: impl Into<String>,
        account_number: impl Into<String>,
        base_rate: Rate,
        tiers: TierSchedule,
        tenor_days: u32,
    ) -> Self {
        Self {
            client_name: client_name.into(),
            account_number: account_number.into(),
            base_rate,
            tiers,
            tenor_days,
        }
    }

    /// reject configurations the engine cannot run against
    pub fn validate(&self) -> Result<()> {
        if self.base_rate.is_negative() {
            return Err(LedgerError::InvalidConfiguration {
                message: format!("base rate must be non-negative, got {}", self.base_rate),
            });
        }

        if self.tenor_days == 0 {
            return Err(LedgerError::InvalidConfiguration {
                message: "tenor must be at least one day".to_string(),
            });
        }

        self.tiers.validate()?;

        // a margin above the base rate would turn the client rate negative
        // and accrued ROI would shrink instead of grow
        let max_margin = self.tiers.max_margin();
        if max_margin > self.base_rate {
            return Err(LedgerError::InvalidConfiguration {
                message: format!(
                    "margin {} exceeds base rate {}",
                    max_margin, self.base_rate
                ),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn config_with(base_rate: Rate, tenor_days: u32) -> StatementConfig {
        StatementConfig::new(
            "Ada Obi",
            "0012345678",
            base_rate,
            TierSchedule::default(),
            tenor_days,
        )
    }

    #[test]
    fn test_valid_config() {
        let config = config_with(Rate::from_percentage(dec!(20.66)), 365);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_negative_base_rate() {
        let config = config_with(Rate::from_percentage(dec!(-1)), 365);
        assert!(matches!(
            config.validate().unwrap_err(),
            LedgerError::InvalidConfiguration { .. }
        ));
    }

    #[test]
    fn test_rejects_zero_tenor() {
        let config = config_with(Rate::from_percentage(dec!(20.66)), 0);
        assert!(matches!(
            config.validate().unwrap_err(),
            LedgerError::InvalidConfiguration { .. }
        ));
    }

    #[test]
    fn test_rejects_margin_above_base_rate() {
        // default schedule's largest margin is 4%
        let config = config_with(Rate::from_percentage(dec!(3.5)), 365);
        assert!(matches!(
            config.validate().unwrap_err(),
            LedgerError::InvalidConfiguration { .. }
        ));
    }
}
