use serde::{Deserialize, Serialize};

use crate::chart::ChartPeriod;
use crate::error::{DashboardError, Result};
use crate::format::Currency;

/// Runtime configuration of the dashboard engine.
///
/// The frontend builds this from its stored settings; every field has a
/// default so a partially filled document still deserializes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// ISO-4217 code prefixed to every monetary value
    pub currency_code: String,
    /// Page size of the unfiltered "recent transactions" load
    pub recent_page_size: u32,
    /// Size of the batch fetched for client-side filtering
    pub filter_batch_size: u32,
    /// Maximum number of rows shown after filtering
    pub filter_display_limit: usize,
    /// Period selected before the user touches the period buttons
    pub default_period: ChartPeriod,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            currency_code: "RWF".to_string(),
            recent_page_size: 5,
            filter_batch_size: 100,
            filter_display_limit: 10,
            default_period: ChartPeriod::Daily,
        }
    }
}

impl DashboardConfig {
    /// Resolves the configured currency, rejecting codes unknown to ISO-4217.
    pub fn currency(&self) -> Result<Currency> {
        Currency::from_code(&self.currency_code)
    }

    /// Checks that sizes are usable and the currency resolves.
    pub fn validate(&self) -> Result<()> {
        self.currency()?;
        if self.recent_page_size == 0 || self.filter_batch_size == 0 {
            return Err(DashboardError::malformed(
                "page sizes must be greater than zero",
            ));
        }
        Ok(())
    }
}
