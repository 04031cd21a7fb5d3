pub mod adapter;
pub mod lifecycle;

pub use adapter::{
    to_type_distribution, to_volume_series, SeriesData, TypeDistributionChart, VolumeChart,
    VolumeFormatter, TYPE_PALETTE,
};
pub use lifecycle::{ChartHandle, ChartLifecycleManager, ChartRenderer};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

/// Fixed visual region hosting at most one live chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ChartSlot {
    Volume,
    Type,
}

impl ChartSlot {
    pub const ALL: [ChartSlot; 2] = [ChartSlot::Volume, ChartSlot::Type];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartSlot::Volume => "volume",
            ChartSlot::Type => "type",
        }
    }
}

impl fmt::Display for ChartSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregation period of the volume chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartPeriod {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl ChartPeriod {
    pub const ALL: [ChartPeriod; 3] =
        [ChartPeriod::Daily, ChartPeriod::Weekly, ChartPeriod::Monthly];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartPeriod::Daily => "daily",
            ChartPeriod::Weekly => "weekly",
            ChartPeriod::Monthly => "monthly",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChartPeriod::Daily => "Daily",
            ChartPeriod::Weekly => "Weekly",
            ChartPeriod::Monthly => "Monthly",
        }
    }
}

impl FromStr for ChartPeriod {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" => Ok(ChartPeriod::Daily),
            "weekly" => Ok(ChartPeriod::Weekly),
            "monthly" => Ok(ChartPeriod::Monthly),
            other => Err(DashboardError::malformed(format!("unknown chart period: {}", other))),
        }
    }
}

/// Chart-ready data for one slot.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartSpec {
    Volume(VolumeChart),
    TypeDistribution(TypeDistributionChart),
}

impl ChartSpec {
    pub fn slot(&self) -> ChartSlot {
        match self {
            ChartSpec::Volume(_) => ChartSlot::Volume,
            ChartSpec::TypeDistribution(_) => ChartSlot::Type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_parsing() {
        assert_eq!("Weekly".parse::<ChartPeriod>().unwrap(), ChartPeriod::Weekly);
        assert_eq!(" monthly ".parse::<ChartPeriod>().unwrap(), ChartPeriod::Monthly);
        assert!("hourly".parse::<ChartPeriod>().is_err());
        assert_eq!(ChartPeriod::default(), ChartPeriod::Daily);
    }
}
