use common::SummaryPayload;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::format::{group_digits, percentage, Currency};

/// Raw KPI counts with absent fields coerced to zero.
///
/// `successful + failed` may be smaller than `total_transactions`: records
/// with an unknown or pending status are counted only in the total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SummaryStats {
    pub total_transactions: u64,
    pub total_volume: u64,
    pub successful: u64,
    pub failed: u64,
}

impl From<&SummaryPayload> for SummaryStats {
    fn from(payload: &SummaryPayload) -> Self {
        Self {
            total_transactions: payload.total_transactions.unwrap_or(0),
            total_volume: payload.total_volume.unwrap_or(0),
            successful: payload.successful.unwrap_or(0),
            failed: payload.failed.unwrap_or(0),
        }
    }
}

/// Counts plus derived success/failure percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SummaryMetrics {
    pub total_transactions: u64,
    pub total_volume: u64,
    pub successful: u64,
    pub failed: u64,
    pub success_rate_pct: u32,
    pub failure_rate_pct: u32,
}

/// With no transactions the rates are 100% success and 0% failure.
pub fn aggregate(raw: SummaryStats) -> SummaryMetrics {
    let total = Decimal::from(raw.total_transactions);
    SummaryMetrics {
        total_transactions: raw.total_transactions,
        total_volume: raw.total_volume,
        successful: raw.successful,
        failed: raw.failed,
        success_rate_pct: percentage(Decimal::from(raw.successful), total).unwrap_or(100),
        failure_rate_pct: percentage(Decimal::from(raw.failed), total).unwrap_or(0),
    }
}

/// Text for the six KPI nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KpiTiles {
    pub total_transactions: String,
    pub total_volume: String,
    pub successful: String,
    pub failed: String,
    pub success_rate: String,
    pub failure_rate: String,
}

impl KpiTiles {
    pub fn from_metrics(metrics: &SummaryMetrics, currency: Currency) -> Self {
        Self {
            total_transactions: group_digits(metrics.total_transactions),
            total_volume: currency.amount(metrics.total_volume),
            successful: group_digits(metrics.successful),
            failed: group_digits(metrics.failed),
            success_rate: format!("{}% success rate", metrics.success_rate_pct),
            failure_rate: format!("{}% failure rate", metrics.failure_rate_pct),
        }
    }
}
