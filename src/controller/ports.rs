use async_trait::async_trait;
use common::{
    ProcessResponse, SummaryPayload, TransactionsPage, TypeChartPayload, VolumeChartPayload,
};

use crate::chart::ChartPeriod;
use crate::error::Result;
use crate::record::TransactionRow;
use crate::summary::KpiTiles;

/// Backend calls the dashboard issues. Timeouts surface as `Transport` errors.
///
/// Futures are not required to be `Send`: the dashboard runs on a single
/// cooperative thread.
#[async_trait(?Send)]
pub trait DashboardApi {
    async fn fetch_summary(&self) -> Result<SummaryPayload>;

    async fn fetch_volume(&self, period: ChartPeriod) -> Result<VolumeChartPayload>;

    async fn fetch_type_counts(&self) -> Result<TypeChartPayload>;

    async fn fetch_transactions(&self, per_page: u32) -> Result<TransactionsPage>;

    async fn process(&self) -> Result<ProcessResponse>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// User-visible notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Output targets other than the chart slots.
pub trait DashboardView {
    fn show_summary(&self, tiles: KpiTiles);

    fn show_transactions(&self, rows: Vec<TransactionRow>);

    /// Disables (`true`) or re-enables (`false`) the process control.
    fn set_processing(&self, busy: bool);

    fn notify(&self, notice: Notice);
}
