pub mod catalog;
pub mod chart;
pub mod config;
pub mod controller;
pub mod error;
pub mod filter;
pub mod format;
pub mod record;
pub mod summary;

#[cfg(test)]
mod testing;

pub use catalog::{TypeCatalog, TypeDescriptor, ALL_TYPES};
pub use chart::{ChartLifecycleManager, ChartPeriod, ChartRenderer, ChartSlot, ChartSpec};
pub use config::DashboardConfig;
pub use controller::{
    DashboardApi, DashboardController, DashboardView, Notice, NoticeLevel, Trigger,
};
pub use error::{DashboardError, Result};
pub use filter::TransactionQuery;
pub use format::Currency;
pub use record::{TransactionRecord, TransactionRow};
pub use summary::KpiTiles;

