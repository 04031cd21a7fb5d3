//! Orchestration of dashboard refreshes.
//!
//! Every trigger issues a ticket for each region it repaints before awaiting
//! its fetch. After the fetch resumes, the ticket is checked and a stale
//! completion is dropped, so the newest request always has the last word even
//! when responses arrive out of order. Transformation and painting happen
//! synchronously after the await and cannot interleave with another trigger.

pub mod ports;
pub mod sequence;

pub use ports::{DashboardApi, DashboardView, Notice, NoticeLevel};
pub use sequence::{Region, RegionSequencer, Ticket};

use std::cell::Cell;

use futures::join;
use tracing::{debug, info, instrument, warn};

use crate::catalog::TypeCatalog;
use crate::chart::{
    to_type_distribution, to_volume_series, ChartLifecycleManager, ChartPeriod, ChartRenderer,
    ChartSlot, ChartSpec, SeriesData,
};
use crate::config::DashboardConfig;
use crate::error::{DashboardError, Result};
use crate::filter::{filter_transactions, TransactionQuery};
use crate::format::Currency;
use crate::record::{decode_page, to_rows};
use crate::summary::{aggregate, KpiTiles, SummaryStats};

const PROCESS_FAILED: &str = "Error processing data";

/// Inputs the surrounding UI shell feeds into the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum Trigger {
    InitialLoad,
    FilterChanged(TransactionQuery),
    PeriodChanged(ChartPeriod),
    ProcessRequested,
}

pub struct DashboardController<A, R, V>
where
    R: ChartRenderer,
{
    api: A,
    view: V,
    charts: ChartLifecycleManager<R>,
    catalog: TypeCatalog,
    currency: Currency,
    config: DashboardConfig,
    sequencer: RegionSequencer,
    period: Cell<ChartPeriod>,
    processing: Cell<bool>,
}

impl<A, R, V> DashboardController<A, R, V>
where
    A: DashboardApi,
    R: ChartRenderer,
    V: DashboardView,
{
    pub fn new(api: A, renderer: R, view: V, config: DashboardConfig) -> Result<Self> {
        config.validate()?;
        let currency = config.currency()?;
        Ok(Self {
            api,
            view,
            charts: ChartLifecycleManager::new(renderer),
            catalog: TypeCatalog::new(),
            currency,
            period: Cell::new(config.default_period),
            processing: Cell::new(false),
            sequencer: RegionSequencer::new(),
            config,
        })
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn charts(&self) -> &ChartLifecycleManager<R> {
        &self.charts
    }

    pub fn catalog(&self) -> &TypeCatalog {
        &self.catalog
    }

    pub fn period(&self) -> ChartPeriod {
        self.period.get()
    }

    pub fn is_processing(&self) -> bool {
        self.processing.get()
    }

    pub async fn handle(&self, trigger: Trigger) {
        match trigger {
            Trigger::InitialLoad => self.initial_load().await,
            Trigger::FilterChanged(query) => self.filter_changed(query).await,
            Trigger::PeriodChanged(period) => self.period_changed(period).await,
            Trigger::ProcessRequested => {
                // outcome is already reported through the view
                let _ = self.process_requested().await;
            }
        }
    }

    /// Summary, both charts and the first page of transactions, fetched concurrently.
    #[instrument(skip(self))]
    pub async fn initial_load(&self) {
        info!("Loading dashboard");
        join!(
            self.load_summary(),
            self.load_volume_chart(),
            self.load_type_chart(),
            self.load_recent_transactions(),
        );
    }

    /// Re-fetches the filter batch and repaints the table only.
    #[instrument(skip(self, query), fields(type_code = %query.type_code, search = %query.search))]
    pub async fn filter_changed(&self, query: TransactionQuery) {
        let ticket = self.sequencer.issue(Region::Transactions);
        let result = self
            .api
            .fetch_transactions(self.config.filter_batch_size)
            .await
            .and_then(|page| decode_page(&page.transactions));

        if let Some(batch) = self.accept(ticket, result) {
            let filtered = filter_transactions(&batch, &query, self.config.filter_display_limit);
            self.view
                .show_transactions(to_rows(&filtered, &self.catalog, self.currency));
        }
    }

    /// Switches the volume period and repaints the volume chart only.
    #[instrument(skip(self))]
    pub async fn period_changed(&self, period: ChartPeriod) {
        self.period.set(period);
        self.load_volume_chart().await;
    }

    /// Runs backend ingestion, then refreshes everything on success.
    ///
    /// The process control stays disabled for the whole call and is
    /// re-enabled on every exit path. A request arriving while one is
    /// running is ignored.
    #[instrument(skip(self))]
    pub async fn process_requested(&self) -> Result<()> {
        if self.processing.get() {
            debug!("Processing already running, ignoring request");
            return Ok(());
        }
        let _busy = ProcessingGuard::engage(&self.view, &self.processing);

        let outcome = self.api.process().await.and_then(|response| {
            if response.is_success() {
                Ok(response.message)
            } else {
                Err(DashboardError::ProcessingRejected(format!(
                    "status {}: {}",
                    response.status, response.message
                )))
            }
        });

        match outcome {
            Ok(message) => {
                info!("Processing finished: {}", message);
                self.view.notify(Notice::success(message));
                self.initial_load().await;
                Ok(())
            }
            Err(err) => {
                warn!("Processing failed: {}", err);
                self.view.notify(Notice::error(PROCESS_FAILED));
                Err(err)
            }
        }
    }

    async fn load_summary(&self) {
        let ticket = self.sequencer.issue(Region::Summary);
        let result = self.api.fetch_summary().await;

        if let Some(payload) = self.accept(ticket, result) {
            let metrics = aggregate(SummaryStats::from(&payload));
            self.view
                .show_summary(KpiTiles::from_metrics(&metrics, self.currency));
        }
    }

    async fn load_volume_chart(&self) {
        let ticket = self.sequencer.issue(Region::VolumeChart);
        let period = self.period.get();
        let result = self
            .api
            .fetch_volume(period)
            .await
            .and_then(SeriesData::try_from);

        if let Some(series) = self.accept(ticket, result) {
            let spec = ChartSpec::Volume(to_volume_series(series, self.currency));
            self.paint(ChartSlot::Volume, &spec);
        }
    }

    async fn load_type_chart(&self) {
        let ticket = self.sequencer.issue(Region::TypeChart);
        let result = self
            .api
            .fetch_type_counts()
            .await
            .and_then(SeriesData::try_from);

        if let Some(series) = self.accept(ticket, result) {
            let spec = ChartSpec::TypeDistribution(to_type_distribution(series, &self.catalog));
            self.paint(ChartSlot::Type, &spec);
        }
    }

    async fn load_recent_transactions(&self) {
        let ticket = self.sequencer.issue(Region::Transactions);
        let result = self
            .api
            .fetch_transactions(self.config.recent_page_size)
            .await
            .and_then(|page| decode_page(&page.transactions));

        if let Some(records) = self.accept(ticket, result) {
            self.view
                .show_transactions(to_rows(&records, &self.catalog, self.currency));
        }
    }

    /// Drops stale completions and read failures; the previous render stays.
    fn accept<T>(&self, ticket: Ticket, result: Result<T>) -> Option<T> {
        if !self.sequencer.is_latest(ticket) {
            debug!(
                region = ?ticket.region,
                sequence = ticket.sequence,
                "Discarding stale completion"
            );
            return None;
        }
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(region = ?ticket.region, "Keeping previous render: {}", err);
                None
            }
        }
    }

    fn paint(&self, slot: ChartSlot, spec: &ChartSpec) {
        if let Err(err) = self.charts.render(slot, spec) {
            warn!(%slot, "Chart render failed: {}", err);
        }
    }
}

/// Holds the process control disabled until dropped.
struct ProcessingGuard<'a, V: DashboardView> {
    view: &'a V,
    flag: &'a Cell<bool>,
}

impl<'a, V: DashboardView> ProcessingGuard<'a, V> {
    fn engage(view: &'a V, flag: &'a Cell<bool>) -> Self {
        flag.set(true);
        view.set_processing(true);
        Self { view, flag }
    }
}

impl<V: DashboardView> Drop for ProcessingGuard<'_, V> {
    fn drop(&mut self) {
        self.flag.set(false);
        self.view.set_processing(false);
    }
}
