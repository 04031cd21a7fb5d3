//! In-memory fakes for the controller ports and the chart backend.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use async_trait::async_trait;
use common::{
    ProcessResponse, SummaryPayload, TransactionsPage, TypeChartPayload, VolumeChartPayload,
};
use serde_json::{json, Value};
use tokio::sync::oneshot;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::chart::{ChartPeriod, ChartRenderer, ChartSlot, ChartSpec};
use crate::controller::{DashboardApi, DashboardView, Notice};
use crate::error::{DashboardError, Result};
use crate::record::TransactionRow;
use crate::summary::KpiTiles;

/// Routes engine logs to stderr at the level named by `RUST_LOG` (WARN by default).
pub fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
    let log_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|level| level.parse::<Level>().ok())
        .unwrap_or(Level::WARN);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_default(subscriber)
}

/// Positional transaction row as the backend sends it.
pub fn record_row(
    id: i64,
    description: &str,
    type_code: &str,
    amount: u64,
    raw: &str,
) -> Vec<Value> {
    vec![
        json!(id),
        json!(description),
        json!(type_code),
        json!(amount),
        json!("2024-01-05T15:04:00"),
        Value::Null,
        json!(raw),
    ]
}

pub fn page(rows: Vec<Vec<Value>>) -> TransactionsPage {
    TransactionsPage { transactions: rows }
}

/// Scripted responses for one endpoint.
///
/// Deferred replies are consumed first, in order, and resolve when the test
/// sends on the returned channel. Afterwards every call gets a clone of the
/// fallback.
pub struct Replies<T> {
    queue: RefCell<VecDeque<oneshot::Receiver<Result<T>>>>,
    fallback: RefCell<Option<Result<T>>>,
    calls: Cell<usize>,
}

impl<T> Default for Replies<T> {
    fn default() -> Self {
        Self {
            queue: RefCell::new(VecDeque::new()),
            fallback: RefCell::new(None),
            calls: Cell::new(0),
        }
    }
}

impl<T: Clone> Replies<T> {
    pub fn always(&self, reply: Result<T>) {
        *self.fallback.borrow_mut() = Some(reply);
    }

    pub fn defer(&self) -> oneshot::Sender<Result<T>> {
        let (sender, receiver) = oneshot::channel();
        self.queue.borrow_mut().push_back(receiver);
        sender
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    async fn next(&self) -> Result<T> {
        self.calls.set(self.calls.get() + 1);
        let queued = self.queue.borrow_mut().pop_front();
        match queued {
            Some(receiver) => receiver
                .await
                .unwrap_or_else(|_| Err(DashboardError::transport("reply channel dropped"))),
            None => self
                .fallback
                .borrow()
                .clone()
                .unwrap_or_else(|| Err(DashboardError::transport("no scripted reply"))),
        }
    }
}

#[derive(Default)]
pub struct FakeApi {
    pub summary: Replies<SummaryPayload>,
    pub volume: Replies<VolumeChartPayload>,
    pub types: Replies<TypeChartPayload>,
    pub transactions: Replies<TransactionsPage>,
    pub process: Replies<ProcessResponse>,
    volume_periods: RefCell<Vec<ChartPeriod>>,
    transaction_pages: RefCell<Vec<u32>>,
}

impl FakeApi {
    pub fn volume_periods(&self) -> Vec<ChartPeriod> {
        self.volume_periods.borrow().clone()
    }

    pub fn transaction_pages(&self) -> Vec<u32> {
        self.transaction_pages.borrow().clone()
    }

    pub fn type_calls(&self) -> usize {
        self.types.calls()
    }

    pub fn process_calls(&self) -> usize {
        self.process.calls()
    }
}

#[async_trait(?Send)]
impl DashboardApi for FakeApi {
    async fn fetch_summary(&self) -> Result<SummaryPayload> {
        self.summary.next().await
    }

    async fn fetch_volume(&self, period: ChartPeriod) -> Result<VolumeChartPayload> {
        self.volume_periods.borrow_mut().push(period);
        self.volume.next().await
    }

    async fn fetch_type_counts(&self) -> Result<TypeChartPayload> {
        self.types.next().await
    }

    async fn fetch_transactions(&self, per_page: u32) -> Result<TransactionsPage> {
        self.transaction_pages.borrow_mut().push(per_page);
        self.transactions.next().await
    }

    async fn process(&self) -> Result<ProcessResponse> {
        self.process.next().await
    }
}

#[derive(Default)]
pub struct RecordingView {
    summaries: RefCell<Vec<KpiTiles>>,
    tables: RefCell<Vec<Vec<TransactionRow>>>,
    processing: RefCell<Vec<bool>>,
    notices: RefCell<Vec<Notice>>,
}

impl RecordingView {
    pub fn summaries(&self) -> Vec<KpiTiles> {
        self.summaries.borrow().clone()
    }

    pub fn tables(&self) -> Vec<Vec<TransactionRow>> {
        self.tables.borrow().clone()
    }

    pub fn processing(&self) -> Vec<bool> {
        self.processing.borrow().clone()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }
}

impl DashboardView for RecordingView {
    fn show_summary(&self, tiles: KpiTiles) {
        self.summaries.borrow_mut().push(tiles);
    }

    fn show_transactions(&self, rows: Vec<TransactionRow>) {
        self.tables.borrow_mut().push(rows);
    }

    fn set_processing(&self, busy: bool) {
        self.processing.borrow_mut().push(busy);
    }

    fn notify(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RendererEvent {
    Created(ChartSlot, u64),
    Destroyed(ChartSlot, u64),
}

/// Chart backend that hands out numbered instances and logs every call.
#[derive(Default)]
pub struct RecordingRenderer {
    next_id: Cell<u64>,
    events: RefCell<Vec<RendererEvent>>,
    live: RefCell<Vec<(ChartSlot, u64)>>,
    fail_next: Cell<bool>,
}

impl RecordingRenderer {
    pub fn events(&self) -> Vec<RendererEvent> {
        self.events.borrow().clone()
    }

    pub fn live_instances(&self, slot: ChartSlot) -> usize {
        self.live.borrow().iter().filter(|(s, _)| *s == slot).count()
    }

    pub fn fail_next_create(&self) {
        self.fail_next.set(true);
    }
}

impl ChartRenderer for RecordingRenderer {
    type Instance = u64;

    fn create(&self, slot: ChartSlot, spec: &ChartSpec) -> Result<u64> {
        assert_eq!(spec.slot(), slot, "spec rendered into the wrong slot");
        if self.fail_next.replace(false) {
            return Err(DashboardError::Render(format!("{} canvas unavailable", slot)));
        }
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        self.live.borrow_mut().push((slot, id));
        self.events.borrow_mut().push(RendererEvent::Created(slot, id));
        Ok(id)
    }

    fn destroy(&self, slot: ChartSlot, instance: u64) {
        self.live
            .borrow_mut()
            .retain(|(s, id)| !(*s == slot && *id == instance));
        self.events
            .borrow_mut()
            .push(RendererEvent::Destroyed(slot, instance));
    }
}
