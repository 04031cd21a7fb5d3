use momo_dashboard::{DashboardView, KpiTiles, Notice, TransactionRow};
use yew::functional::UseStateSetter;

use crate::common::toast::ToastContext;

/// Routes controller output into Yew state. Setters stay valid for the
/// lifetime of the owning component, so the controller can keep this view.
pub struct YewView {
    summary: UseStateSetter<Option<KpiTiles>>,
    rows: UseStateSetter<Option<Vec<TransactionRow>>>,
    processing: UseStateSetter<bool>,
    toasts: Option<ToastContext>,
}

impl YewView {
    pub fn new(
        summary: UseStateSetter<Option<KpiTiles>>,
        rows: UseStateSetter<Option<Vec<TransactionRow>>>,
        processing: UseStateSetter<bool>,
        toasts: Option<ToastContext>,
    ) -> Self {
        Self {
            summary,
            rows,
            processing,
            toasts,
        }
    }
}

impl DashboardView for YewView {
    fn show_summary(&self, tiles: KpiTiles) {
        log::trace!("Updating KPI tiles");
        self.summary.set(Some(tiles));
    }

    fn show_transactions(&self, rows: Vec<TransactionRow>) {
        log::trace!("Rendering {} transaction rows", rows.len());
        self.rows.set(Some(rows));
    }

    fn set_processing(&self, busy: bool) {
        self.processing.set(busy);
    }

    fn notify(&self, notice: Notice) {
        match &self.toasts {
            Some(toasts) => toasts.show_notice(notice),
            None => log::warn!("No toast provider, dropping notice: {}", notice.message),
        }
    }
}
