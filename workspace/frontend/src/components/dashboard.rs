use std::rc::Rc;

use momo_dashboard::{
    ChartPeriod, DashboardController, DashboardError, KpiTiles, TransactionQuery, TransactionRow,
    Trigger,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::chart_panel::{TypePanel, VolumePanel};
use super::kpi::KpiTilesRow;
use super::process_button::ProcessButton;
use super::transactions::{FilterControls, TransactionTable};
use crate::api_client::HttpDashboardApi;
use crate::charts::PlotlyRenderer;
use crate::common::toast::ToastContext;
use crate::settings;
use crate::view::YewView;

type Controller = DashboardController<HttpDashboardApi, PlotlyRenderer, YewView>;

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let toasts = use_context::<ToastContext>();
    let summary = use_state(|| None::<KpiTiles>);
    let rows = use_state(|| None::<Vec<TransactionRow>>);
    let processing = use_state(|| false);
    let period = use_state(|| settings::get_settings().dashboard.default_period);
    let query = use_state(TransactionQuery::default);

    let controller: Rc<Result<Rc<Controller>, DashboardError>> = {
        let view = YewView::new(summary.setter(), rows.setter(), processing.setter(), toasts);
        use_memo((), move |_| {
            let config = settings::get_settings().dashboard;
            log::debug!("Creating dashboard controller with {:?}", config);
            DashboardController::new(HttpDashboardApi, PlotlyRenderer, view, config).map(Rc::new)
        })
    };

    let dispatch = {
        let controller = controller.clone();
        Callback::from(move |trigger: Trigger| match &*controller {
            Ok(controller) => {
                log::debug!("Dispatching {:?}", trigger);
                let controller = controller.clone();
                spawn_local(async move {
                    controller.handle(trigger).await;
                });
            }
            Err(err) => log::error!("Dashboard unavailable, dropping {:?}: {}", trigger, err),
        })
    };

    {
        let dispatch = dispatch.clone();
        let controller = controller.clone();
        use_effect_with((), move |_| {
            dispatch.emit(Trigger::InitialLoad);
            move || {
                if let Ok(controller) = &*controller {
                    controller.charts().teardown();
                }
            }
        });
    }

    let on_period = {
        let period = period.clone();
        dispatch.reform(move |selected: ChartPeriod| {
            period.set(selected);
            Trigger::PeriodChanged(selected)
        })
    };

    let on_query = {
        let query = query.clone();
        dispatch.reform(move |next: TransactionQuery| {
            query.set(next.clone());
            Trigger::FilterChanged(next)
        })
    };

    let on_process = dispatch.reform(|_: ()| Trigger::ProcessRequested);

    if let Err(err) = &*controller {
        return html! {
            <div class="alert alert-error">
                <i class="fas fa-exclamation-circle"></i>
                <span>{format!("Invalid dashboard settings: {}", err)}</span>
            </div>
        };
    }

    html! {
        <div class="container mx-auto p-4 flex flex-col gap-6">
            <div class="flex justify-between items-center">
                <h1 class="text-2xl font-bold">{"MoMo Analytics"}</h1>
                <ProcessButton processing={*processing} onclick={on_process} />
            </div>
            <KpiTilesRow tiles={(*summary).clone()} />
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <VolumePanel period={*period} {on_period} />
                <TypePanel />
            </div>
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <div class="flex flex-col md:flex-row justify-between md:items-center gap-2">
                        <h2 class="card-title">{"Recent Transactions"}</h2>
                        <FilterControls query={(*query).clone()} on_change={on_query} />
                    </div>
                    <TransactionTable rows={(*rows).clone()} />
                </div>
            </div>
        </div>
    }
}
