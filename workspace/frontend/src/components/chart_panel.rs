use momo_dashboard::{ChartPeriod, ChartSlot};
use yew::prelude::*;

use crate::charts::container_id;

#[derive(Properties, PartialEq)]
pub struct VolumePanelProps {
    pub period: ChartPeriod,
    pub on_period: Callback<ChartPeriod>,
}

/// Card hosting the volume chart slot and the period buttons.
#[function_component(VolumePanel)]
pub fn volume_panel(props: &VolumePanelProps) -> Html {
    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <div class="flex justify-between items-center">
                    <h2 class="card-title">{"Transaction Volume"}</h2>
                    <div class="join">
                        {for ChartPeriod::ALL.iter().map(|period| {
                            let period = *period;
                            let onclick = props.on_period.reform(move |_: MouseEvent| period);
                            let active = (period == props.period).then_some("btn-active");
                            html! {
                                <button class={classes!("btn", "btn-sm", "join-item", active)} {onclick}>
                                    {period.label()}
                                </button>
                            }
                        })}
                    </div>
                </div>
                <div id={container_id(ChartSlot::Volume)} class="chart-container" style="height: 300px;"></div>
            </div>
        </div>
    }
}

#[function_component(TypePanel)]
pub fn type_panel() -> Html {
    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">{"Transaction Types"}</h2>
                <div id={container_id(ChartSlot::Type)} class="chart-container" style="height: 300px;"></div>
            </div>
        </div>
    }
}
