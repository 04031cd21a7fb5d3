use momo_dashboard::KpiTiles;
use yew::prelude::*;

const PLACEHOLDER: &str = "-";

#[derive(Properties, PartialEq)]
pub struct KpiProps {
    pub tiles: Option<KpiTiles>,
}

#[derive(Properties, PartialEq)]
struct TileProps {
    title: AttrValue,
    value: AttrValue,
    icon: AttrValue,
    value_class: AttrValue,
    #[prop_or_default]
    desc: Option<AttrValue>,
}

#[function_component(Tile)]
fn tile(props: &TileProps) -> Html {
    html! {
        <div class="stats shadow bg-base-100">
            <div class="stat">
                <div class="stat-figure text-gray-400">
                    <i class={classes!(props.icon.to_string(), "text-2xl")}></i>
                </div>
                <div class="stat-title">{&props.title}</div>
                <div class={classes!("stat-value", props.value_class.to_string())}>{&props.value}</div>
                {if let Some(desc) = &props.desc {
                    html! { <div class="stat-desc">{desc}</div> }
                } else {
                    html! {}
                }}
            </div>
        </div>
    }
}

/// Four KPI tiles; placeholders until the first summary arrives.
#[function_component(KpiTilesRow)]
pub fn kpi_tiles_row(props: &KpiProps) -> Html {
    let text = |pick: fn(&KpiTiles) -> &String| -> AttrValue {
        props
            .tiles
            .as_ref()
            .map(|tiles| AttrValue::from(pick(tiles).clone()))
            .unwrap_or_else(|| AttrValue::from(PLACEHOLDER))
    };
    let rate = |pick: fn(&KpiTiles) -> &String| -> Option<AttrValue> {
        props.tiles.as_ref().map(|tiles| AttrValue::from(pick(tiles).clone()))
    };

    html! {
        <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-4 gap-4">
            <Tile
                title="Total Transactions"
                value={text(|t| &t.total_transactions)}
                icon="fas fa-receipt"
                value_class="text-primary"
            />
            <Tile
                title="Total Volume"
                value={text(|t| &t.total_volume)}
                icon="fas fa-coins"
                value_class="text-primary"
            />
            <Tile
                title="Successful"
                value={text(|t| &t.successful)}
                icon="fas fa-check-circle"
                value_class="text-success"
                desc={rate(|t| &t.success_rate)}
            />
            <Tile
                title="Failed"
                value={text(|t| &t.failed)}
                icon="fas fa-times-circle"
                value_class="text-error"
                desc={rate(|t| &t.failure_rate)}
            />
        </div>
    }
}
