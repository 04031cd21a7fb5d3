//! Plotly-backed chart renderer.

use momo_dashboard::chart::{TypeDistributionChart, VolumeChart};
use momo_dashboard::{ChartRenderer, ChartSlot, ChartSpec, DashboardError, Result};
use plotly::common::{Fill, HoverInfo, Line, Marker, Mode};
use plotly::Scatter;
use serde::Serialize;
use serde_json::{json, Value};
use wasm_bindgen::prelude::*;

const VOLUME_COLOR: &str = "#ff7f00";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly, catch)]
    fn newPlot(
        div_id: &str,
        data: JsValue,
        layout: JsValue,
        config: JsValue,
    ) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = Plotly, catch)]
    fn purge(div_id: &str) -> std::result::Result<(), JsValue>;
}

/// DOM id of the container hosting a slot's plot.
pub fn container_id(slot: ChartSlot) -> String {
    format!("chart-{}", slot)
}

/// A plot drawn into a container, released with `Plotly.purge`.
#[derive(Debug)]
pub struct PlotInstance {
    div_id: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PlotlyRenderer;

impl ChartRenderer for PlotlyRenderer {
    type Instance = PlotInstance;

    fn create(&self, slot: ChartSlot, spec: &ChartSpec) -> Result<PlotInstance> {
        let div_id = container_id(slot);
        let container_exists = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(&div_id))
            .is_some();
        if !container_exists {
            return Err(DashboardError::Render(format!("missing chart container #{}", div_id)));
        }

        let (data, layout) = match spec {
            ChartSpec::Volume(chart) => volume_figure(chart)?,
            ChartSpec::TypeDistribution(chart) => type_figure(chart),
        };
        let config = json!({"responsive": true, "displayModeBar": false});

        newPlot(&div_id, to_js(&data)?, to_js(&layout)?, to_js(&config)?)
            .map_err(|e| DashboardError::Render(format!("Plotly.newPlot failed: {:?}", e)))?;
        log::trace!("Plot drawn into #{}", div_id);

        Ok(PlotInstance { div_id })
    }

    fn destroy(&self, _slot: ChartSlot, instance: PlotInstance) {
        if let Err(e) = purge(&instance.div_id) {
            log::warn!("Plotly.purge failed for #{}: {:?}", instance.div_id, e);
        }
    }
}

fn to_js(value: &Value) -> Result<JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| DashboardError::Render(format!("Failed to convert figure: {}", e)))
}

fn volume_figure(chart: &VolumeChart) -> Result<(Value, Value)> {
    let trace = Scatter::new(chart.labels.clone(), chart.values.clone())
        .mode(Mode::LinesMarkers)
        .name("Transaction Volume")
        .fill(Fill::ToZeroY)
        .line(Line::new().color(VOLUME_COLOR).width(2.0))
        .marker(Marker::new().color(VOLUME_COLOR).size(6))
        .text_array(chart.tooltips())
        .hover_info(HoverInfo::Text);
    let trace = serde_json::to_value(&trace)
        .map_err(|e| DashboardError::Render(format!("Failed to serialize trace: {}", e)))?;

    let (tick_values, tick_text): (Vec<f64>, Vec<String>) = chart.axis_ticks().into_iter().unzip();
    let layout = json!({
        "margin": {"t": 10, "r": 10, "l": 70, "b": 40},
        "paper_bgcolor": "rgba(0,0,0,0)",
        "plot_bgcolor": "rgba(0,0,0,0)",
        "showlegend": false,
        "xaxis": {"showgrid": false},
        "yaxis": {
            "showgrid": true,
            "gridcolor": "#eee",
            "rangemode": "tozero",
            "tickmode": "array",
            "tickvals": tick_values,
            "ticktext": tick_text
        }
    });

    Ok((json!([trace]), layout))
}

fn type_figure(chart: &TypeDistributionChart) -> (Value, Value) {
    let trace = json!({
        "type": "pie",
        "hole": 0.5,
        "labels": chart.labels,
        "values": chart.values,
        "marker": {"colors": chart.colors, "line": {"width": 1, "color": "#fff"}},
        "text": chart.tooltips(),
        "hoverinfo": "text",
        "textinfo": "percent",
        "sort": false
    });
    let layout = json!({
        "margin": {"t": 10, "r": 10, "l": 10, "b": 10},
        "paper_bgcolor": "rgba(0,0,0,0)",
        "showlegend": true,
        "legend": {"orientation": "v", "x": 1.0, "y": 0.5}
    });

    (json!([trace]), layout)
}
