//! Pure transforms from backend series payloads into chart-ready structures.
//!
//! Nothing here fetches or renders. The formatters are plain values so the
//! chart backend can apply them to axis ticks and hover text.

use common::{TypeChartPayload, VolumeChartPayload};
use tracing::instrument;

use crate::catalog::TypeCatalog;
use crate::error::{DashboardError, Result};
use crate::format::{decimal_from_f64, grouped_number, percentage, plain_number, scaled, Currency};

/// Colors of the type distribution chart, reused cyclically.
pub const TYPE_PALETTE: [&str; 10] = [
    "#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF", "#FF9F40", "#8AC926", "#1982C4",
    "#6A4C93", "#F15BB5",
];

const DEFAULT_TICK_COUNT: usize = 5;
const MAX_TICKS: usize = 50;

/// Parallel labels and values; index `i` of one belongs to index `i` of the other.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesData {
    labels: Vec<String>,
    values: Vec<f64>,
}

impl SeriesData {
    pub fn new(labels: Vec<String>, values: Vec<f64>) -> Result<Self> {
        if labels.len() != values.len() {
            return Err(DashboardError::malformed(format!(
                "series has {} labels but {} values",
                labels.len(),
                values.len()
            )));
        }
        Ok(Self { labels, values })
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl TryFrom<VolumeChartPayload> for SeriesData {
    type Error = DashboardError;

    fn try_from(payload: VolumeChartPayload) -> Result<Self> {
        SeriesData::new(payload.labels, payload.data)
    }
}

impl TryFrom<TypeChartPayload> for SeriesData {
    type Error = DashboardError;

    fn try_from(payload: TypeChartPayload) -> Result<Self> {
        SeriesData::new(payload.labels, payload.counts)
    }
}

/// Currency-scaled axis ticks and exact tooltips for the volume chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VolumeFormatter {
    currency: Currency,
}

impl VolumeFormatter {
    pub fn new(currency: Currency) -> Self {
        Self { currency }
    }

    /// `1_250_000 -> "RWF 1.3M"`, `2500 -> "RWF 3K"`, `500 -> "RWF 500"`.
    pub fn axis_tick(&self, value: f64) -> String {
        let text = if value >= 1_000_000.0 {
            format!("{}M", scaled(value, 1_000_000, 1))
        } else if value >= 1_000.0 {
            format!("{}K", scaled(value, 1_000, 0))
        } else {
            plain_number(value)
        };
        self.currency.prefixed(&text)
    }

    /// Exact value with grouped digits: `"RWF 1,250,000"`.
    pub fn tooltip(&self, value: f64) -> String {
        self.currency.prefixed(&grouped_number(value))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VolumeChart {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub formatter: VolumeFormatter,
}

impl VolumeChart {
    pub fn tooltips(&self) -> Vec<String> {
        self.values.iter().map(|v| self.formatter.tooltip(*v)).collect()
    }

    /// Evenly spaced ticks from zero up to at least the series maximum.
    pub fn axis_ticks(&self) -> Vec<(f64, String)> {
        axis_tick_values(&self.values, DEFAULT_TICK_COUNT)
            .into_iter()
            .map(|v| (v, self.formatter.axis_tick(v)))
            .collect()
    }
}

fn axis_tick_values(values: &[f64], count: usize) -> Vec<f64> {
    let max = values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max);
    if max <= 0.0 || count < 2 {
        return vec![0.0];
    }

    let raw_step = max / (count - 1) as f64;
    let magnitude = 10_f64.powi(raw_step.log10().floor() as i32);
    let step = [1.0, 2.0, 5.0, 10.0]
        .iter()
        .map(|nice| nice * magnitude)
        .find(|candidate| *candidate >= raw_step)
        .unwrap_or(10.0 * magnitude);

    let mut ticks = Vec::new();
    for index in 0..MAX_TICKS {
        let tick = step * index as f64;
        ticks.push(tick);
        if tick >= max {
            break;
        }
    }
    ticks
}

#[instrument(skip(series), fields(points = series.len()))]
pub fn to_volume_series(series: SeriesData, currency: Currency) -> VolumeChart {
    VolumeChart {
        labels: series.labels,
        values: series.values,
        formatter: VolumeFormatter::new(currency),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeDistributionChart {
    /// Type codes as sent by the backend
    pub codes: Vec<String>,
    /// Catalog labels for the legend
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub colors: Vec<&'static str>,
}

impl TypeDistributionChart {
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Share of the total, half-up rounded; zero when the total is zero.
    pub fn percentage_of(&self, value: f64) -> u32 {
        decimal_from_f64(value)
            .zip(decimal_from_f64(self.total()))
            .and_then(|(part, whole)| percentage(part, whole))
            .unwrap_or(0)
    }

    /// `"{label}: {value} ({percentage}%)"` for each slice.
    pub fn tooltips(&self) -> Vec<String> {
        self.labels
            .iter()
            .zip(&self.values)
            .map(|(label, value)| {
                format!("{}: {} ({}%)", label, plain_number(*value), self.percentage_of(*value))
            })
            .collect()
    }
}

#[instrument(skip(series, catalog), fields(categories = series.len()))]
pub fn to_type_distribution(series: SeriesData, catalog: &TypeCatalog) -> TypeDistributionChart {
    let labels = series
        .labels
        .iter()
        .map(|code| catalog.describe(code).group_label)
        .collect();
    let colors = (0..series.len())
        .map(|index| TYPE_PALETTE[index % TYPE_PALETTE.len()])
        .collect();

    TypeDistributionChart {
        codes: series.labels,
        labels,
        values: series.values,
        colors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(labels: &[&str], values: &[f64]) -> SeriesData {
        SeriesData::new(labels.iter().map(|l| l.to_string()).collect(), values.to_vec()).unwrap()
    }

    #[test]
    fn test_mismatched_series_is_malformed() {
        let result = SeriesData::try_from(VolumeChartPayload {
            labels: vec!["Mon".to_string(), "Tue".to_string()],
            data: vec![1.0],
        });
        assert!(matches!(result, Err(DashboardError::MalformedPayload(_))));
    }

    #[test]
    fn test_axis_tick_formatter() {
        let formatter = VolumeFormatter::default();
        assert_eq!(formatter.axis_tick(500.0), "RWF 500");
        assert_eq!(formatter.axis_tick(2500.0), "RWF 3K");
        assert_eq!(formatter.axis_tick(1_250_000.0), "RWF 1.3M");
        assert_eq!(formatter.axis_tick(2_000_000.0), "RWF 2.0M");
        assert_eq!(formatter.axis_tick(999.0), "RWF 999");
        assert_eq!(formatter.axis_tick(1000.0), "RWF 1K");
        assert_ne!(formatter.axis_tick(1e30), "RWF 0.0M");
        assert!(formatter.axis_tick(1e30).starts_with("RWF 9999"));
    }

    #[test]
    fn test_volume_tooltip_is_exact_and_grouped() {
        let payload = series(&["Jan", "Feb"], &[1_250_000.0, 42.0]);
        let chart = to_volume_series(payload, Currency::default());
        assert_eq!(chart.tooltips(), vec!["RWF 1,250,000", "RWF 42"]);
        assert_eq!(chart.labels, vec!["Jan", "Feb"]);
    }

    #[test]
    fn test_axis_ticks_cover_maximum() {
        let payload = series(&["a", "b", "c"], &[0.0, 2500.0, 1_250_000.0]);
        let chart = to_volume_series(payload, Currency::default());
        let ticks = chart.axis_ticks();
        let values: Vec<f64> = ticks.iter().map(|(v, _)| *v).collect();
        assert_eq!(values, vec![0.0, 500_000.0, 1_000_000.0, 1_500_000.0]);
        assert_eq!(ticks[1].1, "RWF 500K");
        assert_eq!(ticks[3].1, "RWF 1.5M");
    }

    #[test]
    fn test_axis_ticks_for_empty_series() {
        let chart = to_volume_series(SeriesData::default(), Currency::default());
        assert_eq!(chart.axis_ticks(), vec![(0.0, "RWF 0".to_string())]);
    }

    #[test]
    fn test_type_distribution_percentages() {
        let chart = to_type_distribution(
            series(&["transfer_mobile", "airtime_payment", "mystery"], &[30.0, 10.0, 10.0]),
            &TypeCatalog::new(),
        );
        assert_eq!(chart.labels, vec!["Transfers", "Airtime", "mystery"]);
        assert_eq!(
            chart.tooltips(),
            vec!["Transfers: 30 (60%)", "Airtime: 10 (20%)", "mystery: 10 (20%)"]
        );
    }

    #[test]
    fn test_type_distribution_zero_total() {
        let chart = to_type_distribution(series(&["a", "b"], &[0.0, 0.0]), &TypeCatalog::new());
        assert_eq!(chart.tooltips(), vec!["a: 0 (0%)", "b: 0 (0%)"]);
    }

    #[test]
    fn test_palette_cycles() {
        let codes: Vec<String> = (0..12).map(|i| format!("type_{}", i)).collect();
        let chart = to_type_distribution(
            SeriesData::new(codes, vec![1.0; 12]).unwrap(),
            &TypeCatalog::new(),
        );
        assert_eq!(chart.colors.len(), 12);
        assert_eq!(chart.colors[10], TYPE_PALETTE[0]);
        assert_eq!(chart.colors[11], TYPE_PALETTE[1]);
    }
}
