//! Wire types for the mobile-money analytics backend.
//! These structs mirror the JSON bodies of the endpoints the dashboard
//! consumes, so both the engine and the frontend decode the same shapes.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

/// Backend paths, relative to the configured API base.
pub mod endpoints {
    pub const SUMMARY: &str = "/summary";
    pub const CHART_VOLUME: &str = "/chart/volume";
    pub const CHART_TYPES: &str = "/chart/types";
    pub const TRANSACTIONS: &str = "/transactions";
    pub const PROCESS: &str = "/process";
}

/// Status value the process endpoint returns on success.
pub const PROCESS_SUCCESS: &str = "success";

// ===================== Summary =====================

/// `GET /summary` body. Any count may be missing or null.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryPayload {
    #[serde(default, deserialize_with = "lenient_count")]
    pub total_transactions: Option<u64>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub total_volume: Option<u64>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub successful: Option<u64>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub failed: Option<u64>,
}

/// Reads a count from any JSON number. Floats are rounded and negatives
/// clamp to zero; null stays `None`.
fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let number = Option::<Number>::deserialize(deserializer)?;
    Ok(number.map(|n| match n.as_u64() {
        Some(count) => count,
        None => n
            .as_f64()
            .filter(|v| v.is_finite() && *v > 0.0)
            .map(|v| v.round() as u64)
            .unwrap_or(0),
    }))
}

// ===================== Charts =====================

/// `GET /chart/volume` body: one value per period label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VolumeChartPayload {
    pub labels: Vec<String>,
    pub data: Vec<f64>,
}

/// `GET /chart/types` body: one count per type code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeChartPayload {
    pub labels: Vec<String>,
    pub counts: Vec<f64>,
}

// ===================== Transactions =====================

/// `GET /transactions?per_page=N` body.
///
/// Rows stay positional here; named decoding happens in the dashboard engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionsPage {
    pub transactions: Vec<Vec<Value>>,
}

/// Query string for a transactions page.
pub fn transactions_path(per_page: u32) -> String {
    format!("{}?per_page={}", endpoints::TRANSACTIONS, per_page)
}

/// Query string for the volume series of a period.
pub fn volume_path(period: &str) -> String {
    format!("{}?period={}", endpoints::CHART_VOLUME, period)
}

// ===================== Processing =====================

/// `POST /process` body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub status: String,
    #[serde(default)]
    pub message: String,
}

impl ProcessResponse {
    pub fn is_success(&self) -> bool {
        self.status == PROCESS_SUCCESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_with_null_volume() {
        let payload: SummaryPayload = serde_json::from_str(
            r#"{"total_transactions": 100, "total_volume": null, "successful": 80, "failed": 20}"#,
        )
        .unwrap();
        assert_eq!(payload.total_transactions, Some(100));
        assert_eq!(payload.total_volume, None);
        assert_eq!(payload.failed, Some(20));
    }

    #[test]
    fn test_summary_with_missing_fields() {
        let payload: SummaryPayload = serde_json::from_str(r#"{"successful": 3}"#).unwrap();
        assert_eq!(payload.total_transactions, None);
        assert_eq!(payload.successful, Some(3));
    }

    #[test]
    fn test_summary_accepts_float_counts() {
        let payload: SummaryPayload = serde_json::from_str(
            r#"{"total_transactions": 100, "total_volume": 1250000.0,
                "successful": 79.6, "failed": -2}"#,
        )
        .unwrap();
        assert_eq!(payload.total_transactions, Some(100));
        assert_eq!(payload.total_volume, Some(1_250_000));
        assert_eq!(payload.successful, Some(80));
        assert_eq!(payload.failed, Some(0));
    }

    #[test]
    fn test_summary_rejects_non_numeric_count() {
        let result = serde_json::from_str::<SummaryPayload>(r#"{"total_volume": "lots"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_transactions_page_keeps_rows_positional() {
        let page: TransactionsPage = serde_json::from_str(
            r#"{"transactions": [[1, "Jane Doe", "transfer_mobile", 5000, "2024-01-05T15:04:00", null, "You have transferred 5000 RWF"]]}"#,
        )
        .unwrap();
        assert_eq!(page.transactions.len(), 1);
        assert_eq!(page.transactions[0][2], "transfer_mobile");
    }

    #[test]
    fn test_process_status() {
        let json = r#"{"status": "success", "message": "Processed 12 messages"}"#;
        let ok: ProcessResponse = serde_json::from_str(json).unwrap();
        assert!(ok.is_success());
        let failed: ProcessResponse = serde_json::from_str(r#"{"status": "error"}"#).unwrap();
        assert!(!failed.is_success());
        assert_eq!(failed.message, "");
    }

    #[test]
    fn test_paths() {
        assert_eq!(transactions_path(100), "/transactions?per_page=100");
        assert_eq!(volume_path("weekly"), "/chart/volume?period=weekly");
    }
}
