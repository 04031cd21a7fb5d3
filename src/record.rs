use chrono::{DateTime, NaiveDateTime};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::catalog::{TypeCatalog, TypeDescriptor};
use crate::error::{DashboardError, Result};
use crate::format::Currency;

const DESCRIPTION: usize = 1;
const TYPE_CODE: usize = 2;
const AMOUNT: usize = 3;
const TIMESTAMP: usize = 4;
const RAW_MESSAGE: usize = 6;

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// One mobile-money transaction, decoded from a positional backend row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionRecord {
    /// Row identifier, when the backend sends an integer in the first column
    pub id: Option<i64>,
    /// Counterparty or free-text description
    pub description: String,
    pub type_code: String,
    /// Amount in the smallest currency unit
    pub amount: u64,
    pub timestamp: NaiveDateTime,
    /// Original SMS body, used only for searching
    pub raw_message: String,
}

impl TransactionRecord {
    /// Decodes a `[id, description, type, amount, timestamp, _, raw_message]` row.
    pub fn from_row(row: &[Value]) -> Result<Self> {
        Ok(Self {
            id: row.first().and_then(Value::as_i64),
            description: required_str(row, DESCRIPTION, "description")?.to_string(),
            type_code: required_str(row, TYPE_CODE, "type")?.to_string(),
            amount: decode_amount(row.get(AMOUNT))?,
            timestamp: parse_timestamp(required_str(row, TIMESTAMP, "timestamp")?)?,
            raw_message: row
                .get(RAW_MESSAGE)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
        })
    }
}

/// Decodes a whole page; one malformed row rejects the page.
#[instrument(skip(rows), fields(rows = rows.len()))]
pub fn decode_page(rows: &[Vec<Value>]) -> Result<Vec<TransactionRecord>> {
    let records = rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            TransactionRecord::from_row(row).map_err(|err| match err {
                DashboardError::MalformedPayload(reason) => {
                    DashboardError::malformed(format!("row {}: {}", index, reason))
                }
                other => other,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    debug!("Decoded {} transaction rows", records.len());
    Ok(records)
}

fn required_str<'a>(row: &'a [Value], index: usize, field: &str) -> Result<&'a str> {
    row.get(index)
        .and_then(Value::as_str)
        .ok_or_else(|| DashboardError::malformed(format!("missing {} at index {}", field, index)))
}

fn decode_amount(value: Option<&Value>) -> Result<u64> {
    let amount = match value {
        Some(Value::Number(number)) => number.as_u64().or_else(|| {
            number
                .as_f64()
                .filter(|v| *v >= 0.0 && v.fract() == 0.0)
                .map(|v| v as u64)
        }),
        Some(Value::String(text)) => text.trim().parse::<u64>().ok(),
        _ => None,
    };
    amount.ok_or_else(|| {
        DashboardError::malformed(format!(
            "amount at index {} is not a non-negative integer",
            AMOUNT
        ))
    })
}

fn parse_timestamp(text: &str) -> Result<NaiveDateTime> {
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(text) {
        return Ok(with_offset.naive_local());
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .ok_or_else(|| DashboardError::malformed(format!("unparseable timestamp: {}", text)))
}

/// Table-ready view of a record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionRow {
    pub key: String,
    pub description: String,
    pub type_info: TypeDescriptor,
    pub amount_text: String,
    pub date_text: String,
    pub status: &'static str,
}

impl TransactionRow {
    pub fn from_record(
        record: &TransactionRecord,
        catalog: &TypeCatalog,
        currency: Currency,
    ) -> Self {
        Self {
            key: record
                .id
                .map(|id| id.to_string())
                .unwrap_or_else(|| format!("{}-{}", record.timestamp, record.amount)),
            description: record.description.clone(),
            type_info: catalog.describe(&record.type_code),
            amount_text: currency.amount(record.amount),
            date_text: record.timestamp.format("%b %-d, %Y, %I:%M %p").to_string(),
            status: "Completed",
        }
    }
}

pub fn to_rows(
    records: &[TransactionRecord],
    catalog: &TypeCatalog,
    currency: Currency,
) -> Vec<TransactionRow> {
    records
        .iter()
        .map(|record| TransactionRow::from_record(record, catalog, currency))
        .collect()
}
