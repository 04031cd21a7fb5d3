use tracing::{debug, instrument};

use crate::catalog::ALL_TYPES;
use crate::record::TransactionRecord;

/// Type selection and search text as entered in the filter controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionQuery {
    pub type_code: String,
    pub search: String,
}

impl Default for TransactionQuery {
    fn default() -> Self {
        Self {
            type_code: ALL_TYPES.to_string(),
            search: String::new(),
        }
    }
}

impl TransactionQuery {
    pub fn new(type_code: impl Into<String>, search: impl Into<String>) -> Self {
        Self {
            type_code: type_code.into(),
            search: search.into(),
        }
    }

    fn matches_type(&self, record: &TransactionRecord) -> bool {
        self.type_code == ALL_TYPES || record.type_code == self.type_code
    }

    fn matches_search(&self, record: &TransactionRecord, needle: &str) -> bool {
        needle.is_empty()
            || record.description.to_lowercase().contains(needle)
            || record.raw_message.to_lowercase().contains(needle)
            || record.amount.to_string().contains(needle)
    }
}

/// Keeps records matching both the type and the search predicate, in input
/// order, truncated to the first `limit` matches.
///
/// The search matches a lower-cased description, a lower-cased raw message
/// or the decimal amount as a substring.
#[instrument(skip(batch), fields(batch = batch.len()))]
pub fn filter_transactions(
    batch: &[TransactionRecord],
    query: &TransactionQuery,
    limit: usize,
) -> Vec<TransactionRecord> {
    let needle = query.search.to_lowercase();
    let filtered: Vec<TransactionRecord> = batch
        .iter()
        .filter(|record| query.matches_type(record))
        .filter(|record| query.matches_search(record, &needle))
        .take(limit)
        .cloned()
        .collect();
    debug!("Filter kept {} of {} records", filtered.len(), batch.len());
    filtered
}
