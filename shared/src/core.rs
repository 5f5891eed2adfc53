use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Debug;

use crate::error::HandlerError;

#[cfg(any(test, feature = "mocks"))]
use mockall::{automock, predicate::*};

/// Name of the synthetic identifier field, also the table partition key.
pub const RECORD_ID_FIELD: &str = "DrugID";

/// A table item as read back by a scan. Every attribute is kept, whatever its
/// type, since writers other than the upload function may share the table.
pub type StoredItem = serde_json::Map<String, serde_json::Value>;

#[cfg_attr(any(test, feature = "mocks"), automock)]
#[async_trait]
pub trait RecordRepository: Debug {
    async fn put_record(&self, record: &Record) -> Result<(), HandlerError>;
    async fn scan_items(&self) -> Result<Vec<StoredItem>, HandlerError>;
}

#[cfg_attr(any(test, feature = "mocks"), automock)]
#[async_trait]
pub trait SnapshotStore: Debug {
    async fn put_snapshot(&self, name: &str, records: &[Record]) -> Result<(), HandlerError>;
}

#[cfg_attr(any(test, feature = "mocks"), automock)]
pub trait IdGenerator {
    fn generate_id(&self) -> String;
}

#[derive(Debug, Default)]
pub struct UuidGenerator;

impl UuidGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for UuidGenerator {
    fn generate_id(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// One CSV row keyed by header name, tagged with its generated identifier.
///
/// Serializes as a flat JSON object: the header fields plus `DrugID`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Record {
    #[serde(rename = "DrugID")]
    pub drug_id: String,
    #[serde(flatten)]
    pub fields: BTreeMap<String, String>,
}

impl Record {
    pub fn new(drug_id: String, mut fields: BTreeMap<String, String>) -> Self {
        // the generated identifier wins over a CSV column of the same name
        fields.remove(RECORD_ID_FIELD);
        Self { drug_id, fields }
    }

    /// Number of fields including the identifier.
    pub fn field_count(&self) -> usize {
        self.fields.len() + 1
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        if name == RECORD_ID_FIELD {
            return Some(&self.drug_id);
        }
        self.fields.get(name).map(|s| s.as_str())
    }
}

/// Body of a successful upload response.
#[derive(Debug, Deserialize, Serialize)]
pub struct UploadReceipt {
    pub message: String,
    pub file: String,
}

impl UploadReceipt {
    pub fn new(file: String) -> Self {
        Self {
            message: "CSV uploaded successfully".to_string(),
            file,
        }
    }
}

/// Snapshot object name for the invocation with the given request id.
pub fn snapshot_name(request_id: &str) -> String {
    format!("drug_data_{}.json", request_id)
}

#[cfg(test)]
mod tests {
    use super::{snapshot_name, IdGenerator, Record, UuidGenerator};
    use serde_json::json;
    use std::collections::{BTreeMap, HashSet};

    #[test]
    fn record_serializes_flat_with_identifier() {
        let mut fields = BTreeMap::new();
        fields.insert("name".to_string(), "Aspirin".to_string());
        fields.insert("dose".to_string(), "100mg".to_string());
        let record = Record::new("id-1".to_string(), fields);

        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(
            value,
            json!({"DrugID": "id-1", "name": "Aspirin", "dose": "100mg"})
        );
        let parsed: Record = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn csv_column_named_like_identifier_is_replaced() {
        let mut fields = BTreeMap::new();
        fields.insert("DrugID".to_string(), "from-csv".to_string());
        fields.insert("name".to_string(), "Aspirin".to_string());

        let record = Record::new("generated".to_string(), fields);

        assert_eq!(record.field_count(), 2);
        assert_eq!(record.get("DrugID"), Some("generated"));
    }

    #[test]
    fn uuid_generator_yields_distinct_ids() {
        let generator = UuidGenerator::new();
        let ids: HashSet<String> = (0..100).map(|_| generator.generate_id()).collect();
        assert_eq!(ids.len(), 100);
        assert!(ids.iter().all(|id| !id.is_empty()));
    }

    #[test]
    fn snapshot_name_is_derived_from_request_id() {
        assert_eq!(snapshot_name("abc-123"), "drug_data_abc-123.json");
    }
}
