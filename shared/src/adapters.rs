use crate::{
    core::{Record, RecordRepository, SnapshotStore, StoredItem},
    error::HandlerError,
};
use async_trait::async_trait;
use aws_sdk_dynamodb::{error::DisplayErrorContext, types::AttributeValue, Client};
use aws_sdk_s3::primitives::ByteStream;
use serde_dynamo::{from_items, to_item};
use std::collections::HashMap;

#[derive(Debug)]
pub struct DynamoDbRecordRepository {
    table_name: String,
    dynamodb_client: Client,
}

impl DynamoDbRecordRepository {
    pub fn new(table_name: String, dynamodb_client: Client) -> Self {
        Self {
            table_name,
            dynamodb_client,
        }
    }
}

#[async_trait]
impl RecordRepository for DynamoDbRecordRepository {
    #[tracing::instrument(skip(self, record), fields(drug_id = %record.drug_id))]
    async fn put_record(&self, record: &Record) -> Result<(), HandlerError> {
        let item: HashMap<String, AttributeValue> = to_item(record)
            .map_err(|e| HandlerError::StorageWrite(format!("Error converting record: {}", e)))?;

        self.dynamodb_client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map(|_| ())
            .map_err(|e| {
                HandlerError::StorageWrite(format!(
                    "Error adding item: {}",
                    DisplayErrorContext(&e)
                ))
            })
    }

    #[tracing::instrument(skip(self))]
    async fn scan_items(&self) -> Result<Vec<StoredItem>, HandlerError> {
        let mut items = vec![];
        let mut last_evaluated_key = None;

        loop {
            let result = self
                .dynamodb_client
                .scan()
                .table_name(&self.table_name)
                .set_exclusive_start_key(last_evaluated_key)
                .send()
                .await
                .map_err(|e| {
                    HandlerError::StorageRead(format!(
                        "Error executing scan: {}",
                        DisplayErrorContext(&e)
                    ))
                })?;

            if let Some(page) = result.items {
                let page: Vec<StoredItem> = from_items(page).map_err(|e| {
                    HandlerError::StorageRead(format!("Error converting scanned items: {}", e))
                })?;
                items.extend(page);
            }

            last_evaluated_key = result.last_evaluated_key;
            if last_evaluated_key.is_none() {
                break;
            }
        }

        tracing::info!("Scanned {} items", items.len());
        Ok(items)
    }
}

#[derive(Debug)]
pub struct S3SnapshotStore {
    bucket_name: String,
    s3_client: aws_sdk_s3::Client,
}

impl S3SnapshotStore {
    pub fn new(bucket_name: String, s3_client: aws_sdk_s3::Client) -> Self {
        Self {
            bucket_name,
            s3_client,
        }
    }
}

#[async_trait]
impl SnapshotStore for S3SnapshotStore {
    #[tracing::instrument(skip(self, records), fields(record_count = records.len()))]
    async fn put_snapshot(&self, name: &str, records: &[Record]) -> Result<(), HandlerError> {
        let body = serde_json::to_vec(records).map_err(|e| {
            HandlerError::StorageWrite(format!("Error serializing snapshot: {}", e))
        })?;

        self.s3_client
            .put_object()
            .bucket(&self.bucket_name)
            .key(name)
            .content_type("application/json")
            .body(ByteStream::from(body))
            .send()
            .await
            .map(|_| ())
            .map_err(|e| {
                HandlerError::StorageWrite(format!(
                    "Error uploading snapshot: {}",
                    aws_sdk_s3::error::DisplayErrorContext(&e)
                ))
            })
    }
}
