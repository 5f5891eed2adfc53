use crate::config::Config;
use crate::http_handler::HandlerDeps;
use http_handler::function_handler;
use lambda_http::{run, service_fn, Error};
use shared::adapters::{DynamoDbRecordRepository, S3SnapshotStore};
use shared::core::UuidGenerator;

mod config;
mod http_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    shared::observability::init_tracing();
    let config = Config::load()?;
    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let dynamodb_client = aws_sdk_dynamodb::Client::new(&aws_config);
    let s3_client = aws_sdk_s3::Client::new(&aws_config);

    let deps = HandlerDeps {
        id_generator: UuidGenerator::new(),
        record_repo: DynamoDbRecordRepository::new(config.table_name, dynamodb_client),
        snapshot_store: S3SnapshotStore::new(config.bucket_name, s3_client),
    };

    run(service_fn(|event| function_handler(&deps, event))).await
}
