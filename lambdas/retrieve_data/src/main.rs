use crate::config::Config;
use crate::http_handler::{function_handler, HandlerDeps};
use lambda_http::{run, service_fn, Error};
use shared::adapters::DynamoDbRecordRepository;

mod config;
mod http_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    shared::observability::init_tracing();
    let config = Config::load()?;
    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let dynamodb_client = aws_sdk_dynamodb::Client::new(&aws_config);

    let record_repo = DynamoDbRecordRepository::new(config.table_name, dynamodb_client);
    let deps = HandlerDeps { record_repo };

    run(service_fn(|event| function_handler(&deps, event))).await
}
