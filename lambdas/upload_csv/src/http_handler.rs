use lambda_http::RequestExt;
use lambda_http::{http::StatusCode, tracing, Error, IntoResponse, Request};
use shared::core::{snapshot_name, IdGenerator, RecordRepository, SnapshotStore, UploadReceipt};
use shared::csv_batch::{decode_payload, parse_records};
use shared::error::HandlerError;
use shared::utils::{error_response, json_response};

pub(crate) struct HandlerDeps<I: IdGenerator, R: RecordRepository, S: SnapshotStore> {
    pub id_generator: I,
    pub record_repo: R,
    pub snapshot_store: S,
}

#[tracing::instrument(skip(deps, event), fields(request_id = tracing::field::Empty))]
pub(crate) async fn function_handler<I: IdGenerator, R: RecordRepository, S: SnapshotStore>(
    deps: &HandlerDeps<I, R, S>,
    event: Request,
) -> Result<impl IntoResponse, Error> {
    if let Some(context) = event.lambda_context_ref() {
        tracing::Span::current().record("request_id", context.request_id.as_str());
    }
    tracing::info!("Received upload of {} bytes", event.body().len());

    match upload_csv(deps, &event).await {
        Ok(receipt) => {
            tracing::info!("Stored snapshot {}", receipt.file);
            json_response(&StatusCode::OK, &receipt)
        }
        Err(e) => {
            tracing::error!("Failed to upload CSV: {}", e);
            error_response(&e)
        }
    }
}

async fn upload_csv<I: IdGenerator, R: RecordRepository, S: SnapshotStore>(
    deps: &HandlerDeps<I, R, S>,
    event: &Request,
) -> Result<UploadReceipt, HandlerError> {
    let body = event.body();
    if body.is_empty() {
        return Err(HandlerError::Decode("Request body is missing".to_string()));
    }

    let text = decode_payload(body)?;
    let records = parse_records(&text, &deps.id_generator)?;
    tracing::info!("Parsed {} records", records.len());

    let request_id = event
        .lambda_context_ref()
        .map(|context| context.request_id.clone())
        .filter(|id| !id.is_empty())
        .ok_or_else(|| HandlerError::Decode("Invocation has no request id".to_string()))?;
    let file_name = snapshot_name(&request_id);

    deps.snapshot_store.put_snapshot(&file_name, &records).await?;

    // independent puts: a failure here leaves the earlier rows and the snapshot in place
    for record in &records {
        deps.record_repo.put_record(record).await?;
    }

    Ok(UploadReceipt::new(file_name))
}
