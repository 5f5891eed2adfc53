use lambda_http::{http::StatusCode, tracing, Error, IntoResponse, Request};
use shared::core::RecordRepository;
use shared::utils::{error_response, json_response};

pub(crate) struct HandlerDeps<R: RecordRepository> {
    pub record_repo: R,
}

#[tracing::instrument(skip(deps, event))]
pub(crate) async fn function_handler<R: RecordRepository>(
    deps: &HandlerDeps<R>,
    event: Request,
) -> Result<impl IntoResponse, Error> {
    tracing::info!("Received {} {}", event.method(), event.uri().path());

    match deps.record_repo.scan_items().await {
        Ok(items) => json_response(&StatusCode::OK, &items),
        Err(e) => {
            tracing::error!("Failed to scan items: {}", e);
            error_response(&e)
        }
    }
}
