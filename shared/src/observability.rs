use tracing_subscriber::EnvFilter;

// HTTP and TLS internals of the AWS SDK are far too chatty at info.
const QUIET_DIRECTIVES: &str = "hyper=off,h2=off,rustls=off,aws_smithy_runtime=warn";

/// Installs the JSON log subscriber used by every Lambda in the workspace.
///
/// The level comes from `AWS_LAMBDA_LOG_LEVEL` (set by the Lambda advanced
/// logging controls), then `RUST_LOG`, then defaults to `info`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(log_filter())
        .with_target(false)
        .with_current_span(true)
        .without_time()
        .init();
}

fn log_filter() -> EnvFilter {
    let level = std::env::var("AWS_LAMBDA_LOG_LEVEL")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "info".to_string());

    EnvFilter::new(format!("{},{}", directive_level(&level), QUIET_DIRECTIVES))
}

// Lambda log levels include FATAL, which tracing has no equivalent for.
fn directive_level(level: &str) -> String {
    match level.to_lowercase().as_str() {
        "fatal" => "error".to_string(),
        other => other.to_string(),
    }
}
