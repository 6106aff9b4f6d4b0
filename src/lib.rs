/// mailproxy - thin Lambda proxies in front of the addy.io alias API and the
/// Auchan newsletter API.
///
/// Each Lambda in this crate is a single-shot, stateless transform: it
/// validates one field from the inbound event, builds the payload the
/// upstream API expects, issues exactly one HTTP call carrying the configured
/// credential, and maps the outcome into an API Gateway response envelope.
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda for serverless execution (one binary per handler)
/// - reqwest for the single outbound HTTP call per invocation
/// - Tokio for the async runtime
///
/// There is no shared state between invocations and no retry or queuing
/// layer; a failed upstream call fails that invocation only.
// Module declarations
pub mod api;
pub mod clients;
pub mod core;
pub mod errors;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called once at the start of
/// each Lambda binary.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
