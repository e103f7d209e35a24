//! Request/response tracing.

use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// `TraceLayer` configured for this service: one INFO span per request
/// (method, path, HTTP version) and an INFO line on response with status
/// and latency in milliseconds.
///
/// ```text
/// INFO request{method=POST uri=/shop/orders version=HTTP/1.1}: Response 200 OK in 12ms
/// ```
pub fn layer()
-> TraceLayer<tower_http::classify::SharedClassifier<tower_http::classify::ServerErrorsAsFailures>>
{
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}
