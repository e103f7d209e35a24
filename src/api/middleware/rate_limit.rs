//! Per-IP rate limiting using a token bucket.
//!
//! This is the coarse throttle for the whole HTTP surface; the login
//! endpoint additionally has its own fixed-window failed-attempt tracker
//! in the application layer.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Token-bucket layer keyed by the socket peer address.
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
fn layer(
    per_second: u64,
    burst: u32,
) -> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(per_second)
            .burst_size(burst)
            .finish()
            .unwrap(),
    );

    GovernorLayer::new(governor_conf)
}

/// Rate limiter for the public endpoints (login, registration, product
/// intake, health probes). Generous burst for storefront clients that
/// fetch several resources at once.
pub fn public_layer()
-> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    layer(2, 100)
}

/// Stricter rate limiter for the authenticated catalog, order, and user
/// endpoints.
pub fn api_layer()
-> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    layer(1, 10)
}
