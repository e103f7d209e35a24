//! Client IP resolution for the login attempt tracker.

use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::{HeaderMap, request::Parts};
use std::convert::Infallible;
use std::net::{IpAddr, SocketAddr};

/// Infallible extractor for the socket peer address.
///
/// Carries `None` when the server was not started with connect-info (e.g.
/// under an in-memory test transport) instead of rejecting the request.
pub struct ClientAddr(pub Option<SocketAddr>);

impl<S> FromRequestParts<S> for ClientAddr
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|info| info.0);

        Ok(ClientAddr(peer))
    }
}

/// Resolves the client address for rate limiting.
///
/// When `behind_proxy` is set, `X-Forwarded-For` (first hop) and
/// `X-Real-IP` are trusted before the socket peer address. Leave it off
/// unless the service sits behind a trusted reverse proxy; the headers are
/// trivially spoofable otherwise.
pub fn client_ip(
    headers: &HeaderMap,
    peer: Option<SocketAddr>,
    behind_proxy: bool,
) -> Option<IpAddr> {
    if behind_proxy {
        if let Some(ip) = forwarded_for(headers) {
            return Some(ip);
        }

        if let Some(ip) = header_ip(headers, "x-real-ip") {
            return Some(ip);
        }
    }

    peer.map(|addr| addr.ip())
}

fn forwarded_for(headers: &HeaderMap) -> Option<IpAddr> {
    let value = headers.get("x-forwarded-for")?.to_str().ok()?;
    value.split(',').next()?.trim().parse().ok()
}

fn header_ip(headers: &HeaderMap, name: &str) -> Option<IpAddr> {
    headers.get(name)?.to_str().ok()?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn peer() -> Option<SocketAddr> {
        Some("10.0.0.1:443".parse().unwrap())
    }

    #[test]
    fn test_peer_address_without_proxy() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_static("1.2.3.4"));

        // Proxy headers must be ignored when not behind a proxy.
        let ip = client_ip(&headers, peer(), false).unwrap();
        assert_eq!(ip, "10.0.0.1".parse::<IpAddr>().unwrap());
    }

    #[test]
    fn test_forwarded_for_first_hop_wins_behind_proxy() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static("1.2.3.4, 5.6.7.8"),
        );

        let ip = client_ip(&headers, peer(), true).unwrap();
        assert_eq!(ip, "1.2.3.4".parse::<IpAddr>().unwrap());
    }

    #[test]
    fn test_real_ip_fallback_behind_proxy() {
        let mut headers = HeaderMap::new();
        headers.insert("x-real-ip", HeaderValue::from_static("9.9.9.9"));

        let ip = client_ip(&headers, peer(), true).unwrap();
        assert_eq!(ip, "9.9.9.9".parse::<IpAddr>().unwrap());
    }

    #[test]
    fn test_garbage_headers_fall_back_to_peer() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_static("not-an-ip"));

        let ip = client_ip(&headers, peer(), true).unwrap();
        assert_eq!(ip, "10.0.0.1".parse::<IpAddr>().unwrap());
    }

    #[test]
    fn test_no_peer_and_no_headers() {
        assert!(client_ip(&HeaderMap::new(), None, true).is_none());
    }
}
