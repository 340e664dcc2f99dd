//! Request metadata used for identity resolution.

use std::convert::Infallible;
use std::net::SocketAddr;

use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::header::USER_AGENT;
use axum::http::request::Parts;
use axum::http::HeaderMap;

use couponhub_service::RequestMetadata;

/// Forwarding headers, peer address, and user agent of the request.
///
/// The peer address is present only when the server was started with
/// connect info.
#[derive(Debug, Clone)]
pub struct ClientMetadata(pub RequestMetadata);

fn header(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(String::from)
}

impl<S> FromRequestParts<S> for ClientMetadata
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| *addr);

        Ok(ClientMetadata(RequestMetadata {
            forwarded_for: header(&parts.headers, "x-forwarded-for"),
            real_ip: header(&parts.headers, "x-real-ip"),
            peer,
            user_agent: header(&parts.headers, USER_AGENT.as_str()),
        }))
    }
}
