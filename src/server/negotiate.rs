//! Content negotiation between the two response flavors.
//!
//! The default media type serves the hypermedia representation; a vendor
//! media type, reserved for the known front-end client, switches
//! collection routes to the flattened DTO shape.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::convert::Infallible;

/// Default hypermedia media type
pub const HAL_JSON: &str = "application/hal+json";

/// Vendor media type reserved for the bundled front-end client
pub const CLIENT_JSON: &str = "application/vnd.homecatalog.v2+json";

/// Which representation the caller asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseMode {
    /// HAL resources with `_links` (default)
    Hypermedia,
    /// Flattened client shape, plain arrays for collections
    Client,
}

impl<S> FromRequestParts<S> for ResponseMode
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let accept = parts
            .headers
            .get(header::ACCEPT)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("");

        if accept.contains(CLIENT_JSON) {
            Ok(ResponseMode::Client)
        } else {
            Ok(ResponseMode::Hypermedia)
        }
    }
}

fn json_response(media_type: &'static str, body: &impl Serialize) -> Response {
    match serde_json::to_vec(body) {
        Ok(buf) => ([(header::CONTENT_TYPE, media_type)], buf).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "response serialization failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Responder for the hypermedia representation
pub struct Hal<T>(pub T);

impl<T: Serialize> IntoResponse for Hal<T> {
    fn into_response(self) -> Response {
        json_response(HAL_JSON, &self.0)
    }
}

/// Responder for the client-scoped representation
pub struct ClientJson<T>(pub T);

impl<T: Serialize> IntoResponse for ClientJson<T> {
    fn into_response(self) -> Response {
        json_response(CLIENT_JSON, &self.0)
    }
}

/// Serve the same body under whichever media type was negotiated
pub fn respond<T: Serialize>(mode: ResponseMode, body: T) -> Response {
    match mode {
        ResponseMode::Hypermedia => Hal(body).into_response(),
        ResponseMode::Client => ClientJson(body).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;

    async fn mode_for(accept: Option<&str>) -> ResponseMode {
        let mut builder = Request::builder().uri("/api/authors");
        if let Some(accept) = accept {
            builder = builder.header(header::ACCEPT, accept);
        }
        let (mut parts, _) = builder.body(Body::empty()).unwrap().into_parts();
        ResponseMode::from_request_parts(&mut parts, &()).await.unwrap()
    }

    #[tokio::test]
    async fn missing_accept_defaults_to_hypermedia() {
        assert_eq!(mode_for(None).await, ResponseMode::Hypermedia);
    }

    #[tokio::test]
    async fn wildcard_accept_stays_hypermedia() {
        assert_eq!(mode_for(Some("*/*")).await, ResponseMode::Hypermedia);
        assert_eq!(mode_for(Some(HAL_JSON)).await, ResponseMode::Hypermedia);
    }

    #[tokio::test]
    async fn vendor_media_type_selects_client_mode() {
        assert_eq!(mode_for(Some(CLIENT_JSON)).await, ResponseMode::Client);

        // The vendor type wins even in a list
        let listed = format!("{HAL_JSON}, {CLIENT_JSON}");
        assert_eq!(mode_for(Some(&listed)).await, ResponseMode::Client);
    }

    #[tokio::test]
    async fn responders_set_their_media_type() {
        let response = Hal(serde_json::json!({"id": 1})).into_response();
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            HAL_JSON
        );

        let response = ClientJson(serde_json::json!([])).into_response();
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            CLIENT_JSON
        );
    }
}
