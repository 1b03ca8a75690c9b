//! Shared request dispatch for all API operations.
//!
//! Every domain method builds a payload and funnels it through
//! [`Client::send_request`], which owns the only non-trivial logic in
//! the crate: encoding selection (JSON vs multipart), the
//! binary-response special case for speech synthesis, and the mapping
//! of HTTP status codes and embedded error payloads onto [`Error`].

use bytes::Bytes;
use serde_json::{Map, Value};
use tracing::debug;

use crate::client::Client;
use crate::error::{Error, Result};

pub(crate) mod endpoints {
    //! Endpoint path segments, all POST-only.

    pub(crate) const CHAT_COMPLETIONS: &str = "chat/completions";
    pub(crate) const IMAGE_GENERATIONS: &str = "images/generations";
    pub(crate) const EMBEDDINGS: &str = "embeddings";
    pub(crate) const AUDIO_TRANSCRIPTIONS: &str = "audio/transcriptions";
    pub(crate) const AUDIO_SPEECH: &str = "audio/speech";
}

/// Fallback message when the service's error payload carries none.
const FALLBACK_ERROR_MESSAGE: &str = "An unknown API error occurred.";

/// Request body for a single dispatch.
pub(crate) enum RequestBody {
    /// JSON object serialized with an `application/json` content type.
    Json(Map<String, Value>),
    /// Multipart form; the transport sets the boundary content type.
    Multipart(reqwest::multipart::Form),
}

/// Decoded response from a single dispatch.
pub(crate) enum ApiResponse {
    /// Decoded JSON object returned by JSON endpoints.
    Json(Map<String, Value>),
    /// Raw bytes returned by binary endpoints.
    Binary(Bytes),
}

/// Whether an endpoint returns raw bytes on success.
///
/// Keyed on endpoint identity, not content-type sniffing: only
/// `audio/speech` answers with a binary body, and only at HTTP 200. An
/// error response on that endpoint still carries a JSON payload and
/// takes the decoding path below.
fn is_binary_endpoint(endpoint: &str) -> bool {
    endpoint == endpoints::AUDIO_SPEECH
}

/// Extract the service's error message from a decoded body.
fn error_message(body: &Map<String, Value>) -> String {
    body.get("error")
        .and_then(|err| err.get("message"))
        .and_then(Value::as_str)
        .unwrap_or(FALLBACK_ERROR_MESSAGE)
        .to_owned()
}

impl Client {
    /// Send one POST request and interpret the response.
    ///
    /// Exactly one attempt is made; transport failures and timeouts
    /// surface as [`Error::Transport`] with no retry.
    pub(crate) async fn send_request(
        &self,
        endpoint: &str,
        body: RequestBody,
    ) -> Result<ApiResponse> {
        let url = format!("{}/{}", self.base_url(), endpoint);
        let request = self.http_client().post(&url).bearer_auth(self.api_key());
        let request = match body {
            RequestBody::Json(fields) => request.json(&fields),
            RequestBody::Multipart(form) => request.multipart(form),
        };

        debug!(endpoint, "sending request");
        let response = request.send().await?;
        let status = response.status().as_u16();

        // The binary check runs before any decoding so that a non-200
        // speech response still flows through the JSON error path.
        if is_binary_endpoint(endpoint) && status == 200 {
            let audio = response.bytes().await?;
            debug!(endpoint, bytes = audio.len(), "binary response");
            return Ok(ApiResponse::Binary(audio));
        }

        let raw = response.bytes().await?;
        match serde_json::from_slice::<Map<String, Value>>(&raw) {
            Ok(decoded) => {
                if status >= 400 || decoded.contains_key("error") {
                    return Err(Error::Api {
                        status,
                        message: error_message(&decoded),
                    });
                }
                debug!(endpoint, status, "request succeeded");
                Ok(ApiResponse::Json(decoded))
            }
            Err(_) if status >= 400 => Err(Error::Api {
                status,
                message: FALLBACK_ERROR_MESSAGE.to_owned(),
            }),
            Err(err) => Err(Error::Decode(err)),
        }
    }

    /// Dispatch a JSON-bodied request to a JSON-response endpoint.
    pub(crate) async fn send_json(
        &self,
        endpoint: &str,
        fields: Map<String, Value>,
    ) -> Result<Map<String, Value>> {
        match self.send_request(endpoint, RequestBody::Json(fields)).await? {
            ApiResponse::Json(body) => Ok(body),
            ApiResponse::Binary(_) => Err(Error::Api {
                status: 200,
                message: "expected a JSON response body".to_owned(),
            }),
        }
    }

    /// Dispatch a multipart request to a JSON-response endpoint.
    pub(crate) async fn send_multipart(
        &self,
        endpoint: &str,
        form: reqwest::multipart::Form,
    ) -> Result<Map<String, Value>> {
        match self
            .send_request(endpoint, RequestBody::Multipart(form))
            .await?
        {
            ApiResponse::Json(body) => Ok(body),
            ApiResponse::Binary(_) => Err(Error::Api {
                status: 200,
                message: "expected a JSON response body".to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn only_speech_is_binary() {
        assert!(is_binary_endpoint(endpoints::AUDIO_SPEECH));
        assert!(!is_binary_endpoint(endpoints::AUDIO_TRANSCRIPTIONS));
        assert!(!is_binary_endpoint(endpoints::CHAT_COMPLETIONS));
        assert!(!is_binary_endpoint(endpoints::IMAGE_GENERATIONS));
        assert!(!is_binary_endpoint(endpoints::EMBEDDINGS));
    }

    #[test]
    fn error_message_extracts_nested_field() {
        let body = json!({"error": {"message": "bad request", "type": "invalid_request_error"}});
        let body = body.as_object().cloned().unwrap();
        assert_eq!(error_message(&body), "bad request");
    }

    #[test]
    fn error_message_falls_back_when_absent() {
        let body = json!({"error": {"type": "server_error"}});
        let body = body.as_object().cloned().unwrap();
        assert_eq!(error_message(&body), FALLBACK_ERROR_MESSAGE);

        let empty = Map::new();
        assert_eq!(error_message(&empty), FALLBACK_ERROR_MESSAGE);
    }

    #[test]
    fn error_message_ignores_non_string_message() {
        let body = json!({"error": {"message": 42}});
        let body = body.as_object().cloned().unwrap();
        assert_eq!(error_message(&body), FALLBACK_ERROR_MESSAGE);
    }
}
