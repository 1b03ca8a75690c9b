//! Chat completions.

use serde_json::{Map, Value};

use crate::client::Client;
use crate::error::Result;
use crate::http::endpoints;

/// Model used when the caller's parameters omit `model`.
pub const DEFAULT_CHAT_MODEL: &str = "gpt-3.5-turbo";

/// Fill in the default model without overriding a caller-supplied one.
fn apply_defaults(params: &mut Map<String, Value>) {
    params
        .entry("model")
        .or_insert_with(|| Value::String(DEFAULT_CHAT_MODEL.to_owned()));
}

impl Client {
    /// Create a chat completion.
    ///
    /// `params` is the request body as the API expects it and must
    /// include a `messages` list of role/content objects. Any field the
    /// caller supplies is passed through untouched; `model` defaults to
    /// [`DEFAULT_CHAT_MODEL`] when absent. No client-side validation is
    /// performed — unknown fields or model ids are rejected by the
    /// service and surface as [`Error::Api`](crate::Error::Api).
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let params = serde_json::json!({
    ///     "messages": [{"role": "user", "content": "Hello!"}],
    ///     "max_tokens": 150,
    /// });
    /// let response = client.chat(params.as_object().cloned().unwrap()).await?;
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`](crate::Error::Transport),
    /// [`Error::Api`](crate::Error::Api) or
    /// [`Error::Decode`](crate::Error::Decode) as described in the
    /// crate-level docs.
    pub async fn chat(&self, mut params: Map<String, Value>) -> Result<Map<String, Value>> {
        apply_defaults(&mut params);
        self.send_json(endpoints::CHAT_COMPLETIONS, params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn default_model_is_filled_in() {
        let mut body = params(json!({
            "messages": [{"role": "user", "content": "Hello!"}],
        }));
        apply_defaults(&mut body);
        assert_eq!(body["model"], json!(DEFAULT_CHAT_MODEL));
        assert_eq!(
            body["messages"],
            json!([{"role": "user", "content": "Hello!"}])
        );
    }

    #[test]
    fn caller_model_is_not_overridden() {
        let mut body = params(json!({
            "model": "gpt-4o",
            "messages": [{"role": "user", "content": "Hello!"}],
        }));
        apply_defaults(&mut body);
        assert_eq!(body["model"], json!("gpt-4o"));
    }

    #[test]
    fn extra_fields_pass_through() {
        let mut body = params(json!({
            "messages": [],
            "max_tokens": 150,
            "temperature": 0.2,
        }));
        apply_defaults(&mut body);
        assert_eq!(body["max_tokens"], json!(150));
        assert_eq!(body["temperature"], json!(0.2));
        assert_eq!(body.len(), 4);
    }
}
