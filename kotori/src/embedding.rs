//! Embedding creation.

use serde_json::{Map, Value, json};

use crate::client::Client;
use crate::error::Result;
use crate::http::endpoints;

/// Model used when [`EmbeddingOptions`] carries none.
pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-3-small";

/// Options for [`Client::create_embedding`].
#[derive(Debug, Clone, Default)]
pub struct EmbeddingOptions {
    model: Option<String>,
}

impl EmbeddingOptions {
    /// Create empty options; defaults apply at request time.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the model (e.g. "text-embedding-3-small").
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

fn build_payload(input: &str, options: &EmbeddingOptions) -> Map<String, Value> {
    let mut fields = Map::new();
    fields.insert("input".to_owned(), json!(input));
    fields.insert(
        "model".to_owned(),
        json!(options.model.as_deref().unwrap_or(DEFAULT_EMBEDDING_MODEL)),
    );
    fields
}

impl Client {
    /// Create an embedding for a text input.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`](crate::Error::Transport),
    /// [`Error::Api`](crate::Error::Api) or
    /// [`Error::Decode`](crate::Error::Decode) as described in the
    /// crate-level docs.
    pub async fn create_embedding(
        &self,
        input: impl AsRef<str>,
        options: EmbeddingOptions,
    ) -> Result<Map<String, Value>> {
        let payload = build_payload(input.as_ref(), &options);
        self.send_json(endpoints::EMBEDDINGS, payload).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_model_applies() {
        let payload = build_payload("some text", &EmbeddingOptions::new());
        assert_eq!(payload["input"], json!("some text"));
        assert_eq!(payload["model"], json!(DEFAULT_EMBEDDING_MODEL));
        assert_eq!(payload.len(), 2);
    }

    #[test]
    fn explicit_model_is_kept() {
        let options = EmbeddingOptions::new().with_model("text-embedding-3-large");
        let payload = build_payload("some text", &options);
        assert_eq!(payload["model"], json!("text-embedding-3-large"));
    }
}
