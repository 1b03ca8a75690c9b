//! Image generation.

use serde_json::{Map, Value, json};

use crate::client::Client;
use crate::error::Result;
use crate::http::endpoints;

/// Model used when [`ImageOptions`] carries none.
pub const DEFAULT_IMAGE_MODEL: &str = "dall-e-3";
/// Image size used when [`ImageOptions`] carries none.
pub const DEFAULT_IMAGE_SIZE: &str = "1024x1024";
/// Number of images generated when [`ImageOptions`] carries no count.
pub const DEFAULT_IMAGE_COUNT: u32 = 1;

/// Options for [`Client::generate_image`].
///
/// Values are passed through verbatim; the service rejects unsupported
/// sizes or model ids.
#[derive(Debug, Clone, Default)]
pub struct ImageOptions {
    n: Option<u32>,
    size: Option<String>,
    model: Option<String>,
}

impl ImageOptions {
    /// Create empty options; defaults apply at request time.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of images to generate.
    #[must_use]
    pub const fn with_n(mut self, n: u32) -> Self {
        self.n = Some(n);
        self
    }

    /// Set the image size (e.g. "1024x1024").
    #[must_use]
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    /// Set the model (e.g. "dall-e-3").
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

fn build_payload(prompt: &str, options: &ImageOptions) -> Map<String, Value> {
    let mut fields = Map::new();
    fields.insert(
        "model".to_owned(),
        json!(options.model.as_deref().unwrap_or(DEFAULT_IMAGE_MODEL)),
    );
    fields.insert("prompt".to_owned(), json!(prompt));
    fields.insert(
        "n".to_owned(),
        json!(options.n.unwrap_or(DEFAULT_IMAGE_COUNT)),
    );
    fields.insert(
        "size".to_owned(),
        json!(options.size.as_deref().unwrap_or(DEFAULT_IMAGE_SIZE)),
    );
    fields
}

impl Client {
    /// Generate images from a text prompt.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let response = client
    ///     .generate_image("a cat", ImageOptions::new().with_n(2))
    ///     .await?;
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`](crate::Error::Transport),
    /// [`Error::Api`](crate::Error::Api) or
    /// [`Error::Decode`](crate::Error::Decode) as described in the
    /// crate-level docs.
    pub async fn generate_image(
        &self,
        prompt: impl AsRef<str>,
        options: ImageOptions,
    ) -> Result<Map<String, Value>> {
        let payload = build_payload(prompt.as_ref(), &options);
        self.send_json(endpoints::IMAGE_GENERATIONS, payload).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_options_are_empty() {
        let payload = build_payload("a cat", &ImageOptions::new());
        assert_eq!(payload["model"], json!(DEFAULT_IMAGE_MODEL));
        assert_eq!(payload["prompt"], json!("a cat"));
        assert_eq!(payload["n"], json!(1));
        assert_eq!(payload["size"], json!(DEFAULT_IMAGE_SIZE));
        assert_eq!(payload.len(), 4);
    }

    #[test]
    fn explicit_count_is_kept() {
        let payload = build_payload("a cat", &ImageOptions::new().with_n(2));
        assert_eq!(payload["n"], json!(2));
        assert_eq!(payload["model"], json!("dall-e-3"));
        assert_eq!(payload["size"], json!("1024x1024"));
    }

    #[test]
    fn explicit_options_are_kept() {
        let options = ImageOptions::new()
            .with_model("dall-e-2")
            .with_size("512x512")
            .with_n(4);
        let payload = build_payload("a dog", &options);
        assert_eq!(payload["model"], json!("dall-e-2"));
        assert_eq!(payload["size"], json!("512x512"));
        assert_eq!(payload["n"], json!(4));
    }
}
