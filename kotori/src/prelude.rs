//! Convenient re-exports for common usage.

pub use crate::audio::{SpeechOptions, TranscriptionOptions};
pub use crate::client::{Client, ClientBuilder};
pub use crate::embedding::EmbeddingOptions;
pub use crate::error::{Error, Result};
pub use crate::image::ImageOptions;
