#![cfg_attr(docsrs, feature(doc_cfg))]
//! Kotori is a minimal typed client for the `OpenAI` REST API.
//!
//! It exposes five operations — chat completions, image generation,
//! embeddings, audio transcription and speech synthesis — over a single
//! shared dispatch routine. Each call is one POST request with a fixed
//! 60-second timeout; there is no retrying, streaming or pooling logic
//! beyond what reqwest provides by default.
//!
//! # Example
//!
//! ```rust,ignore
//! use kotori::Client;
//! use serde_json::json;
//!
//! let client = Client::new("sk-...")?;
//! let params = json!({
//!     "messages": [{"role": "user", "content": "Hello!"}],
//! });
//! let response = client.chat(params.as_object().cloned().unwrap()).await?;
//! ```
//!
//! # Errors
//!
//! Every operation returns [`error::Result`]. Construction with an
//! empty key fails with [`Error::Configuration`]; connection and
//! timeout problems surface as [`Error::Transport`]; an HTTP status of
//! 400 or above — or a body carrying an `"error"` object even on a
//! success status — surfaces as [`Error::Api`] with the service's
//! message and the status code.
//!
//! # Logging
//!
//! The crate records request activity through [`tracing`] at debug
//! level and installs no subscriber; applications bring their own.

pub mod audio;
pub mod chat;
pub mod client;
pub mod embedding;
pub mod error;
mod http;
pub mod image;
pub mod prelude;

pub use client::{Client, ClientBuilder, OPENAI_API_BASE_URL};
pub use error::{Error, Result};
