//! Basic chat completion example.
//!
//! Run with: `cargo run --example chat`
//!
//! Note: Requires OPENAI_API_KEY environment variable to be set.

use kotori::Client;
use serde_json::json;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let api_key = std::env::var("OPENAI_API_KEY")?;
    let client = Client::new(api_key)?;

    let params = json!({
        "messages": [{"role": "user", "content": "Say hello in one short sentence."}],
        "max_tokens": 50,
    });
    let params = params
        .as_object()
        .cloned()
        .expect("params literal is an object");

    let response = client.chat(params).await?;
    let text = response["choices"][0]["message"]["content"]
        .as_str()
        .unwrap_or("<no content>");
    println!("{text}");

    Ok(())
}
