//! Speech synthesis example: writes an MP3 to `speech.mp3`.
//!
//! Run with: `cargo run --example speech`
//!
//! Note: Requires OPENAI_API_KEY environment variable to be set.

use kotori::Client;
use kotori::audio::SpeechOptions;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let api_key = std::env::var("OPENAI_API_KEY")?;
    let client = Client::new(api_key)?;

    let audio = client
        .create_speech(
            "Kotori is a small client for the OpenAI API.",
            SpeechOptions::new().with_voice("nova"),
        )
        .await?;

    tokio::fs::write("speech.mp3", &audio).await?;
    println!("wrote {} bytes to speech.mp3", audio.len());

    Ok(())
}
