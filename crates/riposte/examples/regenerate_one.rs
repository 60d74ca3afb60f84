//! # Single-Record Regeneration Example
//!
//! Streams one batch of responses, then asks for a sharpened rewrite of the
//! first record via the schema-constrained single-record path: the same
//! fallback machinery, but exactly one structured record back.
//!
//! ```bash
//! export GEMINI_API_KEY=…   # mandatory
//! cargo run -p riposte --example regenerate_one -- "your input here"
//! ```
//!
//! ---------------------------------------------------------------------------

use futures_util::StreamExt;
use riposte::fallback::FallbackConfig;
use riposte::gemini::GeminiAdapterBuilder;
use riposte::service;
use riposte::types::Style;
use riposte::RiposteClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let backend = GeminiAdapterBuilder::new_from_env().build()?;
    let client = RiposteClient::new(vec![backend], FallbackConfig::default())?;

    let input = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "I only lose because my teammates are bad.".to_owned());

    let mut stream = service::stream_comebacks(&client, &input, Style::Punchy, None);
    let first = match stream.next().await {
        Some(record) => record?,
        None => anyhow::bail!("the stream produced no records"),
    };
    drop(stream); // abandon the rest of the session

    println!("original : [{}] {}", first.style, first.content);

    let rewritten = service::regenerate(&client, &input, &first, None).await?;
    println!("rewritten: [{}] {}", rewritten.style, rewritten.content);

    Ok(())
}
