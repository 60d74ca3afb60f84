//! # Streaming Comebacks – Real-time Example
//!
//! Profiles the input with a background context probe, then streams five
//! stylized responses as they are recovered from the live token stream.
//! Records arrive paced, never faster than the configured cadence, and the
//! call transparently falls back across models and endpoints on transient
//! failure.
//!
//! ```bash
//! export GEMINI_API_KEY=…                 # mandatory
//! export RIPOSTE_PROXY_URL=https://…      # optional second endpoint
//! cargo run -p riposte --example stream_comebacks -- "your input here"
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

    // 1. Primary endpoint, plus an optional wire-compatible proxy as fallback.
    let mut backends = vec![GeminiAdapterBuilder::new_from_env().build()?];
    if let Ok(proxy) = std::env::var("RIPOSTE_PROXY_URL") {
        backends.push(
            GeminiAdapterBuilder::new_from_env()
                .with_base_url(proxy)
                .build()?,
        );
    }
    let client = RiposteClient::new(backends, FallbackConfig::default())?;

    let input = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "My logic is flawless, you simply cannot follow it.".to_owned());

    // 2. Background probe; an empty profile just means less ammunition.
    let profile = service::infer_context(&client, &input).await;
    if !profile.is_empty() {
        println!("profile: {profile}");
    }
    let background = (!profile.is_empty()).then_some(profile.as_str());

    // 3. Stream the responses.
    let mut stream = service::stream_comebacks(&client, &input, Style::LogicTwist, background);
    while let Some(record) = stream.next().await {
        match record {
            Ok(record) => println!("[{} | {:>3}] {}", record.style, record.attack_power, record.content),
            Err(err) => {
                eprintln!("generation failed: {err}");
                break;
            }
        }
    }

    Ok(())
}
