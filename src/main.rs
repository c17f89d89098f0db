//! cachebuf - Cache command buffer fixtures
//!
//! Writes the insert/get/remove fixture and optionally replays it against an
//! external cache process.

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cachebuf::buffer::{BufferEncoder, CommandBuffer, RECORD_LEN};
use cachebuf::codec::{load_fixture, save_fixture, Width};
use cachebuf::transport::{replay, ProcessTransport};
use cachebuf::Config;

/// Main entry point for the fixture generator.
///
/// # Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Generate one batch per command (insert, get, remove)
/// 4. Save the batch as a hex fixture and reload it with strict width
/// 5. Replay the fixture through `CACHE_BINARY` when configured
#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cachebuf=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: fixture={}, buffer_count={}, ttl={}s, payload_mode={:?}",
        config.fixture_path.display(),
        config.buffer_count,
        config.ttl,
        config.payload_mode
    );

    let mut encoder = BufferEncoder::system(config.ttl);
    let batch = encoder
        .scenario(config.buffer_count)
        .context("failed to generate buffers")?;
    let records = batch
        .iter()
        .map(CommandBuffer::to_bytes)
        .collect::<cachebuf::Result<Vec<_>>>()
        .context("failed to assemble records")?;

    save_fixture(&config.fixture_path, &records)
        .with_context(|| format!("failed to write {}", config.fixture_path.display()))?;

    let reloaded = load_fixture(&config.fixture_path, Width::Fixed(RECORD_LEN))
        .with_context(|| format!("failed to read {}", config.fixture_path.display()))?;
    for (index, record) in reloaded.iter().enumerate() {
        let buffer = CommandBuffer::from_bytes(record)
            .with_context(|| format!("record {} does not parse", index))?;
        info!("record {}: {}", index, serde_json::to_string(&buffer.summary())?);
    }

    let Some(binary) = config.cache_binary.as_ref() else {
        info!("CACHE_BINARY not set, skipping replay");
        return Ok(());
    };

    let mut transport = ProcessTransport::new(binary);
    let report = replay(&mut transport, &reloaded, config.payload_mode).await;
    println!("{}", serde_json::to_string_pretty(&report)?);

    if let Some(index) = report.failed_at {
        anyhow::bail!(
            "replay failed at record {}: {}",
            index,
            report.error.unwrap_or_default()
        );
    }

    Ok(())
}
