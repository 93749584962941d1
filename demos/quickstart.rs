//! Walks through the cache contracts against the default memory store.
//!
//! Run with `cargo run --example quickstart`; set `RUST_LOG` to change verbosity.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use object_cache::{spawn_cleanup_task, Cache, CacheError, Config, MemoryStore};

#[derive(Debug, Clone)]
struct Profile {
    name: String,
    visits: u32,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "object_cache=debug,quickstart=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: name={}, cleanup_interval={}s",
        config.name, config.cleanup_interval
    );

    let store = Arc::new(MemoryStore::from_config(&config));
    let cleanup_handle = spawn_cleanup_task(store.clone(), config.cleanup_interval);
    let cache = Cache::builder().store(store.clone()).build()?;

    cache.add("greeting", "hello".to_string(), 60)?;
    cache.add(
        "profile:ada",
        Profile {
            name: "Ada".to_string(),
            visits: 3,
        },
        1,
    )?;

    let greeting: String = cache.get("greeting")?;
    info!("greeting = {}", greeting);

    let profile: Profile = cache.get("profile:ada")?;
    info!("profile = {} ({} visits)", profile.name, profile.visits);

    if let Err(e) = cache.add("greeting", "bonjour".to_string(), 60) {
        warn!("second add refused: {}", e);
    }
    if let Err(e) = cache.get::<u32>("greeting") {
        warn!("typed lookup refused: {}", e);
    }

    tokio::time::sleep(Duration::from_millis(2500)).await;
    match cache.get::<Profile>("profile:ada") {
        Err(CacheError::NotFound(key)) => info!("{} expired", key),
        other => warn!("unexpected lookup result: {:?}", other.map(|p| p.name)),
    }

    cache.remove("greeting")?;
    info!("stats = {:?}, entries left = {}", cache.stats(), store.len()?);

    cleanup_handle.abort();
    Ok(())
}
