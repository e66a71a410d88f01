//! Serve command - run the HTTP API

use std::path::PathBuf;
use std::sync::Arc;

use trivia::adapters::{MemoryStore, SeedData};
use trivia::api::{ApiConfig, TriviaApi};
use trivia::config::ServerConfig;
use trivia::server::tiny_http;

/// Flags accepted by `trivia serve`; each overrides the config file
#[derive(Debug, Default)]
pub struct ServeArgs {
    pub config: Option<PathBuf>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub workers: Option<usize>,
    pub seed: Option<PathBuf>,
}

/// Resolve configuration, build the store and serve until interrupted
pub fn serve(args: &ServeArgs) -> anyhow::Result<()> {
    let config = effective_config(args)?;

    let store = match &config.seed {
        Some(path) => {
            let seed = SeedData::load(path)?;
            log::info!(
                "Loaded {} categories and {} questions from {}",
                seed.categories.len(),
                seed.questions.len(),
                path.display()
            );
            MemoryStore::from_seed(seed)?
        },
        None => {
            log::warn!("No seed file given; starting with an empty question bank");
            MemoryStore::new()
        },
    };

    let api = TriviaApi::new(ApiConfig::new(Arc::new(store)).with_page_size(config.page_size));
    log::debug!("Serving {} items per page", api.page_size());

    println!("Serving trivia API on http://{}/api/v1", config.addr());
    println!("Press Ctrl+C to stop");
    tiny_http::serve(&config.addr(), config.workers, api)
}

fn effective_config(args: &ServeArgs) -> anyhow::Result<ServerConfig> {
    let mut config = ServerConfig::resolve(args.config.as_deref())?;
    if let Some(host) = &args.host {
        config.host.clone_from(host);
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(workers) = args.workers {
        config.workers = workers;
    }
    if let Some(seed) = &args.seed {
        config.seed = Some(seed.clone());
    }
    config.validate()?;
    Ok(config)
}
