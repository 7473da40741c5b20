//! Serve command
//!
//! Usage: snipforge serve [--host <HOST>] [--port <PORT>]

use std::path::Path;
use std::sync::Arc;

use clap::Args;
use snipforge_api::{start_server, AppState, ServerConfig};
use snipforge_llm::{LlmConfig, OpenRouterClient};
use snipforge_store::StoreHandle;

use crate::config::{self, DEFAULT_CONFIG_FILE};

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Bind host (default 127.0.0.1, overrides snipforge.toml)
    #[arg(long)]
    pub host: Option<String>,

    /// Bind port (default 8080, overrides snipforge.toml)
    #[arg(short, long)]
    pub port: Option<u16>,
}

/// Execute serve command
pub fn execute(db: &Path, args: ServeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let file_config = config::load(Path::new(DEFAULT_CONFIG_FILE))?;

    let store = StoreHandle::open(db)?;
    let mut state = AppState::new(store);

    match LlmConfig::from_env() {
        Ok(mut llm_config) => {
            // file config fills the referer only when the env did not
            if llm_config.referer == snipforge_llm::config::DEFAULT_REFERER {
                if let Some(app_url) = &file_config.app_url {
                    llm_config.referer = app_url.clone();
                }
            }
            let client = Arc::new(OpenRouterClient::new(llm_config)?);
            state = state.with_llm(client);
        }
        Err(e) => {
            tracing::warn!(error = %e, "generation disabled");
        }
    }

    let config = ServerConfig {
        host: args
            .host
            .or(file_config.host)
            .unwrap_or_else(|| "127.0.0.1".to_string()),
        port: args.port.or(file_config.port).unwrap_or(8080),
    };

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        if let Some(client) = &state.llm {
            if !client.test_connection().await {
                tracing::warn!("OpenRouter is not reachable; generation requests will fail");
            }
        }

        start_server(&config, state).await
    })?;

    Ok(())
}
