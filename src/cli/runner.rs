//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::http::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let client = Client::with_config(self.client_config()?)?;
        debug!(host = %client.config().host, "Client ready");

        match &self.cli.command {
            Commands::Get { endpoint } => {
                let value: Value = client.get(endpoint).await?;
                print_json(&value)
            }
            Commands::List {
                endpoint,
                max_pages,
            } => {
                let items = match max_pages {
                    Some(max) => fetch_pages(&client, endpoint, *max).await?,
                    None => client.get_list::<Value>(endpoint).await?,
                };
                print_json(&items)
            }
            Commands::Insert { endpoint, data } => {
                let payload = parse_data(data)?;
                print_json(&client.insert(endpoint, &payload).await?)
            }
            Commands::InsertMany { endpoint, data } => {
                let payload = parse_data(data)?;
                if !payload.is_array() {
                    return Err(Error::config("insert-many expects a JSON array"));
                }
                print_json(&client.insert_multiple(endpoint, &payload).await?)
            }
            Commands::Delete { endpoint } => print_json(&client.delete(endpoint).await?),
        }
    }

    /// Build the client config from the config file and flags.
    ///
    /// Flags and environment variables override values from the file.
    pub fn client_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.cli.config {
            Some(path) => ClientConfig::load(path)?,
            None => ClientConfig::new("", ""),
        };

        if let Some(host) = &self.cli.host {
            config.host.clone_from(host);
        }
        if let Some(key) = &self.cli.api_key {
            config.api_key.clone_from(key);
        }
        if self.cli.insecure {
            config.use_tls = false;
        }
        if let Some(secs) = self.cli.timeout {
            config.timeout = Duration::from_secs(secs);
        }

        config.validate()?;
        Ok(config)
    }
}

async fn fetch_pages(client: &Client, endpoint: &str, max_pages: usize) -> Result<Vec<Value>> {
    let mut pager = client.pages::<Value>(endpoint);
    let mut items = Vec::new();
    for _ in 0..max_pages {
        match pager.next_page().await? {
            Some(page) => items.extend(page),
            None => break,
        }
    }
    Ok(items)
}

fn parse_data(data: &str) -> Result<Value> {
    serde_json::from_str(data).map_err(|e| Error::config(format!("Invalid --data JSON: {e}")))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).map_err(Error::Encode)?;
    println!("{out}");
    Ok(())
}
