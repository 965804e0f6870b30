#![allow(missing_docs)]
//! Prints the schema name, version and unique key of a Solr core.
//!
//! ```text
//! cargo run --example show_schema -- --url http://localhost:8983/solr --core techproducts
//! ```
use anyhow::{Context, Result};
use tracing::{info, warn};

use solr_schema::{DEFAULT_BASE_URL, SchemaClient};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().pretty().init();

    let ShowArgs {
        url,
        core,
        username,
        password,
    } = ShowArgs::parse().context("parsing arguments")?;

    let mut client = SchemaClient::new(url, core).context("creating schema client")?;
    if let Some(username) = username {
        client.set_basic_auth(username, password.unwrap_or_default());
    }

    let name = client.name().await.context("fetching schema name")?;
    let version = client.version().await.context("fetching schema version")?;
    let unique_key = client.unique_key().await.context("fetching unique key")?;

    info!(
        name = ?name.get("name"),
        version = ?version.get("version"),
        unique_key = ?unique_key.get("uniqueKey"),
        "schema of {}",
        client.request_url("", None),
    );
    Ok(())
}

#[derive(Debug)]
struct ShowArgs {
    url: String,
    core: String,
    username: Option<String>,
    password: Option<String>,
}

impl ShowArgs {
    fn parse() -> Result<Self> {
        let mut pargs = pico_args::Arguments::from_env();

        let url = pargs
            .opt_value_from_str(["-u", "--url"])
            .context("parsing url argument")?;
        let core = pargs
            .opt_value_from_str(["-c", "--core"])
            .context("parsing core argument")?;
        let username = pargs
            .opt_value_from_str("--username")
            .context("parsing username argument")?;
        let password = pargs
            .opt_value_from_str("--password")
            .context("parsing password argument")?;

        let result = Self {
            url: url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            core: core.unwrap_or_default(),
            username,
            password,
        };

        let remaining = pargs.finish();
        if !remaining.is_empty() {
            warn!(?remaining, "Warning: unused arguments left");
        }
        Ok(result)
    }
}
