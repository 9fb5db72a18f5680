//! Command-line surface.
//!
//! With no subcommand prodview runs the terminal UI. `prodview list` fetches
//! once and prints one page of the listing, which is handy for scripts and
//! for checking a config without taking over the terminal.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::catalog::{list_page, ListQuery, ListingPage, ProductStore, SortMethod};
use crate::config::{Config, ConfigError};
use crate::gateway::HttpGateway;

#[derive(Debug, Parser)]
#[command(name = "prodview", version, about = "Browse a remote product catalog")]
pub struct Cli {
    /// Path to the config file (default: <config dir>/prodview/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the catalog API base URL
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Override the number of products per page
    #[arg(long, value_name = "N")]
    pub page_size: Option<usize>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch once and print a page of the listing
    List(ListArgs),
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Case-insensitive title/description search
    #[arg(long, value_name = "Q", default_value = "")]
    pub search: String,

    /// Sort order
    #[arg(long, value_enum, default_value_t = SortMethod::None)]
    pub sort: SortMethod,

    /// Page to print, starting at 1
    #[arg(long, value_name = "N", default_value_t = 1)]
    pub page: usize,
}

impl Cli {
    /// Load the config file and apply command-line overrides.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
        }
        if let Some(page_size) = self.page_size {
            config.ui.page_size = page_size;
        }
        config.validate()?;
        Ok(config)
    }
}

/// Fetch the catalog once and print the requested page to stdout.
pub async fn run_list(config: &Config, args: &ListArgs) -> anyhow::Result<()> {
    let gateway = HttpGateway::new(&config.api)?;
    let mut store = ProductStore::new();
    store.request_fetch(&gateway).await?;

    let page = list_page(
        store.state(),
        &ListQuery {
            search: &args.search,
            sort: args.sort,
            page: args.page.saturating_sub(1),
            page_size: config.ui.page_size,
        },
    );
    let mut stdout = io::stdout().lock();
    write_listing(&mut stdout, &page)?;
    Ok(())
}

pub fn write_listing(out: &mut impl Write, page: &ListingPage<'_>) -> io::Result<()> {
    if page.is_empty() {
        writeln!(out, "No products")?;
        return Ok(());
    }
    for product in &page.items {
        writeln!(out, "{:>6}  {:<40}  ${}", product.id, product.title, product.price)?;
    }
    writeln!(
        out,
        "Page {} of {} ({} products)",
        page.page + 1,
        page.total_pages,
        page.total_items
    )
}
