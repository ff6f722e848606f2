//! Command-line interface

use std::fmt::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use inventory_client::{ClientConfig, InventoryApi};
use inventory_core::{format_price, format_timestamp, ItemListing, QueryParams};

/// Browse and edit an inventory served over REST
#[derive(Parser, Debug)]
#[command(name = "inventory", version)]
#[command(about = "Terminal UI for an inventory REST service")]
pub struct Cli {
    /// Base URL of the inventory service
    #[arg(long, env = ClientConfig::ENV_VAR, default_value = ClientConfig::DEFAULT_BASE_URL)]
    pub api_url: String,

    /// Where to write logs (filter with RUST_LOG)
    #[arg(long, default_value = "inventory-tui.log")]
    pub log_file: PathBuf,

    /// Use a built-in sample inventory instead of the service
    #[arg(long)]
    pub demo: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Interactive UI (the default)
    Tui,

    /// Print items and stats
    List {
        /// Only items in this category
        #[arg(long)]
        category: Option<String>,

        /// Updated at or after (YYYY-MM-DD [HH:mm:ss])
        #[arg(long)]
        from: Option<String>,

        /// Updated at or before (YYYY-MM-DD [HH:mm:ss])
        #[arg(long)]
        to: Option<String>,

        /// Print the listing as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the distinct categories
    Categories,
}

/// Fetch a listing for `list`; failures print as an empty inventory
pub async fn list_report(
    api: &dyn InventoryApi,
    category: Option<&str>,
    from: Option<&str>,
    to: Option<&str>,
    json: bool,
) -> anyhow::Result<String> {
    let params = QueryParams::from_search(category, from.unwrap_or_default(), to.unwrap_or_default())
        .context("invalid filter")?;
    let filter = (!params.is_empty()).then_some(params);

    let listing = api.list_items(filter.as_ref()).await;
    if json {
        return serde_json::to_string_pretty(&listing).context("encoding listing");
    }
    Ok(format_listing(&listing))
}

/// Fetch the category set for `categories`, one per line
pub async fn categories_report(api: &dyn InventoryApi) -> String {
    let mut out = String::new();
    for category in api.list_categories().await {
        out.push_str(&category);
        out.push('\n');
    }
    out
}

pub fn format_listing(listing: &ItemListing) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<32} {:<16} {:>12}  {}",
        "NAME", "CATEGORY", "PRICE", "LAST UPDATED"
    );
    for item in &listing.items {
        let _ = writeln!(
            out,
            "{:<32} {:<16} {:>12}  {}",
            item.name,
            item.category,
            format_price(item.price),
            format_timestamp(&item.last_updated_dt)
        );
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Total items: {}", listing.stats.total_items);
    let _ = writeln!(out, "Total value: {}", format_price(listing.stats.total_value));
    out
}
