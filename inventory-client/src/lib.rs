//! REST client for the inventory service
//!
//! [`InventoryApi`] is the seam between the UI and the remote store. Two
//! implementations ship with the crate:
//!
//! - [`HttpInventoryClient`]: talks JSON over HTTP with `reqwest`
//! - [`MemoryInventory`]: an in-process store used by tests and `--demo`
//!
//! # Fail-soft reads, fail-loud writes
//!
//! The `try_*` methods and all writes return [`ApiResult`]. The plain
//! `list_items` / `list_categories` methods degrade to an empty result and
//! log the failure instead, so a caller that only needs something to show
//! never has to handle errors.
//!
//! ```ignore
//! let client = HttpInventoryClient::new(ClientConfig::new("http://localhost:8000"))?;
//!
//! // Fail-soft: empty listing if the server is down
//! let listing = client.list_items(None).await;
//!
//! // Fail-loud: the caller decides what to do with the error
//! let item = client.create_item(&draft).await?;
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod memory;
pub mod wire;

pub use api::{Deleted, InventoryApi};
pub use client::HttpInventoryClient;
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult};
pub use memory::MemoryInventory;
