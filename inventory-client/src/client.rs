//! HTTP implementation of [`InventoryApi`]

use async_trait::async_trait;
use inventory_core::{Item, ItemDraft, ItemListing, QueryParams};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::RequestBuilder;
use serde_json::Value;
use tracing::{debug, info};

use crate::api::{Deleted, InventoryApi};
use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::wire::{self, CreateRequest, ListResponse, PriceRequest};

/// JSON-over-HTTP client for the inventory service
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Clone, Debug)]
pub struct HttpInventoryClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl HttpInventoryClient {
    pub fn new(config: ClientConfig) -> ApiResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn items_url(&self) -> String {
        self.config.url("/items/")
    }

    fn item_url(&self, id: &str, suffix: &str) -> String {
        self.config
            .url(&format!("/items/{}/{}", urlencoding::encode(id), suffix))
    }

    /// Send a request and decode a JSON body, mapping non-2xx to an error
    ///
    /// A success with an empty body (e.g. `204 No Content`) decodes to
    /// `Value::Null`.
    async fn send_json(&self, request: RequestBuilder) -> ApiResult<Value> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            debug!(status = status.as_u16(), "Empty response body");
            return Ok(Value::Null);
        }
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl InventoryApi for HttpInventoryClient {
    async fn try_list_items(&self, filter: Option<&QueryParams>) -> ApiResult<ItemListing> {
        let pairs = filter.map(QueryParams::query_pairs).unwrap_or_default();
        info!(filter = ?pairs, "GET /items/");

        let body = self
            .send_json(self.http.get(self.items_url()).query(&pairs))
            .await?;
        let response: ListResponse = serde_json::from_value(body)?;
        let listing = response.into_listing();

        debug!(count = listing.items.len(), "Items loaded");
        Ok(listing)
    }

    async fn create_item(&self, draft: &ItemDraft) -> ApiResult<Item> {
        info!(name = %draft.name, category = %draft.category, "POST /items/");

        let body = self
            .send_json(
                self.http
                    .post(self.items_url())
                    .json(&CreateRequest::from(draft)),
            )
            .await?;
        Ok(wire::normalize_created(&body, draft))
    }

    async fn update_item_price(&self, id: &str, price: f64) -> ApiResult<Item> {
        info!(id, price, "PUT /items/{{id}}/price/");

        let body = self
            .send_json(
                self.http
                    .put(self.item_url(id, "price/"))
                    .json(&PriceRequest { price }),
            )
            .await?;
        Ok(wire::normalize_updated(&body, id, price))
    }

    async fn delete_item(&self, id: &str) -> ApiResult<Deleted> {
        info!(id, "DELETE /items/{{id}}/");

        let body = self.send_json(self.http.delete(self.item_url(id, ""))).await?;
        Ok(Deleted {
            status: wire::status_of(&body).unwrap_or_else(|| "success".to_string()),
            deleted_id: wire::deleted_id_of(&body).unwrap_or_else(|| id.to_string()),
        })
    }
}
