//! Wire records and lenient normalization
//!
//! The service is not consistent about its payloads: names arrive as
//! `item_name` or `name`, prices as numbers or strings, and write responses
//! may carry only a subset of the fields. Everything that comes off the wire
//! goes through [`normalize_item`] before the rest of the app sees it.

use inventory_core::{Item, ItemDraft, ItemListing, Stats};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `GET /items/`
#[derive(Debug, Default, Deserialize)]
pub struct ListResponse {
    #[serde(default)]
    pub items: Vec<Value>,
    #[serde(default)]
    pub total_price: Option<Value>,
}

impl ListResponse {
    pub fn into_listing(self) -> ItemListing {
        let items: Vec<Item> = self.items.iter().map(normalize_item).collect();
        let server_total = self.total_price.as_ref().and_then(number_of);
        let stats = Stats::with_server_total(&items, server_total);
        ItemListing { items, stats }
    }
}

/// Body of `POST /items/`
#[derive(Debug, Serialize)]
pub struct CreateRequest<'a> {
    pub name: &'a str,
    pub category: &'a str,
    pub price: f64,
}

impl<'a> From<&'a ItemDraft> for CreateRequest<'a> {
    fn from(draft: &'a ItemDraft) -> Self {
        Self {
            name: &draft.name,
            category: &draft.category,
            price: draft.price,
        }
    }
}

/// Body of `PUT /items/{id}/price/`
#[derive(Debug, Serialize)]
pub struct PriceRequest {
    pub price: f64,
}

/// Normalize one server record into an [`Item`]
pub fn normalize_item(record: &Value) -> Item {
    let name = string_field(record, "item_name")
        .filter(|name| !name.is_empty())
        .or_else(|| string_field(record, "name"))
        .unwrap_or_default();

    let price = record
        .get("price")
        .or_else(|| record.get("updated_price"))
        .and_then(number_of)
        .map(non_negative)
        .unwrap_or(0.0);

    let last_updated_dt = string_field(record, "last_updated_dt")
        .filter(|dt| !dt.is_empty())
        .unwrap_or_else(now_iso);

    Item {
        id: id_of(record).unwrap_or_default(),
        name,
        category: string_field(record, "category").unwrap_or_default(),
        price,
        last_updated_dt,
    }
}

/// Normalize a create response, filling gaps from the draft that was sent
pub fn normalize_created(record: &Value, draft: &ItemDraft) -> Item {
    let mut item = normalize_item(record);
    if item.name.is_empty() {
        item.name = draft.name.clone();
    }
    if item.category.is_empty() {
        item.category = draft.category.clone();
    }
    if !has_price(record) {
        item.price = draft.price;
    }
    item
}

/// Normalize a price-update response for the item that was updated
pub fn normalize_updated(record: &Value, id: &str, price: f64) -> Item {
    let mut item = normalize_item(record);
    if item.id.is_empty() {
        item.id = id.to_string();
    }
    if !has_price(record) {
        item.price = price;
    }
    item
}

/// The `deleted_id` from a delete response, if present
pub fn deleted_id_of(record: &Value) -> Option<String> {
    string_field(record, "deleted_id").filter(|id| !id.is_empty())
}

/// `status` from a write response, if present
pub fn status_of(record: &Value) -> Option<String> {
    string_field(record, "status")
}

fn has_price(record: &Value) -> bool {
    record
        .get("price")
        .or_else(|| record.get("updated_price"))
        .and_then(number_of)
        .is_some()
}

fn string_field(record: &Value, key: &str) -> Option<String> {
    match record.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn id_of(record: &Value) -> Option<String> {
    string_field(record, "id")
}

/// A number or a numeric string
fn number_of(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    n.is_finite().then_some(n)
}

fn non_negative(price: f64) -> f64 {
    if price < 0.0 {
        0.0
    } else {
        price
    }
}

/// Current local time as RFC 3339, the service's timestamp format
pub(crate) fn now_iso() -> String {
    chrono::Local::now().to_rfc3339()
}
