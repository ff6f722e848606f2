//! In-process implementation of [`InventoryApi`]
//!
//! Mirrors the service's observable behavior closely enough for workflow
//! tests and for running the UI without a backend (`--demo`): exact-match
//! category filter, inclusive date bounds on the last-updated timestamp,
//! server-side timestamps on create and price update.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime};
use inventory_core::{parse_bound, Item, ItemDraft, ItemListing, QueryParams, Stats};
use tracing::debug;

use crate::api::{Deleted, InventoryApi};
use crate::error::{ApiError, ApiResult};
use crate::wire::now_iso;

/// A thread-safe in-memory inventory
#[derive(Debug, Default)]
pub struct MemoryInventory {
    items: Mutex<Vec<Item>>,
    next_id: AtomicU64,
    unavailable: AtomicBool,
    requests: AtomicU64,
}

impl MemoryInventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with the given items
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items: Mutex::new(items),
            ..Self::default()
        }
    }

    /// A small seeded inventory for demo mode
    pub fn demo() -> Self {
        let seed = [
            ("Claw Hammer", "Tools", 24.9, "2025-01-03T09:15:00+08:00"),
            ("Tape Measure", "Tools", 12.5, "2025-01-05T14:02:11+08:00"),
            ("Cordless Drill", "Power Tools", 189.0, "2025-01-11T10:45:00+08:00"),
            ("Safety Goggles", "Safety", 8.75, "2025-02-01T08:00:00+08:00"),
            ("Work Gloves", "Safety", 6.2, "2025-02-14T16:30:00+08:00"),
            ("Wood Screws (100)", "Fasteners", 4.99, "2025-02-20T11:11:11+08:00"),
        ];
        let items = seed
            .iter()
            .enumerate()
            .map(|(i, (name, category, price, dt))| Item {
                id: format!("demo-{}", i + 1),
                name: name.to_string(),
                category: category.to_string(),
                price: *price,
                last_updated_dt: dt.to_string(),
            })
            .collect();
        Self::with_items(items)
    }

    /// Make every subsequent call fail with [`ApiError::Unavailable`]
    pub fn set_available(&self, available: bool) {
        self.unavailable.store(!available, Ordering::SeqCst);
    }

    /// Snapshot of the stored items
    pub fn items(&self) -> Vec<Item> {
        self.lock().clone()
    }

    /// Number of calls received, including failed ones
    pub fn request_count(&self) -> u64 {
        self.requests.load(Ordering::SeqCst)
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Item>> {
        self.items.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn check_available(&self) -> ApiResult<()> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(ApiError::Unavailable);
        }
        Ok(())
    }

    fn generate_id(&self) -> String {
        let n = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        format!("mem-{n}")
    }
}

/// Parsed filter bounds; an unparseable bound is treated as absent
struct Bounds {
    from: Option<NaiveDateTime>,
    to: Option<NaiveDateTime>,
}

impl Bounds {
    fn of(filter: &QueryParams) -> Self {
        let parse = |bound: &Option<String>| {
            bound
                .as_deref()
                .and_then(|b| parse_bound(b).ok().flatten())
        };
        Self {
            from: parse(&filter.dt_from),
            to: parse(&filter.dt_to),
        }
    }

    fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// Compare in the timestamp's own local time
    fn contains(&self, timestamp: &str) -> bool {
        if self.is_unbounded() {
            return true;
        }
        let Ok(dt) = DateTime::parse_from_rfc3339(timestamp) else {
            return false;
        };
        let local = dt.naive_local();
        self.from.is_none_or(|from| local >= from) && self.to.is_none_or(|to| local <= to)
    }
}

fn matches(item: &Item, filter: &QueryParams, bounds: &Bounds) -> bool {
    let category_ok = filter
        .category
        .as_deref()
        .is_none_or(|category| item.category == category);
    category_ok && bounds.contains(&item.last_updated_dt)
}

#[async_trait]
impl InventoryApi for MemoryInventory {
    async fn try_list_items(&self, filter: Option<&QueryParams>) -> ApiResult<ItemListing> {
        self.check_available()?;

        let items: Vec<Item> = match filter {
            Some(filter) => {
                let bounds = Bounds::of(filter);
                self.lock()
                    .iter()
                    .filter(|item| matches(item, filter, &bounds))
                    .cloned()
                    .collect()
            }
            None => self.lock().clone(),
        };

        debug!(count = items.len(), "Memory listing");
        let stats = Stats::from_items(&items);
        Ok(ItemListing { items, stats })
    }

    async fn create_item(&self, draft: &ItemDraft) -> ApiResult<Item> {
        self.check_available()?;

        let item = Item {
            id: self.generate_id(),
            name: draft.name.clone(),
            category: draft.category.clone(),
            price: draft.price,
            last_updated_dt: now_iso(),
        };
        self.lock().push(item.clone());
        Ok(item)
    }

    async fn update_item_price(&self, id: &str, price: f64) -> ApiResult<Item> {
        self.check_available()?;

        let mut items = self.lock();
        let item = items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| ApiError::NotFound(id.to_string()))?;
        item.price = price;
        item.last_updated_dt = now_iso();
        Ok(item.clone())
    }

    async fn delete_item(&self, id: &str) -> ApiResult<Deleted> {
        self.check_available()?;

        let mut items = self.lock();
        let index = items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| ApiError::NotFound(id.to_string()))?;
        items.remove(index);
        Ok(Deleted {
            status: "success".to_string(),
            deleted_id: id.to_string(),
        })
    }
}
