//! Domain types for the inventory client
//!
//! This crate has no I/O. It holds the canonical item representation, the
//! derived statistics, the search filter sent to the API and the validation
//! rules applied before any write request is made.
//!
//! # Core Concepts
//!
//! - **Item**: a single inventory record as the UI sees it
//! - **Stats**: aggregate values derived from a list of items
//! - **QueryParams**: optional category and date-range filter
//! - **ItemDraft**: user input for a new item, validated before submission

pub mod format;
pub mod item;
pub mod query;
pub mod validate;

pub use format::{format_price, format_timestamp, CURRENCY};
pub use item::{categories_of, Item, ItemDraft, ItemListing, Stats};
pub use query::{parse_bound, QueryParams, BOUND_FORMAT};
pub use validate::{
    parse_price, round_price, validate_category, validate_name, validate_price, ValidationError,
    MAX_CATEGORY_LEN, MAX_NAME_LEN, MIN_PRICE,
};
