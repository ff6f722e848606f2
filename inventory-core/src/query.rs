//! Search filter sent with item listings

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::validate::ValidationError;

/// Wire format for date bounds: `YYYY-MM-DD HH:mm:ss`
pub const BOUND_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Optional filter for `GET /items/`
///
/// Every field is optional. Absent fields are omitted from the query string
/// entirely, never sent as empty strings or nulls.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Inclusive lower bound on the last-updated timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dt_from: Option<String>,
    /// Inclusive upper bound on the last-updated timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dt_to: Option<String>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn since(mut self, bound: NaiveDateTime) -> Self {
        self.dt_from = Some(bound.format(BOUND_FORMAT).to_string());
        self
    }

    pub fn until(mut self, bound: NaiveDateTime) -> Self {
        self.dt_to = Some(bound.format(BOUND_FORMAT).to_string());
        self
    }

    /// Build a filter from raw search-bar input
    ///
    /// Blank inputs mean "no bound". A category of `None` means all
    /// categories.
    pub fn from_search(
        category: Option<&str>,
        from: &str,
        to: &str,
    ) -> Result<Self, ValidationError> {
        let from = parse_bound(from)?;
        let to = parse_bound(to)?;

        if let (Some(from), Some(to)) = (from, to) {
            if from > to {
                return Err(ValidationError::DateRangeInverted);
            }
        }

        let mut params = Self::new();
        if let Some(category) = category.map(str::trim).filter(|c| !c.is_empty()) {
            params = params.category(category);
        }
        if let Some(from) = from {
            params = params.since(from);
        }
        if let Some(to) = to {
            params = params.until(to);
        }
        Ok(params)
    }

    /// True when no filter is applied
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.dt_from.is_none() && self.dt_to.is_none()
    }

    /// Key/value pairs for the query string, omitting absent fields
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(category) = &self.category {
            pairs.push(("category", category.clone()));
        }
        if let Some(from) = &self.dt_from {
            pairs.push(("dt_from", from.clone()));
        }
        if let Some(to) = &self.dt_to {
            pairs.push(("dt_to", to.clone()));
        }
        pairs
    }
}

/// Parse a date bound typed by the user
///
/// Accepts `YYYY-MM-DD HH:mm:ss` or a bare `YYYY-MM-DD` (midnight).
/// Blank input is `Ok(None)`.
pub fn parse_bound(input: &str) -> Result<Option<NaiveDateTime>, ValidationError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(input, BOUND_FORMAT) {
        return Ok(Some(dt));
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(Some)
        .ok_or_else(|| ValidationError::InvalidDate(input.to_string()))
}
