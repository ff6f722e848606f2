//! Client-side validation applied before any write request

use thiserror::Error;

use crate::item::ItemDraft;

pub const MAX_NAME_LEN: usize = 100;
pub const MAX_CATEGORY_LEN: usize = 50;
pub const MIN_PRICE: f64 = 0.01;

/// A user input that cannot be sent to the API
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter item name")]
    NameRequired,

    #[error("Name must be at most {max} characters")]
    NameTooLong { max: usize },

    #[error("Please enter category")]
    CategoryRequired,

    #[error("Category must be at most {max} characters")]
    CategoryTooLong { max: usize },

    #[error("Please enter price")]
    PriceRequired,

    #[error("Invalid price: {0}")]
    PriceInvalid(String),

    #[error("Minimum price is SGD 0.01")]
    PriceTooLow,

    #[error("Invalid date: {0} (use YYYY-MM-DD HH:mm:ss)")]
    InvalidDate(String),

    #[error("Start date is after end date")]
    DateRangeInverted,
}

/// Round to two decimal places
pub fn round_price(price: f64) -> f64 {
    (price * 100.0).round() / 100.0
}

pub fn validate_name(name: &str) -> Result<String, ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::NameRequired);
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::NameTooLong { max: MAX_NAME_LEN });
    }
    Ok(name.to_string())
}

pub fn validate_category(category: &str) -> Result<String, ValidationError> {
    let category = category.trim();
    if category.is_empty() {
        return Err(ValidationError::CategoryRequired);
    }
    if category.chars().count() > MAX_CATEGORY_LEN {
        return Err(ValidationError::CategoryTooLong {
            max: MAX_CATEGORY_LEN,
        });
    }
    Ok(category.to_string())
}

/// Check a numeric price and round it to two decimals
pub fn validate_price(price: f64) -> Result<f64, ValidationError> {
    if !price.is_finite() {
        return Err(ValidationError::PriceInvalid(price.to_string()));
    }
    let rounded = round_price(price);
    if rounded < MIN_PRICE {
        return Err(ValidationError::PriceTooLow);
    }
    Ok(rounded)
}

/// Parse a price typed by the user
///
/// Everything except digits, `.` and `-` is stripped first, so `SGD 9.99`
/// and `9.99` are the same input.
pub fn parse_price(input: &str) -> Result<f64, ValidationError> {
    let cleaned: String = input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    if cleaned.is_empty() {
        return Err(ValidationError::PriceRequired);
    }

    let price: f64 = cleaned
        .parse()
        .map_err(|_| ValidationError::PriceInvalid(input.trim().to_string()))?;
    validate_price(price)
}

impl ItemDraft {
    /// Validate raw form input into a draft ready for submission
    pub fn parse(name: &str, category: &str, price: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            name: validate_name(name)?,
            category: validate_category(category)?,
            price: parse_price(price)?,
        })
    }
}
