//! Back-office form inputs and their validation.
//!
//! Only required-field checks are enforced; everything else is left to the
//! database.

use thiserror::Error;

use crate::catalog::Category;
use crate::store_hours::{StoreHours, TimeOfDay};
use crate::types::{CategoryId, Price};

/// A form failed validation. Messages are shown to the admin verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("O nome é obrigatório.")]
    MissingName,
    #[error("Selecione uma categoria!")]
    MissingCategory,
    #[error("Preço inválido: {0}")]
    InvalidPrice(String),
    #[error("Horário inválido: {0}")]
    InvalidTime(String),
    #[error("Ordem inválida: {0}")]
    InvalidOrder(String),
}

/// Validated category fields for insert or update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryInput {
    pub name: String,
    pub active: bool,
    pub order: i32,
}

impl CategoryInput {
    /// Validate raw form values.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::MissingName` if the name is blank.
    pub fn new(name: &str, active: bool, order: i32) -> Result<Self, ValidationError> {
        Ok(Self {
            name: required_name(name)?,
            active,
            order,
        })
    }

    /// Validate form values where the order is still raw text.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::MissingName` for a blank name and
    /// `ValidationError::InvalidOrder` if the order is not an integer.
    pub fn from_form(name: &str, active: bool, order: &str) -> Result<Self, ValidationError> {
        let name = required_name(name)?;
        let order = order
            .trim()
            .parse::<i32>()
            .map_err(|_| ValidationError::InvalidOrder(order.trim().to_string()))?;
        Ok(Self {
            name,
            active,
            order,
        })
    }
}

/// Build store hours from the settings form.
///
/// # Errors
///
/// Returns `ValidationError::InvalidTime` naming the first bad `HH:MM` value.
pub fn store_hours_input(
    open_time: &str,
    close_time: &str,
    is_open_today: bool,
) -> Result<StoreHours, ValidationError> {
    let parse = |raw: &str| {
        raw.trim()
            .parse::<TimeOfDay>()
            .map_err(|_| ValidationError::InvalidTime(raw.trim().to_string()))
    };

    Ok(StoreHours {
        open_time: parse(open_time)?,
        close_time: parse(close_time)?,
        is_open_today,
    })
}

/// Validated product fields for insert or update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductInput {
    pub category_id: CategoryId,
    pub name: String,
    pub description: String,
    pub price: Price,
    pub image_url: Option<String>,
    pub active: bool,
    pub is_featured: bool,
}

/// Raw product form values before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDraft {
    pub category_id: Option<String>,
    pub name: String,
    pub description: String,
    pub price: String,
    pub image_url: Option<String>,
    pub active: bool,
    pub is_featured: bool,
}

impl ProductDraft {
    /// Validate the draft.
    ///
    /// # Errors
    ///
    /// Returns the first failing check: missing category, missing name, or
    /// an unparseable or negative price.
    pub fn validate(self) -> Result<ProductInput, ValidationError> {
        let category_id = self
            .category_id
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .and_then(|s| s.parse::<CategoryId>().ok())
            .ok_or(ValidationError::MissingCategory)?;
        let name = required_name(&self.name)?;
        let price = Price::parse_input(&self.price)
            .map_err(|e| ValidationError::InvalidPrice(e.to_string()))?;
        let image_url = self
            .image_url
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Ok(ProductInput {
            category_id,
            name,
            description: self.description.trim().to_string(),
            price,
            image_url,
            active: self.active,
            is_featured: self.is_featured,
        })
    }
}

/// Default order for a newly created category: one past the current count.
#[must_use]
pub fn next_category_order(existing: &[Category]) -> i32 {
    i32::try_from(existing.len()).map_or(i32::MAX, |n| n.saturating_add(1))
}

fn required_name(name: &str) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        Err(ValidationError::MissingName)
    } else {
        Ok(trimmed.to_string())
    }
}
