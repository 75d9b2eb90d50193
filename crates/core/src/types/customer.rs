//! Customer name captured by the welcome prompt.
//!
//! The name only personalizes the header greeting. It is never validated
//! against anything and never trusted.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum length of a customer name, in characters.
pub const MAX_CUSTOMER_NAME_CHARS: usize = 20;

/// Session key holding the customer's random session UUID.
pub const SESSION_UUID_KEY: &str = "padoca_session_uuid";

/// Session key holding the customer's display name.
pub const SESSION_NAME_KEY: &str = "padoca_session_name";

/// Errors when accepting a customer name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CustomerNameError {
    #[error("name is required")]
    Empty,
    #[error("name must be at most {MAX_CUSTOMER_NAME_CHARS} characters")]
    TooLong,
}

/// A trimmed, non-empty customer name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CustomerName(String);

impl CustomerName {
    /// Parse a name as typed into the welcome prompt.
    ///
    /// # Errors
    ///
    /// Returns `CustomerNameError` if the trimmed name is empty or too long.
    pub fn parse(input: &str) -> Result<Self, CustomerNameError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(CustomerNameError::Empty);
        }
        if trimmed.chars().count() > MAX_CUSTOMER_NAME_CHARS {
            return Err(CustomerNameError::TooLong);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The full name as entered (trimmed).
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First word of the name, used in "Olá, {first_name}".
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.0.split_whitespace().next().unwrap_or(&self.0)
    }
}

impl TryFrom<String> for CustomerName {
    type Error = CustomerNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CustomerName> for String {
    fn from(name: CustomerName) -> Self {
        name.0
    }
}

impl fmt::Display for CustomerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
