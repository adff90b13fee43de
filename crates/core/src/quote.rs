//! Quote entity and the validation rules applied before a quote reaches the store.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{QuoteId, Timestamp};

/// Entity name used in [`CoreError::NotFound`].
pub const QUOTE_ENTITY: &str = "quote";

/// A stored quote. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub id: QuoteId,
    pub author: String,
    #[serde(rename = "quote")]
    pub text: String,
    pub created_at: Timestamp,
}

/// Caller-supplied payload for creating a quote.
///
/// Carries no id: identifiers are always assigned by the store. Missing
/// fields decode as empty strings so validation reports them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NewQuote {
    pub author: String,
    #[serde(rename = "quote")]
    pub text: String,
}

impl NewQuote {
    pub fn new(author: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            text: text.into(),
        }
    }

    /// Attach a creation timestamp, producing a quote that is ready for the
    /// store. The id is a placeholder until the store assigns one.
    pub fn stamp(self, created_at: Timestamp) -> Quote {
        Quote {
            id: 0,
            author: self.author,
            text: self.text,
            created_at,
        }
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a create payload: both author and text must be non-empty.
pub fn validate_new_quote(input: &NewQuote) -> Result<(), CoreError> {
    validate_author(&input.author)?;
    if input.text.is_empty() {
        return Err(CoreError::InvalidInput(
            "quote text cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Validate an author name used for creation or filtering.
pub fn validate_author(author: &str) -> Result<(), CoreError> {
    if author.is_empty() {
        return Err(CoreError::InvalidInput(
            "author cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Validate a quote id supplied by a caller. Ids start at 1.
pub fn validate_quote_id(id: QuoteId) -> Result<(), CoreError> {
    if id <= 0 {
        return Err(CoreError::InvalidInput("invalid quote id".to_string()));
    }
    Ok(())
}
