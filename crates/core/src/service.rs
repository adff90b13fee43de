//! Catalog service: validation and orchestration in front of a [`QuoteStore`].
//!
//! This is the only component the request-handling layer talks to. Input
//! errors are rejected here before the store is touched.

use std::sync::Arc;

use chrono::Utc;
use rand::Rng;

use crate::error::{CoreError, CoreResult};
use crate::quote::{validate_author, validate_new_quote, validate_quote_id, NewQuote, Quote};
use crate::store::{MemoryQuoteStore, QuoteStore};
use crate::types::QuoteId;

/// Cheaply cloneable handle; clones share the same store.
#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn QuoteStore>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn QuoteStore>) -> Self {
        Self { store }
    }

    /// Service backed by a fresh, empty [`MemoryQuoteStore`].
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryQuoteStore::new()))
    }

    /// Validate the payload, stamp the creation time and store it.
    pub fn create(&self, input: NewQuote) -> CoreResult<Quote> {
        validate_new_quote(&input)?;
        self.store.create(input.stamp(Utc::now()))
    }

    pub fn get_all(&self) -> CoreResult<Vec<Quote>> {
        self.store.get_all()
    }

    pub fn get_by_author(&self, author: &str) -> CoreResult<Vec<Quote>> {
        validate_author(author)?;
        self.store.get_by_author(author)
    }

    pub fn get(&self, id: QuoteId) -> CoreResult<Quote> {
        validate_quote_id(id)?;
        self.store.get_by_id(id)
    }

    /// Pick one stored quote uniformly at random.
    ///
    /// Uses the thread-local generator, which reseeds itself periodically.
    /// Not suitable where unpredictability matters.
    pub fn get_random(&self) -> CoreResult<Quote> {
        let mut quotes = self.store.get_all()?;
        if quotes.is_empty() {
            return Err(CoreError::NoItemsAvailable);
        }
        let idx = rand::rng().random_range(0..quotes.len());
        Ok(quotes.swap_remove(idx))
    }

    /// Delete a quote by id.
    ///
    /// The existence check and the removal are two separate store calls.
    /// If another caller deletes the same id in between, the removal
    /// reports `NotFound` and the store is left consistent.
    pub fn delete(&self, id: QuoteId) -> CoreResult<()> {
        validate_quote_id(id)?;
        self.store.get_by_id(id)?;
        self.store.delete(id)
    }

    /// Number of stored quotes.
    pub fn count(&self) -> CoreResult<usize> {
        self.store.len()
    }
}
