//! Concurrent in-memory quote storage.
//!
//! [`MemoryQuoteStore`] keeps every quote in a single map guarded by a
//! reader/writer lock. Reads share the lock; `create` and `delete` hold it
//! exclusively, so no reader ever observes a half-applied mutation. Every
//! value handed out is a clone, never a reference into the map.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{CoreError, CoreResult};
use crate::quote::{Quote, QUOTE_ENTITY};
use crate::types::QuoteId;

/// Storage primitives used by [`crate::service::CatalogService`].
///
/// Implementations must be safe to call from any number of threads at once.
pub trait QuoteStore: Send + Sync {
    /// Insert a quote, ignoring its `id` and assigning the next unused one.
    /// Returns the stored copy.
    fn create(&self, quote: Quote) -> CoreResult<Quote>;

    /// Snapshot of every stored quote, in no particular order.
    fn get_all(&self) -> CoreResult<Vec<Quote>>;

    /// Snapshot of the quotes whose author matches exactly (case-sensitive).
    fn get_by_author(&self, author: &str) -> CoreResult<Vec<Quote>>;

    fn get_by_id(&self, id: QuoteId) -> CoreResult<Quote>;

    /// Remove a quote. Fails with `NotFound` if it does not exist, including
    /// when it was already deleted.
    fn delete(&self, id: QuoteId) -> CoreResult<()>;

    /// Number of quotes currently stored.
    fn len(&self) -> CoreResult<usize>;

    fn is_empty(&self) -> CoreResult<bool> {
        Ok(self.len()? == 0)
    }
}

struct StoreState {
    quotes: HashMap<QuoteId, Quote>,
    next_id: QuoteId,
}

/// Process-lifetime quote store. Unbounded: nothing is ever evicted.
pub struct MemoryQuoteStore {
    state: RwLock<StoreState>,
}

impl MemoryQuoteStore {
    /// Create an empty store whose first assigned id is 1.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StoreState {
                quotes: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    fn read(&self) -> CoreResult<RwLockReadGuard<'_, StoreState>> {
        self.state
            .read()
            .map_err(|_| CoreError::Internal("quote store lock poisoned".to_string()))
    }

    fn write(&self) -> CoreResult<RwLockWriteGuard<'_, StoreState>> {
        self.state
            .write()
            .map_err(|_| CoreError::Internal("quote store lock poisoned".to_string()))
    }
}

impl Default for MemoryQuoteStore {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteStore for MemoryQuoteStore {
    fn create(&self, mut quote: Quote) -> CoreResult<Quote> {
        let mut state = self.write()?;
        quote.id = state.next_id;
        state.next_id += 1;
        state.quotes.insert(quote.id, quote.clone());
        Ok(quote)
    }

    fn get_all(&self) -> CoreResult<Vec<Quote>> {
        let state = self.read()?;
        Ok(state.quotes.values().cloned().collect())
    }

    fn get_by_author(&self, author: &str) -> CoreResult<Vec<Quote>> {
        let state = self.read()?;
        Ok(state
            .quotes
            .values()
            .filter(|q| q.author == author)
            .cloned()
            .collect())
    }

    fn get_by_id(&self, id: QuoteId) -> CoreResult<Quote> {
        let state = self.read()?;
        state.quotes.get(&id).cloned().ok_or(CoreError::NotFound {
            entity: QUOTE_ENTITY,
            id,
        })
    }

    fn delete(&self, id: QuoteId) -> CoreResult<()> {
        let mut state = self.write()?;
        match state.quotes.remove(&id) {
            Some(_) => Ok(()),
            None => Err(CoreError::NotFound {
                entity: QUOTE_ENTITY,
                id,
            }),
        }
    }

    fn len(&self) -> CoreResult<usize> {
        Ok(self.read()?.quotes.len())
    }
}
