/// Quote identifiers are assigned by the store, starting at 1.
pub type QuoteId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
