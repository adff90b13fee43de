use quotes_core::service::CatalogService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the catalog shares one store across clones.
#[derive(Clone)]
pub struct AppState {
    /// Validation and storage for quotes.
    pub catalog: CatalogService,
}

impl AppState {
    /// State backed by a fresh, empty in-memory store.
    pub fn in_memory() -> Self {
        Self {
            catalog: CatalogService::in_memory(),
        }
    }
}
