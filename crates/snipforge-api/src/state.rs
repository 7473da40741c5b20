use std::sync::Arc;

use snipforge_llm::{ModelRoster, OpenRouterClient};
use snipforge_store::StoreHandle;

/// Shared state for every route handler
///
/// The store handle is always present; the LLM client is optional so the
/// rest of the API works without an OpenRouter key (generation answers 503).
#[derive(Clone)]
pub struct AppState {
    pub store: StoreHandle,
    pub llm: Option<Arc<OpenRouterClient>>,
    pub roster: ModelRoster,
}

impl AppState {
    /// Build state around an open store, with generation disabled
    pub fn new(store: StoreHandle) -> Self {
        Self {
            store,
            llm: None,
            roster: ModelRoster::default(),
        }
    }

    /// Enable generation with the given client
    pub fn with_llm(mut self, llm: Arc<OpenRouterClient>) -> Self {
        self.llm = Some(llm);
        self
    }
}
