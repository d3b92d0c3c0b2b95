use std::sync::Arc;

use blockfeed_history::HistoryReader;
use blockfeed_publish::Publisher;

/// Shared, read-only request context.
///
/// Nothing here is mutated across requests: the history boundary is
/// consulted read-only and the publish target is static configuration.
#[derive(Clone)]
pub struct AppState {
    pub history: Arc<dyn HistoryReader>,
    pub publisher: Arc<Publisher>,
}

impl AppState {
    pub fn new(history: Arc<dyn HistoryReader>, publisher: Publisher) -> Self {
        Self {
            history,
            publisher: Arc::new(publisher),
        }
    }
}
