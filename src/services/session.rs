use tokio::sync::RwLock;

use crate::domain::frequency_table::FrequencyTable;

#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub url: String,
    pub table: FrequencyTable,
}

/// The most recent analysis shown by the UI. Every submission replaces it
/// wholesale, the last one to finish wins.
#[derive(Default)]
pub struct AnalysisSession {
    current: RwLock<Option<Analysis>>,
}

impl AnalysisSession {
    pub fn new() -> Self {
        AnalysisSession::default()
    }

    pub async fn current(&self) -> Option<Analysis> {
        self.current.read().await.clone()
    }

    pub async fn is_current_url(&self, url: &str) -> bool {
        self.current
            .read()
            .await
            .as_ref()
            .is_some_and(|analysis| analysis.url == url)
    }

    pub async fn replace(&self, url: &str, table: FrequencyTable) {
        *self.current.write().await = Some(Analysis {
            url: url.to_string(),
            table,
        });
    }
}
