use crate::domain::frequency_table::FrequencyTable;

use super::{extract_body, ExtractError, FrequencyAnalyzer, PageFetcher};

/// Fetch, extract and count, one page per call.
pub struct Pipeline {
    fetcher: PageFetcher,
    analyzer: FrequencyAnalyzer,
}

impl Pipeline {
    pub fn new(fetcher: PageFetcher, analyzer: FrequencyAnalyzer) -> Self {
        Pipeline { fetcher, analyzer }
    }

    pub async fn analyze(&self, url: &str) -> Result<FrequencyTable, ExtractError> {
        let page = self.fetcher.fetch(url).await;
        if page.is_empty() {
            log::info!("Empty page for {}, nothing to count", url);
            return Ok(FrequencyTable::default());
        }

        let body = extract_body(&page)?;
        let table = self.analyzer.analyze(&body);
        log::info!("Counted {} top words on {}", table.len(), url);

        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        configuration::FetcherSettings,
        services::{FrequencyAnalyzer, PageFetcher},
    };

    use super::Pipeline;

    #[tokio::test]
    async fn unreachable_url_gives_empty_table() {
        let settings = FetcherSettings {
            timeout_secs: 2,
            ..FetcherSettings::default()
        };
        let pipeline = Pipeline::new(
            PageFetcher::new(&settings).unwrap(),
            FrequencyAnalyzer::default(),
        );

        let table = pipeline.analyze("http://127.0.0.1:9/article").await.unwrap();

        assert!(table.is_empty());
    }
}
