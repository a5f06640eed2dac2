use reqwest::Client;

use crate::{configuration::FetcherSettings, domain::page::RawPage};

pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new(settings: &FetcherSettings) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(settings.user_agent.clone())
            .timeout(settings.timeout())
            .build()?;

        Ok(PageFetcher { client })
    }

    /// Downloads `url`. Any failure is logged and yields an empty page.
    pub async fn fetch(&self, url: &str) -> RawPage {
        match self.try_fetch(url).await {
            Ok(page) => {
                log::info!("Fetched {} bytes from {}", page.as_str().len(), url);
                page
            }
            Err(e) => {
                match e.status() {
                    Some(status) => log::error!("Got status {} from {}", status, url),
                    None => log::error!("No response from {}, error: {:?}", url, e),
                }
                RawPage::empty()
            }
        }
    }

    async fn try_fetch(&self, url: &str) -> Result<RawPage, reqwest::Error> {
        let res = self.client.get(url).send().await?.error_for_status()?;
        let bytes = res.bytes().await?;

        Ok(RawPage::new(String::from_utf8_lossy(&bytes).into_owned()))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::configuration::FetcherSettings;

    use super::PageFetcher;

    fn fetcher() -> PageFetcher {
        let settings = FetcherSettings {
            timeout_secs: 2,
            ..FetcherSettings::default()
        };
        PageFetcher::new(&settings).unwrap()
    }

    #[tokio::test]
    async fn unreachable_url_yields_empty_page() {
        // Nothing listens on the discard port locally
        let page = fetcher().fetch("http://127.0.0.1:9/").await;

        assert!(page.is_empty());
    }

    #[tokio::test]
    async fn malformed_url_yields_empty_page() {
        let page = fetcher().fetch("not a url").await;

        assert!(page.is_empty());
    }

    #[test]
    fn timeout_comes_from_settings() {
        let settings = FetcherSettings {
            timeout_secs: 7,
            ..FetcherSettings::default()
        };

        assert_eq!(settings.timeout(), Duration::from_secs(7));
    }
}
