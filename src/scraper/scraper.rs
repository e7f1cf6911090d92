// scraper.rs
use crate::scraper::mapper::{map_ads, MappedPage};
use crate::scraper::models::{Category, Listing, ScrapeConfig};
use crate::scraper::ScraperError;
use reqwest::blocking::Client;
use scraper::{Html, Selector};
use serde_json::Value;
use std::time::Duration;

const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

// The upstream never answered slowly enough to need tuning; this just keeps a
// dead page from blocking the run forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct OlxScraper {
    client: Client,
}

/// Everything one run produced: the accumulated rows plus per-page and
/// per-ad skip counts, so the caller can frame success or failure itself.
#[derive(Debug, Default)]
pub struct ScrapeOutcome {
    pub listings: Vec<Listing>,
    pub pages_fetched: usize,
    pub pages_failed: usize,
    pub ads_skipped: usize,
}

impl OlxScraper {
    pub fn new() -> Result<Self, ScraperError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        Ok(Self { client })
    }

    /// Fetch and map every page of the configured listing search, one page at
    /// a time in ascending page order. A failed page is logged and skipped;
    /// it never aborts the run.
    pub fn scrape_listings(&self, config: &ScrapeConfig) -> ScrapeOutcome {
        Self::run_paginated(config, |url| self.fetch_html(url))
    }

    /// The pagination loop with the fetch step injected, so tests can drive
    /// it with canned pages instead of the network.
    pub fn run_paginated<F>(config: &ScrapeConfig, mut fetch: F) -> ScrapeOutcome
    where
        F: FnMut(&str) -> Result<String, ScraperError>,
    {
        let mut outcome = ScrapeOutcome::default();

        for page in 1..=config.page_count {
            let page_url = format!("{}?o={}", config.base_url, page);

            eprintln!("📄 Scraping page {page}: {page_url}");

            let parsed = fetch(&page_url)
                .and_then(|html| Self::parse_page(&html, config.category, page));

            match parsed {
                Ok(mapped) => {
                    eprintln!("✅ Page {page} parsed ({} listings)", mapped.listings.len());

                    outcome.pages_fetched += 1;
                    outcome.ads_skipped += mapped.skipped;
                    outcome.listings.extend(mapped.listings);
                }
                Err(e) => {
                    eprintln!("⚠️ Page {page} failed: {e}");
                    outcome.pages_failed += 1;
                }
            }
        }

        outcome
    }

    /// Extract and map one already-fetched page body.
    pub fn parse_page(html: &str, category: Category, page: u32) -> Result<MappedPage, ScraperError> {
        let data = Self::extract_next_data(html)?;
        let ads = Self::extract_ads(&data)?;

        Ok(map_ads(&ads, category, page))
    }

    pub fn fetch_html(&self, url: &str) -> Result<String, ScraperError> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ScraperError::HttpStatus(status.as_u16()));
        }

        resp.text().map_err(|e| ScraperError::Network(e.to_string()))
    }

    fn extract_next_data(html: &str) -> Result<Value, ScraperError> {
        let document = Html::parse_document(html);
        let selector = Selector::parse(r#"script[id="__NEXT_DATA__"]"#)
            .map_err(|e| ScraperError::HtmlParse(e.to_string()))?;

        let element = document
            .select(&selector)
            .next()
            .ok_or(ScraperError::MissingNextData)?;

        let json_text = element.text().next().ok_or(ScraperError::MissingNextData)?;
        let data: Value =
            serde_json::from_str(json_text).map_err(|e| ScraperError::JsonParse(e.to_string()))?;
        Ok(data)
    }

    fn extract_ads(data: &Value) -> Result<Vec<Value>, ScraperError> {
        data["props"]["pageProps"]["ads"]
            .as_array()
            .cloned()
            .ok_or(ScraperError::UnexpectedShape("ads missing".to_string()))
    }
}
