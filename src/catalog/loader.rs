// loader.rs
use crate::domain::Listing;
use crate::errors::CatalogError;
use reqwest::blocking::Client;
use std::time::Duration;
use url::Url;

const USER_AGENT: &str = concat!("hotels-list/", env!("CARGO_PKG_VERSION"));

/// Raw catalog bytes from somewhere.
pub trait CatalogSource {
    fn fetch_text(&self, location: &str) -> Result<String, CatalogError>;
}

/// HTTP(S) for URLs, the filesystem for anything else.
pub struct CatalogClient {
    client: Client,
}

impl CatalogClient {
    pub fn new() -> Result<Self, CatalogError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        Ok(Self { client })
    }

    pub fn http(&self) -> Client {
        self.client.clone()
    }
}

impl CatalogSource for CatalogClient {
    fn fetch_text(&self, location: &str) -> Result<String, CatalogError> {
        let is_http = Url::parse(location)
            .map(|url| matches!(url.scheme(), "http" | "https"))
            .unwrap_or(false);

        if !is_http {
            return std::fs::read_to_string(location)
                .map_err(|e| CatalogError::Io(format!("{location}: {e}")));
        }

        let resp = self
            .client
            .get(location)
            .send()
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }

        resp.text().map_err(|e| CatalogError::Network(e.to_string()))
    }
}

/// Fire-once fetch and decode. No retries.
pub fn fetch_listings(
    source: &dyn CatalogSource,
    location: &str,
) -> Result<Vec<Listing>, CatalogError> {
    let text = source.fetch_text(location)?;
    serde_json::from_str(&text).map_err(|e| CatalogError::Parse(e.to_string()))
}
