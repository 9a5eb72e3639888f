//! Where the gift resource comes from.
//!
//! A catalog performs exactly one fetch per load. There is no retry and no
//! fallback content: a failed fetch is returned to the caller as-is.

use std::future::Future;
use std::path::PathBuf;

use crate::error::{ShopError, ShopResult};
use crate::types::Gift;

/// Relative path of the gift resource
pub const GIFTS_RESOURCE: &str = "gifts.json";

/// A static gift resource
pub trait GiftSource {
    /// Fetch and parse the gift array
    fn fetch(&self) -> impl Future<Output = ShopResult<Vec<Gift>>>;

    /// Human-readable location, used in logs
    fn describe(&self) -> String;
}

/// Parse the gift array from raw bytes
pub fn parse_gifts(bytes: &[u8]) -> ShopResult<Vec<Gift>> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Gift resource on the local filesystem
#[derive(Debug, Clone)]
pub struct FileSource {
    root: PathBuf,
    path: String,
}

impl FileSource {
    /// `gifts.json` inside `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_path(root, GIFTS_RESOURCE)
    }

    pub fn with_path(root: impl Into<PathBuf>, path: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            path: path.into(),
        }
    }

    pub fn location(&self) -> PathBuf {
        self.root.join(&self.path)
    }
}

impl GiftSource for FileSource {
    async fn fetch(&self) -> ShopResult<Vec<Gift>> {
        let location = self.location();
        tracing::debug!(path = %location.display(), "Reading gift resource");
        let bytes = tokio::fs::read(&location).await?;
        parse_gifts(&bytes)
    }

    fn describe(&self) -> String {
        self.location().display().to_string()
    }
}

/// Gift resource served over HTTP
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    base_url: String,
    path: String,
}

impl HttpSource {
    /// `gifts.json` relative to `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_path(base_url, GIFTS_RESOURCE)
    }

    pub fn with_path(base_url: impl Into<String>, path: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, path)
    }

    /// Use a preconfigured client, e.g. one with proxies or timeouts set
    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            path: path.into(),
        }
    }

    /// Full URL of the resource
    pub fn url(&self) -> String {
        join_url(&self.base_url, &self.path)
    }
}

impl GiftSource for HttpSource {
    async fn fetch(&self) -> ShopResult<Vec<Gift>> {
        let url = self.url();
        tracing::debug!(%url, "Requesting gift resource");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ShopError::Fetch(format!("GET {} returned {}", url, status)));
        }

        let bytes = response.bytes().await?;
        parse_gifts(&bytes)
    }

    fn describe(&self) -> String {
        self.url()
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_gifts_accepts_array() {
        let json = br#"[
            {"name": "Mug", "description": "d", "category": "For Work",
             "superpowers": {"live": "100", "create": "100", "love": "100", "dream": "100"}}
        ]"#;
        let gifts = parse_gifts(json).unwrap();
        assert_eq!(gifts.len(), 1);
        assert_eq!(gifts[0].name, "Mug");
    }

    #[test]
    fn parse_gifts_rejects_object() {
        let err = parse_gifts(br#"{"gifts": []}"#).unwrap_err();
        assert!(matches!(err, ShopError::Parse(_)));
    }

    #[test]
    fn parse_gifts_rejects_missing_superpower() {
        let json = br#"[{"name": "Mug", "description": "d", "category": "For Work",
            "superpowers": {"live": "100", "create": "100", "love": "100"}}]"#;
        assert!(parse_gifts(json).is_err());
    }

    #[test]
    fn urls_join_with_single_slash() {
        assert_eq!(join_url("http://shop.test/", "/gifts.json"), "http://shop.test/gifts.json");
        assert_eq!(join_url("http://shop.test", "gifts.json"), "http://shop.test/gifts.json");
        assert_eq!(
            HttpSource::new("http://shop.test/static").url(),
            "http://shop.test/static/gifts.json"
        );
    }

    #[test]
    fn file_source_location() {
        let source = FileSource::new("assets");
        assert_eq!(source.location(), PathBuf::from("assets").join("gifts.json"));
    }
}
