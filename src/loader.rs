//! Portfolio document loading.
//!
//! The only asynchronous step of a page load: read the document from a
//! file or fetch it over HTTP, then parse it. No retry, no partial result.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::data::PortfolioData;
use crate::error::{FolioError, FolioResult};

/// Resource name the page looks for next to itself
pub const DEFAULT_DATA_FILE: &str = "data.json";

/// The message shown to the visitor when the document cannot be loaded
pub const LOAD_FAILURE_MESSAGE: &str =
    "Error loading portfolio data. Please ensure data.json is in the same directory.";

/// Where the portfolio document lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// A file on disk
    File(PathBuf),
    /// An `http://` or `https://` URL
    #[cfg(feature = "http")]
    Http(String),
}

impl DataSource {
    /// `http(s)://` URLs become [`DataSource::Http`], anything else a file path.
    pub fn parse(source: &str) -> Self {
        #[cfg(feature = "http")]
        {
            if source.starts_with("http://") || source.starts_with("https://") {
                return Self::Http(source.to_string());
            }
        }
        Self::File(PathBuf::from(source))
    }

    /// Resolve a relative file source against the page's directory.
    pub fn resolve_against(self, page_dir: &Path) -> Self {
        match self {
            Self::File(path) if path.is_relative() => Self::File(page_dir.join(path)),
            other => other,
        }
    }

    /// Human-readable location, for logs
    pub fn describe(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            #[cfg(feature = "http")]
            Self::Http(url) => url.clone(),
        }
    }
}

impl Default for DataSource {
    fn default() -> Self {
        Self::File(PathBuf::from(DEFAULT_DATA_FILE))
    }
}

/// Loads and parses the portfolio document from a [`DataSource`]
#[derive(Debug, Clone, Default)]
pub struct Loader {
    source: DataSource,
    #[cfg(feature = "http")]
    client: reqwest::Client,
}

impl Loader {
    pub fn new(source: DataSource) -> Self {
        Self {
            source,
            #[cfg(feature = "http")]
            client: reqwest::Client::new(),
        }
    }

    /// Use a preconfigured HTTP client (proxies, timeouts, headers).
    #[cfg(feature = "http")]
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    pub fn source(&self) -> &DataSource {
        &self.source
    }

    /// Fetch and parse the document.
    pub async fn load(&self) -> FolioResult<PortfolioData> {
        let bytes = self.fetch().await?;
        debug!(source = %self.source.describe(), bytes = bytes.len(), "fetched portfolio document");
        parse_document(&bytes)
    }

    async fn fetch(&self) -> FolioResult<Vec<u8>> {
        match &self.source {
            DataSource::File(path) => tokio::fs::read(path)
                .await
                .map_err(|err| FolioError::io(path, err)),
            #[cfg(feature = "http")]
            DataSource::Http(url) => {
                let response = self.client.get(url).send().await?;
                let status = response.status();
                if !status.is_success() {
                    return Err(FolioError::Status {
                        url: url.clone(),
                        status: status.as_u16(),
                    });
                }
                Ok(response.bytes().await?.to_vec())
            }
        }
    }
}

/// Parse a portfolio document from raw JSON bytes.
pub fn parse_document(bytes: &[u8]) -> FolioResult<PortfolioData> {
    Ok(serde_json::from_slice(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::fixtures;

    #[test]
    fn test_parse_source() {
        assert_eq!(DataSource::parse("data.json"), DataSource::File("data.json".into()));
        #[cfg(feature = "http")]
        assert_eq!(
            DataSource::parse("https://example.com/data.json"),
            DataSource::Http("https://example.com/data.json".into())
        );
    }

    #[test]
    fn test_resolve_against_page_dir() {
        let page_dir = Path::new("/srv/site");
        assert_eq!(
            DataSource::default().resolve_against(page_dir),
            DataSource::File("/srv/site/data.json".into())
        );
        assert_eq!(
            DataSource::parse("/abs/data.json").resolve_against(page_dir),
            DataSource::File("/abs/data.json".into())
        );
    }

    #[test]
    fn test_parse_document_errors() {
        assert!(matches!(parse_document(b"<html>"), Err(FolioError::Malformed(_))));
        assert!(matches!(parse_document(b"{}"), Err(FolioError::Malformed(_))));
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_DATA_FILE);
        std::fs::write(&path, fixtures::document_json().to_string()).unwrap();

        let data = Loader::new(DataSource::File(path)).load().await.unwrap();
        assert_eq!(data, fixtures::portfolio());
    }

    #[tokio::test]
    async fn test_missing_file_is_data_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let err = Loader::new(DataSource::File(dir.path().join("nope.json")))
            .load()
            .await
            .unwrap_err();
        assert!(matches!(err, FolioError::Io { .. }));
        assert!(err.is_data_unavailable());
    }

    #[cfg(feature = "http")]
    mod http {
        use super::*;
        use wiremock::matchers::{method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        #[tokio::test]
        async fn test_load_over_http() {
            let server = MockServer::start().await;
            Mock::given(method("GET"))
                .and(path("/data.json"))
                .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::document_json()))
                .expect(1)
                .mount(&server)
                .await;

            let url = format!("{}/data.json", server.uri());
            let data = Loader::new(DataSource::parse(&url)).load().await.unwrap();
            assert_eq!(data.personal.name, "Ada Lovelace");
        }

        #[tokio::test]
        async fn test_non_success_status() {
            let server = MockServer::start().await;
            Mock::given(method("GET"))
                .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
                .mount(&server)
                .await;

            let url = format!("{}/data.json", server.uri());
            let err = Loader::new(DataSource::parse(&url)).load().await.unwrap_err();
            assert!(matches!(err, FolioError::Status { status: 404, .. }));
        }

        #[tokio::test]
        async fn test_non_json_body() {
            let server = MockServer::start().await;
            Mock::given(method("GET"))
                .respond_with(ResponseTemplate::new(200).set_body_string("<!DOCTYPE html>"))
                .mount(&server)
                .await;

            let url = format!("{}/data.json", server.uri());
            let err = Loader::new(DataSource::parse(&url)).load().await.unwrap_err();
            assert!(matches!(err, FolioError::Malformed(_)));
        }
    }
}
