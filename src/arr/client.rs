use super::RadarrMovie;
use crate::config::CatalogConfig;
use crate::error::{Error, Result};
use recodarr_common::MediaAsset;
use reqwest::Client;
use std::time::Duration;

/// Connection timeout for catalog requests
const CONNECTION_TIMEOUT: Duration = Duration::from_secs(10);

/// Whole-request timeout; large libraries return multi-megabyte movie lists
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Source of the media catalog for a triage run
#[async_trait::async_trait]
pub trait Catalog: Send + Sync {
    /// Fetch every asset in the library in a single call
    async fn fetch_all(&self) -> Result<Vec<MediaAsset>>;
}

/// Radarr v3 API client
pub struct RadarrClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl RadarrClient {
    pub fn new(config: &CatalogConfig) -> Self {
        let client = Client::builder()
            .connect_timeout(CONNECTION_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to build HTTP client with timeout: {}", e);
                Client::new()
            });

        Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/v3{}", self.base_url, path)
    }
}

#[async_trait::async_trait]
impl Catalog for RadarrClient {
    async fn fetch_all(&self) -> Result<Vec<MediaAsset>> {
        let url = self.url("/movie");
        tracing::debug!("Fetching catalog from {}", url);

        let response = self
            .client
            .get(&url)
            .header("X-Api-Key", &self.api_key)
            .send()
            .await
            .map_err(|source| Error::CatalogRequest {
                context: format!("GET {}", url),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::catalog(format!("Radarr returned {}: {}", status, body)));
        }

        let movies: Vec<RadarrMovie> = response
            .json()
            .await
            .map_err(|source| Error::CatalogRequest {
                context: "invalid movie list".to_string(),
                source,
            })?;

        tracing::info!("Fetched {} movies from Radarr", movies.len());

        Ok(movies.into_iter().map(MediaAsset::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config(url: &str) -> CatalogConfig {
        CatalogConfig {
            url: url.to_string(),
            api_key: "radarr-key".to_string(),
        }
    }

    #[tokio::test]
    async fn test_fetch_all_converts_movies() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v3/movie"))
            .and(header("X-Api-Key", "radarr-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {
                    "title": "Heat",
                    "path": "/movies/Heat (1995)",
                    "movieFile": {
                        "path": "/movies/Heat (1995)/Heat.mkv",
                        "size": 500,
                        "mediaInfo": { "videoCodec": "h264" }
                    }
                },
                { "title": "Ronin", "path": "/movies/Ronin (1998)" }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        // Trailing slash must not produce a double slash in the request path
        let client = RadarrClient::new(&config(&format!("{}/", server.uri())));
        let assets = client.fetch_all().await.unwrap();

        assert_eq!(assets.len(), 2);
        assert_eq!(assets[0].title, "Heat");
        assert_eq!(assets[0].video_codec(), Some("h264"));
        assert!(assets[1].encoded_file.is_none());
    }

    #[tokio::test]
    async fn test_fetch_all_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v3/movie"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
            .mount(&server)
            .await;

        let client = RadarrClient::new(&config(&server.uri()));
        let err = client.fetch_all().await.unwrap_err();

        assert_matches!(err, Error::CatalogFetch(ref msg) if msg.contains("401"));
    }

    #[tokio::test]
    async fn test_fetch_all_invalid_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v3/movie"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
            .mount(&server)
            .await;

        let client = RadarrClient::new(&config(&server.uri()));
        let err = client.fetch_all().await.unwrap_err();

        assert_matches!(err, Error::CatalogRequest { ref context, .. } if context == "invalid movie list");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[tokio::test]
    async fn test_fetch_all_unreachable() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let client = RadarrClient::new(&config(&format!("http://127.0.0.1:{}", port)));
        let err = client.fetch_all().await.unwrap_err();

        assert_matches!(err, Error::CatalogRequest { .. });
        let source = std::error::Error::source(&err).unwrap();
        assert!(source.downcast_ref::<reqwest::Error>().is_some());
    }
}
