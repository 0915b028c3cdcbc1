//! INSPIRE-HEP literature API client.
//!
//! Fetches every paper of one author (identified by BAI) in a single request
//! and decodes the hits into a [`Bibliography`].
//!
//! API Details:
//! - Endpoint: GET /api/literature?sort=mostrecent&size=N&q=a <BAI>
//! - `size` caps the number of hits returned; `hits.total` reports all matches
//! - Hit ids arrive as decimal strings

use crate::bibliography::{Bibliography, PaperRecord};
use crate::error::{CitetrackError, Result};
use reqwest::Client;
use serde::{Deserialize, Deserializer};
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

/// INSPIRE-HEP API base URL
pub const INSPIRE_API_BASE: &str = "https://inspirehep.net/api";

/// Default request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// INSPIRE-HEP API client
pub struct InspireClient {
    client: Client,
    base_url: String,
}

impl InspireClient {
    /// Create a client against the public INSPIRE-HEP API
    pub fn new() -> Result<Self> {
        Self::with_base_url(INSPIRE_API_BASE, REQUEST_TIMEOUT)
    }

    /// Create a client against a custom base URL (mirrors, local fixtures)
    pub fn with_base_url(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("citetrack/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CitetrackError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the author's papers, most recent first.
    ///
    /// # Arguments
    ///
    /// * `author` - Author BAI, e.g. `P.Motloch.2`
    /// * `max_papers` - Maximum number of hits requested
    /// * `title_length` - Titles longer than this many characters are cut
    pub async fn fetch_author(
        &self,
        author: &str,
        max_papers: usize,
        title_length: usize,
    ) -> Result<Bibliography> {
        let url = build_literature_url(&self.base_url, author, max_papers)?;

        info!(author = author, max_papers = max_papers, "Fetching INSPIRE-HEP literature");
        debug!(url = %url, "Sending literature request");

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), error = %error_text, "API error");
            return Err(CitetrackError::Api {
                code: status.as_u16(),
                message: format!("INSPIRE-HEP API error: {} - {}", status, error_text),
            });
        }

        let data: LiteratureResponse = response.json().await.map_err(|e| {
            CitetrackError::Parse(format!("Failed to parse INSPIRE-HEP response: {}", e))
        })?;
        let biblio = into_bibliography(data, title_length);

        info!(papers = biblio.len(), "INSPIRE-HEP fetch complete");
        Ok(biblio)
    }
}

/// Build the literature search URL for one author
fn build_literature_url(base_url: &str, author: &str, max_papers: usize) -> Result<Url> {
    let mut url = Url::parse(&format!("{}/literature", base_url))
        .map_err(|e| CitetrackError::Config(format!("Invalid base URL: {}", e)))?;

    url.query_pairs_mut()
        .append_pair("sort", "mostrecent")
        .append_pair("size", &max_papers.to_string())
        .append_pair("q", &format!("a {}", author));

    Ok(url)
}

// === INSPIRE-HEP API Response Types ===

#[derive(Debug, Deserialize)]
struct LiteratureResponse {
    hits: LiteratureHits,
}

#[derive(Debug, Deserialize)]
struct LiteratureHits {
    total: u64,
    hits: Vec<LiteratureHit>,
}

#[derive(Debug, Deserialize)]
struct LiteratureHit {
    #[serde(deserialize_with = "deserialize_record_id")]
    id: u64,
    metadata: LiteratureMetadata,
}

#[derive(Debug, Deserialize)]
struct LiteratureMetadata {
    #[serde(default)]
    titles: Vec<LiteratureTitle>,
    citation_count: u64,
    citation_count_without_self_citations: u64,
}

#[derive(Debug, Deserialize)]
struct LiteratureTitle {
    title: String,
}

/// Record ids come back as strings but older dumps carry integers
fn deserialize_record_id<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(u64),
        Text(String),
    }

    match RawId::deserialize(deserializer)? {
        RawId::Number(id) => Ok(id),
        RawId::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid record id: {:?}", text))),
    }
}

/// Convert a decoded literature search response into a bibliography
fn into_bibliography(response: LiteratureResponse, title_length: usize) -> Bibliography {
    let returned = response.hits.hits.len() as u64;
    if response.hits.total > returned {
        warn!(
            total = response.hits.total,
            returned = returned,
            "Result set truncated by size limit; raise max papers to see all"
        );
    }

    response
        .hits
        .hits
        .into_iter()
        .map(|hit| {
            let title = hit
                .metadata
                .titles
                .into_iter()
                .next()
                .map(|t| shorten_title(&t.title, title_length))
                .unwrap_or_default();

            PaperRecord {
                id: hit.id,
                title,
                citations: hit.metadata.citation_count,
                citations_excluding_self: hit.metadata.citation_count_without_self_citations,
            }
        })
        .collect()
}

/// Cut a title to at most `max_chars` characters
fn shorten_title(title: &str, max_chars: usize) -> String {
    title.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    const SAMPLE_RESPONSE: &str = r#"{
        "hits": {
            "total": 2,
            "hits": [
                {
                    "id": "2650123",
                    "metadata": {
                        "titles": [{"title": "Lensing reconstruction"}, {"title": "Alt"}],
                        "citation_count": 14,
                        "citation_count_without_self_citations": 9
                    }
                },
                {
                    "id": 1789001,
                    "metadata": {
                        "titles": [{"title": "Primordial non-Gaussianity"}],
                        "citation_count": 1,
                        "citation_count_without_self_citations": 0
                    }
                }
            ]
        }
    }"#;

    fn parse_response(json_str: &str, title_length: usize) -> Result<Bibliography> {
        let response: LiteratureResponse = serde_json::from_str(json_str)?;
        Ok(into_bibliography(response, title_length))
    }

    /// Serve one HTTP response on a local port and return the base URL
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");

        tokio::spawn(async move {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };

            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                match socket.read(&mut buf).await {
                    Ok(0) | Err(_) => break,
                    Ok(n) => request.extend_from_slice(&buf[..n]),
                }
            }

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        });

        format!("http://{}/api", addr)
    }

    fn local_client(base_url: &str) -> InspireClient {
        InspireClient::with_base_url(base_url, Duration::from_secs(5)).expect("client")
    }

    #[test]
    fn test_build_literature_url() {
        let url = build_literature_url(INSPIRE_API_BASE, "P.Motloch.2", 1000)
            .expect("Failed to build URL");
        assert_eq!(url.path(), "/api/literature");
        assert!(url.as_str().contains("sort=mostrecent"));
        assert!(url.as_str().contains("size=1000"));
        assert!(url.as_str().contains("q=a+P.Motloch.2"));
    }

    #[test]
    fn test_parse_response() {
        let biblio = parse_response(SAMPLE_RESPONSE, 50).expect("Parse failed");
        assert_eq!(
            biblio.records(),
            &[
                PaperRecord::new(2650123, "Lensing reconstruction", 14, 9),
                PaperRecord::new(1789001, "Primordial non-Gaussianity", 1, 0),
            ]
        );
        assert_eq!(biblio.totals().citations, 15);
    }

    #[test]
    fn test_parse_truncates_titles() {
        let biblio = parse_response(SAMPLE_RESPONSE, 7).expect("Parse failed");
        assert_eq!(biblio.records()[0].title, "Lensing");
        assert_eq!(biblio.records()[1].title, "Primord");
    }

    #[test]
    fn test_parse_uses_returned_hits_when_total_is_larger() {
        let json = r#"{"hits": {"total": 5, "hits": [
            {"id": "42", "metadata": {"titles": [{"title": "Only one"}], "citation_count": 3, "citation_count_without_self_citations": 2}}
        ]}}"#;
        let biblio = parse_response(json, 50).expect("Parse failed");
        assert_eq!(biblio.len(), 1);
        assert_eq!(biblio.records()[0], PaperRecord::new(42, "Only one", 3, 2));
    }

    #[test]
    fn test_parse_missing_title_is_empty() {
        let json = r#"{"hits": {"total": 1, "hits": [
            {"id": "5", "metadata": {"citation_count": 3, "citation_count_without_self_citations": 2}}
        ]}}"#;
        let biblio = parse_response(json, 50).expect("Parse failed");
        assert_eq!(biblio.records()[0].title, "");
    }

    #[test]
    fn test_parse_rejects_missing_citation_count() {
        let json = r#"{"hits": {"total": 1, "hits": [
            {"id": "5", "metadata": {"titles": [{"title": "T"}], "citation_count_without_self_citations": 2}}
        ]}}"#;
        assert!(parse_response(json, 50).is_err());
    }

    #[test]
    fn test_parse_rejects_non_numeric_id() {
        let json = r#"{"hits": {"total": 1, "hits": [
            {"id": "abc", "metadata": {"citation_count": 1, "citation_count_without_self_citations": 1}}
        ]}}"#;
        assert!(parse_response(json, 50).is_err());
    }

    #[test]
    fn test_shorten_title_counts_chars() {
        assert_eq!(shorten_title("Ωmega bounds", 5), "Ωmega");
        assert_eq!(shorten_title("short", 50), "short");
    }

    #[tokio::test]
    async fn test_fetch_author_success() {
        let base_url = serve_once("200 OK", SAMPLE_RESPONSE).await;
        let biblio = local_client(&base_url)
            .fetch_author("P.Motloch.2", 10, 50)
            .await
            .expect("fetch failed");
        assert_eq!(biblio.len(), 2);
        assert_eq!(biblio.records()[0].id, 2650123);
    }

    #[tokio::test]
    async fn test_fetch_author_maps_error_status() {
        let base_url = serve_once("503 Service Unavailable", "maintenance").await;
        let result = local_client(&base_url).fetch_author("P.Motloch.2", 10, 50).await;
        match result {
            Err(CitetrackError::Api { code, message }) => {
                assert_eq!(code, 503);
                assert!(message.contains("maintenance"));
            }
            other => panic!("expected API error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_author_rejects_wrong_shape() {
        let base_url = serve_once("200 OK", r#"{"hits": {"total": 1}}"#).await;
        let result = local_client(&base_url).fetch_author("P.Motloch.2", 10, 50).await;
        assert!(matches!(result, Err(CitetrackError::Parse(_))));
    }
}
