//! Page retrieval: HTTP(S) through an [`HttpClient`], or a local file.

mod basic;
mod client;

pub use basic::BasicClient;
pub use client::HttpClient;

use tracing::debug;

use crate::error::{Error, Result};

/// Fetches `url` and returns the response body as text.
///
/// Transport failures and non-success statuses both surface as
/// [`Error::SourceUnavailable`].
pub async fn fetch_page<C: HttpClient>(client: &C, url: &str) -> Result<String> {
    let parsed = url
        .parse::<reqwest::Url>()
        .map_err(|e| Error::source_unavailable(url, format!("invalid URL: {e}")))?;
    let req = reqwest::Request::new(reqwest::Method::GET, parsed);

    let resp = client
        .execute(req)
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| Error::source_unavailable(url, e))?;

    let body = resp
        .text()
        .await
        .map_err(|e| Error::source_unavailable(url, e))?;
    debug!(url, bytes = body.len(), "Page fetched");
    Ok(body)
}

/// Loads a document from an `http://` or `https://` URL, or else a local path.
#[tracing::instrument(skip(client))]
pub async fn load_document<C: HttpClient>(client: &C, source: &str) -> Result<String> {
    if source.starts_with("http://") || source.starts_with("https://") {
        fetch_page(client, source).await
    } else {
        std::fs::read_to_string(source).map_err(|e| Error::source_unavailable(source, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct UnreachableClient;

    #[async_trait::async_trait]
    impl HttpClient for UnreachableClient {
        async fn execute(&self, _req: reqwest::Request) -> reqwest::Result<reqwest::Response> {
            panic!("network must not be touched for local sources");
        }
    }

    #[tokio::test]
    async fn test_load_document_reads_local_file() {
        let path = format!("{}/matchlog_stats_fetch_test.html", std::env::temp_dir().display());
        std::fs::write(&path, "<table id=\"t\"></table>").unwrap();

        let doc = load_document(&UnreachableClient, &path).await.unwrap();
        assert!(doc.contains("id=\"t\""));

        std::fs::remove_file(&path).unwrap();
    }

    #[tokio::test]
    async fn test_load_document_http_prefixed_path_stays_local() {
        let err = load_document(&UnreachableClient, "httpdocs/missing_log.html")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::SourceUnavailable { .. }));
    }

    #[tokio::test]
    async fn test_load_document_missing_file_is_source_unavailable() {
        let err = load_document(&UnreachableClient, "/definitely/not/here.html")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::SourceUnavailable { .. }));
    }

    #[tokio::test]
    async fn test_fetch_page_rejects_invalid_url() {
        let err = fetch_page(&UnreachableClient, "http://").await.unwrap_err();
        assert!(matches!(err, Error::SourceUnavailable { .. }));
    }
}
