//! Input resolution: turn a user-supplied path or URL into a [`Document`].
//!
//! The extractor works on bytes, so both sources end up fully in memory.
//! No size limit is enforced. Whether the bytes are actually a PDF is the
//! extractor's call, not ours: a non-PDF upload must surface as an
//! extraction notice, not as an input error.

use crate::error::SummaryError;
use crate::output::Document;
use std::path::PathBuf;
use tracing::{debug, info};

/// Check if the input string looks like a URL.
pub fn is_url(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://")
}

/// Resolve the input string to an in-memory document.
pub async fn resolve_input(input: &str, timeout_secs: u64) -> Result<Document, SummaryError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(SummaryError::InvalidInput {
            input: input.to_string(),
        });
    }
    if is_url(input) {
        download_url(input, timeout_secs).await
    } else {
        read_local(input).await
    }
}

async fn read_local(path_str: &str) -> Result<Document, SummaryError> {
    let path = PathBuf::from(path_str);

    let bytes = tokio::fs::read(&path).await.map_err(|e| match e.kind() {
        std::io::ErrorKind::PermissionDenied => SummaryError::PermissionDenied { path: path.clone() },
        std::io::ErrorKind::NotFound => SummaryError::FileNotFound { path: path.clone() },
        _ => SummaryError::Internal(format!("Failed to read '{}': {}", path.display(), e)),
    })?;

    debug!("Read local PDF: {} ({} bytes)", path.display(), bytes.len());
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path_str.to_string());
    Ok(Document::new(name, bytes))
}

/// Download a URL into memory.
async fn download_url(url: &str, timeout_secs: u64) -> Result<Document, SummaryError> {
    info!("Downloading PDF from: {}", url);

    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(timeout_secs))
        .build()
        .map_err(|e| SummaryError::DownloadFailed {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

    let response = client.get(url).send().await.map_err(|e| {
        if e.is_timeout() {
            SummaryError::DownloadTimeout {
                url: url.to_string(),
                secs: timeout_secs,
            }
        } else {
            SummaryError::DownloadFailed {
                url: url.to_string(),
                reason: e.to_string(),
            }
        }
    })?;

    if !response.status().is_success() {
        return Err(SummaryError::DownloadFailed {
            url: url.to_string(),
            reason: format!("HTTP {}", response.status()),
        });
    }

    let bytes = response.bytes().await.map_err(|e| {
        if e.is_timeout() {
            SummaryError::DownloadTimeout {
                url: url.to_string(),
                secs: timeout_secs,
            }
        } else {
            SummaryError::DownloadFailed {
                url: url.to_string(),
                reason: e.to_string(),
            }
        }
    })?;

    info!("Downloaded {} bytes", bytes.len());
    Ok(Document::new(filename_from_url(url), bytes.to_vec()))
}

/// Last path segment of the URL, or `downloaded.pdf`.
fn filename_from_url(url: &str) -> String {
    if let Ok(parsed) = reqwest::Url::parse(url) {
        if let Some(mut segments) = parsed.path_segments() {
            if let Some(last) = segments.next_back() {
                if !last.is_empty() && last.contains('.') {
                    return last.to_string();
                }
            }
        }
    }

    "downloaded.pdf".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_is_url() {
        assert!(is_url("https://example.com/doc.pdf"));
        assert!(is_url("http://example.com/doc.pdf"));
        assert!(!is_url("/tmp/doc.pdf"));
        assert!(!is_url("doc.pdf"));
        assert!(!is_url(""));
    }

    #[test]
    fn filename_from_url_uses_last_segment() {
        assert_eq!(filename_from_url("https://arxiv.org/pdf/paper.pdf"), "paper.pdf");
        assert_eq!(filename_from_url("https://arxiv.org/pdf/1706"), "downloaded.pdf");
        assert_eq!(filename_from_url("https://example.com/"), "downloaded.pdf");
    }

    #[tokio::test]
    async fn missing_file_is_file_not_found() {
        let err = resolve_input("/definitely/not/a/real/file.pdf", 5)
            .await
            .unwrap_err();
        assert!(matches!(err, SummaryError::FileNotFound { .. }), "got: {err}");
    }

    #[tokio::test]
    async fn blank_input_is_invalid() {
        let err = resolve_input("   ", 5).await.unwrap_err();
        assert!(matches!(err, SummaryError::InvalidInput { .. }));
    }

    #[tokio::test]
    async fn local_file_is_read_whole() {
        let mut tmp = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        tmp.write_all(b"not really a pdf").unwrap();

        let doc = resolve_input(tmp.path().to_str().unwrap(), 5).await.unwrap();
        assert_eq!(&*doc.bytes, b"not really a pdf");
        assert!(doc.name.ends_with(".pdf"));
    }
}
