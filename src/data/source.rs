use crate::utils::error::{AppError, AppResult};
use async_trait::async_trait;
use reqwest::Client;
use std::path::{Path, PathBuf};

/// Where a dataset's raw CSV text comes from
#[async_trait]
pub trait DataSource {
    async fn fetch(&self) -> AppResult<String>;

    /// Human-readable location, for progress output
    fn location(&self) -> String;
}

pub struct RemoteSource {
    client: Client,
    url: String,
}

impl RemoteSource {
    pub fn new(url: impl Into<String>) -> AppResult<Self> {
        Ok(Self {
            client: Client::builder()
                .user_agent(concat!("vistat/", env!("CARGO_PKG_VERSION")))
                .build()
                .map_err(|e| AppError::Network(format!("Failed to create HTTP client: {}", e)))?,
            url: url.into(),
        })
    }
}

#[async_trait]
impl DataSource for RemoteSource {
    async fn fetch(&self) -> AppResult<String> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Request to {} failed: {}", self.url, e)))?;

        if !response.status().is_success() {
            return Err(AppError::Network(format!(
                "{} returned HTTP {}",
                self.url,
                response.status()
            )));
        }

        response
            .text()
            .await
            .map_err(|e| AppError::Network(format!("Failed to read response body: {}", e)))
    }

    fn location(&self) -> String {
        self.url.clone()
    }
}

pub struct LocalSource {
    path: PathBuf,
}

impl LocalSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl DataSource for LocalSource {
    async fn fetch(&self) -> AppResult<String> {
        std::fs::read_to_string(&self.path).map_err(|e| {
            AppError::Io(format!("Failed to read {}: {}", self.path.display(), e))
        })
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Pick a source from a CLI input: URLs go over the network, anything else
/// is treated as a local file path.
pub fn resolve(input: &str) -> AppResult<Box<dyn DataSource>> {
    if input.starts_with("http://") || input.starts_with("https://") {
        Ok(Box::new(RemoteSource::new(input)?))
    } else {
        Ok(Box::new(LocalSource::new(input)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn resolve_distinguishes_urls_from_paths() {
        let remote = resolve("https://example.com/data.csv").unwrap();
        assert_eq!(remote.location(), "https://example.com/data.csv");

        let local = resolve("museum_visitors.csv").unwrap();
        assert_eq!(local.location(), "museum_visitors.csv");
    }

    #[tokio::test]
    async fn local_source_reads_file_contents() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Date,Museum").unwrap();
        writeln!(file, "2014-01-01,23").unwrap();

        let source = LocalSource::new(file.path());
        let text = source.fetch().await.unwrap();
        assert!(text.starts_with("Date,Museum"));
    }

    #[tokio::test]
    async fn missing_file_maps_to_io_error() {
        let source = LocalSource::new("/nonexistent/vistat-test.csv");
        assert!(matches!(source.fetch().await, Err(AppError::Io(_))));
    }
}
