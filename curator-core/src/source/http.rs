//! Remote newline-delimited documents over blocking HTTP.

use std::time::Duration;

use curator_types::{CurateError, Result};
use reqwest::blocking::Client;

use super::lines::for_each_line;
use super::WordSource;

/// Builds the blocking client shared by every remote source of a run.
///
/// There is no request timeout: a run either completes or fails, and the
/// invoker decides how long to wait.
pub fn build_client() -> Result<Client> {
    Client::builder()
        .user_agent(concat!("gen_words/", env!("CARGO_PKG_VERSION")))
        .timeout(None::<Duration>)
        .build()
        .map_err(|e| CurateError::Config(format!("cannot build HTTP client: {e}")))
}

/// A newline-delimited text document fetched with a single GET.
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    client: Client,
}

impl HttpSource {
    /// Creates a source for `url` using an existing client.
    pub fn with_client(url: impl Into<String>, client: Client) -> Self {
        Self {
            url: url.into(),
            client,
        }
    }

    /// Returns the document URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetches the whole body.
    ///
    /// # Errors
    ///
    /// Returns `CurateError::SourceUnavailable` on transport failure or a
    /// non-success status.
    pub fn fetch(&self) -> Result<Vec<u8>> {
        tracing::debug!(url = %self.url, "fetching");

        let response = self
            .client
            .get(&self.url)
            .send()
            .map_err(|e| CurateError::unavailable(&self.url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CurateError::unavailable(&self.url, format!("HTTP {status}")));
        }

        let body = response
            .bytes()
            .map_err(|e| CurateError::unavailable(&self.url, e))?;

        tracing::debug!(url = %self.url, bytes = body.len(), "fetched");
        Ok(body.to_vec())
    }
}

impl WordSource for HttpSource {
    fn name(&self) -> &str {
        &self.url
    }

    fn for_each_token(&self, emit: &mut dyn FnMut(&str)) -> Result<()> {
        let body = self.fetch()?;
        for_each_line(&self.url, &body, emit)?;
        Ok(())
    }
}
