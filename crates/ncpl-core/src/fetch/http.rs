//! Static share page fetch over HTTP.
//!
//! Uses the curl crate (libcurl). Only sees server-rendered markup; pages
//! that build their file list in the browser need [`CommandFetcher`](super::CommandFetcher).

use std::time::Duration;

use super::HtmlFetcher;
use crate::config::FetchConfig;
use crate::error::FetchError;

#[derive(Debug, Clone)]
pub struct CurlFetcher {
    connect_timeout: Duration,
    timeout: Duration,
    user_agent: String,
}

impl CurlFetcher {
    pub fn new(cfg: &FetchConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: Duration::from_secs(cfg.timeout_secs),
            user_agent: cfg.user_agent.clone(),
        }
    }
}

impl HtmlFetcher for CurlFetcher {
    /// GET `url`, following redirects. Runs on the current thread.
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.follow_location(true)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;
        easy.useragent(&self.user_agent)?;
        // Empty string = every encoding libcurl was built with.
        easy.accept_encoding("")?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        if !(200..300).contains(&status) {
            return Err(FetchError::Http {
                url: url.to_string(),
                status,
            });
        }

        let html = String::from_utf8_lossy(&body).into_owned();
        if html.trim().is_empty() {
            return Err(FetchError::Empty {
                url: url.to_string(),
            });
        }
        tracing::debug!(url, bytes = body.len(), "fetched share page");
        Ok(html)
    }
}
