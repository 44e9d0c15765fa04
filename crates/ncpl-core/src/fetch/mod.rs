//! HTML acquisition collaborators.
//!
//! The playlist builder never fetches anything itself; callers pick a
//! fetcher and hand the resulting HTML to extraction.

mod command;
mod http;

pub use command::CommandFetcher;
pub use http::CurlFetcher;

use std::path::Path;

use crate::error::FetchError;

/// Something that can produce the share page HTML for a URL.
pub trait HtmlFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Reads HTML saved by the user (e.g. "Save page as" in a browser).
pub fn read_html_file(path: &Path) -> Result<String, FetchError> {
    let bytes = std::fs::read(path).map_err(|source| FetchError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let html = String::from_utf8_lossy(&bytes).into_owned();
    if html.trim().is_empty() {
        return Err(FetchError::Empty {
            url: path.display().to_string(),
        });
    }
    Ok(html)
}
