//! Error types for the playlist builder and its collaborators.

use std::path::PathBuf;

/// Errors from building and saving a playlist.
#[derive(Debug, thiserror::Error)]
pub enum PlaylistError {
    /// The supplied string has no recognizable share token.
    #[error("invalid share URL {url:?}: {reason}")]
    InvalidShareUrl { url: String, reason: String },

    /// A manually entered filename could not become a video entry.
    #[error("invalid video entry {name:?}: {reason}")]
    InvalidEntry { name: String, reason: String },

    /// HTML could not be obtained from a fetcher.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Writing the playlist file failed. Fatal for the run.
    #[error("write playlist {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PlaylistError {
    pub(crate) fn invalid_url(url: &str, reason: impl Into<String>) -> Self {
        PlaylistError::InvalidShareUrl {
            url: url.to_string(),
            reason: reason.into(),
        }
    }
}

/// Failure of an [`HtmlFetcher`](crate::fetch::HtmlFetcher). Never fatal in the
/// guided flow: the caller falls back to manual input.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Curl reported an error (timeout, DNS, TLS, connection).
    #[error("request failed: {0}")]
    Transport(#[from] curl::Error),

    /// Response had a non-2xx status.
    #[error("GET {url} returned HTTP {status}")]
    Http { url: String, status: u32 },

    /// Fetch succeeded but produced no content.
    #[error("no content received from {url}")]
    Empty { url: String },

    /// External render command could not be run or exited unsuccessfully.
    #[error("render command {program:?} failed: {reason}")]
    Command { program: String, reason: String },

    /// Reading HTML from disk failed.
    #[error("read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_url_message_names_url() {
        let err = PlaylistError::invalid_url("https://example.com/x", "no /s/ segment");
        let msg = err.to_string();
        assert!(msg.contains("https://example.com/x"));
        assert!(msg.contains("no /s/ segment"));
    }

    #[test]
    fn fetch_error_converts_into_playlist_error() {
        let err: PlaylistError = FetchError::Empty {
            url: "https://cloud.example.com/s/abc".to_string(),
        }
        .into();
        assert!(matches!(err, PlaylistError::Fetch(FetchError::Empty { .. })));
        assert!(err.to_string().contains("no content"));
    }

    #[test]
    fn write_error_keeps_source() {
        use std::error::Error as _;
        let err = PlaylistError::Write {
            path: PathBuf::from("/nope/list.m3u"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("/nope/list.m3u"));
        assert!(err.source().is_some());
    }
}
