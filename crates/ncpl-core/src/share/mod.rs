//! Share reference modeling: parsing Nextcloud public share links and
//! composing direct-download URLs for files inside them.

mod link;
mod parse;

pub use link::build_download_url;
pub use parse::parse_share_url;

use url::Url;

use crate::error::PlaylistError;

/// A Nextcloud public share: where it lives and which token opens it.
///
/// `host` and `token` are never empty. `subpath` and `base_path` are stored
/// normalized (no leading/trailing slash) and are `None` when empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareReference {
    origin: Url,
    base_path: Option<String>,
    token: String,
    subpath: Option<String>,
}

impl ShareReference {
    /// Builds an `https` share reference from a host (optionally with port) and token.
    pub fn new(host: &str, token: &str) -> Result<Self, PlaylistError> {
        Self::with_scheme("https", host, token)
    }

    pub(crate) fn with_scheme(scheme: &str, host: &str, token: &str) -> Result<Self, PlaylistError> {
        let host = host.trim();
        let token = token.trim();
        let display = format!("{scheme}://{host}/s/{token}");

        if host.is_empty() {
            return Err(PlaylistError::invalid_url(&display, "missing host"));
        }
        if token.is_empty() {
            return Err(PlaylistError::invalid_url(&display, "missing share token"));
        }
        if token.contains(|c: char| c == '/' || c.is_whitespace()) {
            return Err(PlaylistError::invalid_url(&display, "malformed share token"));
        }

        let origin = Url::parse(&format!("{scheme}://{host}/"))
            .map_err(|e| PlaylistError::invalid_url(&display, e.to_string()))?;
        if origin.host_str().map_or(true, str::is_empty) || origin.path() != "/" {
            return Err(PlaylistError::invalid_url(&display, "malformed host"));
        }

        Ok(Self {
            origin,
            base_path: None,
            token: token.to_string(),
            subpath: None,
        })
    }

    /// Sets the folder inside the share. Empty or `/` clears it.
    pub fn with_subpath(mut self, subpath: &str) -> Self {
        self.subpath = normalize_relative_path(subpath);
        self
    }

    /// Sets the prefix of a server installed below the web root (e.g. `nextcloud`).
    pub fn with_base_path(mut self, base_path: &str) -> Self {
        self.base_path = normalize_relative_path(base_path);
        self
    }

    pub fn scheme(&self) -> &str {
        self.origin.scheme()
    }

    /// Host name, with `:port` when the share URL carried a non-default port.
    pub fn host(&self) -> String {
        let host = self.origin.host_str().unwrap_or_default();
        match self.origin.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn subpath(&self) -> Option<&str> {
        self.subpath.as_deref()
    }

    pub fn base_path(&self) -> Option<&str> {
        self.base_path.as_deref()
    }

    /// The public listing page for this share (`<origin>/<base>/s/<token>`),
    /// opened at the subpath folder when one is set.
    pub fn share_page_url(&self) -> String {
        let mut url = self.origin.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty();
            if let Some(base) = &self.base_path {
                segments.extend(base.split('/'));
            }
            segments.push("s").push(&self.token);
        }
        if let Some(subpath) = &self.subpath {
            url.query_pairs_mut()
                .append_pair("path", &format!("/{subpath}"));
        }
        url.to_string()
    }

    pub(crate) fn origin(&self) -> &Url {
        &self.origin
    }
}

/// Normalizes a relative path: trims whitespace, drops empty segments so the
/// result never starts or ends with `/`. Returns `None` when nothing is left.
pub fn normalize_relative_path(path: &str) -> Option<String> {
    let joined = path
        .trim()
        .split('/')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/");
    if joined.is_empty() {
        None
    } else {
        Some(joined)
    }
}
