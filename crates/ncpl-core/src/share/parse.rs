//! Share URL parsing.

use std::borrow::Cow;

use url::Url;

use super::ShareReference;
use crate::error::PlaylistError;

/// Query parameters that name the folder inside a share, in priority order.
const SUBPATH_PARAMS: &[&str] = &["path", "dir"];

/// Parses a Nextcloud public share link into a [`ShareReference`].
///
/// Accepted shapes:
/// - `https://host/s/TOKEN[/...]`
/// - `https://host/index.php/s/TOKEN`
/// - `https://host/prefix/s/TOKEN` (server installed below the web root)
/// - `https://host/...?token=TOKEN`
///
/// The folder inside the share comes from `?path=` (or `?dir=`). A missing
/// scheme is treated as `https`.
pub fn parse_share_url(input: &str) -> Result<ShareReference, PlaylistError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(PlaylistError::invalid_url(input, "empty URL"));
    }

    let candidate: Cow<'_, str> = if has_scheme(trimmed) {
        Cow::Borrowed(trimmed)
    } else {
        Cow::Owned(format!("https://{trimmed}"))
    };
    let parsed =
        Url::parse(&candidate).map_err(|e| PlaylistError::invalid_url(input, e.to_string()))?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(PlaylistError::invalid_url(
            input,
            format!("unsupported scheme {}", parsed.scheme()),
        ));
    }
    let host = match (parsed.host_str(), parsed.port()) {
        (Some(h), Some(port)) if !h.is_empty() => format!("{h}:{port}"),
        (Some(h), None) if !h.is_empty() => h.to_string(),
        _ => return Err(PlaylistError::invalid_url(input, "missing host")),
    };

    let segments: Vec<&str> = parsed
        .path_segments()
        .map(|s| s.filter(|seg| !seg.is_empty()).collect())
        .unwrap_or_default();

    let (prefix, token) = match token_from_segments(&segments) {
        Some(found) => found,
        None => match token_from_query(&parsed) {
            Some(token) => (prefix_before_index(&segments), token),
            None => {
                return Err(PlaylistError::invalid_url(
                    input,
                    "no share token (expected /s/<token>)",
                ))
            }
        },
    };

    let mut share = ShareReference::with_scheme(parsed.scheme(), &host, &token)?;
    if let Some(prefix) = prefix {
        share = share.with_base_path(&prefix);
    }
    if let Some(subpath) = subpath_from_query(&parsed) {
        share = share.with_subpath(&subpath);
    }

    tracing::debug!(
        host = %share.host(),
        token = share.token(),
        subpath = ?share.subpath(),
        "parsed share url"
    );
    Ok(share)
}

/// Finds `s/<token>` in the path; returns the install prefix and the token.
fn token_from_segments(segments: &[&str]) -> Option<(Option<String>, String)> {
    segments.windows(2).enumerate().find_map(|(i, pair)| {
        if pair[0] != "s" {
            return None;
        }
        let token = leading_alphanumeric(pair[1])?;
        Some((prefix_before_index(&segments[..i]), token.to_string()))
    })
}

fn token_from_query(url: &Url) -> Option<String> {
    url.query_pairs()
        .find(|(k, _)| k == "token")
        .and_then(|(_, v)| leading_alphanumeric(v.trim()).map(str::to_string))
}

fn subpath_from_query(url: &Url) -> Option<String> {
    SUBPATH_PARAMS.iter().find_map(|name| {
        url.query_pairs()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.into_owned())
    })
}

/// Segments up to (not including) `index.php`, joined; `None` when empty.
fn prefix_before_index(segments: &[&str]) -> Option<String> {
    let end = segments
        .iter()
        .position(|s| *s == "index.php")
        .unwrap_or(segments.len());
    let prefix = segments[..end].join("/");
    if prefix.is_empty() {
        None
    } else {
        Some(prefix)
    }
}

fn leading_alphanumeric(s: &str) -> Option<&str> {
    let end = s
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(s.len());
    if end == 0 {
        None
    } else {
        Some(&s[..end])
    }
}

/// True when the input starts with `scheme://`; a `://` later in the path
/// or query does not count.
fn has_scheme(input: &str) -> bool {
    let head_end = input.find(['/', '?']).unwrap_or(input.len());
    input[..head_end].ends_with(':') && input[head_end..].starts_with("//")
}
