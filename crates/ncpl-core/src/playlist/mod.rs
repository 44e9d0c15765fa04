//! Playlist entries and extended-M3U serialization.

mod output;

pub use output::{normalize_output_path, write_playlist, DEFAULT_PLAYLIST_NAME};

use serde::Serialize;

use crate::share::{build_download_url, ShareReference};
use crate::video::VideoEntry;

/// Extended M3U header line.
pub const M3U_HEADER: &str = "#EXTM3U";

/// One playable item: what the player shows and where it streams from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaylistEntry {
    pub display_name: String,
    pub url: String,
}

impl PlaylistEntry {
    /// Derives the entry for `video` inside `share`.
    pub fn from_video(share: &ShareReference, video: &VideoEntry) -> Self {
        Self {
            display_name: single_line(video.stem()),
            url: build_download_url(share, video),
        }
    }
}

/// Derives playlist entries in input order.
pub fn playlist_entries(share: &ShareReference, videos: &[VideoEntry]) -> Vec<PlaylistEntry> {
    videos
        .iter()
        .map(|v| PlaylistEntry::from_video(share, v))
        .collect()
}

/// Renders an extended M3U document: the header line, then an `#EXTINF`
/// line and a URL line per entry, in input order.
pub fn render_m3u(share: &ShareReference, videos: &[VideoEntry]) -> String {
    let mut out = String::from(M3U_HEADER);
    out.push('\n');
    for entry in playlist_entries(share, videos) {
        out.push_str("#EXTINF:-1,");
        out.push_str(&entry.display_name);
        out.push('\n');
        out.push_str(&entry.url);
        out.push('\n');
    }
    out
}

/// Line breaks would split an `#EXTINF` record in two.
fn single_line(s: &str) -> String {
    s.split(['\r', '\n'])
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
