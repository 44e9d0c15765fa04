//! Video filename extraction from share page HTML.
//!
//! The share page renders its file list either on the server (`data-file`
//! rows) or in the browser (`data-cy-files-list-row-name` rows, present only
//! after the page scripts ran). Extraction does not care which: it reads
//! whatever HTML it is given and falls back to a plain-text scan when the
//! markup holds no file rows.

mod markup;
mod text;

use std::collections::HashSet;

use crate::share::normalize_relative_path;
use crate::video::{is_video_filename, VideoEntry};

/// Extracts video entries from share page HTML.
///
/// Candidates are filtered by the video extension allow-list
/// (case-insensitive) and deduplicated by filename, keeping first-seen
/// document order. Returns an empty list, not an error, when nothing matches.
pub fn extract_video_filenames(html: &str) -> Vec<VideoEntry> {
    let mut seen = HashSet::new();
    let mut entries = Vec::new();

    let candidates = markup::markup_candidates(html);
    let candidate_count = candidates.len();
    for candidate in &candidates {
        push_candidate(
            &mut entries,
            &mut seen,
            &candidate.raw,
            candidate.dir.as_deref(),
        );
    }

    if entries.is_empty() {
        for raw in text::text_candidates(html) {
            push_candidate(&mut entries, &mut seen, &raw, None);
        }
        if !entries.is_empty() {
            tracing::debug!(
                videos = entries.len(),
                "no video rows in markup; used plain-text scan"
            );
        }
    }

    tracing::debug!(
        candidates = candidate_count,
        videos = entries.len(),
        "extracted video filenames"
    );
    entries
}

/// Keeps only entries listed in `subpath`. Entries without a known folder
/// are kept; entries known to sit at the share root are not.
pub fn filter_by_subpath(entries: Vec<VideoEntry>, subpath: Option<&str>) -> Vec<VideoEntry> {
    let Some(wanted) = subpath.and_then(normalize_relative_path) else {
        return entries;
    };
    entries
        .into_iter()
        .filter(|e| e.folder().map_or(true, |dir| dir == wanted))
        .collect()
}

fn push_candidate(
    entries: &mut Vec<VideoEntry>,
    seen: &mut HashSet<String>,
    raw: &str,
    dir: Option<&str>,
) {
    let raw = raw.trim();
    let (dir_in_name, name) = match raw.rsplit_once('/') {
        Some((d, n)) => (Some(d), n.trim()),
        None => (None, raw),
    };
    if !is_video_filename(name) || seen.contains(name) {
        return;
    }
    let Ok(entry) = VideoEntry::new(name) else {
        return;
    };
    seen.insert(name.to_string());
    entries.push(match dir.or(dir_in_name) {
        Some(d) => entry.with_relative_path(d),
        None => entry,
    });
}
