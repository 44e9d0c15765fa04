//! Playlist file naming and writing.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::PlaylistError;

/// Output name used when the user gives none.
pub const DEFAULT_PLAYLIST_NAME: &str = "nextcloud_playlist.m3u";

/// Resolves the output path: empty input → `default`; a name without an
/// `.m3u`/`.m3u8` extension gets `.m3u` appended.
pub fn normalize_output_path(name: &str, default: &str) -> PathBuf {
    let name = name.trim();
    if name.is_empty() {
        return PathBuf::from(default);
    }
    let lower = name.to_ascii_lowercase();
    if lower.ends_with(".m3u") || lower.ends_with(".m3u8") {
        PathBuf::from(name)
    } else {
        PathBuf::from(format!("{name}.m3u"))
    }
}

/// Writes the rendered playlist to `path`, replacing any existing file.
pub fn write_playlist(path: &Path, content: &str) -> Result<(), PlaylistError> {
    fs::write(path, content).map_err(|source| PlaylistError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), bytes = content.len(), "playlist written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_name_defaults_and_extension() {
        assert_eq!(
            normalize_output_path("  ", DEFAULT_PLAYLIST_NAME),
            PathBuf::from("nextcloud_playlist.m3u")
        );
        assert_eq!(
            normalize_output_path("shows", DEFAULT_PLAYLIST_NAME),
            PathBuf::from("shows.m3u")
        );
        assert_eq!(
            normalize_output_path("Shows.M3U", DEFAULT_PLAYLIST_NAME),
            PathBuf::from("Shows.M3U")
        );
        assert_eq!(
            normalize_output_path("list.m3u8", DEFAULT_PLAYLIST_NAME),
            PathBuf::from("list.m3u8")
        );
    }

    #[test]
    fn write_playlist_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.m3u");
        write_playlist(&path, "#EXTM3U\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "#EXTM3U\n");
    }

    #[test]
    fn write_playlist_reports_path_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.m3u");
        match write_playlist(&path, "#EXTM3U\n") {
            Err(PlaylistError::Write { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected Write error, got {other:?}"),
        }
    }
}
