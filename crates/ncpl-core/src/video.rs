//! Video entries and the extension allow-list.

use serde::Serialize;

use crate::error::PlaylistError;
use crate::share::normalize_relative_path;

/// Extensions accepted as video files (compared case-insensitively).
pub const VIDEO_EXTENSIONS: &[&str] = &[
    "mp4", "mkv", "avi", "mov", "wmv", "flv", "webm", "m4v", "mpg", "mpeg", "ts", "3gp", "ogv",
];

/// Returns the final extension of `name` (without the dot), if any.
pub fn extension(name: &str) -> Option<&str> {
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext)
}

/// True if `name` ends in an allow-listed video extension.
pub fn is_video_filename(name: &str) -> bool {
    extension(name).is_some_and(|ext| {
        VIDEO_EXTENSIONS
            .iter()
            .any(|allowed| ext.eq_ignore_ascii_case(allowed))
    })
}

/// One video file found in (or typed in for) a share.
///
/// The folder is `None` when unknown and `Some("")` when the file was listed
/// at the share root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoEntry {
    filename: String,
    #[serde(rename = "relative_path", skip_serializing_if = "Option::is_none")]
    folder: Option<String>,
}

impl VideoEntry {
    /// Creates an entry; the filename must carry an allow-listed extension.
    pub fn new(filename: &str) -> Result<Self, PlaylistError> {
        let filename = filename.trim();
        if filename.is_empty() {
            return Err(invalid(filename, "empty filename"));
        }
        if !is_video_filename(filename) {
            return Err(invalid(filename, "not a recognized video extension"));
        }
        Ok(Self {
            filename: filename.to_string(),
            folder: None,
        })
    }

    /// Creates an entry from user input, appending `.{default_ext}` when the
    /// name has no recognized video extension.
    pub fn from_manual(name: &str, default_ext: &str) -> Result<Self, PlaylistError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(invalid(name, "empty filename"));
        }
        if is_video_filename(name) {
            return Self::new(name);
        }
        let ext = default_ext.trim().trim_start_matches('.');
        let completed = format!("{name}.{ext}");
        tracing::debug!(from = name, to = %completed, "appended default extension");
        Self::new(&completed)
    }

    /// Attaches the directory inside the share this file was listed in.
    /// Empty or `/` marks the share root.
    pub fn with_relative_path(mut self, path: &str) -> Self {
        self.folder = Some(normalize_relative_path(path).unwrap_or_default());
        self
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Folder below the share root; `None` for root and unknown alike.
    pub fn relative_path(&self) -> Option<&str> {
        self.folder.as_deref().filter(|dir| !dir.is_empty())
    }

    /// Where the file was listed: `None` unknown, `Some("")` share root.
    pub fn folder(&self) -> Option<&str> {
        self.folder.as_deref()
    }

    /// Filename without its final extension.
    pub fn stem(&self) -> &str {
        self.filename
            .rsplit_once('.')
            .map(|(stem, _)| stem)
            .filter(|stem| !stem.is_empty())
            .unwrap_or(&self.filename)
    }
}

fn invalid(name: &str, reason: &str) -> PlaylistError {
    PlaylistError::InvalidEntry {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}
