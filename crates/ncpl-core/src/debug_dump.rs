//! Optional dumps of intermediate data (fetched HTML, found filenames).
//!
//! Called by the flow around extraction, never from extraction itself.
//! Failures are logged and swallowed: a dump must not abort a run.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

use crate::video::VideoEntry;

pub trait DebugSink {
    fn dump_html(&self, html: &str);
    fn dump_filenames(&self, entries: &[VideoEntry]);
}

/// Does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopDebugSink;

impl DebugSink for NoopDebugSink {
    fn dump_html(&self, _html: &str) {}
    fn dump_filenames(&self, _entries: &[VideoEntry]) {}
}

/// Writes `page.html` and `found_files.txt` into a directory.
#[derive(Debug, Clone)]
pub struct DirDebugSink {
    dir: PathBuf,
}

impl DirDebugSink {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// `~/.local/state/ncpl/debug`.
    pub fn default_dir() -> Result<PathBuf> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("ncpl")?;
        Ok(xdg_dirs.get_state_home().join("debug"))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn write(&self, name: &str, content: &str) {
        let path = self.dir.join(name);
        match fs::write(&path, content) {
            Ok(()) => tracing::debug!(path = %path.display(), "debug dump written"),
            Err(e) => tracing::warn!(path = %path.display(), "debug dump failed: {}", e),
        }
    }
}

impl DebugSink for DirDebugSink {
    fn dump_html(&self, html: &str) {
        self.write("page.html", html);
    }

    fn dump_filenames(&self, entries: &[VideoEntry]) {
        self.write("found_files.txt", &format_found_files(entries));
    }
}

fn format_found_files(entries: &[VideoEntry]) -> String {
    let mut out = format!("Found video files: {}\n\n", entries.len());
    for (i, entry) in entries.iter().enumerate() {
        match entry.relative_path() {
            Some(dir) => out.push_str(&format!("{}. {}/{}\n", i + 1, dir, entry.filename())),
            None => out.push_str(&format!("{}. {}\n", i + 1, entry.filename())),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dir_sink_writes_both_files() {
        let tmp = tempfile::tempdir().unwrap();
        let sink = DirDebugSink::new(tmp.path().join("debug")).unwrap();
        sink.dump_html("<html></html>");
        sink.dump_filenames(&[
            VideoEntry::new("a.mp4").unwrap(),
            VideoEntry::new("b.mkv").unwrap().with_relative_path("S1"),
        ]);

        let html = fs::read_to_string(sink.dir().join("page.html")).unwrap();
        assert_eq!(html, "<html></html>");
        let list = fs::read_to_string(sink.dir().join("found_files.txt")).unwrap();
        assert_eq!(list, "Found video files: 2\n\n1. a.mp4\n2. S1/b.mkv\n");
    }

    #[test]
    fn dir_sink_write_failure_is_swallowed() {
        let tmp = tempfile::tempdir().unwrap();
        let sink = DirDebugSink::new(tmp.path()).unwrap();
        fs::remove_dir_all(tmp.path()).unwrap();
        sink.dump_html("<html></html>");
    }
}
