//! Guided playlist session: ask for a share, get its HTML, let the user
//! review the found videos, write the playlist.
//!
//! All interaction goes through injected collaborators ([`Prompter`],
//! [`HtmlFetcher`], [`DebugSink`]); the steps in between are the pure
//! playlist builder functions.

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::config::NcplConfig;
use crate::debug_dump::DebugSink;
use crate::edit::EditCommand;
use crate::error::PlaylistError;
use crate::extract::{extract_video_filenames, filter_by_subpath};
use crate::fetch::{read_html_file, HtmlFetcher};
use crate::playlist::{normalize_output_path, render_m3u, write_playlist};
use crate::prompt::Prompter;
use crate::share::{parse_share_url, ShareReference};
use crate::video::VideoEntry;

/// What a completed session produced.
#[derive(Debug, Clone)]
pub struct SessionOutcome {
    pub share: ShareReference,
    pub entries: Vec<VideoEntry>,
    pub path: PathBuf,
}

pub struct GuidedSession<'a, P> {
    prompter: &'a mut P,
    fetcher: Option<&'a dyn HtmlFetcher>,
    debug: &'a dyn DebugSink,
    cfg: &'a NcplConfig,
}

impl<'a, P: Prompter> GuidedSession<'a, P> {
    /// `fetcher` is `None` when automatic fetching is unavailable.
    pub fn new(
        prompter: &'a mut P,
        fetcher: Option<&'a dyn HtmlFetcher>,
        debug: &'a dyn DebugSink,
        cfg: &'a NcplConfig,
    ) -> Self {
        Self {
            prompter,
            fetcher,
            debug,
            cfg,
        }
    }

    /// Runs the whole flow. `Ok(None)` when the user ended up with no videos.
    pub fn run(&mut self) -> Result<Option<SessionOutcome>> {
        let share = self.ask_share()?;
        let html = self.acquire_html(&share)?;

        let mut entries = if html.trim().is_empty() {
            self.prompter.show("Could not obtain HTML content.")?;
            Vec::new()
        } else {
            self.debug.dump_html(&html);
            let found = filter_by_subpath(extract_video_filenames(&html), share.subpath());
            self.debug.dump_filenames(&found);
            self.prompter
                .show(&format!("Found {} video file(s).", found.len()))?;
            found
        };

        if entries.is_empty() {
            self.prompter.show("No video files found in the HTML.")?;
            entries = self.manual_entries()?;
        }
        if entries.is_empty() {
            self.prompter
                .show("No video files found or entered. Nothing to write.")?;
            return Ok(None);
        }

        self.review(&mut entries)?;
        if entries.is_empty() {
            self.prompter.show("Playlist is empty. Nothing to write.")?;
            return Ok(None);
        }

        let answer = self
            .prompter
            .ask("Playlist filename", Some(&self.cfg.default_output))?;
        let path = normalize_output_path(&answer, &self.cfg.default_output);
        write_playlist(&path, &render_m3u(&share, &entries))?;
        self.show_final_info(&share, &path, entries.len())?;

        Ok(Some(SessionOutcome {
            share,
            entries,
            path,
        }))
    }

    /// Asks until a share URL parses; the folder question follows.
    fn ask_share(&mut self) -> Result<ShareReference> {
        let share = loop {
            let url = self.prompter.ask(
                "Nextcloud share URL (e.g. https://cloud.example.com/s/abcdefg123456)",
                None,
            )?;
            match parse_share_url(&url) {
                Ok(share) => break share,
                Err(PlaylistError::InvalidShareUrl { reason, .. }) => {
                    tracing::debug!(url = %url, reason = %reason, "rejected share url");
                    self.prompter
                        .show(&format!("Not a share link ({reason}). Please try again."))?;
                }
                Err(e) => return Err(e.into()),
            }
        };
        self.prompter
            .show(&format!("Share token: {}", share.token()))?;

        let subpath = self.prompter.ask(
            "Folder inside the share (e.g. 'Season 1', empty for root)",
            share.subpath(),
        )?;
        Ok(share.with_subpath(&subpath))
    }

    /// Automatic fetch when possible, otherwise (or on failure) manual HTML.
    fn acquire_html(&mut self, share: &ShareReference) -> Result<String> {
        if let Some(fetcher) = self.fetcher {
            if self
                .prompter
                .confirm("Fetch the share page automatically?", true)?
            {
                let url = share.share_page_url();
                match fetcher.fetch(&url) {
                    Ok(html) => return Ok(html),
                    Err(e) => {
                        tracing::warn!(url = %url, "automatic fetch failed: {}", e);
                        self.prompter
                            .show(&format!("Automatic fetch failed: {e}"))?;
                        self.prompter.show("Falling back to manual HTML input.")?;
                    }
                }
            }
        }
        self.manual_html()
    }

    fn manual_html(&mut self) -> Result<String> {
        let source = self.prompter.ask(
            "Load HTML from a file (f), paste it (p), or skip (s)?",
            Some("p"),
        )?;
        match source.to_ascii_lowercase().as_str() {
            "f" => {
                let path = self.prompter.ask("Path to HTML file", None)?;
                match read_html_file(Path::new(&path)) {
                    Ok(html) => Ok(html),
                    Err(e) => {
                        self.prompter.show(&format!("Error reading file: {e}"))?;
                        Ok(String::new())
                    }
                }
            }
            "s" => Ok(String::new()),
            _ => Ok(self.prompter.read_block("Paste the page HTML:")?),
        }
    }

    fn manual_entries(&mut self) -> Result<Vec<VideoEntry>> {
        let mut entries: Vec<VideoEntry> = Vec::new();
        if !self
            .prompter
            .confirm("Enter the filenames manually?", true)?
        {
            return Ok(entries);
        }
        self.prompter
            .show("Enter video filenames (empty line to finish).")?;
        loop {
            let name = self
                .prompter
                .ask(&format!("File {}", entries.len() + 1), None)?;
            if name.is_empty() {
                break;
            }
            match VideoEntry::from_manual(&name, &self.cfg.manual_default_extension) {
                Ok(entry) if entries.iter().any(|e| e.filename() == entry.filename()) => {
                    self.prompter
                        .show(&format!("{} is already in the list.", entry.filename()))?;
                }
                Ok(entry) => {
                    if entry.filename() != name {
                        self.prompter
                            .show(&format!("Using {}", entry.filename()))?;
                    }
                    entries.push(entry);
                }
                Err(e) => self.prompter.show(&e.to_string())?,
            }
        }
        Ok(entries)
    }

    /// Shows the numbered list and applies edit commands until accepted.
    fn review(&mut self, entries: &mut Vec<VideoEntry>) -> Result<()> {
        loop {
            self.show_list(entries)?;
            let line = self.prompter.ask(
                "Enter to accept, or edit (d <n>, a <name>, m <from> <to>, s, r)",
                None,
            )?;
            let command = match EditCommand::parse(&line) {
                Ok(command) => command,
                Err(e) => {
                    self.prompter.show(&e.to_string())?;
                    continue;
                }
            };
            if command == EditCommand::Accept {
                return Ok(());
            }
            if let Err(e) = command.apply(entries, &self.cfg.manual_default_extension) {
                self.prompter.show(&e.to_string())?;
            }
        }
    }

    fn show_list(&mut self, entries: &[VideoEntry]) -> Result<()> {
        self.prompter
            .show(&format!("{} video file(s):", entries.len()))?;
        for (i, entry) in entries.iter().enumerate() {
            let line = match entry.relative_path() {
                Some(dir) => format!("{:>3}. {} ({})", i + 1, entry.filename(), dir),
                None => format!("{:>3}. {}", i + 1, entry.filename()),
            };
            self.prompter.show(&line)?;
        }
        Ok(())
    }

    fn show_final_info(&mut self, share: &ShareReference, path: &Path, count: usize) -> Result<()> {
        self.prompter.show(&format!(
            "Playlist created: {} ({} video file(s)).",
            path.display(),
            count
        ))?;
        self.prompter.show("If the player asks for credentials:")?;
        self.prompter
            .show(&format!("  username: {}", share.token()))?;
        self.prompter
            .show("  password: the share password, if the share has one")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debug_dump::NoopDebugSink;
    use crate::error::FetchError;
    use crate::prompt::LinePrompter;
    use std::cell::RefCell;

    struct FakeFetcher {
        result: Result<String, ()>,
        requested: RefCell<Vec<String>>,
    }

    impl FakeFetcher {
        fn ok(html: &str) -> Self {
            Self {
                result: Ok(html.to_string()),
                requested: RefCell::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                result: Err(()),
                requested: RefCell::new(Vec::new()),
            }
        }
    }

    impl HtmlFetcher for FakeFetcher {
        fn fetch(&self, url: &str) -> Result<String, FetchError> {
            self.requested.borrow_mut().push(url.to_string());
            self.result.clone().map_err(|_| FetchError::Empty {
                url: url.to_string(),
            })
        }
    }

    const PAGE: &str = r#"
        <table><tbody>
          <tr data-file="movie.mp4"></tr>
          <tr data-file="clip.MKV"></tr>
          <tr data-file="notes.txt"></tr>
        </tbody></table>"#;

    fn run_script(
        script: &str,
        fetcher: Option<&dyn HtmlFetcher>,
    ) -> (Option<SessionOutcome>, String) {
        let cfg = NcplConfig::default();
        let mut prompter = LinePrompter::new(script.as_bytes(), Vec::new());
        let outcome = GuidedSession::new(&mut prompter, fetcher, &NoopDebugSink, &cfg)
            .run()
            .unwrap();
        (outcome, String::from_utf8(prompter.into_output()).unwrap())
    }

    #[test]
    fn automatic_fetch_to_playlist() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("shows");
        let fetcher = FakeFetcher::ok(PAGE);
        let script = format!(
            "not a url\nhttps://cloud.example.com/s/abcdefg\n\ny\n\n{}\n",
            out.display()
        );
        let (outcome, transcript) = run_script(&script, Some(&fetcher));

        let outcome = outcome.expect("playlist written");
        assert_eq!(outcome.path, dir.path().join("shows.m3u"));
        assert_eq!(
            *fetcher.requested.borrow(),
            vec!["https://cloud.example.com/s/abcdefg".to_string()]
        );
        assert!(transcript.contains("Not a share link"));
        assert!(transcript.contains("username: abcdefg"));

        let text = std::fs::read_to_string(&outcome.path).unwrap();
        assert_eq!(
            text,
            "#EXTM3U\n\
             #EXTINF:-1,movie\n\
             https://cloud.example.com/public.php/dav/files/abcdefg/movie.mp4\n\
             #EXTINF:-1,clip\n\
             https://cloud.example.com/public.php/dav/files/abcdefg/clip.MKV\n"
        );
    }

    #[test]
    fn failed_fetch_falls_back_to_pasted_html_and_edits() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("list.m3u");
        let fetcher = FakeFetcher::failing();
        let script = format!(
            "https://cloud.example.com/s/tok?path=/Season%201\n\ny\np\n{PAGE}\n.\nd 1\na Bonus\n\n{}\n",
            out.display()
        );
        let (outcome, transcript) = run_script(&script, Some(&fetcher));

        let outcome = outcome.expect("playlist written");
        assert!(transcript.contains("Automatic fetch failed"));
        let names: Vec<&str> = outcome.entries.iter().map(|e| e.filename()).collect();
        assert_eq!(names, vec!["clip.MKV", "Bonus.mkv"]);
        let text = std::fs::read_to_string(&out).unwrap();
        assert!(text.contains("/public.php/dav/files/tok/Season%201/Bonus.mkv\n"));
    }

    #[test]
    fn manual_names_when_nothing_found() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("manual.m3u");
        let script = format!(
            "cloud.example.com/s/xyz\nExtras\ns\ny\nEpisode 1\nEpisode 2.mp4\nEpisode 1\n\n\n{}\n",
            out.display()
        );
        let (outcome, transcript) = run_script(&script, None);

        let outcome = outcome.expect("playlist written");
        let names: Vec<&str> = outcome.entries.iter().map(|e| e.filename()).collect();
        assert_eq!(names, vec!["Episode 1.mkv", "Episode 2.mp4"]);
        assert!(transcript.contains("already in the list"));
        assert_eq!(outcome.share.subpath(), Some("Extras"));
    }

    #[test]
    fn declining_manual_entry_writes_nothing() {
        let (outcome, transcript) = run_script("https://c.example/s/t\n\ns\nn\n", None);
        assert!(outcome.is_none());
        assert!(transcript.contains("Nothing to write"));
    }
}
