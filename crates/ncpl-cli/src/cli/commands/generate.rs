//! `ncpl generate <url>` – non-interactive playlist build.

use anyhow::Result;
use ncpl_core::config::NcplConfig;
use ncpl_core::playlist::{normalize_output_path, write_playlist};
use ncpl_core::{parse_share_url, render_m3u, VideoEntry};
use std::path::PathBuf;

use super::{page_entries, select_debug_sink};

/// Arguments of `generate`, as parsed from the command line.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub url: String,
    pub html: Option<PathBuf>,
    pub subpath: Option<String>,
    pub files: Vec<String>,
    pub output: Option<String>,
    pub render: bool,
    pub debug_dump: bool,
}

/// Builds the playlist and returns the path written.
///
/// HTML comes from `--html` when given. Without it the page is fetched,
/// unless `--file` names were given, in which case those are the only source.
pub fn run_generate(cfg: &NcplConfig, opts: &GenerateOptions) -> Result<PathBuf> {
    let mut share = parse_share_url(&opts.url)?;
    if let Some(subpath) = opts.subpath.as_deref() {
        share = share.with_subpath(subpath);
    }
    let debug = select_debug_sink(cfg, opts.debug_dump)?;

    let mut entries = if opts.html.is_some() || opts.files.is_empty() {
        page_entries(cfg, &share, opts.html.as_deref(), opts.render, debug.as_ref())?
    } else {
        Vec::new()
    };

    for name in &opts.files {
        let entry = VideoEntry::from_manual(name, &cfg.manual_default_extension)?;
        if entries.iter().any(|e| e.filename() == entry.filename()) {
            tracing::debug!(filename = entry.filename(), "skipping duplicate --file");
            continue;
        }
        entries.push(entry);
    }

    if entries.is_empty() {
        anyhow::bail!(
            "no video files found for {}; pass --file NAME to add them by hand",
            share.share_page_url()
        );
    }

    let path = normalize_output_path(opts.output.as_deref().unwrap_or(""), &cfg.default_output);
    write_playlist(&path, &render_m3u(&share, &entries))?;

    println!("Wrote {} ({} videos)", path.display(), entries.len());
    for entry in &entries {
        println!("  {}", entry.filename());
    }
    Ok(path)
}
