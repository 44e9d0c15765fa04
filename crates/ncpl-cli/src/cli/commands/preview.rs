//! `ncpl preview <url>` – show playlist entries without writing a file.

use anyhow::{Context, Result};
use ncpl_core::config::NcplConfig;
use ncpl_core::debug_dump::NoopDebugSink;
use ncpl_core::{parse_share_url, playlist_entries, PlaylistEntry};
use std::path::PathBuf;

use super::page_entries;

#[derive(Debug, Clone, Default)]
pub struct PreviewOptions {
    pub url: String,
    pub html: Option<PathBuf>,
    pub subpath: Option<String>,
    pub render: bool,
    pub json: bool,
}

pub fn run_preview(cfg: &NcplConfig, opts: &PreviewOptions) -> Result<()> {
    let entries = preview_entries(cfg, opts)?;

    if opts.json {
        let out = serde_json::to_string_pretty(&entries).context("serialize entries")?;
        println!("{out}");
        return Ok(());
    }

    if entries.is_empty() {
        eprintln!("No video files found.");
        return Ok(());
    }
    for entry in &entries {
        println!("{}\t{}", entry.display_name, entry.url);
    }
    Ok(())
}

fn preview_entries(cfg: &NcplConfig, opts: &PreviewOptions) -> Result<Vec<PlaylistEntry>> {
    let mut share = parse_share_url(&opts.url)?;
    if let Some(subpath) = opts.subpath.as_deref() {
        share = share.with_subpath(subpath);
    }
    let videos = page_entries(cfg, &share, opts.html.as_deref(), opts.render, &NoopDebugSink)?;
    Ok(playlist_entries(&share, &videos))
}
