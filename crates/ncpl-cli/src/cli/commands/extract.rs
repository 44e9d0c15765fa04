//! `ncpl extract <path>` – list video filenames found in a saved page.

use anyhow::{Context, Result};
use ncpl_core::extract_video_filenames;
use ncpl_core::fetch::read_html_file;
use std::path::Path;

pub fn run_extract(path: &Path, json: bool) -> Result<()> {
    let html = read_html_file(path)?;
    let entries = extract_video_filenames(&html);

    if json {
        let out = serde_json::to_string_pretty(&entries).context("serialize entries")?;
        println!("{out}");
        return Ok(());
    }

    if entries.is_empty() {
        eprintln!("No video files found in {}", path.display());
        return Ok(());
    }
    for entry in &entries {
        match entry.relative_path() {
            Some(dir) => println!("{}/{}", dir, entry.filename()),
            None => println!("{}", entry.filename()),
        }
    }
    Ok(())
}
