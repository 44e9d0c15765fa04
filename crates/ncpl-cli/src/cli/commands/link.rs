//! `ncpl link <url> <filename>` – direct download URL of one file.

use anyhow::Result;
use ncpl_core::{build_download_url, parse_share_url, VideoEntry};

pub fn run_link(url: &str, filename: &str) -> Result<()> {
    println!("{}", download_link(url, filename)?);
    Ok(())
}

/// The filename must carry a video extension; no default is appended.
fn download_link(url: &str, filename: &str) -> Result<String> {
    let share = parse_share_url(url)?;
    let entry = VideoEntry::new(filename)?;
    Ok(build_download_url(&share, &entry))
}
