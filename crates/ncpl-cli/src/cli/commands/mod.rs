//! CLI command handlers, one per file.

mod completions;
mod extract;
mod generate;
mod interactive;
mod link;
mod preview;

pub use completions::run_completions;
pub use extract::run_extract;
pub use generate::{run_generate, GenerateOptions};
pub use interactive::run_interactive;
pub use link::run_link;
pub use preview::{run_preview, PreviewOptions};

use anyhow::{Context, Result};
use ncpl_core::config::{self, NcplConfig};
use ncpl_core::debug_dump::{DebugSink, DirDebugSink, NoopDebugSink};
use ncpl_core::fetch::{read_html_file, CommandFetcher, CurlFetcher, HtmlFetcher};
use ncpl_core::{extract_video_filenames, filter_by_subpath, ShareReference, VideoEntry};
use std::path::Path;

/// Plain HTTP unless `render` asks for the configured render command.
fn select_fetcher(cfg: &NcplConfig, render: bool) -> Result<Box<dyn HtmlFetcher>> {
    if !render {
        return Ok(Box::new(CurlFetcher::new(&cfg.fetch)));
    }
    match cfg.render_command.as_deref().and_then(CommandFetcher::from_argv) {
        Some(fetcher) => Ok(Box::new(fetcher)),
        None => {
            let path = config::config_location()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "the config file".to_string());
            anyhow::bail!("--render needs `render_command` set in {path}")
        }
    }
}

/// Dumps go to the XDG state dir when enabled by flag or config.
fn select_debug_sink(cfg: &NcplConfig, flag: bool) -> Result<Box<dyn DebugSink>> {
    if !(flag || cfg.debug_dump) {
        return Ok(Box::new(NoopDebugSink));
    }
    let dir = DirDebugSink::default_dir()?;
    let sink = DirDebugSink::new(&dir)
        .with_context(|| format!("create debug dir {}", dir.display()))?;
    eprintln!("Debug files go to {}", dir.display());
    Ok(Box::new(sink))
}

/// Videos listed on the share page, read from `html` when given, else fetched.
fn page_entries(
    cfg: &NcplConfig,
    share: &ShareReference,
    html: Option<&Path>,
    render: bool,
    debug: &dyn DebugSink,
) -> Result<Vec<VideoEntry>> {
    let html = match html {
        Some(path) => read_html_file(path)?,
        None => {
            let fetcher = select_fetcher(cfg, render)?;
            let url = share.share_page_url();
            fetcher
                .fetch(&url)
                .with_context(|| format!("fetch share page {url} (save it and pass --html instead)"))?
        }
    };
    debug.dump_html(&html);
    let found = filter_by_subpath(extract_video_filenames(&html), share.subpath());
    debug.dump_filenames(&found);
    Ok(found)
}
