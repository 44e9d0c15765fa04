//! `ncpl interactive` – guided session on the terminal.

use anyhow::Result;
use ncpl_core::config::NcplConfig;
use ncpl_core::prompt::LinePrompter;
use ncpl_core::session::GuidedSession;

use super::{select_debug_sink, select_fetcher};

pub fn run_interactive(cfg: &NcplConfig, render: bool, debug_dump: bool) -> Result<()> {
    let fetcher = select_fetcher(cfg, render)?;
    let debug = select_debug_sink(cfg, debug_dump)?;
    let mut prompter = LinePrompter::stdio();

    println!("Nextcloud playlist generator");
    println!("============================");

    let outcome =
        GuidedSession::new(&mut prompter, Some(fetcher.as_ref()), debug.as_ref(), cfg).run()?;
    match outcome {
        Some(done) => tracing::info!(
            path = %done.path.display(),
            videos = done.entries.len(),
            token = done.share.token(),
            "interactive session finished"
        ),
        None => tracing::info!("interactive session ended without a playlist"),
    }
    Ok(())
}
