//! CLI for the ncpl playlist builder.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use ncpl_core::config;
use std::path::PathBuf;

use commands::{
    run_completions, run_extract, run_generate, run_interactive, run_link, run_preview,
    GenerateOptions, PreviewOptions,
};

/// Top-level CLI for the ncpl playlist builder.
#[derive(Debug, Parser)]
#[command(name = "ncpl")]
#[command(version)]
#[command(about = "ncpl: M3U playlists from Nextcloud public video shares", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Guided mode: asks for the share link, fetches or takes pasted HTML, writes the playlist.
    Interactive {
        /// Fetch pages with the configured render command instead of plain HTTP.
        #[arg(long)]
        render: bool,
        /// Save the fetched HTML and the found filenames for troubleshooting.
        #[arg(long)]
        debug_dump: bool,
    },

    /// Build a playlist without prompts.
    Generate {
        /// Nextcloud public share URL.
        url: String,

        /// Read the share page from a saved HTML file instead of fetching it.
        #[arg(long, value_name = "FILE")]
        html: Option<PathBuf>,

        /// Folder inside the share (overrides `?path=` in the URL).
        #[arg(long, value_name = "DIR")]
        subpath: Option<String>,

        /// Add a video by name; repeatable. Names without a video extension get the default one.
        #[arg(long = "file", value_name = "NAME")]
        files: Vec<String>,

        /// Playlist file to write (`.m3u` is appended when missing).
        #[arg(short, long, value_name = "PATH")]
        output: Option<String>,

        /// Fetch with the configured render command instead of plain HTTP.
        #[arg(long)]
        render: bool,

        /// Save the fetched HTML and the found filenames for troubleshooting.
        #[arg(long)]
        debug_dump: bool,
    },

    /// Show the playlist entries (name and URL) without writing a file.
    Preview {
        /// Nextcloud public share URL.
        url: String,

        /// Read the share page from a saved HTML file instead of fetching it.
        #[arg(long, value_name = "FILE")]
        html: Option<PathBuf>,

        /// Folder inside the share (overrides `?path=` in the URL).
        #[arg(long, value_name = "DIR")]
        subpath: Option<String>,

        /// Fetch with the configured render command instead of plain HTTP.
        #[arg(long)]
        render: bool,

        /// Print JSON instead of tab-separated lines.
        #[arg(long)]
        json: bool,
    },

    /// List the video filenames found in a saved share page.
    Extract {
        /// Path to the HTML file.
        path: PathBuf,

        /// Print JSON instead of one name per line.
        #[arg(long)]
        json: bool,
    },

    /// Print the direct download URL of one file in a share.
    Link {
        /// Nextcloud public share URL.
        url: String,
        /// Filename inside the share (or the `?path=` folder of the URL).
        filename: String,
    },

    /// Print a shell completion script.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        // Completions must not touch the config file.
        if let CliCommand::Completions { shell } = cli.command {
            return run_completions(shell);
        }

        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Interactive { render, debug_dump } => {
                run_interactive(&cfg, render, debug_dump)?
            }
            CliCommand::Generate {
                url,
                html,
                subpath,
                files,
                output,
                render,
                debug_dump,
            } => {
                let opts = GenerateOptions {
                    url,
                    html,
                    subpath,
                    files,
                    output,
                    render,
                    debug_dump,
                };
                let path = run_generate(&cfg, &opts)?;
                tracing::info!(path = %path.display(), "generate finished");
            }
            CliCommand::Preview {
                url,
                html,
                subpath,
                render,
                json,
            } => {
                let opts = PreviewOptions {
                    url,
                    html,
                    subpath,
                    render,
                    json,
                };
                run_preview(&cfg, &opts)?;
            }
            CliCommand::Extract { path, json } => run_extract(&path, json)?,
            CliCommand::Link { url, filename } => run_link(&url, &filename)?,
            CliCommand::Completions { .. } => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
