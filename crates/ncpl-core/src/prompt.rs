//! User interaction collaborator.
//!
//! The guided flow asks for strings and shows lists through this trait so it
//! can run against a terminal or a scripted reader in tests.

use std::io::{self, BufRead, Write};

/// Line that ends a pasted block (end of input works too).
pub const BLOCK_TERMINATOR: &str = ".";

pub trait Prompter {
    /// Asks for one line. Empty input yields `default` (or an empty string).
    /// End of input is an `UnexpectedEof` error.
    fn ask(&mut self, prompt: &str, default: Option<&str>) -> io::Result<String>;

    /// Yes/no question; empty input yields `default`.
    fn confirm(&mut self, prompt: &str, default: bool) -> io::Result<bool> {
        let hint = if default { "Y/n" } else { "y/N" };
        let answer = self.ask(&format!("{prompt} ({hint})"), None)?;
        Ok(match answer.trim().to_ascii_lowercase().as_str() {
            "" => default,
            "y" | "yes" => true,
            _ => false,
        })
    }

    /// Reads a multi-line block until end of input or a line holding only
    /// [`BLOCK_TERMINATOR`].
    fn read_block(&mut self, prompt: &str) -> io::Result<String>;

    /// Displays one line of output.
    fn show(&mut self, line: &str) -> io::Result<()>;
}

/// [`Prompter`] over any line reader and writer (stdin/stdout in the CLI).
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}

impl LinePrompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&mut self, prompt: &str, default: Option<&str>) -> io::Result<String> {
        match default {
            Some(d) if !d.is_empty() => write!(self.output, "{prompt} [{d}]: ")?,
            _ => write!(self.output, "{prompt}: ")?,
        }
        self.output.flush()?;

        let line = self
            .read_line()?
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"))?;
        let line = line.trim();
        if line.is_empty() {
            Ok(default.unwrap_or_default().to_string())
        } else {
            Ok(line.to_string())
        }
    }

    fn read_block(&mut self, prompt: &str) -> io::Result<String> {
        writeln!(self.output, "{prompt}")?;
        writeln!(
            self.output,
            "(finish with a line containing only '{BLOCK_TERMINATOR}' or end of input)"
        )?;
        self.output.flush()?;

        let mut lines = Vec::new();
        while let Some(line) = self.read_line()? {
            if line.trim() == BLOCK_TERMINATOR {
                break;
            }
            lines.push(line);
        }
        Ok(lines.join("\n"))
    }

    fn show(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }
}
