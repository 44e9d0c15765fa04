//! Editing the entry list before it is written.
//!
//! One line of user input is one command. Indexes are 1-based, as shown in
//! the numbered list.

use crate::video::VideoEntry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditCommand {
    /// Empty line: keep the list as it is.
    Accept,
    /// `d <n>`
    Delete(usize),
    /// `a <name>`
    Add(String),
    /// `m <from> <to>`
    Move { from: usize, to: usize },
    /// `s`: sort by filename.
    Sort,
    /// `r`: reverse.
    Reverse,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("unknown command {0:?} (use d <n>, a <name>, m <from> <to>, s, r)")]
    Unknown(String),
    #[error("{0}")]
    Usage(&'static str),
    #[error("no entry #{index} (list has {len})")]
    OutOfRange { index: usize, len: usize },
    #[error("{0} is already in the list")]
    Duplicate(String),
    #[error("{0}")]
    InvalidEntry(String),
}

impl EditCommand {
    pub fn parse(line: &str) -> Result<Self, EditError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(EditCommand::Accept);
        }
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((v, r)) => (v, r.trim()),
            None => (line, ""),
        };
        match verb.to_ascii_lowercase().as_str() {
            "d" => Ok(EditCommand::Delete(parse_index(rest, "usage: d <n>")?)),
            "a" if !rest.is_empty() => Ok(EditCommand::Add(rest.to_string())),
            "a" => Err(EditError::Usage("usage: a <filename>")),
            "m" => {
                let mut parts = rest.split_whitespace();
                let usage = "usage: m <from> <to>";
                let from = parse_index(parts.next().unwrap_or_default(), usage)?;
                let to = parse_index(parts.next().unwrap_or_default(), usage)?;
                if parts.next().is_some() {
                    return Err(EditError::Usage(usage));
                }
                Ok(EditCommand::Move { from, to })
            }
            "s" if rest.is_empty() => Ok(EditCommand::Sort),
            "r" if rest.is_empty() => Ok(EditCommand::Reverse),
            _ => Err(EditError::Unknown(line.to_string())),
        }
    }

    /// Applies the command in place. `Accept` leaves the list untouched.
    pub fn apply(&self, entries: &mut Vec<VideoEntry>, default_ext: &str) -> Result<(), EditError> {
        match self {
            EditCommand::Accept => {}
            EditCommand::Delete(index) => {
                let i = position(*index, entries.len())?;
                entries.remove(i);
            }
            EditCommand::Add(name) => {
                let entry = VideoEntry::from_manual(name, default_ext)
                    .map_err(|e| EditError::InvalidEntry(e.to_string()))?;
                if entries.iter().any(|e| e.filename() == entry.filename()) {
                    return Err(EditError::Duplicate(entry.filename().to_string()));
                }
                entries.push(entry);
            }
            EditCommand::Move { from, to } => {
                let from = position(*from, entries.len())?;
                let to = position(*to, entries.len())?;
                let entry = entries.remove(from);
                entries.insert(to, entry);
            }
            EditCommand::Sort => entries.sort_by(|a, b| a.filename().cmp(b.filename())),
            EditCommand::Reverse => entries.reverse(),
        }
        Ok(())
    }
}

fn parse_index(s: &str, usage: &'static str) -> Result<usize, EditError> {
    s.trim().parse::<usize>().map_err(|_| EditError::Usage(usage))
}

fn position(index: usize, len: usize) -> Result<usize, EditError> {
    if index == 0 || index > len {
        return Err(EditError::OutOfRange { index, len });
    }
    Ok(index - 1)
}
