//! Plain-text fallback: video filenames anywhere in the raw input.
//!
//! Used when the markup holds no recognizable file rows, e.g. a pasted list
//! of names or file data embedded in a script tag.

use regex::Regex;
use std::sync::OnceLock;

use crate::video::{is_video_filename, VIDEO_EXTENSIONS};

/// Characters that never appear in a bare name line (markup, JSON, tabs).
const MARKUP_CHARS: &[char] = &['"', '<', '>', '|', '\\', '\t', '='];

/// Returns trimmed `name.ext` tokens in order of appearance.
///
/// A line that is itself a video filename is taken whole, so names may
/// contain `:` or `,`. Other lines are scanned for tokens whose
/// extension is followed by a quote, `<`, `,`, `|`, whitespace or the line end.
pub(super) fn text_candidates(text: &str) -> Vec<String> {
    static TOKEN_RE: OnceLock<Regex> = OnceLock::new();
    let re = TOKEN_RE.get_or_init(|| {
        let alternatives = VIDEO_EXTENSIONS.join("|");
        Regex::new(&format!(
            r#"(?i)([^"'<>|\\/\t=:,]*[^"'<>|\\/\t=:,\s]\.(?:{alternatives}))(?:["'<>|,\s]|$)"#
        ))
        .expect("filename regex")
    });

    let mut out = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if is_video_filename(line) && !line.contains(MARKUP_CHARS) {
            out.push(line.to_string());
            continue;
        }
        out.extend(
            re.captures_iter(line)
                .filter_map(|c| c.get(1))
                .map(|m| m.as_str().trim().to_string())
                .filter(|s| !s.is_empty()),
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_name_per_line() {
        let found = text_candidates("movie.mp4\nclip.MKV\nnotes.txt\n");
        assert_eq!(found, vec!["movie.mp4", "clip.MKV"]);
    }

    #[test]
    fn names_with_spaces_and_json() {
        let found = text_candidates(r#"{"files":[{"name":"My Movie.mp4"},{"name":"b.avi"}]}"#);
        assert_eq!(found, vec!["My Movie.mp4", "b.avi"]);
    }

    #[test]
    fn extension_must_end_the_token() {
        assert!(text_candidates("archive.mp4x").is_empty());
        assert_eq!(text_candidates("<td>x.mov</td>"), vec!["x.mov"]);
    }

    #[test]
    fn video_extension_inside_another_name_is_ignored() {
        assert!(text_candidates("x.mp4.txt").is_empty());
        assert!(text_candidates("a.mov-old.zip\n").is_empty());
        assert!(text_candidates(r#"<td>trailer.mov-old.zip</td>"#).is_empty());
    }

    #[test]
    fn whole_line_name_keeps_punctuation() {
        assert_eq!(
            text_candidates("Episode 1: Pilot.mkv\n"),
            vec!["Episode 1: Pilot.mkv"]
        );
    }

    #[test]
    fn comma_separated_names() {
        assert_eq!(
            text_candidates("files: a.mp4, b.webm, c.zip"),
            vec!["a.mp4", "b.webm"]
        );
    }
}
