//! Filename candidates from share page markup.

use scraper::{ElementRef, Html, Selector};
use url::Url;

/// Attributes that hold a bare filename. `data-file` is the server-rendered
/// list, `data-cy-files-list-row-name` the client-rendered one.
const FILENAME_ATTRS: &[&str] = &["data-file", "data-cy-files-list-row-name", "data-filename"];

/// Classes whose text content is the displayed filename (name + extension spans).
const NAME_TEXT_CLASSES: &[&str] = &["nametext", "files-list__row-name-text"];

/// Attributes naming the folder a row belongs to.
const DIR_ATTRS: &[&str] = &["data-path", "data-dir"];

const CANDIDATE_SELECTOR: &str = "[data-file], [data-cy-files-list-row-name], [data-filename], \
     .nametext, .files-list__row-name-text, a[href*=\"files=\"]";

/// Base for resolving relative download links; only the query is read.
const LINK_BASE: &str = "https://share.invalid/";

/// A raw filename string and the folder it was listed under, if known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Candidate {
    pub raw: String,
    pub dir: Option<String>,
}

/// Collects candidate filenames in document order.
pub(super) fn markup_candidates(html: &str) -> Vec<Candidate> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(CANDIDATE_SELECTOR).expect("candidate selector");
    let link_base = Url::parse(LINK_BASE).ok();

    let mut out = Vec::new();
    for element in document.select(&selector) {
        let el = element.value();
        let dir = dir_for(element);

        for attr in FILENAME_ATTRS {
            if let Some(value) = el.attr(attr) {
                out.push(Candidate {
                    raw: value.to_string(),
                    dir: dir.clone(),
                });
            }
        }

        if el.classes().any(|class| NAME_TEXT_CLASSES.contains(&class)) {
            let text: String = element.text().map(str::trim).collect();
            out.push(Candidate {
                raw: text,
                dir: dir.clone(),
            });
        }

        if el.name() == "a" {
            let href = el.attr("href").unwrap_or_default();
            if let Some(candidate) = link_base.as_ref().and_then(|b| link_candidate(b, href)) {
                out.push(Candidate {
                    dir: dir.clone().or(candidate.dir),
                    raw: candidate.raw,
                });
            }
        }
    }
    out
}

/// Nearest `data-path`/`data-dir` on the element or one of its ancestors.
fn dir_for(element: ElementRef<'_>) -> Option<String> {
    std::iter::once(element)
        .chain(element.ancestors().filter_map(ElementRef::wrap))
        .find_map(|e| DIR_ATTRS.iter().find_map(|attr| e.value().attr(attr)))
        .map(str::to_string)
}

/// `.../download?path=/dir&files=name.mp4` style links.
fn link_candidate(base: &Url, href: &str) -> Option<Candidate> {
    let url = base.join(href).ok()?;
    let raw = url
        .query_pairs()
        .find(|(k, _)| k == "files")
        .map(|(_, v)| v.into_owned())?;
    let dir = url
        .query_pairs()
        .find(|(k, _)| k == "path")
        .map(|(_, v)| v.into_owned());
    Some(Candidate { raw, dir })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raws(html: &str) -> Vec<String> {
        markup_candidates(html).into_iter().map(|c| c.raw).collect()
    }

    #[test]
    fn server_rendered_rows() {
        let html = r#"
        <table><tbody id="fileList">
          <tr data-type="file" data-file="a.mp4" data-mime="video/mp4" data-path="/Season 1"></tr>
          <tr data-type="file" data-file="b.txt" data-mime="text/plain"></tr>
        </tbody></table>"#;
        let c = markup_candidates(html);
        assert_eq!(c.len(), 2);
        assert_eq!(c[0].raw, "a.mp4");
        assert_eq!(c[0].dir.as_deref(), Some("/Season 1"));
        assert_eq!(c[1].raw, "b.txt");
        assert!(c[1].dir.is_none());
    }

    #[test]
    fn client_rendered_rows_and_name_spans() {
        let html = r#"
        <table><tbody>
          <tr data-cy-files-list-row data-cy-files-list-row-name="Intro.webm">
            <td><span class="files-list__row-name-text">
              <span class="files-list__row-name-">Intro</span><span class="files-list__row-name-ext">.webm</span>
            </span></td>
          </tr>
        </tbody></table>"#;
        assert_eq!(raws(html), vec!["Intro.webm", "Intro.webm"]);
    }

    #[test]
    fn download_links_carry_files_and_path() {
        let html = r#"<a class="name" href="/s/TOK/download?path=%2FMovies&amp;files=Big%20One.mkv">x</a>"#;
        let c = markup_candidates(html);
        assert_eq!(c.len(), 1);
        assert_eq!(c[0].raw, "Big One.mkv");
        assert_eq!(c[0].dir.as_deref(), Some("/Movies"));
    }

    #[test]
    fn entities_are_decoded() {
        let html = r#"<div data-file="Tom &amp; Jerry.avi"></div>"#;
        assert_eq!(raws(html), vec!["Tom & Jerry.avi"]);
    }

    #[test]
    fn no_candidates_in_plain_text() {
        assert!(raws("movie.mp4\nclip.mkv").is_empty());
    }
}
