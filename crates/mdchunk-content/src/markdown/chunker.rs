//! Level-two heading segmentation.
//!
//! A body is split before every line that starts with exactly `##`, followed
//! by whitespace other than a line break and a title. Each section keeps its heading line. Text
//! before the first heading becomes an `"Intro"` section when it is not blank.
//!
//! Only level-two headings split. `# Title` and `### Detail` lines stay
//! inside whatever section contains them.
//!
//! ```rust
//! use mdchunk_content::markdown::chunk_by_heading;
//!
//! let sections = chunk_by_heading("## Heading A\n\nText for A.\n\n## Heading B\n\nMore text.");
//!
//! assert_eq!(sections.len(), 2);
//! assert_eq!(sections[0].heading, "Heading A");
//! assert_eq!(sections[0].content, "## Heading A\n\nText for A.");
//! assert_eq!(sections[1].heading, "Heading B");
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::types::Section;

/// Heading given to text that precedes the first section heading.
pub const INTRO_HEADING: &str = "Intro";

static SECTION_HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^##[\s&&[^\n]]+(\S.*)$").expect("Invalid section heading regex"));

/// Check whether a single line starts a new section.
///
/// ```rust
/// use mdchunk_content::markdown::is_section_heading;
///
/// assert!(is_section_heading("## Setup"));
/// assert!(!is_section_heading("# Title"));
/// assert!(!is_section_heading("### Detail"));
/// assert!(!is_section_heading("##NoSpace"));
/// ```
pub fn is_section_heading(line: &str) -> bool {
    let line = line.strip_suffix('\n').unwrap_or(line);
    !line.contains('\n') && SECTION_HEADING_RE.is_match(line)
}

/// Split a markdown body into sections at level-two headings.
///
/// Never fails. A body without section headings (including an empty or
/// whitespace-only body) yields exactly one `"Intro"` section holding the
/// trimmed body.
pub fn chunk_by_heading(body: &str) -> Vec<Section> {
    let headings: Vec<(usize, &str)> = SECTION_HEADING_RE
        .captures_iter(body)
        .filter_map(|caps| {
            let start = caps.get(0)?.start();
            let title = caps.get(1)?.as_str().trim();
            Some((start, title))
        })
        .collect();

    let mut sections = Vec::with_capacity(headings.len() + 1);

    let first_start = headings.first().map_or(body.len(), |(start, _)| *start);
    let lead = &body[..first_start];
    if headings.is_empty() || !lead.trim().is_empty() {
        sections.push(Section::new(INTRO_HEADING, lead));
    }

    for (i, (start, title)) in headings.iter().enumerate() {
        let end = headings
            .get(i + 1)
            .map_or(body.len(), |(next_start, _)| *next_start);
        sections.push(Section::new(*title, &body[*start..end]));
    }

    log::debug!("Split body into {} sections", sections.len());
    sections
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn headings(sections: &[Section]) -> Vec<&str> {
        sections.iter().map(|s| s.heading.as_str()).collect()
    }

    #[test]
    fn test_two_headings() {
        let sample = "## Heading A\n\nText for A.\n\n## Heading B\n\nMore text.";
        let sections = chunk_by_heading(sample);

        assert_eq!(headings(&sections), vec!["Heading A", "Heading B"]);
        assert!(sections[0].content.contains("Text for A"));
        assert!(!sections[0].content.contains("More text"));
        assert_eq!(sections[1].content, "## Heading B\n\nMore text.");
    }

    #[test]
    fn test_leading_text_becomes_intro() {
        let body = "Opening words.\n\n## First\n\nOne.\n\n## Second\n\nTwo.";
        let sections = chunk_by_heading(body);

        assert_eq!(headings(&sections), vec!["Intro", "First", "Second"]);
        assert_eq!(sections[0].content, "Opening words.");
    }

    #[test]
    fn test_blank_lead_is_dropped() {
        let body = "\n\n   \n## Heading One\n\nContent under heading one.\n";
        let sections = chunk_by_heading(body);

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].heading, "Heading One");
        assert_eq!(
            sections[0].content,
            "## Heading One\n\nContent under heading one."
        );
    }

    #[test]
    fn test_no_headings_is_single_intro() {
        let body = "\n  Just a paragraph.\n\nAnd another.  \n";
        let sections = chunk_by_heading(body);

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].heading, INTRO_HEADING);
        assert_eq!(sections[0].content, body.trim());
    }

    #[test]
    fn test_empty_body() {
        let sections = chunk_by_heading("");
        assert_eq!(sections, vec![Section::new(INTRO_HEADING, "")]);
    }

    #[test]
    fn test_whitespace_body() {
        let sections = chunk_by_heading(" \n\t\n ");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].heading, "Intro");
        assert_eq!(sections[0].content, "");
    }

    #[test]
    fn test_other_heading_levels_do_not_split() {
        let body = "# Title\n\nIntro text.\n\n## Section\n\nBody.\n\n### Detail\n\nMore.\n\n#### Deep\n";
        let sections = chunk_by_heading(body);

        assert_eq!(headings(&sections), vec!["Intro", "Section"]);
        assert!(sections[0].content.starts_with("# Title"));
        assert!(sections[1].content.contains("### Detail"));
        assert!(sections[1].content.ends_with("#### Deep"));
    }

    #[test]
    fn test_heading_must_start_line() {
        let body = "Text with ## inline marker.\n  ## indented heading\n";
        let sections = chunk_by_heading(body);

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].heading, "Intro");
    }

    #[test]
    fn test_heading_needs_whitespace_and_title() {
        let body = "##NoSpace\n\n##   \n\ntext";
        let sections = chunk_by_heading(body);

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].heading, "Intro");
        assert_eq!(sections[0].content, "##NoSpace\n\n##   \n\ntext");
    }

    #[test]
    fn test_unicode_whitespace_after_marker() {
        let sections = chunk_by_heading("Lead.\n##\u{a0}Title\nbody\n##\u{2003}Wide\n");
        assert_eq!(headings(&sections), vec!["Intro", "Title", "Wide"]);
        assert_eq!(sections[1].content, "##\u{a0}Title\nbody");
    }

    #[test]
    fn test_heading_title_is_trimmed() {
        let sections = chunk_by_heading("##\t  Spaced Title   \nbody");
        assert_eq!(sections[0].heading, "Spaced Title");
        assert_eq!(sections[0].content, "##\t  Spaced Title   \nbody");
    }

    #[test]
    fn test_crlf_line_endings() {
        let body = "## One\r\nfirst\r\n## Two\r\nsecond\r\n";
        let sections = chunk_by_heading(body);

        assert_eq!(headings(&sections), vec!["One", "Two"]);
        assert_eq!(sections[0].content, "## One\r\nfirst");
    }

    #[test]
    fn test_consecutive_headings() {
        let sections = chunk_by_heading("## A\n## B\n## C");
        assert_eq!(headings(&sections), vec!["A", "B", "C"]);
        assert_eq!(sections[0].content, "## A");
    }

    #[test]
    fn test_is_section_heading() {
        assert!(is_section_heading("## Heading"));
        assert!(is_section_heading("##\tTabbed\n"));
        assert!(!is_section_heading("## "));
        assert!(!is_section_heading("#### Deep"));
        assert!(!is_section_heading(" ## Indented"));
        assert!(!is_section_heading("## One\n## Two"));
    }
}
