//! Doc-ID markers and line-oriented extraction.
//!
//! Two marker kinds share the same identifier shape:
//!
//! - a declaration in documentation: `<!-- Doc-ID: ABC-DEF-0001-A -->`
//! - a reference in source code: `// @shirushi ABC-DEF-0001-A`

use std::sync::LazyLock;

use regex::Regex;

use super::DocId;

/// Pattern for a Doc-ID declaration inside an HTML comment.
pub const DECLARATION_PATTERN: &str = r"<!--\s*Doc-ID:\s*([A-Z]+-[A-Z]+-[0-9]{4}-[A-Z])\s*-->";

/// Pattern for a Doc-ID reference following the `@shirushi` tag.
pub const REFERENCE_PATTERN: &str = r"@shirushi\s+([A-Z]+-[A-Z]+-[0-9]{4}-[A-Z])";

static DECLARATION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DECLARATION_PATTERN).expect("this must never fail"));
static REFERENCE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(REFERENCE_PATTERN).expect("this must never fail"));

/// Line boundaries: `\r\n`, `\n`, `\r`, vertical tab, form feed, the
/// information separators `\x1c`-`\x1e`, NEL, and the Unicode line and
/// paragraph separators.
static LINE_BREAK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\r\n|[\n\r\x0B\x0C\x1C-\x1E\x{85}\x{2028}\x{2029}]")
        .expect("this must never fail")
});

/// The kind of marker to look for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// A Doc-ID declared in documentation.
    Declaration,
    /// A Doc-ID referenced from source code.
    Reference,
}

/// A single marker found in a piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerMatch {
    /// The identifier carried by the marker.
    pub id: DocId,
    /// 1-based line number.
    pub line: usize,
}

impl Marker {
    /// The compiled regular expression for this marker kind.
    #[must_use]
    pub fn regex(self) -> &'static Regex {
        match self {
            Self::Declaration => &DECLARATION_REGEX,
            Self::Reference => &REFERENCE_REGEX,
        }
    }

    /// Extract every marker of this kind from `text`, in order of appearance.
    ///
    /// A line may carry several markers; each is returned separately. Lines
    /// end at any Unicode line boundary, not just `\n`.
    #[must_use]
    pub fn extract(self, text: &str) -> Vec<MarkerMatch> {
        let regex = self.regex();
        let mut matches = Vec::new();

        for (index, line) in LINE_BREAK_REGEX.split(text).enumerate() {
            for captures in regex.captures_iter(line) {
                let Some(raw) = captures.get(1) else {
                    continue;
                };
                match raw.as_str().parse::<DocId>() {
                    Ok(id) => matches.push(MarkerMatch {
                        id,
                        line: index + 1,
                    }),
                    Err(e) => tracing::debug!("Ignoring marker on line {}: {e}", index + 1),
                }
            }
        }

        matches
    }
}
