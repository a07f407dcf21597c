use std::iter::FusedIterator;
use std::str::Split;
use std::sync::LazyLock;

use regex::Regex;

/// Optional bullet or ordinal, a label of letters/spaces/slashes ending in a
/// colon, then the rest of the line.
static HEADING_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(•\s*|\d+\.\s*)?([A-Za-z\s/]+:)(.*)$").expect("heading pattern is valid")
});

/// One renderable line of a formatted section.
///
/// Fragments borrow from the normalized section text. A renderer emits a line
/// break between consecutive fragments and none after the last one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment<'a> {
    /// Text rendered verbatim.
    Plain(&'a str),
    /// A line that opens with a `Label:`; only `label` is emphasized.
    Heading {
        /// Bullet or ordinal before the label, possibly empty.
        prefix: &'a str,
        /// The label including its trailing colon.
        label: &'a str,
        /// Remainder of the line after the colon.
        rest: &'a str,
    },
}

impl<'a> Fragment<'a> {
    /// Classifies a single line (without its newline).
    pub fn from_line(line: &'a str) -> Self {
        match HEADING_LINE.captures(line) {
            Some(caps) => Fragment::Heading {
                prefix: caps.get(1).map_or("", |m| m.as_str()),
                label: caps.get(2).map_or("", |m| m.as_str()),
                rest: caps.get(3).map_or("", |m| m.as_str()),
            },
            None => Fragment::Plain(line),
        }
    }

    pub fn is_heading(&self) -> bool {
        matches!(self, Fragment::Heading { .. })
    }

    /// Length in bytes of the source line this fragment covers.
    pub fn len(&self) -> usize {
        match self {
            Fragment::Plain(text) => text.len(),
            Fragment::Heading {
                prefix,
                label,
                rest,
            } => prefix.len() + label.len() + rest.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Lazy iterator over the fragments of a formatted section, one per line.
#[derive(Debug, Clone)]
pub struct Fragments<'a> {
    lines: Option<Split<'a, char>>,
}

impl<'a> Fragments<'a> {
    /// Empty text yields no fragments at all, not a single empty line.
    pub fn new(text: &'a str) -> Self {
        let lines = (!text.is_empty()).then(|| text.split('\n'));
        Self { lines }
    }
}

impl<'a> Iterator for Fragments<'a> {
    type Item = Fragment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.lines.as_mut()?.next().map(Fragment::from_line)
    }
}

impl FusedIterator for Fragments<'_> {}
