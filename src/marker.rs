use crate::pattern::{regex, BLOCK_URL_GROUP, LINE_URL_GROUP, LITERAL};
use std::borrow::Cow;
use std::fmt::{Display, Formatter};
use std::ops::Range;

/// `Marker` is the first `sourceMappingURL` comment found in a piece of code.
///
/// The matched span covers the whole comment together with the whitespace following it,
/// so slicing it out leaves no trace of the comment.
/// Offsets are byte offsets into the scanned code.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Marker<'a> {
    code: &'a str,
    start: usize,
    end: usize,
    url: &'a str,
}

impl<'a> Marker<'a> {
    /// Scans `code` from the beginning and returns the first comment found.
    ///
    /// Code without the `sourceMappingURL=` literal is rejected before running [regex](crate::regex).
    /// That check is only a shortcut; [PATTERN](crate::PATTERN) alone defines what matches.
    pub fn find(code: &'a str) -> Option<Self> {
        if memchr::memmem::find(code.as_bytes(), LITERAL).is_none() {
            tracing::trace!(len = code.len(), "no sourceMappingURL literal in code");
            return None;
        }

        let caps = regex().captures(code)?;
        let whole = caps.get(0)?;
        let url = caps
            .get(BLOCK_URL_GROUP)
            .or_else(|| caps.get(LINE_URL_GROUP))
            .map_or("", |m| m.as_str());

        tracing::trace!(
            start = whole.start(),
            end = whole.end(),
            url,
            "found sourceMappingURL comment"
        );

        Some(Self {
            code,
            start: whole.start(),
            end: whole.end(),
            url,
        })
    }

    /// The url referenced by the comment, possibly empty.
    #[inline]
    pub fn url(&self) -> &'a str {
        self.url
    }

    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The matched text, including trailing whitespace.
    #[inline]
    pub fn as_str(&self) -> &'a str {
        &self.code[self.range()]
    }

    /// The offset of the comment counted in chars rather than bytes.
    pub fn char_offset(&self) -> usize {
        self.code[..self.start].chars().count()
    }

    /// The code preceding the comment.
    #[inline]
    pub fn before(&self) -> &'a str {
        &self.code[..self.start]
    }

    /// The code following the comment and its trailing whitespace.
    #[inline]
    pub fn after(&self) -> &'a str {
        &self.code[self.end..]
    }
}

impl Display for Marker<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{} -> {:?}", self.start, self.end, self.url)
    }
}

/// Returns the url of the first `sourceMappingURL` comment in `code`, or `None` if there is none.
///
/// An empty url (`//# sourceMappingURL=`) is returned as `Some("")`.
#[inline]
pub fn extract_url(code: &str) -> Option<&str> {
    Marker::find(code).map(|marker| marker.url())
}

/// Checks whether `code` contains a `sourceMappingURL` comment.
#[inline]
pub fn contains_marker(code: &str) -> bool {
    Marker::find(code).is_some()
}

/// Removes the first `sourceMappingURL` comment, along with the whitespace following it.
///
/// Returns `code` untouched if there is no comment.
pub fn strip(code: &str) -> Cow<'_, str> {
    match Marker::find(code) {
        Some(marker) => {
            let (before, after) = (marker.before(), marker.after());
            let mut result = String::with_capacity(before.len() + after.len());
            result.push_str(before);
            result.push_str(after);
            Cow::Owned(result)
        }
        None => Cow::Borrowed(code),
    }
}

/// Inserts `text` right before the first `sourceMappingURL` comment,
/// or appends it to the end of `code` if there is no comment.
pub fn insert_before(code: &str, text: &str) -> String {
    let at = Marker::find(code).map_or(code.len(), |marker| marker.start());

    let mut result = String::with_capacity(code.len() + text.len());
    result.push_str(&code[..at]);
    result.push_str(text);
    result.push_str(&code[at..]);
    result
}
