use regex::Regex;
use std::sync::OnceLock;

// ECMAScript `\s`: unlike Unicode `White_Space` it includes U+FEFF and excludes U+0085
macro_rules! whitespace {
    () => {
        r"\t\n\x0B\f\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}"
    };
}

macro_rules! inner_pattern {
    () => {
        concat!(r"[#@] sourceMappingURL=([^", whitespace!(), r#"'"]*)"#)
    };
}

/// The literal every `sourceMappingURL` comment contains.
pub(crate) const LITERAL: &[u8] = b"sourceMappingURL=";

/// Capture group holding the url of the block comment form.
pub(crate) const BLOCK_URL_GROUP: usize = 1;
/// Capture group holding the url of the line comment form.
pub(crate) const LINE_URL_GROUP: usize = 2;

/// Pattern of the comment body, without any comment delimiters:
/// `#` (or the legacy `@`), one space, `sourceMappingURL=` and the url.
///
/// The url is captured in the first group. It runs up to the first whitespace or quote and may be empty.
pub const INNER_PATTERN: &str = inner_pattern!();

/// Pattern of a complete `sourceMappingURL` comment, in either of two forms:
///
/// - `//# sourceMappingURL=<url>`
/// - `/*# sourceMappingURL=<url> */`, where the body may sit on the line after `/*`,
///   optionally prefixed with a redundant `//`, and any whitespace may precede `*/`.
///
/// Whitespace following the comment belongs to the match.
pub const PATTERN: &str = concat!(
    r"(?:",
    r"/\*",
    r"(?:[",
    whitespace!(),
    r"]*\r?\n(?://)?)?",
    r"(?:",
    inner_pattern!(),
    r")[",
    whitespace!(),
    r"]*",
    r"\*/",
    r"|",
    r"//(?:",
    inner_pattern!(),
    r")",
    r")[",
    whitespace!(),
    r"]*",
);

/// Whether `c` counts as whitespace in [PATTERN], which is what ends a url.
#[cfg_attr(not(feature = "builder"), allow(dead_code))]
pub(crate) fn is_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\x0B'
            | '\x0C'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Returns the compiled [INNER_PATTERN].
pub fn inner_regex() -> &'static Regex {
    static INNER_REGEX: OnceLock<Regex> = OnceLock::new();
    INNER_REGEX.get_or_init(|| Regex::new(INNER_PATTERN).expect("INNER_PATTERN is valid"))
}

/// Returns the compiled [PATTERN].
///
/// [Regex] carries no scan position, so sharing one instance between calls and threads is fine.
pub fn regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(PATTERN).expect("PATTERN is valid"))
}
