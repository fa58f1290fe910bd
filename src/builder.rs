use crate::marker::{contains_marker, strip};
use crate::pattern::is_whitespace;
use crate::{Error, Result};
use std::fmt::{Display, Formatter};

/// Comment syntax used when rendering a [SourceMappingComment].
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub enum CommentStyle {
    /// `//# sourceMappingURL=<url>`, for JavaScript.
    #[default]
    Line,
    /// `/*# sourceMappingURL=<url> */`, for CSS and anything else without line comments.
    Block,
}

/// A `sourceMappingURL` comment ready to be written into generated code.
///
/// The url is checked on construction, so the rendered comment is always recognized by [extract_url](crate::extract_url)
/// and yields the same url back.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SourceMappingComment {
    url: String,
    style: CommentStyle,
    legacy: bool,
}

impl SourceMappingComment {
    pub fn builder() -> SourceMappingCommentBuilder {
        SourceMappingCommentBuilder::default()
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn style(&self) -> CommentStyle {
        self.style
    }

    /// Whether the comment uses the legacy `@` sigil instead of `#`.
    pub fn is_legacy(&self) -> bool {
        self.legacy
    }

    /// Removes every existing comment from `code` and appends this one on its own line.
    pub fn replace_in(&self, code: &str) -> String {
        let mut stripped = strip(code).into_owned();
        while contains_marker(&stripped) {
            stripped = strip(&stripped).into_owned();
        }
        let mut result = String::with_capacity(stripped.len() + self.url.len() + 32);
        result.push_str(&stripped);
        if !result.is_empty() && !result.ends_with('\n') {
            result.push('\n');
        }
        result.push_str(&self.to_string());
        result
    }
}

impl Display for SourceMappingComment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let sigil = if self.legacy { '@' } else { '#' };
        match self.style {
            CommentStyle::Line => write!(f, "//{sigil} sourceMappingURL={}", self.url),
            CommentStyle::Block => write!(f, "/*{sigil} sourceMappingURL={} */", self.url),
        }
    }
}

#[derive(Debug, Default)]
pub struct SourceMappingCommentBuilder {
    url: Option<String>,
    style: CommentStyle,
    legacy: bool,
}

impl SourceMappingCommentBuilder {
    #[inline(always)]
    pub fn with_url<S: Into<String>>(mut self, url: S) -> Self {
        self.url = Some(url.into());
        self
    }

    #[inline(always)]
    pub fn with_style(mut self, style: CommentStyle) -> Self {
        self.style = style;
        self
    }

    #[inline(always)]
    pub fn with_legacy(mut self, legacy: bool) -> Self {
        self.legacy = legacy;
        self
    }

    /// Fails if the url contains whitespace or quotes, which would end the url early once rendered.
    pub fn build(self) -> Result<SourceMappingComment> {
        let url = self.url.unwrap_or_default();

        if let Some((offset, found)) = url
            .char_indices()
            .find(|&(_, c)| is_whitespace(c) || c == '\'' || c == '"')
        {
            tracing::debug!(url = %url, offset, "rejected sourceMappingURL");
            return Err(Error::invalid_url(&url, offset, found));
        }

        Ok(SourceMappingComment {
            url,
            style: self.style,
            legacy: self.legacy,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{CommentStyle, SourceMappingComment};
    use crate::{extract_url, Error};

    fn comment(url: &str, style: CommentStyle, legacy: bool) -> SourceMappingComment {
        SourceMappingComment::builder()
            .with_url(url)
            .with_style(style)
            .with_legacy(legacy)
            .build()
            .unwrap()
    }

    #[test]
    fn test_render() {
        insta::assert_snapshot!(comment("a.js.map", CommentStyle::Line, false), @"//# sourceMappingURL=a.js.map");
        insta::assert_snapshot!(comment("a.css.map", CommentStyle::Block, false), @"/*# sourceMappingURL=a.css.map */");
        insta::assert_snapshot!(comment("a.js.map", CommentStyle::Line, true), @"//@ sourceMappingURL=a.js.map");
        insta::assert_snapshot!(SourceMappingComment::builder().build().unwrap(), @"//# sourceMappingURL=");
    }

    #[test]
    fn test_rendered_url_is_extracted() {
        for style in [CommentStyle::Line, CommentStyle::Block] {
            for legacy in [false, true] {
                for url in ["", "foo.js.map", "https://example.com/a/b.js.map?v=1#x", "a\u{85}b"] {
                    let rendered = comment(url, style, legacy).to_string();
                    assert_eq!(extract_url(&rendered), Some(url), "{rendered}");
                }
            }
        }
    }

    #[test]
    fn test_invalid_url() {
        for (url, offset, found) in [("a b", 1, ' '), ("a\n", 1, '\n'), ("'a'", 0, '\''), ("x\"", 1, '"'), ("a\u{FEFF}", 1, '\u{FEFF}')] {
            let err = SourceMappingComment::builder().with_url(url).build().unwrap_err();
            match err {
                Error::InvalidUrl {
                    offset: o,
                    found: f,
                    ..
                } => {
                    assert_eq!((o, f), (offset, found));
                }
            }
        }
    }

    #[test]
    fn test_replace_in() {
        let c = comment("new.js.map", CommentStyle::Line, false);
        assert_eq!(
            c.replace_in("code\n//# sourceMappingURL=old.js.map\n"),
            "code\n//# sourceMappingURL=new.js.map"
        );
        assert_eq!(c.replace_in("code"), "code\n//# sourceMappingURL=new.js.map");
        assert_eq!(c.replace_in(""), "//# sourceMappingURL=new.js.map");

        let replaced = c.replace_in(
            "a\n//# sourceMappingURL=old1.map\nb\n/*# sourceMappingURL=old2.map */\n",
        );
        assert_eq!(replaced, "a\nb\n//# sourceMappingURL=new.js.map");
        assert_eq!(extract_url(&replaced), Some("new.js.map"));
    }
}
