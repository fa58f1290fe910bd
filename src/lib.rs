//! # sora-url
//!
//! This crate finds, removes and inserts around the `sourceMappingURL` comment of generated code.
//!
//! ## Getting Started
//!
//! ```
//! use sora_url::{extract_url, insert_before, strip};
//!
//! let code = "code\n//# sourceMappingURL=foo.js.map";
//!
//! assert_eq!(extract_url(code), Some("foo.js.map"));
//! assert_eq!(strip(code), "code\n");
//! assert_eq!(insert_before(code, "more code\n"), "code\nmore code\n//# sourceMappingURL=foo.js.map");
//! ```
//!
//! ## Overview
//!
//! ### Recognized comments
//!
//! - `//# sourceMappingURL=<url>`
//! - `/*# sourceMappingURL=<url> */`
//! - the body of a block comment on its own line, with or without a redundant `//`:
//!   `/*\n# sourceMappingURL=<url>\n*/`, `/*\n//# sourceMappingURL=<url>\n*/`
//! - a `//# sourceMappingURL=<url>` line inside a larger block comment, such as a library banner
//!
//! `@` is accepted in place of `#` (legacy syntax), and both `\n` and `\r\n` line endings are supported.
//! Only the first comment in the code is ever considered.
//!
//! ### `Marker`
//!
//! [Marker] is the matched comment: its span in the code and the url it references.
//!
//! ### Patterns
//!
//! [INNER_PATTERN] matches the comment body and captures the url,
//! [PATTERN] wraps it in comment delimiters. Both are exposed compiled via [inner_regex] and [regex].
//!
//! ## Features
//!
//! - `builder`: Enables [SourceMappingComment](crate::SourceMappingComment) for rendering new comments.
//!

mod marker;
mod pattern;

#[cfg(feature = "builder")]
mod builder;
#[cfg(feature = "builder")]
mod error;

pub use marker::*;
pub use pattern::{inner_regex, regex, INNER_PATTERN, PATTERN};

#[cfg(feature = "builder")]
pub use builder::*;
#[cfg(feature = "builder")]
pub use error::*;
