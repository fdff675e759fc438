//! Marker recognition and listing format constants

use once_cell::sync::Lazy;
use regex::bytes::Regex;

// Sentinels delimiting a machine-generated insertion region
pub const START_SENTINEL: &str = "<!-- start inserted example code -->";
pub const END_SENTINEL: &str = "<!-- end inserted example code -->";

// Default source-file suffixes
pub const DEFAULT_HEADER_SUFFIX: &str = ".h";
pub const DEFAULT_IMPL_SUFFIX: &str = ".cc";

/// Marker pattern for the `<link xlink:href=...>` tag syntax.
static XLINK_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^\s*<para><link xlink:href="&url_examples_base;([/\w]+)">Source Code</link></para>"#,
    )
    .expect("xlink marker pattern is valid")
});

/// Marker pattern for the older `<ulink url=...>` tag syntax.
static ULINK_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^\s*<para><ulink url="&url_examples_base;([/\w]+)">Source Code</ulink></para>"#)
        .expect("ulink marker pattern is valid")
});

/// Which XML link tag syntax marks an insertion point.
///
/// Both syntaxes capture the examples subdirectory from the
/// `&url_examples_base;` entity reference; they differ only in the
/// surrounding tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkerSyntax {
    /// `<para><link xlink:href="&url_examples_base;PATH">Source Code</link></para>`
    #[default]
    XLink,
    /// `<para><ulink url="&url_examples_base;PATH">Source Code</ulink></para>`
    ULink,
}

impl MarkerSyntax {
    fn pattern(&self) -> &'static Regex {
        match self {
            MarkerSyntax::XLink => &XLINK_PATTERN,
            MarkerSyntax::ULink => &ULINK_PATTERN,
        }
    }

    /// Match a document line against this marker syntax.
    ///
    /// Returns the captured examples subdirectory, or `None` if the line is
    /// not a marker. The match is anchored at the start of the line, after
    /// optional whitespace; trailing content is ignored.
    pub fn match_line<'a>(&self, line: &'a [u8]) -> Option<&'a str> {
        let caps = self.pattern().captures(line)?;
        let path = caps.get(1)?.as_bytes();
        // The capture is restricted to [/\w]+, so it is always ASCII.
        std::str::from_utf8(path).ok()
    }
}
