pub mod html;

#[cfg(test)]
mod tests;

/// An `<a>` element as it appears in the markup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAnchor {
    /// Unresolved `href` attribute
    pub href: Option<String>,
    /// `rel` attribute
    pub rel: Option<String>,
    /// Trimmed text content
    pub text: String,
}

/// An `<img>` element as it appears in the markup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawImage {
    /// Unresolved `src` attribute
    pub src: Option<String>,
    /// `alt` attribute
    pub alt: Option<String>,
}

/// Result of parsing a page, before any URL resolution
#[derive(Debug, Clone, Default)]
pub struct ParsedPage {
    /// Trimmed `<title>` text, if present and non-empty
    pub title: Option<String>,
    /// Meta description, if present and non-empty
    pub description: Option<String>,
    /// Anchors in document order
    pub anchors: Vec<RawAnchor>,
    /// Images in document order
    pub images: Vec<RawImage>,
}
