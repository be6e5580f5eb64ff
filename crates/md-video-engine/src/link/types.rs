/// One entry line parsed as a link: `[text](href "title")`, `![text](href title)`
/// or `[text][reference]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// The bracketed label. Drives classification of the line.
    pub text: String,
    /// Link destination with any `<...>` wrapping removed.
    pub href: String,
    /// Optional title, quotes already stripped for text-style links.
    pub title: Option<String>,
}

/// Why a line could not be read as a link.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LinkError {
    #[error("line {0:?} is not a link")]
    NoMatch(String),
    #[error("reference {0:?} is not defined")]
    UnresolvedReference(String),
}
