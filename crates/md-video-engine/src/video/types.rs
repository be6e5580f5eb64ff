use crate::link::LinkError;

/// A fallback video file: `<source src type>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoSource {
    pub href: String,
    /// `video/<ext>`, taken from the last dot segment of the entry label.
    pub mime_type: String,
}

/// A subtitle file: `<track kind="subtitles">`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleTrack {
    pub href: String,
    /// Second dot segment of the entry label, e.g. `en-US`. May be empty.
    pub language: String,
    /// Human readable label, taken from the link title.
    pub label: Option<String>,
}

/// Everything recognized in one video block.
///
/// Sources and subtitles keep the order of their entry lines: sources are
/// fallbacks tried by the browser in order, and the first subtitle becomes
/// the default track.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedVideo {
    pub poster: Option<String>,
    pub sources: Vec<VideoSource>,
    pub subtitles: Vec<SubtitleTrack>,
}

/// Reasons a block is not accepted as a video block.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VideoParseError {
    #[error("header {0:?} is not a video header")]
    NotVideoHeader(String),
    #[error("block is empty")]
    EmptyBlock,
    #[error(transparent)]
    Link(#[from] LinkError),
    #[error("subtitle label {0:?} needs `subtitle.<lang>.<ext>`")]
    MalformedSubtitle(String),
    #[error("source label {0:?} needs `<name>.<ext>`")]
    MalformedSource(String),
}
