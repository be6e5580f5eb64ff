use crate::link::Link;

use super::types::{SubtitleTrack, VideoParseError, VideoSource};

/// What an entry line contributes to the video, decided by its label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoEntry {
    Poster(String),
    Subtitle(SubtitleTrack),
    Source(VideoSource),
}

/// Label naming convention for entry lines.
pub struct EntryLabel;

impl EntryLabel {
    pub const POSTER: &'static str = "poster";
    pub const SUBTITLE_PREFIX: &'static str = "subtitle";
    pub const SEPARATOR: char = '.';
    pub const MIME_PREFIX: &'static str = "video/";

    /// Classifies a parsed link by its label. Matching is case-sensitive.
    ///
    /// - `poster` is the poster image
    /// - `subtitle.<lang>.<ext>` is a subtitle track
    /// - `<name>.<ext>` is a source with MIME type `video/<ext>`
    pub fn classify(link: Link) -> Result<VideoEntry, VideoParseError> {
        let Link { text, href, title } = link;

        if text == Self::POSTER {
            return Ok(VideoEntry::Poster(href));
        }

        let segments = text.split(Self::SEPARATOR).count();

        if text.starts_with(Self::SUBTITLE_PREFIX) {
            if segments < 3 {
                return Err(VideoParseError::MalformedSubtitle(text));
            }
            let language = text.split(Self::SEPARATOR).nth(1).unwrap_or_default();
            return Ok(VideoEntry::Subtitle(SubtitleTrack {
                href,
                language: language.to_string(),
                label: title,
            }));
        }

        if segments < 2 {
            return Err(VideoParseError::MalformedSource(text));
        }
        let ext = text.rsplit(Self::SEPARATOR).next().unwrap_or_default();
        Ok(VideoEntry::Source(VideoSource {
            href,
            mime_type: format!("{}{ext}", Self::MIME_PREFIX),
        }))
    }
}
