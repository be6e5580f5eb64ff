use crate::{link::parse_link, references::ReferenceRegistry};

use super::{
    classify::{EntryLabel, VideoEntry},
    header::is_video_header,
    types::{ParsedVideo, VideoParseError},
};

/// Parses a whole video block: header line followed by entry lines.
///
/// Any entry that fails to parse or classify rejects the block; nothing is
/// returned for the lines that did parse.
pub fn parse_video_block(
    block: &str,
    references: &dyn ReferenceRegistry,
) -> Result<ParsedVideo, VideoParseError> {
    let mut lines = block.lines();
    let header = lines.next().ok_or(VideoParseError::EmptyBlock)?;
    if !is_video_header(header) {
        return Err(VideoParseError::NotVideoHeader(header.to_string()));
    }

    let mut video = ParsedVideo::default();
    for line in lines {
        let link = parse_link(line, references)?;
        match EntryLabel::classify(link)? {
            VideoEntry::Poster(href) => video.poster = Some(href),
            VideoEntry::Subtitle(track) => video.subtitles.push(track),
            VideoEntry::Source(source) => video.sources.push(source),
        }
    }
    Ok(video)
}
