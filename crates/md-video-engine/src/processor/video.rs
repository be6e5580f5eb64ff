use std::collections::VecDeque;

use crate::{
    element::Element,
    video::{ParsedVideo, VideoParseError, parse_video_block},
};

use super::{BlockContext, BlockProcessor};

/// Construction-time settings for [`VideoProcessor`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoOptions {
    /// Emitted as the `crossorigin` attribute when set.
    pub crossorigin: Option<String>,
}

/// Turns `[video]` blocks into `<video>` elements.
pub struct VideoProcessor {
    options: VideoOptions,
    /// Block text and result of the last successful `test`.
    last: Option<(String, ParsedVideo)>,
}

impl VideoProcessor {
    pub const CLASS: &'static str = "md-video";
    pub const FALLBACK_PREFIX: &'static str = "Your browser does not support the ";
    pub const FALLBACK_SUFFIX: &'static str = " element";

    pub fn new(options: VideoOptions) -> Self {
        Self {
            options,
            last: None,
        }
    }

    /// Appends the `<video>` element for `video` to `parent`.
    pub fn build(&self, parent: &mut Element, video: &ParsedVideo) {
        let el = parent.sub_element("video");
        el.set("controls", "controls");
        el.set("autoplay", "autoplay");
        el.set("loop", "loop");
        el.set("class", Self::CLASS);
        if let Some(crossorigin) = &self.options.crossorigin {
            el.set("crossorigin", crossorigin.as_str());
        }
        if let Some(poster) = video.poster.as_deref().filter(|p| !p.is_empty()) {
            el.set("poster", poster);
        }

        for source in &video.sources {
            let node = el.sub_element("source");
            node.set("src", source.href.as_str());
            node.set("type", source.mime_type.as_str());
        }

        for (index, subtitle) in video.subtitles.iter().enumerate() {
            let track = el.sub_element("track");
            track.set("src", subtitle.href.as_str());
            track.set("kind", "subtitles");
            if !subtitle.language.is_empty() {
                track.set("srclang", subtitle.language.as_str());
            }
            if let Some(label) = subtitle.label.as_deref().filter(|l| !l.is_empty()) {
                track.set("label", label);
            }
            if index == 0 {
                track.set("default", "default");
            }
        }

        // Shown only by browsers without <video>; must follow source/track.
        el.push_text(Self::FALLBACK_PREFIX);
        el.sub_element("code").push_text("video");
        el.push_text(Self::FALLBACK_SUFFIX);

        parent.push_text("\n");
    }

    fn parse(ctx: &BlockContext<'_>, block: &str) -> Result<ParsedVideo, VideoParseError> {
        parse_video_block(block, ctx.references)
    }
}

impl BlockProcessor for VideoProcessor {
    fn name(&self) -> &'static str {
        "video"
    }

    fn test(&mut self, ctx: &BlockContext<'_>, block: &str) -> bool {
        self.last = None;
        match Self::parse(ctx, block) {
            Ok(video) => {
                self.last = Some((block.to_string(), video));
                true
            }
            Err(VideoParseError::NotVideoHeader(_) | VideoParseError::EmptyBlock) => {
                log::debug!("not a video block");
                false
            }
            Err(e) => {
                log::debug!("video block not in format: {e}");
                false
            }
        }
    }

    fn run(
        &mut self,
        ctx: &BlockContext<'_>,
        parent: &mut Element,
        blocks: &mut VecDeque<String>,
    ) -> bool {
        let Some(block) = blocks.pop_front() else {
            return false;
        };

        let video = match self.last.take() {
            Some((cached, video)) if cached == block => {
                log::trace!("reusing parsed video block");
                video
            }
            _ => match Self::parse(ctx, &block) {
                Ok(video) => video,
                Err(e) => {
                    log::debug!("video block not in format: {e}");
                    blocks.push_front(block);
                    return false;
                }
            },
        };

        self.build(parent, &video);
        true
    }
}
