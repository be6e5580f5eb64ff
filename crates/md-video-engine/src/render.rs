//! Markdown to HTML with the video extension installed.

use std::collections::VecDeque;

use pulldown_cmark::{Event, Options, Parser};

use crate::{
    element::Element,
    processor::{BlockContext, BlockParser, MarkdownProcessor, VideoOptions, VideoProcessor},
    references::ReferenceMap,
};

/// Renders markdown documents, handing `[video]` blocks to [`VideoProcessor`].
pub struct Renderer {
    markdown_options: Options,
    blocks: BlockParser,
}

impl Renderer {
    pub fn new(video: VideoOptions) -> Self {
        Self::with_markdown_options(video, Options::empty())
    }

    pub fn with_markdown_options(video: VideoOptions, markdown_options: Options) -> Self {
        let mut blocks = BlockParser::new();
        blocks.register(Box::new(VideoProcessor::new(video)));
        blocks.register(Box::new(MarkdownProcessor::new(markdown_options)));
        Self {
            markdown_options,
            blocks,
        }
    }

    /// Renders a whole document into an element tree rooted at a fragment.
    pub fn render_tree(&mut self, markdown: &str) -> Element {
        let parser = Parser::new_ext(markdown, self.markdown_options);
        let references = ReferenceMap::from_parser(&parser);
        let blocks = split_top_level_blocks(markdown, parser);
        log::debug!(
            "rendering {} blocks with {} reference definitions",
            blocks.len(),
            references.len()
        );

        let ctx = BlockContext {
            references: &references,
        };
        let mut root = Element::fragment();
        self.blocks.parse_blocks(&ctx, &mut root, blocks);
        root
    }

    pub fn render(&mut self, markdown: &str) -> String {
        self.render_tree(markdown).to_html()
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(VideoOptions::default())
    }
}

/// One-shot rendering with default markdown options.
pub fn render_html(markdown: &str, video: VideoOptions) -> String {
    Renderer::new(video).render(markdown)
}

/// Slices the source into its top-level blocks.
///
/// Link reference definitions produce no events and so belong to no block.
fn split_top_level_blocks<'a>(markdown: &'a str, parser: Parser<'a>) -> VecDeque<String> {
    let mut blocks = VecDeque::new();
    let mut depth = 0usize;
    let mut start = 0usize;

    for (event, range) in parser.into_offset_iter() {
        match event {
            Event::Start(_) => {
                if depth == 0 {
                    start = range.start;
                }
                depth += 1;
            }
            Event::End(_) => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    blocks.push_back(markdown[start..range.end].to_string());
                }
            }
            _ if depth == 0 => blocks.push_back(markdown[range].to_string()),
            _ => {}
        }
    }
    blocks
}
