use std::collections::VecDeque;

use pulldown_cmark::{BrokenLink, CowStr, Options, Parser, html};

use crate::element::Element;

use super::{BlockContext, BlockProcessor};

/// Catch-all processor rendering a block as CommonMark.
///
/// Reference links are resolved against the whole document's definitions,
/// since a single block rarely contains its own.
pub struct MarkdownProcessor {
    options: Options,
}

impl MarkdownProcessor {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    pub fn render(&self, ctx: &BlockContext<'_>, block: &str) -> String {
        let callback = |link: BrokenLink<'_>| {
            ctx.references.resolve(&link.reference).map(|r| {
                (
                    CowStr::from(r.href.clone()),
                    CowStr::from(r.title.clone().unwrap_or_default()),
                )
            })
        };
        let parser = Parser::new_with_broken_link_callback(block, self.options, Some(callback));

        let mut out = String::new();
        html::push_html(&mut out, parser);
        out
    }
}

impl Default for MarkdownProcessor {
    fn default() -> Self {
        Self::new(Options::empty())
    }
}

impl BlockProcessor for MarkdownProcessor {
    fn name(&self) -> &'static str {
        "markdown"
    }

    fn test(&mut self, _ctx: &BlockContext<'_>, _block: &str) -> bool {
        true
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
        parent.push_raw(self.render(ctx, &block));
        true
    }
}
