//! # Block Processors
//!
//! Pluggable handlers for top-level blocks, tried in priority order.
//!
//! - **`video`**: `VideoProcessor` turns `[video]` blocks into `<video>` elements
//! - **`markdown`**: `MarkdownProcessor` renders anything else with pulldown-cmark
//!
//! A processor's `test` must never fail loudly: returning `false` hands the
//! block to the next processor.

pub mod markdown;
pub mod video;

use std::collections::VecDeque;

use crate::{element::Element, references::ReferenceRegistry};

pub use markdown::MarkdownProcessor;
pub use video::{VideoOptions, VideoProcessor};

/// Document-wide state shared with every processor.
pub struct BlockContext<'a> {
    pub references: &'a dyn ReferenceRegistry,
}

pub trait BlockProcessor {
    /// Short name used in log output.
    fn name(&self) -> &'static str;

    /// Returns true if this processor handles `block`.
    fn test(&mut self, ctx: &BlockContext<'_>, block: &str) -> bool;

    /// Consumes the front of `blocks` and appends output to `parent`.
    ///
    /// Returns false, leaving `blocks` untouched, if the block turned out not
    /// to apply after all.
    fn run(
        &mut self,
        ctx: &BlockContext<'_>,
        parent: &mut Element,
        blocks: &mut VecDeque<String>,
    ) -> bool;
}

/// Drives the registered processors over a queue of blocks.
#[derive(Default)]
pub struct BlockParser {
    processors: Vec<Box<dyn BlockProcessor>>,
}

impl BlockParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a processor after all previously registered ones.
    pub fn register(&mut self, processor: Box<dyn BlockProcessor>) {
        self.processors.push(processor);
    }

    pub fn len(&self) -> usize {
        self.processors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }

    /// Offers each block to the processors until one consumes it.
    ///
    /// A block nobody accepts is dropped.
    pub fn parse_blocks(
        &mut self,
        ctx: &BlockContext<'_>,
        parent: &mut Element,
        mut blocks: VecDeque<String>,
    ) {
        while let Some(block) = blocks.front().cloned() {
            let handled = self.processors.iter_mut().any(|processor| {
                if !processor.test(ctx, &block) {
                    return false;
                }
                log::trace!("{} processor accepted block", processor.name());
                processor.run(ctx, parent, &mut blocks)
            });

            if !handled {
                log::debug!("no processor accepted block {block:?}, dropping it");
                blocks.pop_front();
            }
        }
    }
}
