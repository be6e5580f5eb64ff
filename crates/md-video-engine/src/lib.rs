pub mod element;
pub mod link;
pub mod processor;
pub mod references;
pub mod render;
pub mod video;

// Re-export key types for easier usage
pub use element::{Element, Node};
pub use link::{Link, LinkError, parse_link};
pub use processor::{BlockContext, BlockParser, BlockProcessor, VideoOptions, VideoProcessor};
pub use references::{LinkReference, ReferenceMap, ReferenceRegistry};
pub use render::{Renderer, render_html};
pub use video::{ParsedVideo, SubtitleTrack, VideoParseError, VideoSource, parse_video_block};
