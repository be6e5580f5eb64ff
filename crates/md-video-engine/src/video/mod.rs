//! # Video Blocks
//!
//! Recognizes a block of the form
//!
//! ```text
//! [Video: Title of the Video]
//! ![poster](http://link.to.poster/link.png)
//! [download.mp4](http://link.to.video/file.mp4)
//! [subtitle.en-US.vtt](http://link.to.subtitle/en_us.vtt "English")
//! ```
//!
//! and turns it into a [`ParsedVideo`]. Without the extension the same text
//! still renders as a paragraph of usable links.
//!
//! ## Modules
//!
//! - **`header`**: `[video]` / `[video: title]` header test
//! - **`classify`**: `EntryLabel` naming convention (poster / subtitle / source)
//! - **`parse`**: `parse_video_block()` over header and entry lines
//! - **`types`**: `ParsedVideo`, `VideoSource`, `SubtitleTrack`, `VideoParseError`

pub mod classify;
pub mod header;
pub mod parse;
pub mod types;

pub use classify::{EntryLabel, VideoEntry};
pub use header::is_video_header;
pub use parse::parse_video_block;
pub use types::{ParsedVideo, SubtitleTrack, VideoParseError, VideoSource};
