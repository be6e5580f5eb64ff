//! # Link Parsing
//!
//! Reads a single entry line of a video block as a link.
//!
//! ## Syntaxes (in precedence order)
//!
//! - **Image-style**: `![poster](http://host/p.png Title text)`; the body splits
//!   on its first whitespace run and the remainder is kept verbatim as title.
//! - **Text-style**: `[download.mp4](http://host/a.mp4 "Title")`; the body splits
//!   on its last whitespace run and the trailing token is a title only when quoted.
//! - **Reference-style**: `[subtitle.en.vtt][ref]`; resolved through a
//!   [`ReferenceRegistry`](crate::references::ReferenceRegistry).
//!
//! ## Modules
//!
//! - **`types`**: `Link` and `LinkError`
//! - **`kinds`**: `LinkSyntax` delimiter and quoting rules
//! - **`parser`**: `parse_link()` entry point

pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_link;
pub use types::{Link, LinkError};
