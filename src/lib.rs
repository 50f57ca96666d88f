//! bigmoji: full-screen emoji viewer
//!
//! This crate renders one or more emoji characters as SVG images filling the
//! page, configured entirely through the URL query string:
//!
//! ```text
//! ?<emoji>-<backColor>-<size>
//! ```
//!
//! The query string is parsed into [`PageParams`], emoji characters are
//! substituted with image markup, and the result is applied to the document
//! through the [`Dom`] facade. With the `web` feature the crate ships a wasm
//! entry point binding the facade to the live browser document; without it,
//! the whole pipeline runs natively (which is how the tests exercise it).
//!
//! # Example
//!
//! ```
//! use bigmoji::{parse_query, substitute, SubstituteOptions};
//!
//! let params = parse_query("%F0%9F%98%80-FF0000-50");
//! assert_eq!(params.emoji.as_deref(), Some("😀"));
//! assert_eq!(params.back_color.as_deref(), Some("#FF0000"));
//! assert_eq!(params.size, Some(50));
//!
//! let rendered = substitute(params.emoji.as_deref().unwrap(), &SubstituteOptions::default());
//! assert_eq!(rendered.images[0].src, "svg/1f600.svg");
//! ```

mod dom;
mod emoji;
mod page;
mod params;

#[cfg(feature = "web")]
mod web;

pub use dom::{Dom, PageError};
pub use emoji::{
    DEFAULT_EMOJI, EMOJI_CLASS, RenderedEmoji, SubstituteOptions, Substitution, substitute,
};
pub use page::{CONTAINER_ID, init, toggle_fullscreen};
pub use params::{PageParams, ensure_hex_color_hash, parse_int_percent, parse_query};

#[cfg(feature = "web")]
pub use web::WebDom;
