//! Emoji-to-image substitution.
//!
//! This module turns text into markup where every recognized emoji sequence
//! becomes an `<img>` element referencing an SVG asset, while the remaining
//! characters are copied through HTML-escaped. Emoji recognition delegates
//! to the `twemoji-assets` crate; this module only scans the text, maps
//! matched sequences to asset file names and builds the markup.
//!
//! # Example
//!
//! ```
//! use bigmoji::{substitute, SubstituteOptions};
//!
//! let result = substitute("🦆", &SubstituteOptions::default());
//! assert_eq!(result.images.len(), 1);
//! assert_eq!(result.images[0].alt, "🦆");
//! assert_eq!(result.images[0].src, "svg/1f986.svg");
//! ```

use twemoji_assets::svg::SvgTwemojiAsset;

/// The emoji shown when the query string supplies none (grinning face).
pub const DEFAULT_EMOJI: &str = "😀";

/// CSS class carried by every substituted image element.
pub const EMOJI_CLASS: &str = "emoji";

/// Longest emoji sequence considered when scanning, in scalar values.
/// Family ZWJ sequences with variation selectors top out below this.
const MAX_SEQUENCE_CHARS: usize = 10;

// ============================================================================
// Options
// ============================================================================

/// Options controlling where substituted images point.
///
/// The defaults match the shipped asset layout: `svg/<codepoints>.svg`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstituteOptions {
    /// Asset folder prepended to every image source.
    pub folder: String,

    /// File extension appended to every image source, including the dot.
    pub ext: String,
}

impl Default for SubstituteOptions {
    fn default() -> Self {
        Self {
            folder: "svg".to_string(),
            ext: ".svg".to_string(),
        }
    }
}

impl SubstituteOptions {
    /// Creates the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the asset folder.
    pub fn with_folder(mut self, folder: impl Into<String>) -> Self {
        self.folder = folder.into();
        self
    }

    /// Sets the file extension (including the dot).
    pub fn with_ext(mut self, ext: impl Into<String>) -> Self {
        self.ext = ext.into();
        self
    }
}

// ============================================================================
// Substitution result
// ============================================================================

/// One emoji sequence that was replaced by an image element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEmoji {
    /// The original emoji character(s), carried as the image's alt text.
    pub alt: String,

    /// The image source path, e.g. `svg/1f600.svg`.
    pub src: String,
}

/// The outcome of a [`substitute`] call: the final markup plus one record
/// per substituted image, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Substitution {
    /// HTML markup with emoji replaced by `<img>` elements.
    pub html: String,

    /// The substituted images, in the order they appear in the markup.
    pub images: Vec<RenderedEmoji>,
}

impl Substitution {
    /// Number of images in the markup.
    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    /// Concatenates the alt texts of all images, in document order.
    ///
    /// This mirrors the emoji characters actually displayed, so text that
    /// produced no image contributes nothing.
    pub fn title(&self) -> String {
        self.images.iter().map(|img| img.alt.as_str()).collect()
    }
}

// ============================================================================
// Substitution
// ============================================================================

/// Replaces every recognized emoji sequence in `text` with an image element.
///
/// Scanning is greedy: at each position the longest sequence known to the
/// asset collection wins, so multi-scalar sequences (flags, ZWJ families,
/// keycaps) are matched whole rather than split into parts. Characters that
/// are not part of any recognized sequence are copied through HTML-escaped.
pub fn substitute(text: &str, options: &SubstituteOptions) -> Substitution {
    let mut html = String::with_capacity(text.len());
    let mut images = Vec::new();

    let mut pos = 0;
    while pos < text.len() {
        let rest = &text[pos..];

        if let Some(emoji) = longest_emoji_prefix(rest) {
            let src = format!("{}/{}{}", options.folder, asset_name(emoji), options.ext);
            html.push_str(&image_markup(emoji, &src));
            images.push(RenderedEmoji {
                alt: emoji.to_string(),
                src,
            });
            pos += emoji.len();
        } else if let Some(ch) = rest.chars().next() {
            push_escaped(&mut html, ch);
            pos += ch.len_utf8();
        } else {
            break;
        }
    }

    Substitution { html, images }
}

/// Returns the longest prefix of `text` that is a known emoji sequence.
fn longest_emoji_prefix(text: &str) -> Option<&str> {
    let ends: Vec<usize> = text
        .char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .take(MAX_SEQUENCE_CHARS)
        .collect();

    for &end in ends.iter().rev() {
        let candidate = &text[..end];
        if SvgTwemojiAsset::from_emoji(candidate).is_some() {
            return Some(candidate);
        }
    }
    None
}

/// Maps an emoji sequence to its asset file name: hyphen-joined lowercase
/// hex code points. Sequences without a ZWJ drop their U+FE0F variation
/// selectors, matching the asset collection's naming.
fn asset_name(emoji: &str) -> String {
    let keep_variation = emoji.chars().any(|c| c == '\u{200D}');

    let parts: Vec<String> = emoji
        .chars()
        .filter(|&c| keep_variation || c != '\u{FE0F}')
        .map(|c| format!("{:x}", c as u32))
        .collect();

    parts.join("-")
}

fn image_markup(alt: &str, src: &str) -> String {
    format!(r#"<img class="{EMOJI_CLASS}" draggable="false" alt="{alt}" src="{src}"/>"#)
}

/// Copies a character into the markup, escaping HTML metacharacters so the
/// container receives markup rather than raw user text.
fn push_escaped(html: &mut String, ch: char) {
    match ch {
        '&' => html.push_str("&amp;"),
        '<' => html.push_str("&lt;"),
        '>' => html.push_str("&gt;"),
        '"' => html.push_str("&quot;"),
        _ => html.push(ch),
    }
}

// ============================================================================
// Tests
// ============================================================================
