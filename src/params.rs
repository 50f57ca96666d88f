//! Query-string parameter parsing.
//!
//! The page is configured entirely through the URL query string, using a
//! compact hyphen-delimited positional format:
//!
//! ```text
//! ?<emoji>-<backColor>-<size>
//! ```
//!
//! Every field is optional. The first field is percent-encoded emoji text,
//! the second a CSS color (bare hex values gain a leading `#`), the third a
//! 1–2 digit percentage applied to the rendered images' max-width/height.
//!
//! Parsing is best-effort: malformed fields become `None` and the page falls
//! back to its defaults. Nothing in this module can fail.
//!
//! # Example
//!
//! ```
//! use bigmoji::parse_query;
//!
//! let params = parse_query("%F0%9F%98%80-FF0000-50");
//! assert_eq!(params.emoji.as_deref(), Some("😀"));
//! assert_eq!(params.back_color.as_deref(), Some("#FF0000"));
//! assert_eq!(params.size, Some(50));
//! ```

use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};

// ============================================================================
// PageParams
// ============================================================================

/// The parsed page parameters.
///
/// Constructed once per page load by [`parse_query`] and consumed once by
/// [`init`](crate::init). Absent fields mean "use the default".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageParams {
    /// Percent-decoded emoji text to render. `None` shows the default emoji.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,

    /// CSS background color, `#`-prefixed when given as a bare hex value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub back_color: Option<String>,

    /// Image size as a percentage of the viewport (0–99).
    ///
    /// A parsed `0` is kept here for fidelity with the digit pattern, but the
    /// page initializer treats it like an absent size since a 0% rule would
    /// hide the images entirely.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u8>,
}

impl PageParams {
    /// Serializes the parameters to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes parameters from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

// ============================================================================
// Parsing
// ============================================================================

/// Parses the query string (without the leading `?`) into [`PageParams`].
///
/// The string is split on `-` before any decoding, so a literal hyphen in the
/// emoji text must be percent-encoded. Only the first three fields are
/// significant; empty fields and anything past the third are ignored.
pub fn parse_query(query: &str) -> PageParams {
    let mut params = PageParams::default();

    if query.is_empty() {
        return params;
    }

    let mut fields = query.split('-');

    if let Some(field) = fields.next().filter(|f| !f.is_empty()) {
        // Lossy on purpose: a malformed escape never fails the whole parse.
        let decoded = percent_decode_str(field).decode_utf8_lossy();
        params.emoji = Some(decoded.into_owned());
    }

    if let Some(field) = fields.next().filter(|f| !f.is_empty()) {
        params.back_color = Some(ensure_hex_color_hash(field));
    }

    if let Some(field) = fields.next().filter(|f| !f.is_empty()) {
        params.size = parse_int_percent(field);
    }

    params
}

/// Adds a leading number sign (`#`) if the string is a bare hex color value
/// (e.g. `F955AB`), i.e. exactly 3, 4, 6 or 8 hex digits.
///
/// Anything else passes through unchanged, which keeps CSS color keywords
/// (`red`, `rebeccapurple`) and already-prefixed `#rrggbb` values working.
pub fn ensure_hex_color_hash(color: &str) -> String {
    let is_hex = matches!(color.len(), 3 | 4 | 6 | 8)
        && color.chars().all(|c| c.is_ascii_hexdigit());

    if is_hex {
        format!("#{color}")
    } else {
        color.to_string()
    }
}

/// Converts a string to a 1–2 digit percentage.
///
/// Accepts `"0"`..`"9"` and `"10"`..`"99"` (no leading zero on two-digit
/// values). Returns `None` for everything else.
pub fn parse_int_percent(value: &str) -> Option<u8> {
    let bytes = value.as_bytes();
    let valid = match bytes {
        [d] => d.is_ascii_digit(),
        [t, d] => (b'1'..=b'9').contains(t) && d.is_ascii_digit(),
        _ => false,
    };

    if valid { value.parse().ok() } else { None }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_is_all_absent() {
        assert_eq!(parse_query(""), PageParams::default());
    }

    #[test]
    fn full_query_parses_all_fields() {
        let params = parse_query("%F0%9F%98%80-FF0000-50");
        assert_eq!(params.emoji.as_deref(), Some("😀"));
        assert_eq!(params.back_color.as_deref(), Some("#FF0000"));
        assert_eq!(params.size, Some(50));
    }

    #[test]
    fn emoji_only() {
        let params = parse_query("%F0%9F%A6%86");
        assert_eq!(params.emoji.as_deref(), Some("🦆"));
        assert!(params.back_color.is_none());
        assert!(params.size.is_none());
    }

    #[test]
    fn color_keyword_passes_through() {
        let params = parse_query("hello-red");
        assert_eq!(params.emoji.as_deref(), Some("hello"));
        assert_eq!(params.back_color.as_deref(), Some("red"));
        assert!(params.size.is_none());
    }

    #[test]
    fn empty_fields_are_absent() {
        let params = parse_query("-red-50");
        assert!(params.emoji.is_none());
        assert_eq!(params.back_color.as_deref(), Some("red"));
        assert_eq!(params.size, Some(50));

        let params = parse_query("--50");
        assert!(params.emoji.is_none());
        assert!(params.back_color.is_none());
        assert_eq!(params.size, Some(50));
    }

    #[test]
    fn extra_fields_are_ignored() {
        let params = parse_query("%F0%9F%98%80-red-50-extra-junk");
        assert_eq!(params.emoji.as_deref(), Some("😀"));
        assert_eq!(params.back_color.as_deref(), Some("red"));
        assert_eq!(params.size, Some(50));
    }

    #[test]
    fn undecoded_text_is_kept_verbatim() {
        let params = parse_query("hello%20world");
        assert_eq!(params.emoji.as_deref(), Some("hello world"));
    }

    #[test]
    fn malformed_escape_does_not_fail() {
        // A bad escape sequence decodes lossily instead of erroring.
        let params = parse_query("%ZZ");
        assert!(params.emoji.is_some());
    }

    #[test]
    fn hex_colors_gain_a_hash() {
        assert_eq!(ensure_hex_color_hash("f00"), "#f00");
        assert_eq!(ensure_hex_color_hash("f00a"), "#f00a");
        assert_eq!(ensure_hex_color_hash("FF0000"), "#FF0000");
        assert_eq!(ensure_hex_color_hash("ff0000cc"), "#ff0000cc");
    }

    #[test]
    fn non_hex_colors_pass_through() {
        assert_eq!(ensure_hex_color_hash("red"), "red");
        assert_eq!(ensure_hex_color_hash("rebeccapurple"), "rebeccapurple");
        assert_eq!(ensure_hex_color_hash("#ff0000"), "#ff0000");
        // Wrong lengths are not hex colors.
        assert_eq!(ensure_hex_color_hash("ff000"), "ff000");
        assert_eq!(ensure_hex_color_hash("ff00000"), "ff00000");
        // Right length, non-hex digit.
        assert_eq!(ensure_hex_color_hash("ffg"), "ffg");
    }

    #[test]
    fn percent_accepts_one_and_two_digits() {
        assert_eq!(parse_int_percent("0"), Some(0));
        assert_eq!(parse_int_percent("5"), Some(5));
        assert_eq!(parse_int_percent("10"), Some(10));
        assert_eq!(parse_int_percent("42"), Some(42));
        assert_eq!(parse_int_percent("99"), Some(99));
    }

    #[test]
    fn percent_rejects_everything_else() {
        assert_eq!(parse_int_percent(""), None);
        assert_eq!(parse_int_percent("00"), None);
        assert_eq!(parse_int_percent("05"), None);
        assert_eq!(parse_int_percent("100"), None);
        assert_eq!(parse_int_percent("abc"), None);
        assert_eq!(parse_int_percent("4x"), None);
        assert_eq!(parse_int_percent("-5"), None);
    }

    #[test]
    fn parsing_is_idempotent() {
        let query = "%F0%9F%98%80-FF0000-50";
        assert_eq!(parse_query(query), parse_query(query));
    }

    #[test]
    fn json_roundtrip_uses_camel_case() {
        let params = parse_query("%F0%9F%98%80-FF0000-50");
        let json = params.to_json().unwrap();

        assert!(json.contains("\"backColor\""));

        let restored = PageParams::from_json(&json).unwrap();
        assert_eq!(restored, params);
    }
}
