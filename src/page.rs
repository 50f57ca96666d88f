//! Page initialization.
//!
//! [`init`] applies a parsed parameter set to the document: render the emoji
//! text (or the default emoji) into the container, mirror the rendered emoji
//! in the title, and apply the optional background color and sizing rule.
//! It runs exactly once per page view and only mutates the document through
//! the [`Dom`] facade.

use log::debug;

use crate::dom::Dom;
use crate::emoji::{DEFAULT_EMOJI, EMOJI_CLASS, SubstituteOptions, substitute};
use crate::params::PageParams;

/// The id of the container element the rendered emoji go into.
pub const CONTAINER_ID: &str = "emoji-wrapper";

/// Applies the parsed parameters to the document.
///
/// Guarantees, in order:
///
/// 1. The container is never left empty: if the emoji text renders zero
///    images (absent, or nothing in it was recognized), the default emoji is
///    shown instead.
/// 2. The title equals the concatenated alt texts of the images actually
///    displayed.
/// 3. A background color is applied only when one was supplied.
/// 4. A sizing rule is inserted only for a non-zero size; `0` would render
///    the images invisible and is treated like an absent size.
pub fn init<D: Dom>(dom: &mut D, params: &PageParams) {
    debug!("initializing page with {params:?}");

    let options = SubstituteOptions::default();

    let mut rendered = match params.emoji.as_deref() {
        Some(text) => {
            let result = substitute(text, &options);
            dom.set_container_html(&result.html);
            result
        }
        None => Default::default(),
    };

    if rendered.image_count() == 0 {
        rendered = substitute(DEFAULT_EMOJI, &options);
        dom.set_container_html(&rendered.html);
    }

    dom.set_title(&rendered.title());

    if let Some(color) = params.back_color.as_deref() {
        dom.set_background_color(color);
    }

    if let Some(size) = params.size.filter(|&s| s > 0) {
        dom.insert_style_rule(&size_rule(size));
    }
}

/// Toggles full-screen presentation of the page.
///
/// Enters full screen when nothing is presented full-screen, exits
/// otherwise. A no-op on platforms without a full-screen API. The platform
/// binding wires this to a double-click on the container.
pub fn toggle_fullscreen<D: Dom>(dom: &mut D) {
    if !dom.supports_fullscreen() {
        return;
    }

    if dom.fullscreen_active() {
        dom.exit_fullscreen();
    } else {
        dom.enter_fullscreen();
    }
}

/// Builds the sizing rule constraining rendered images to `size` percent of
/// the viewport in both dimensions.
fn size_rule(size: u8) -> String {
    format!(".{EMOJI_CLASS} {{ max-width: {size}%; max-height: {size}%; }}")
}

// ============================================================================
// Tests
// ============================================================================
