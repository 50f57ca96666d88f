//! Platform facade for document access.
//!
//! All document side effects go through the [`Dom`] trait so the page logic
//! can run and be tested without a live browser. The `web` feature provides
//! the real implementation over `web-sys`; tests use an in-memory one.

use thiserror::Error;

/// Errors raised while binding to the platform document.
///
/// The page logic itself is infallible (missing or malformed parameters
/// degrade to defaults); these only occur when the document the page expects
/// is not there.
#[derive(Debug, Error)]
pub enum PageError {
    /// No global `window` object is available.
    #[error("no global window object")]
    NoWindow,

    /// The window has no document.
    #[error("window has no document")]
    NoDocument,

    /// The container element the page renders into was not found.
    #[error("container element #{0} not found")]
    MissingContainer(String),
}

/// Document operations the page initializer needs.
///
/// Implementations own the lookup of the concrete elements (container, body,
/// head); the trait only deals in the values applied to them.
pub trait Dom {
    /// Replaces the rendered-emoji container's markup.
    fn set_container_html(&mut self, html: &str);

    /// Sets the document title.
    fn set_title(&mut self, title: &str);

    /// Sets the page background color to a CSS color string.
    fn set_background_color(&mut self, color: &str);

    /// Inserts one dynamically generated CSS rule into the document.
    fn insert_style_rule(&mut self, rule: &str);

    /// Whether the platform exposes a full-screen API at all.
    fn supports_fullscreen(&self) -> bool;

    /// Whether an element is currently presented full-screen.
    fn fullscreen_active(&self) -> bool;

    /// Requests full-screen presentation of the page.
    fn enter_fullscreen(&mut self);

    /// Leaves full-screen presentation.
    fn exit_fullscreen(&mut self);
}
