//! View constants (window/layout/sizing).

pub(crate) const APP_TITLE: &str = "Sip Happens Café";

pub(crate) const WINDOW_W: f32 = 480.0;
pub(crate) const WINDOW_H: f32 = 420.0;

pub(crate) const PADDING: f32 = 24.0;
pub(crate) const SECTION_SPACING: f32 = 20.0;
pub(crate) const BUTTON_SPACING: f32 = 8.0;
pub(crate) const LINE_SPACING: f32 = 4.0;

// text sizing
pub(crate) const TITLE_TEXT: f32 = 26.0;
pub(crate) const BODY_TEXT: f32 = 15.0;
pub(crate) const STAT_TEXT: f32 = 16.0;
