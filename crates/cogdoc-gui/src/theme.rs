//! Spacing and typography constants for consistent layout.

/// Tight gaps between related elements.
pub const SPACING_XS: f32 = 4.0;

/// Icon margins, toolbar gaps.
pub const SPACING_SM: f32 = 8.0;

/// Default padding.
pub const SPACING_MD: f32 = 16.0;

/// Page margins.
pub const SPACING_LG: f32 = 24.0;

/// Left indent of a nested list.
pub const LIST_INDENT: f32 = 20.0;

pub const TEXT_TITLE: f32 = 26.0;
pub const TEXT_HEADING: f32 = 20.0;
pub const TEXT_BODY: f32 = 14.0;
pub const TEXT_CAPTION: f32 = 12.0;

/// Size of the expand/collapse chevrons.
pub const ICON_SIZE: f32 = 16.0;

/// Thickness of the divider under a group heading.
pub const DIVIDER_HEIGHT: f32 = 1.0;
