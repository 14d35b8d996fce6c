//! Sizing, stroke, and styling constants for the picker.

/// Extra view-box space around the orbit (split between both sides)
pub const VIEW_BOX_MARGIN: f64 = 40.0;

/// Orbit ellipse stroke width, in view-box units
pub const ORBIT_STROKE: f64 = 2.5;

/// Orbit dash pattern (on, off), in view-box units
pub const ORBIT_DASH: [f64; 2] = [5.0, 5.0];

/// Number of translucent rings drawn around the sun for the glow
pub const GLOW_LAYERS: usize = 6;

/// Glow extends this many sun radii past the sun's edge
pub const GLOW_SPREAD: f64 = 1.0;

/// Body outline stroke width, in view-box units
pub const BODY_STROKE: f64 = 1.5;

/// Largest width the picker grows to
pub const MAX_PICKER_WIDTH: f32 = 512.0;

/// Gap between panel elements
pub const GAP: f32 = 8.0;

/// Padding around the whole panel
pub const PADDING: f32 = 16.0;

/// Border radius for buttons
pub const RADIUS: f32 = 6.0;

/// Side length of square icon buttons (copy)
pub const ICON_BUTTON_SIZE: f32 = 24.0;

/// Border radius for icon buttons
pub const ICON_BUTTON_RADIUS: f32 = 3.0;

/// Caption font size ("Selected Date")
pub const CAPTION_FONT: f32 = 16.0;

/// Selected date font size
pub const DATE_FONT: f32 = 28.0;

/// Button label font size
pub const BUTTON_FONT: f32 = 14.0;

/// Icon font size inside buttons
pub const ICON_FONT: f32 = 16.0;
