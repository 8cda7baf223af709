//! Popover palette
//!
//! Dark translucent-looking surface with a warm star accent

use ratatui::style::Color;

// Frame
pub const BORDER: Color = Color::Rgb(88, 96, 116);
pub const SURFACE: Color = Color::Rgb(24, 26, 33);
pub const SURFACE_HIGHLIGHT: Color = Color::Rgb(46, 58, 84);
pub const DIVIDER: Color = Color::Rgb(52, 56, 68);

// Text
pub const TEXT_PRIMARY: Color = Color::Rgb(228, 230, 236);
pub const TEXT_DIM: Color = Color::Rgb(146, 150, 164);
pub const TEXT_MUTED: Color = Color::Rgb(98, 102, 118);

pub const STAR: Color = Color::Rgb(242, 196, 64);
pub const BUTTON_BG: Color = Color::Rgb(54, 58, 72);

// Prompt and menu
pub const MODAL_BG: Color = Color::Rgb(32, 34, 43);
pub const INPUT_BG: Color = Color::Rgb(18, 19, 25);
pub const ACCENT_POSITIVE: Color = Color::Rgb(96, 168, 255);
