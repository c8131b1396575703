//! Shared styling defaults of the neutral shape set.

pub const CONTROL_FONT_SIZE: f64 = 16.0;
pub const CONTROL_BACKGROUND_COLOR: &str = "#f0f0f0";
pub const CONTROL_BORDER_COLOR: &str = "#c9c9c9";
pub const CONTROL_BORDER_THICKNESS: f64 = 1.0;
pub const CONTROL_TEXT_COLOR: &str = "#252525";

pub const PURPLE: &str = "#9b51e0";
pub const YELLOW: &str = "#fff9b7";
