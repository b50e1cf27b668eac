use log::Level;

pub const BRAND_NAME: &str = "Ascendify";
pub const SUPPORT_EMAIL: &str = "hello@ascendify.dev";

/// Local storage key holding the persisted theme ("light" or "dark").
pub const THEME_STORAGE_KEY: &str = "theme";

/// Windows narrower than this use the mobile roadmap profile.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// CSS `max-width` for mobile-only rules. Stays just under the breakpoint so
/// a 768px window is desktop everywhere.
pub const MOBILE_MEDIA_MAX_PX: f64 = 767.98;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Local trunk serve builds
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Numeric knobs of one roadmap layout profile.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProfileConfig {
    pub canvas_width: f64,
    pub segment_height: f64,
    pub top_padding: f64,
    pub pin_size: f64,
    pub tooltip_width: f64,
    pub shadow_stroke: f64,
    pub road_stroke: f64,
    pub reveal_stroke: f64,
}

pub const DESKTOP_PROFILE: ProfileConfig = ProfileConfig {
    canvas_width: 1200.0,
    segment_height: 400.0,
    top_padding: 100.0,
    pin_size: 48.0,
    tooltip_width: 400.0,
    shadow_stroke: 70.0,
    road_stroke: 60.0,
    reveal_stroke: 3.0,
};

pub const MOBILE_PROFILE: ProfileConfig = ProfileConfig {
    canvas_width: 800.0,
    segment_height: 300.0,
    top_padding: 100.0,
    pin_size: 32.0,
    tooltip_width: 280.0,
    shadow_stroke: 50.0,
    road_stroke: 40.0,
    reveal_stroke: 2.0,
};
