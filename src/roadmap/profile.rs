use yew::prelude::*;
use yew_hooks::use_window_size;

use super::geometry::PathParams;
use crate::config::{self, ProfileConfig};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutProfile {
    Mobile,
    Desktop,
}

impl LayoutProfile {
    pub fn for_width(window_width: f64) -> Self {
        if window_width < config::MOBILE_BREAKPOINT_PX {
            LayoutProfile::Mobile
        } else {
            LayoutProfile::Desktop
        }
    }

    pub fn config(&self) -> &'static ProfileConfig {
        match self {
            LayoutProfile::Mobile => &config::MOBILE_PROFILE,
            LayoutProfile::Desktop => &config::DESKTOP_PROFILE,
        }
    }

    pub fn path_params(&self, segments: usize) -> PathParams {
        let cfg = self.config();
        PathParams {
            segments,
            width: cfg.canvas_width,
            segment_height: cfg.segment_height,
            start_x: cfg.canvas_width / 6.0,
            top_padding: cfg.top_padding,
        }
    }
}

/// Current profile; only changes value when the breakpoint is crossed.
#[hook]
pub fn use_layout_profile() -> LayoutProfile {
    let (width, _) = use_window_size();
    LayoutProfile::for_width(width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roadmap::geometry::generate_path;

    #[test]
    fn breakpoint_splits_profiles() {
        assert_eq!(LayoutProfile::for_width(375.0), LayoutProfile::Mobile);
        assert_eq!(LayoutProfile::for_width(767.9), LayoutProfile::Mobile);
        assert_eq!(LayoutProfile::for_width(768.0), LayoutProfile::Desktop);
        assert_eq!(LayoutProfile::for_width(1440.0), LayoutProfile::Desktop);
    }

    #[test]
    fn desktop_starts_at_two_hundred() {
        let params = LayoutProfile::Desktop.path_params(7);
        assert_eq!(params.width, 1200.0);
        assert_eq!(params.start_x, 200.0);
        assert_eq!(params.top_padding, 100.0);
    }

    #[test]
    fn switching_profile_rescales_geometry() {
        let desktop = generate_path(&LayoutProfile::Desktop.path_params(7));
        let mobile = generate_path(&LayoutProfile::Mobile.path_params(7));

        assert_eq!(desktop.corners.len(), mobile.corners.len());
        assert_ne!(desktop, mobile);

        let ratio = 800.0 / 1200.0;
        for (d, m) in desktop.corners.iter().zip(&mobile.corners) {
            assert!((m.x - d.x * ratio).abs() < 1e-9, "{d:?} vs {m:?}");
        }
        assert_eq!(mobile.viewport.width, 800.0);
    }

    #[test]
    fn profiles_differ_in_marker_and_tooltip_size() {
        let mobile = LayoutProfile::Mobile.config();
        let desktop = LayoutProfile::Desktop.config();
        assert!(mobile.pin_size < desktop.pin_size);
        assert!(mobile.tooltip_width < desktop.tooltip_width);
        assert!(mobile.segment_height < desktop.segment_height);
    }
}
