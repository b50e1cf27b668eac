//! Landmark placement.
//!
//! Section `i` sits on corner `i` of the road. Sections beyond the last
//! corner share the last corner.

use super::curriculum::{CurriculumSection, Tier};
use super::geometry::{PathSpec, Point};
use super::measure::PathMeasurement;

/// Gap between a tooltip and the window edge.
pub const TOOLTIP_MARGIN: f64 = 12.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Right,
    Left,
}

impl Side {
    /// Even markers label to the right of the pin, odd ones to the left.
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            Side::Right
        } else {
            Side::Left
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Side::Right => "side-right",
            Side::Left => "side-left",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub id: String,
    pub label: &'static str,
    pub tier: Tier,
    pub topics: &'static [&'static str],
    pub corner: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScreenMarker {
    pub id: String,
    pub screen: Point,
    pub side: Side,
    pub marker: Marker,
}

/// `"{tier}-{title}"` lowercased with every whitespace run replaced by `-`.
pub fn marker_id(tier: Tier, title: &str) -> String {
    let raw = format!("{}-{}", tier, title).to_lowercase();
    let mut id = String::with_capacity(raw.len());
    let mut in_space = false;
    for c in raw.chars() {
        if c.is_whitespace() {
            if !in_space {
                id.push('-');
            }
            in_space = true;
        } else {
            id.push(c);
            in_space = false;
        }
    }
    id
}

pub fn build_markers(sections: &[CurriculumSection]) -> Vec<Marker> {
    sections
        .iter()
        .enumerate()
        .map(|(i, s)| Marker {
            id: marker_id(s.tier, s.title),
            label: s.title,
            tier: s.tier,
            topics: s.topics,
            corner: i,
        })
        .collect()
}

/// Corner `index`, clamped to the last recorded corner.
pub fn corner_at(corners: &[Point], index: usize) -> Option<Point> {
    let last = corners.len().checked_sub(1)?;
    corners.get(index.min(last)).copied()
}

/// Screen positions for every marker.
///
/// Empty until a measurement taken against this exact PathSpec is available.
pub fn position_markers(markers: &[Marker], spec: &PathSpec, measurement: Option<&PathMeasurement>) -> Vec<ScreenMarker> {
    let Some(measurement) = measurement.filter(|m| m.matches(spec.viewport)) else {
        return Vec::new();
    };
    if measurement.scale.is_degenerate() {
        return Vec::new();
    }

    markers
        .iter()
        .enumerate()
        .filter_map(|(i, m)| {
            let corner = corner_at(&spec.corners, m.corner)?;
            Some(ScreenMarker {
                id: m.id.clone(),
                screen: measurement.scale.to_screen(corner),
                side: Side::for_index(i),
                marker: m.clone(),
            })
        })
        .collect()
}

/// Document x of a tooltip's left edge.
///
/// Right-side tooltips start `gap` past the pin, left-side ones end `gap`
/// before it; either way the box is pulled back inside the window.
/// Width of the window without a classic scrollbar. `client_width` is the
/// document element's, which is 0 before layout.
pub fn visible_width(inner_width: f64, client_width: Option<f64>) -> f64 {
    client_width
        .filter(|w| *w > 0.0)
        .map_or(inner_width, |w| w.min(inner_width))
}

pub fn tooltip_left(pin_x: f64, gap: f64, width: f64, side: Side, window_left: f64, window_width: f64) -> f64 {
    let preferred = match side {
        Side::Right => pin_x + gap,
        Side::Left => pin_x - gap - width,
    };
    let min = window_left + TOOLTIP_MARGIN;
    let max = window_left + window_width - TOOLTIP_MARGIN - width;
    if max < min {
        // Wider than the window; pin to the left margin
        return min;
    }
    preferred.clamp(min, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roadmap::geometry::{generate_path, PathParams, Viewport};
    use crate::roadmap::measure::ScaleTransform;
    use crate::roadmap::tracks::TRACKS;
    use std::collections::HashSet;

    fn spec(segments: usize) -> PathSpec {
        generate_path(&PathParams {
            segments,
            width: 1200.0,
            segment_height: 320.0,
            start_x: 200.0,
            top_padding: 100.0,
        })
    }

    fn measured(spec: &PathSpec, scale: ScaleTransform) -> PathMeasurement {
        PathMeasurement { viewport: spec.viewport, length: spec.estimated_length(), scale }
    }

    #[test]
    fn ids_are_lowercase_and_dashed() {
        assert_eq!(marker_id(Tier::Basic, "The Foundation"), "basic-the-foundation");
        assert_eq!(marker_id(Tier::Advanced, "DevOps, Security & Specializations"), "advanced-devops,-security-&-specializations");
        assert_eq!(marker_id(Tier::Intermediate, "Time   Series"), "intermediate-time-series");
    }

    #[test]
    fn one_marker_per_section_with_unique_ids() {
        for track in TRACKS {
            let markers = build_markers(track.sections);
            assert_eq!(markers.len(), track.sections.len(), "{}", track.slug);
            let ids: HashSet<_> = markers.iter().map(|m| m.id.as_str()).collect();
            assert_eq!(ids.len(), markers.len(), "{}", track.slug);
        }
    }

    #[test]
    fn corner_lookup_clamps_to_last() {
        let spec = spec(3);
        assert_eq!(corner_at(&spec.corners, 0), Some(Point::new(200.0, 100.0)));
        assert_eq!(corner_at(&spec.corners, 3), spec.corners.last().copied());
        assert_eq!(corner_at(&spec.corners, 42), spec.corners.last().copied());
        assert_eq!(corner_at(&[], 0), None);
    }

    #[test]
    fn markers_follow_corners_through_the_scale() {
        let spec = spec(7);
        let scale = ScaleTransform { scale_x: 0.5, scale_y: 0.5, offset_top: 300.0, offset_left: 20.0 };
        let markers = build_markers(crate::roadmap::tracks::AWS.sections);
        let placed = position_markers(&markers, &spec, Some(&measured(&spec, scale)));

        assert_eq!(placed.len(), markers.len());
        assert_eq!(placed[0].screen, Point::new(120.0, 350.0));
        assert_eq!(placed[1].screen, Point::new(1020.0 * 0.5 + 20.0, 420.0 * 0.5 + 300.0));
        for (i, p) in placed.iter().enumerate() {
            assert_eq!(p.side, Side::for_index(i));
            assert_eq!(p.id, markers[i].id);
        }
    }

    #[test]
    fn surplus_sections_share_the_final_corner() {
        let spec = spec(2);
        let markers = build_markers(crate::roadmap::tracks::DOTNET.sections);
        let placed = position_markers(&markers, &spec, Some(&measured(&spec, ScaleTransform::default())));

        assert_eq!(placed.len(), markers.len());
        let last = *spec.corners.last().unwrap();
        assert!(placed[2..].iter().all(|p| p.screen == last));
    }

    #[test]
    fn stale_or_missing_measurement_places_nothing() {
        let spec = spec(4);
        let markers = build_markers(crate::roadmap::tracks::AWS.sections);
        assert!(position_markers(&markers, &spec, None).is_empty());

        let stale = PathMeasurement {
            viewport: Viewport { width: 800.0, height: spec.viewport.height },
            length: 1.0,
            scale: ScaleTransform::default(),
        };
        assert!(position_markers(&markers, &spec, Some(&stale)).is_empty());

        let collapsed = measured(&spec, ScaleTransform { scale_x: 0.0, ..ScaleTransform::default() });
        assert!(position_markers(&markers, &spec, Some(&collapsed)).is_empty());
    }

    #[test]
    fn sides_alternate() {
        assert_eq!(Side::for_index(0), Side::Right);
        assert_eq!(Side::for_index(1), Side::Left);
        assert_eq!(Side::for_index(6), Side::Right);
    }

    #[test]
    fn tooltips_stay_inside_the_window() {
        // Room on the preferred side
        assert_eq!(tooltip_left(300.0, 24.0, 400.0, Side::Right, 0.0, 1280.0), 324.0);
        assert_eq!(tooltip_left(900.0, 24.0, 400.0, Side::Left, 0.0, 1280.0), 476.0);

        // Pushed back from either edge
        assert_eq!(tooltip_left(1100.0, 24.0, 400.0, Side::Right, 0.0, 1280.0), 1280.0 - 12.0 - 400.0);
        assert_eq!(tooltip_left(150.0, 24.0, 400.0, Side::Left, 0.0, 1280.0), 12.0);

        // Horizontal scroll shifts the window
        assert_eq!(tooltip_left(150.0, 24.0, 280.0, Side::Left, 100.0, 400.0), 112.0);

        // Too wide for the window
        assert_eq!(tooltip_left(100.0, 24.0, 500.0, Side::Right, 0.0, 360.0), 12.0);
    }

    #[test]
    fn tooltip_clears_the_scrollbar() {
        // 15px classic scrollbar
        let width = visible_width(1280.0, Some(1265.0));
        assert_eq!(width, 1265.0);
        assert_eq!(tooltip_left(1100.0, 24.0, 400.0, Side::Right, 0.0, width), 1265.0 - 12.0 - 400.0);

        assert_eq!(visible_width(390.0, Some(390.0)), 390.0);
        assert_eq!(visible_width(1280.0, Some(0.0)), 1280.0);
        assert_eq!(visible_width(1280.0, None), 1280.0);
    }
}
