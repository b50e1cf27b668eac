//! Zig-zag road geometry.
//!
//! The road starts at `(start_x, top_padding)` and swings between a right
//! anchor and a left anchor once per segment. Each swing is a cubic bezier
//! whose control points sit at 30% and 70% of the segment height, which
//! turns every reversal into a smooth S-curve.

use std::fmt::Write;

pub const RIGHT_ANCHOR: f64 = 0.85;
pub const LEFT_ANCHOR: f64 = 0.15;
pub const CONTROL_OFFSET: f64 = 0.2;
pub const BOTTOM_MARGIN: f64 = 150.0;

/// Flatness tolerance (path units) for the arc length estimate.
const LENGTH_TOLERANCE: f64 = 0.05;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn lerp(self, other: Point, t: f64) -> Point {
        Point {
            x: self.x + t * (other.x - self.x),
            y: self.y + t * (other.y - self.y),
        }
    }

    fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// Declared size of the path space (the SVG `viewBox`).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathParams {
    pub segments: usize,
    pub width: f64,
    pub segment_height: f64,
    pub start_x: f64,
    pub top_padding: f64,
}

/// One swing of the road.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicSegment {
    pub p0: Point,
    pub p1: Point,
    pub p2: Point,
    pub p3: Point,
}

impl CubicSegment {
    pub fn eval(&self, t: f64) -> Point {
        let mt = 1.0 - t;
        let a = mt * mt * mt;
        let b = 3.0 * mt * mt * t;
        let c = 3.0 * mt * t * t;
        let d = t * t * t;
        Point {
            x: a * self.p0.x + b * self.p1.x + c * self.p2.x + d * self.p3.x,
            y: a * self.p0.y + b * self.p1.y + c * self.p2.y + d * self.p3.y,
        }
    }

    /// Approximate arc length by adaptive de Casteljau subdivision.
    pub fn arc_length(&self, tolerance: f64) -> f64 {
        arc_length_recursive(self.p0, self.p1, self.p2, self.p3, tolerance, 0)
    }
}

fn arc_length_recursive(p0: Point, p1: Point, p2: Point, p3: Point, tolerance: f64, depth: u32) -> f64 {
    const MAX_DEPTH: u32 = 16;

    let chord = p0.distance(p3);
    let polygon = p0.distance(p1) + p1.distance(p2) + p2.distance(p3);

    // Flat enough: the true length lies between chord and control polygon
    if depth >= MAX_DEPTH || (polygon - chord).abs() < tolerance {
        return (chord + polygon) * 0.5;
    }

    let p01 = p0.lerp(p1, 0.5);
    let p12 = p1.lerp(p2, 0.5);
    let p23 = p2.lerp(p3, 0.5);
    let p012 = p01.lerp(p12, 0.5);
    let p123 = p12.lerp(p23, 0.5);
    let mid = p012.lerp(p123, 0.5);

    arc_length_recursive(p0, p01, p012, mid, tolerance, depth + 1)
        + arc_length_recursive(mid, p123, p23, p3, tolerance, depth + 1)
}

/// Everything the view needs to draw the road and pin markers onto it.
#[derive(Clone, Debug, PartialEq)]
pub struct PathSpec {
    /// SVG path data (`d` attribute).
    pub commands: String,
    pub viewport: Viewport,
    /// Start point followed by the end point of every segment.
    pub corners: Vec<Point>,
    pub curves: Vec<CubicSegment>,
}

impl PathSpec {
    /// Path-space length computed from the curves, used until the DOM
    /// reports the rendered length.
    pub fn estimated_length(&self) -> f64 {
        self.curves.iter().map(|c| c.arc_length(LENGTH_TOLERANCE)).sum()
    }
}

pub fn generate_path(params: &PathParams) -> PathSpec {
    let PathParams { segments, width, segment_height, start_x, top_padding } = *params;

    let left_x = width * LEFT_ANCHOR;
    let right_x = width * RIGHT_ANCHOR;
    let ctrl = width * CONTROL_OFFSET;

    let mut commands = format!("M {} {}", start_x, top_padding);
    let mut corners = Vec::with_capacity(segments + 1);
    let mut curves = Vec::with_capacity(segments);

    let mut current = Point::new(start_x, top_padding);
    corners.push(current);

    for i in 0..segments {
        let heading_right = i % 2 == 0;
        let next = Point::new(
            if heading_right { right_x } else { left_x },
            current.y + segment_height,
        );
        let c1 = Point::new(
            current.x + if heading_right { ctrl } else { -ctrl },
            current.y + segment_height * 0.3,
        );
        let c2 = Point::new(
            next.x + if heading_right { -ctrl } else { ctrl },
            current.y + segment_height * 0.7,
        );

        // Writing into a String cannot fail
        let _ = write!(
            commands,
            " C {} {}, {} {}, {} {}",
            c1.x, c1.y, c2.x, c2.y, next.x, next.y
        );

        curves.push(CubicSegment { p0: current, p1: c1, p2: c2, p3: next });
        corners.push(next);
        current = next;
    }

    PathSpec {
        commands,
        viewport: Viewport { width, height: current.y + BOTTOM_MARGIN },
        corners,
        curves,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(segments: usize) -> PathParams {
        PathParams {
            segments,
            width: 1200.0,
            segment_height: 320.0,
            start_x: 200.0,
            top_padding: 100.0,
        }
    }

    #[test]
    fn four_segments_produce_expected_corners() {
        let spec = generate_path(&params(4));

        assert_eq!(spec.corners.len(), 5);
        assert_eq!(spec.corners[0], Point::new(200.0, 100.0));
        assert_eq!(spec.corners[1], Point::new(1200.0 * 0.85, 420.0));
        assert_eq!(spec.corners[2], Point::new(1200.0 * 0.15, 740.0));
        assert_eq!(spec.corners[3], Point::new(1200.0 * 0.85, 1060.0));
        assert_eq!(spec.corners[4], Point::new(1200.0 * 0.15, 1380.0));
        assert_eq!(spec.viewport.height, 1380.0 + 150.0);
        assert_eq!(spec.viewport.width, 1200.0);
    }

    #[test]
    fn corner_count_is_segments_plus_one() {
        for segments in 0..20 {
            let spec = generate_path(&params(segments));
            assert_eq!(spec.corners.len(), segments + 1);
            assert_eq!(spec.curves.len(), segments);
            for (i, corner) in spec.corners.iter().enumerate().skip(1) {
                let expected = if i % 2 == 1 { 1200.0 * RIGHT_ANCHOR } else { 1200.0 * LEFT_ANCHOR };
                assert_eq!(corner.x, expected, "corner {i} of {segments}");
            }
        }
    }

    #[test]
    fn zero_segments_is_a_bare_move() {
        let spec = generate_path(&params(0));
        assert_eq!(spec.commands, "M 200 100");
        assert_eq!(spec.corners, vec![Point::new(200.0, 100.0)]);
        assert_eq!(spec.viewport.height, 250.0);
        assert_eq!(spec.estimated_length(), 0.0);
    }

    #[test]
    fn commands_describe_s_curves() {
        let spec = generate_path(&params(1));
        // ctrl = 240, control heights at 30% and 70% of 320
        assert_eq!(spec.commands, "M 200 100 C 440 196, 780 324, 1020 420");
    }

    #[test]
    fn generation_is_deterministic() {
        assert_eq!(generate_path(&params(7)), generate_path(&params(7)));
    }

    #[test]
    fn curves_chain_through_corners() {
        let spec = generate_path(&params(6));
        for (i, curve) in spec.curves.iter().enumerate() {
            assert_eq!(curve.p0, spec.corners[i]);
            assert_eq!(curve.p3, spec.corners[i + 1]);
            assert_eq!(curve.eval(0.0), curve.p0);
            let end = curve.eval(1.0);
            assert!((end.x - curve.p3.x).abs() < 1e-9 && (end.y - curve.p3.y).abs() < 1e-9);
        }
    }

    #[test]
    fn straight_curve_length_matches_chord() {
        let line = CubicSegment {
            p0: Point::new(0.0, 0.0),
            p1: Point::new(10.0, 0.0),
            p2: Point::new(20.0, 0.0),
            p3: Point::new(30.0, 0.0),
        };
        assert!((line.arc_length(0.01) - 30.0).abs() < 1e-6);
    }

    #[test]
    fn estimated_length_is_between_chords_and_control_polygons() {
        let spec = generate_path(&params(4));
        let chords: f64 = spec.curves.iter().map(|c| c.p0.distance(c.p3)).sum();
        let polygons: f64 = spec
            .curves
            .iter()
            .map(|c| c.p0.distance(c.p1) + c.p1.distance(c.p2) + c.p2.distance(c.p3))
            .sum();
        let length = spec.estimated_length();
        assert!(length > chords && length < polygons, "{chords} < {length} < {polygons}");
    }

    #[test]
    fn view_box_uses_viewport_size() {
        let spec = generate_path(&params(2));
        assert_eq!(spec.viewport.view_box(), "0 0 1200 890");
    }
}
