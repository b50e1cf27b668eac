//! Measuring the rendered road.
//!
//! The SVG is laid out by the browser, so the path-space to screen-space
//! mapping is only known after mount. Measurements are tagged with the
//! viewport they were taken against so a stale one is never applied to a
//! freshly generated path.

use std::rc::Rc;

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, ResizeObserver, SvgGeometryElement};
use yew::prelude::*;

use super::geometry::{Point, Viewport};

/// Bounding box of the rendered SVG element in client coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleTransform {
    pub scale_x: f64,
    pub scale_y: f64,
    pub offset_top: f64,
    pub offset_left: f64,
}

impl Default for ScaleTransform {
    fn default() -> Self {
        Self { scale_x: 1.0, scale_y: 1.0, offset_top: 0.0, offset_left: 0.0 }
    }
}

impl ScaleTransform {
    /// `scroll` is the document scroll at measurement time; adding it makes
    /// the offsets document-relative so they stay valid while scrolling.
    pub fn from_bounds(bounds: Bounds, viewport: Viewport, scroll: Point) -> Self {
        let ratio = |rendered: f64, declared: f64| if declared > 0.0 { rendered / declared } else { 0.0 };
        Self {
            scale_x: ratio(bounds.width, viewport.width),
            scale_y: ratio(bounds.height, viewport.height),
            offset_top: bounds.top + scroll.y,
            offset_left: bounds.left + scroll.x,
        }
    }

    pub fn to_screen(&self, p: Point) -> Point {
        Point {
            x: p.x * self.scale_x + self.offset_left,
            y: p.y * self.scale_y + self.offset_top,
        }
    }

    pub fn is_degenerate(&self) -> bool {
        !(self.scale_x > 0.0 && self.scale_y > 0.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathMeasurement {
    /// Viewport of the PathSpec this was measured against.
    pub viewport: Viewport,
    /// Rendered path length in path-space units.
    pub length: f64,
    pub scale: ScaleTransform,
}

impl PathMeasurement {
    pub fn matches(&self, viewport: Viewport) -> bool {
        self.viewport == viewport
    }
}

/// Reads the path length and SVG bounds. `None` until both elements are mounted.
pub fn measure(svg_ref: &NodeRef, path_ref: &NodeRef, viewport: Viewport) -> Option<PathMeasurement> {
    let svg = svg_ref.cast::<Element>()?;
    let path = path_ref.cast::<SvgGeometryElement>()?;
    let window = web_sys::window()?;

    let rect = svg.get_bounding_client_rect();
    let bounds = Bounds {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    };
    let scroll = Point::new(window.scroll_x().unwrap_or(0.0), window.scroll_y().unwrap_or(0.0));

    Some(PathMeasurement {
        viewport,
        length: path.get_total_length() as f64,
        scale: ScaleTransform::from_bounds(bounds, viewport, scroll),
    })
}

/// Keeps a measurement of the road current across element resizes, window
/// resizes and viewport changes.
#[hook]
pub fn use_path_measurement(svg_ref: NodeRef, path_ref: NodeRef, viewport: Viewport) -> Option<PathMeasurement> {
    let measurement = use_state_eq(|| None::<PathMeasurement>);

    {
        let measurement = measurement.clone();
        use_effect_with_deps(
            move |viewport| {
                let viewport = *viewport;
                let update: Rc<dyn Fn()> = Rc::new({
                    let svg_ref = svg_ref.clone();
                    move || {
                        if let Some(m) = measure(&svg_ref, &path_ref, viewport) {
                            debug!("road measured: length {:.1}, scale {:.3}", m.length, m.scale.scale_x);
                            measurement.set(Some(m));
                        }
                    }
                });
                update();

                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let on_resize = Closure::<dyn Fn()>::new({
                        let update = update.clone();
                        move || update()
                    });
                    let _ = window.add_event_listener_with_callback(
                        "resize",
                        on_resize.as_ref().unchecked_ref(),
                    );

                    let on_observe = Closure::<dyn Fn()>::new({
                        let update = update.clone();
                        move || update()
                    });
                    let observer = ResizeObserver::new(on_observe.as_ref().unchecked_ref()).ok();
                    if let (Some(observer), Some(svg)) = (&observer, svg_ref.cast::<Element>()) {
                        observer.observe(&svg);
                    }

                    Box::new(move || {
                        if let Some(observer) = observer {
                            observer.disconnect();
                        }
                        drop(on_observe);
                        let _ = window.remove_event_listener_with_callback(
                            "resize",
                            on_resize.as_ref().unchecked_ref(),
                        );
                    })
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            viewport,
        );
    }

    *measurement
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Viewport = Viewport { width: 1200.0, height: 2950.0 };

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn scale_compares_rendered_and_declared_size() {
        let bounds = Bounds { left: 40.0, top: 300.0, width: 960.0, height: 2360.0 };
        let scale = ScaleTransform::from_bounds(bounds, VIEWPORT, Point::new(0.0, 120.0));

        assert!(close(scale.scale_x, 0.8));
        assert!(close(scale.scale_y, 0.8));
        assert_eq!(scale.offset_top, 420.0);
        assert_eq!(scale.offset_left, 40.0);
    }

    #[test]
    fn screen_point_keeps_relative_position_in_box() {
        let bounds = Bounds { left: 25.0, top: -180.0, width: 700.0, height: 1721.0 };
        let scroll = Point::new(0.0, 900.0);
        let scale = ScaleTransform::from_bounds(bounds, VIEWPORT, scroll);

        for p in [Point::new(0.0, 0.0), Point::new(200.0, 100.0), Point::new(1020.0, 2800.0)] {
            let screen = scale.to_screen(p);
            let rel_x = (screen.x - bounds.left - scroll.x) / bounds.width;
            let rel_y = (screen.y - bounds.top - scroll.y) / bounds.height;
            assert!(close(rel_x, p.x / VIEWPORT.width), "x for {p:?}");
            assert!(close(rel_y, p.y / VIEWPORT.height), "y for {p:?}");
        }
    }

    #[test]
    fn empty_viewport_gives_degenerate_scale() {
        let bounds = Bounds { left: 0.0, top: 0.0, width: 500.0, height: 500.0 };
        let scale = ScaleTransform::from_bounds(bounds, Viewport::default(), Point::default());
        assert!(scale.is_degenerate());
        assert!(!ScaleTransform::default().is_degenerate());
    }

    #[test]
    fn unmounted_refs_measure_nothing() {
        assert_eq!(measure(&NodeRef::default(), &NodeRef::default(), VIEWPORT), None);
    }

    #[test]
    fn measurement_only_matches_its_own_viewport() {
        let m = PathMeasurement { viewport: VIEWPORT, length: 5000.0, scale: ScaleTransform::default() };
        assert!(m.matches(VIEWPORT));
        assert!(!m.matches(Viewport { width: 800.0, height: 2350.0 }));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use std::cell::RefCell;

    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;
    use web_sys::HtmlElement;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const SVG_NS: &str = "http://www.w3.org/2000/svg";
    const WIDE: Viewport = Viewport { width: 600.0, height: 800.0 };
    const NARROW: Viewport = Viewport { width: 300.0, height: 400.0 };
    /// Length of `M 0 0 L 300 400`.
    const LINE_LENGTH: f64 = 500.0;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.5
    }

    fn document() -> web_sys::Document {
        web_sys::window().unwrap().document().unwrap()
    }

    fn mount_root() -> Element {
        let root = document().create_element("div").unwrap();
        document().body().unwrap().append_child(&root).unwrap();
        root
    }

    async fn next_frames() {
        TimeoutFuture::new(100).await;
    }

    #[wasm_bindgen_test]
    fn measures_a_mounted_svg() {
        let svg = document().create_element_ns(Some(SVG_NS), "svg").unwrap();
        svg.set_attribute("viewBox", "0 0 600 800").unwrap();
        svg.set_attribute("style", "display: block; width: 300px; height: 400px").unwrap();
        let path = document().create_element_ns(Some(SVG_NS), "path").unwrap();
        path.set_attribute("d", "M 0 0 L 300 400").unwrap();
        svg.append_child(&path).unwrap();
        mount_root().append_child(&svg).unwrap();

        let (svg_ref, path_ref) = (NodeRef::default(), NodeRef::default());
        svg_ref.set(Some(svg.into()));
        path_ref.set(Some(path.into()));

        let m = measure(&svg_ref, &path_ref, WIDE).unwrap();
        assert!(m.matches(WIDE));
        assert!(close(m.length, LINE_LENGTH), "length {}", m.length);
        assert!((m.scale.scale_x - 0.5).abs() < 1e-6);
        assert!((m.scale.scale_y - 0.5).abs() < 1e-6);
    }

    #[derive(Properties, PartialEq)]
    struct RoadProps {
        on_measure: Callback<Option<PathMeasurement>>,
    }

    /// Renders a measured line whose viewBox flips to `NARROW` on click.
    #[function_component(MeasuredRoad)]
    fn measured_road(props: &RoadProps) -> Html {
        let svg_ref = use_node_ref();
        let path_ref = use_node_ref();
        let viewport = use_state(|| WIDE);
        let measurement = use_path_measurement(svg_ref.clone(), path_ref.clone(), *viewport);

        {
            let on_measure = props.on_measure.clone();
            use_effect_with_deps(
                move |m| {
                    on_measure.emit(*m);
                    || ()
                },
                measurement,
            );
        }

        let narrow = {
            let viewport = viewport.clone();
            Callback::from(move |_: MouseEvent| viewport.set(NARROW))
        };

        html! {
            <div>
                <button onclick={narrow}></button>
                <svg
                    ref={svg_ref}
                    viewBox={format!("0 0 {} {}", viewport.width, viewport.height)}
                    style="display: block; width: 300px; height: 400px"
                >
                    <path ref={path_ref} d="M 0 0 L 300 400" />
                </svg>
            </div>
        }
    }

    fn recorder() -> (Callback<Option<PathMeasurement>>, Rc<RefCell<Vec<PathMeasurement>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let on_measure = {
            let seen = seen.clone();
            Callback::from(move |m: Option<PathMeasurement>| {
                if let Some(m) = m {
                    seen.borrow_mut().push(m);
                }
            })
        };
        (on_measure, seen)
    }

    #[wasm_bindgen_test]
    async fn remeasures_when_the_svg_resizes() {
        let root = mount_root();
        let (on_measure, seen) = recorder();
        let app = yew::Renderer::<MeasuredRoad>::with_root_and_props(root.clone(), RoadProps { on_measure }).render();
        next_frames().await;

        let first = *seen.borrow().last().unwrap();
        assert!((first.scale.scale_x - 0.5).abs() < 1e-6);

        let svg = root.query_selector("svg").unwrap().unwrap();
        svg.set_attribute("style", "display: block; width: 450px; height: 600px").unwrap();
        next_frames().await;

        let resized = *seen.borrow().last().unwrap();
        assert!((resized.scale.scale_x - 0.75).abs() < 1e-6);
        assert!((resized.scale.scale_y - 0.75).abs() < 1e-6);
        assert!(resized.matches(WIDE));

        app.destroy();
    }

    #[wasm_bindgen_test]
    async fn new_viewport_gets_a_new_measurement() {
        let root = mount_root();
        let (on_measure, seen) = recorder();
        let app = yew::Renderer::<MeasuredRoad>::with_root_and_props(root.clone(), RoadProps { on_measure }).render();
        next_frames().await;
        assert!(seen.borrow().last().unwrap().matches(WIDE));

        let button: HtmlElement = root.query_selector("button").unwrap().unwrap().dyn_into().unwrap();
        button.click();
        next_frames().await;

        let latest = *seen.borrow().last().unwrap();
        assert!(latest.matches(NARROW));
        assert!(!latest.matches(WIDE));
        assert!((latest.scale.scale_x - 1.0).abs() < 1e-6);
        assert!(close(latest.length, LINE_LENGTH));

        app.destroy();
    }
}
