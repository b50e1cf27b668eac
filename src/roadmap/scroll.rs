use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Window};
use yew::prelude::*;

/// Fraction of the scrollable distance already scrolled, clamped to [0, 1].
///
/// A document that fits in the viewport has nothing to scroll and reports 0.
pub fn scroll_progress(scroll_offset: f64, document_height: f64, viewport_height: f64) -> f64 {
    let max_offset = document_height - viewport_height;
    if !(max_offset > 0.0) || !scroll_offset.is_finite() {
        return 0.0;
    }
    (scroll_offset / max_offset).clamp(0.0, 1.0)
}

fn read_progress(window: &Window) -> f64 {
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    let document_height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0);
    scroll_progress(scroll_y, document_height, viewport_height)
}

/// Tracks document scroll progress, refreshed on scroll and on resize.
#[hook]
pub fn use_scroll_progress() -> f64 {
    let progress = use_state_eq(|| 0.0_f64);

    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let window = window.clone();
                        let progress = progress.clone();
                        move || progress.set(read_progress(&window))
                    });

                    let options = AddEventListenerOptions::new();
                    options.set_passive(true);
                    let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                        &options,
                    );
                    let _ = window.add_event_listener_with_callback(
                        "resize",
                        callback.as_ref().unchecked_ref(),
                    );

                    // Initial read
                    progress.set(read_progress(&window));

                    Box::new(move || {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                        let _ = window.remove_event_listener_with_callback(
                            "resize",
                            callback.as_ref().unchecked_ref(),
                        );
                    })
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            (),
        );
    }

    *progress
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn halfway_down_the_page() {
        assert_eq!(scroll_progress(600.0, 2000.0, 800.0), 0.5);
    }

    #[test]
    fn short_documents_report_zero() {
        assert_eq!(scroll_progress(0.0, 800.0, 800.0), 0.0);
        assert_eq!(scroll_progress(50.0, 600.0, 800.0), 0.0);
        assert_eq!(scroll_progress(50.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn clamps_overscroll_and_bounce() {
        assert_eq!(scroll_progress(1500.0, 2000.0, 800.0), 1.0);
        assert_eq!(scroll_progress(-40.0, 2000.0, 800.0), 0.0);
        assert_eq!(scroll_progress(f64::NAN, 2000.0, 800.0), 0.0);
        assert_eq!(scroll_progress(f64::INFINITY, 2000.0, 800.0), 0.0);
    }

    #[test]
    fn always_within_unit_interval() {
        for offset in (-500..5000).step_by(37) {
            let p = scroll_progress(offset as f64, 3100.0, 900.0);
            assert!((0.0..=1.0).contains(&p), "offset {offset} gave {p}");
        }
    }
}
