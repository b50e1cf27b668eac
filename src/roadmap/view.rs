use log::debug;
use yew::prelude::*;
use yew_hooks::{use_window_scroll, use_window_size};
use yew_router::prelude::*;

use super::curriculum::Track;
use super::geometry::generate_path;
use super::markers::{
    build_markers, position_markers, tooltip_left, visible_width, ScreenMarker, Side, TOOLTIP_MARGIN,
};
use super::measure::use_path_measurement;
use super::profile::{use_layout_profile, LayoutProfile};
use super::scroll::use_scroll_progress;
use crate::Route;

/// Gap between pin and label/tooltip.
const LABEL_GAP: f64 = 16.0;

/// Dash offset that leaves `progress` of the road drawn.
pub fn reveal_offset(length: f64, progress: f64) -> f64 {
    (length - length * progress).max(0.0)
}

#[derive(Properties, PartialEq)]
pub struct RoadmapViewProps {
    pub track: &'static Track,
}

#[function_component(RoadmapView)]
pub fn roadmap_view(props: &RoadmapViewProps) -> Html {
    let track = props.track;
    let profile = use_layout_profile();
    let (inner_width, _) = use_window_size();
    let (window_left, _) = use_window_scroll();
    let progress = use_scroll_progress();

    let svg_ref = use_node_ref();
    let path_ref = use_node_ref();

    let spec = use_memo(
        |(profile, segments)| {
            debug!("generating road: {:?}, {} segments", profile, segments);
            generate_path(&profile.path_params(*segments))
        },
        (profile, track.sections.len()),
    );
    let markers = use_memo(|sections| build_markers(sections), track.sections);

    let measurement = use_path_measurement(svg_ref.clone(), path_ref.clone(), spec.viewport);

    let placed = use_memo(
        |(spec, markers, measurement)| position_markers(markers, spec, measurement.as_ref()),
        (spec.clone(), markers.clone(), measurement),
    );

    // Until the browser reports the rendered length, the estimate keeps the
    // road hidden instead of fully drawn.
    let length = measurement
        .filter(|m| m.matches(spec.viewport))
        .map(|m| m.length)
        .unwrap_or_else(|| spec.estimated_length());
    let dash_offset = reveal_offset(length, progress);

    let cfg = profile.config();
    let client_width = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .map(|root| f64::from(root.client_width()));
    let window_width = visible_width(inner_width, client_width);

    html! {
        <div class={classes!("roadmap-page", (profile == LayoutProfile::Mobile).then(|| "mobile"))}>
            <style>{ROADMAP_CSS}</style>
            <header class="roadmap-header">
                <div class="roadmap-title-row">
                    <div class="roadmap-title-bar"></div>
                    <h1>{track.title}</h1>
                </div>
                <p>{track.summary}</p>
            </header>

            <section class="roadmap-canvas" style={format!("max-width: {}px;", spec.viewport.width)}>
                <svg
                    ref={svg_ref}
                    viewBox={spec.viewport.view_box()}
                    preserveAspectRatio="xMidYMid meet"
                    aria-hidden="true"
                >
                    <path
                        d={spec.commands.clone()}
                        stroke="#020617"
                        stroke-width={cfg.shadow_stroke.to_string()}
                        fill="none"
                        transform="translate(3, 3)"
                        opacity="0.6"
                    />
                    <path d={spec.commands.clone()} stroke="#0b1020" stroke-width={cfg.road_stroke.to_string()} fill="none" />
                    <path d={spec.commands.clone()} stroke="#1f2937" stroke-width="2" fill="none" />
                    <path
                        ref={path_ref}
                        class="roadmap-reveal"
                        d={spec.commands.clone()}
                        stroke="#38bdf8"
                        stroke-width={cfg.reveal_stroke.to_string()}
                        fill="none"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        stroke-dasharray={length.to_string()}
                        stroke-dashoffset={dash_offset.to_string()}
                    />
                </svg>
            </section>

            // Absolutely positioned against the document: no ancestor of this
            // layer may be positioned.
            <div class="roadmap-markers">
                { for placed.iter().map(|m| render_marker(m, profile, window_left, window_width)) }
            </div>

            <footer class="roadmap-footer">
                <p class="roadmap-closing">{track.closing}</p>
                <p class="roadmap-hint">{"Scroll to draw the road • Hover over a landmark for its topics"}</p>
                <Link<Route> to={Route::Assessment} classes="roadmap-cta">
                    {"Take the Career Assessment"}
                </Link<Route>>
            </footer>
        </div>
    }
}

fn render_marker(placed: &ScreenMarker, profile: LayoutProfile, window_left: f64, window_width: f64) -> Html {
    let cfg = profile.config();
    let pin = cfg.pin_size;
    let left = placed.screen.x - pin / 2.0;
    let top = placed.screen.y - pin / 2.0;

    let tooltip_width = cfg.tooltip_width.min(window_width - 2.0 * TOOLTIP_MARGIN).max(0.0);
    let tooltip_x = tooltip_left(
        placed.screen.x,
        pin / 2.0 + LABEL_GAP,
        tooltip_width,
        placed.side,
        window_left,
        window_width,
    );

    let label_style = match placed.side {
        Side::Right => format!("left: {}px;", pin + LABEL_GAP),
        Side::Left => format!("right: {}px;", pin + LABEL_GAP),
    };
    let color = placed.marker.tier.color();

    html! {
        <div
            key={placed.id.clone()}
            id={placed.id.clone()}
            class={classes!("roadmap-marker", placed.side.class())}
            style={format!("left: {left}px; top: {top}px;")}
            tabindex="0"
        >
            <div class="roadmap-pin" style={format!("width: {pin}px; height: {pin}px; background-color: {color};")}>
                <div class="roadmap-pin-dot"></div>
            </div>
            <div class="roadmap-label" style={label_style}>
                <span class="roadmap-tier" style={format!("background-color: {color};")}>
                    {placed.marker.tier.label()}
                </span>
                <div class="roadmap-label-title">{placed.marker.label}</div>
            </div>
            <div
                class="roadmap-tooltip"
                style={format!("left: {}px; top: {}px; width: {}px;", tooltip_x - left, pin + 12.0, tooltip_width)}
            >
                <div class="roadmap-tooltip-tier">
                    <span class="roadmap-tooltip-dot" style={format!("background-color: {color};")}></span>
                    {format!("{} Level", placed.marker.tier)}
                </div>
                <div class="roadmap-tooltip-title">{placed.marker.label}</div>
                <ul class="roadmap-tooltip-topics">
                    { for placed.marker.topics.iter().map(|topic| html! { <li>{*topic}</li> }) }
                </ul>
            </div>
        </div>
    }
}

const ROADMAP_CSS: &str = r#"
.roadmap-page {
    min-height: 100vh;
    color: var(--foreground);
    padding-bottom: 2rem;
}
.roadmap-header {
    max-width: 72rem;
    margin: 0 auto;
    padding: 3rem 1.5rem;
}
.roadmap-title-row {
    display: flex;
    align-items: center;
    gap: 1rem;
    margin-bottom: 1rem;
}
.roadmap-title-bar {
    height: 4px;
    width: 2rem;
    background: #38bdf8;
}
.roadmap-header h1 {
    font-size: 3.5rem;
    font-weight: 800;
    letter-spacing: -0.02em;
    color: #38bdf8;
    filter: drop-shadow(0 0 18px rgba(56, 189, 248, 0.35));
    margin: 0;
}
.roadmap-header p {
    color: var(--muted-foreground);
    font-size: 1.125rem;
    max-width: 42rem;
}
.roadmap-canvas {
    margin: 0 auto;
    padding: 0 1rem;
}
.roadmap-canvas svg {
    display: block;
    width: 100%;
    height: auto;
}
.roadmap-reveal {
    transition: stroke-dashoffset 0.1s linear;
    filter: drop-shadow(0 0 8px rgba(56, 189, 248, 0.6));
}
.roadmap-markers {
    position: absolute;
    top: 0;
    left: 0;
    width: 0;
    height: 0;
}
.roadmap-marker {
    position: absolute;
    z-index: 20;
    outline: none;
}
.roadmap-pin {
    position: relative;
    border-radius: 50%;
    box-shadow: 0 0 0 4px rgba(0, 0, 0, 0.5), 0 20px 40px rgba(0, 0, 0, 0.45);
    transition: transform 0.2s ease;
}
.roadmap-marker:hover .roadmap-pin,
.roadmap-marker:focus-within .roadmap-pin {
    transform: scale(1.1);
}
.roadmap-pin-dot {
    position: absolute;
    left: 50%;
    top: 50%;
    width: 25%;
    height: 25%;
    transform: translate(-50%, -50%);
    border-radius: 50%;
    background: rgba(0, 0, 0, 0.8);
}
.roadmap-label {
    position: absolute;
    top: 0;
    display: flex;
    flex-direction: column;
    gap: 0.4rem;
    width: max-content;
}
.side-right .roadmap-label {
    align-items: flex-start;
    text-align: left;
}
.side-left .roadmap-label {
    align-items: flex-end;
    text-align: right;
}
.roadmap-tier {
    border-radius: 9999px;
    padding: 0.25rem 0.75rem;
    font-size: 0.75rem;
    font-weight: 700;
    color: #000;
}
.roadmap-label-title {
    color: var(--foreground);
    font-weight: 700;
    font-size: 1.125rem;
    line-height: 1.2;
    max-width: 20rem;
    text-shadow: 0 1px 4px var(--background);
}
.roadmap-tooltip {
    visibility: hidden;
    opacity: 0;
    position: absolute;
    z-index: 30;
    box-sizing: border-box;
    transform: scale(0.95);
    transform-origin: top;
    border-radius: 0.75rem;
    border: 1px solid #334155;
    background: rgba(15, 23, 42, 0.95);
    padding: 1.25rem;
    box-shadow: 0 0 30px rgba(56, 189, 248, 0.25);
    backdrop-filter: blur(4px);
    transition: all 0.3s ease;
}
.roadmap-marker:hover .roadmap-tooltip,
.roadmap-marker:focus-within .roadmap-tooltip {
    visibility: visible;
    opacity: 1;
    transform: scale(1);
}
.roadmap-tooltip-tier {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    margin-bottom: 0.5rem;
    font-size: 0.75rem;
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 0.05em;
    color: #94a3b8;
}
.roadmap-tooltip-dot {
    width: 0.75rem;
    height: 0.75rem;
    border-radius: 50%;
}
.roadmap-tooltip-title {
    margin-bottom: 0.5rem;
    font-weight: 600;
    color: #fff;
}
.roadmap-tooltip-topics {
    margin: 0;
    padding-left: 1.1rem;
    font-size: 0.875rem;
    line-height: 1.6;
    color: #e2e8f0;
}
.roadmap-footer {
    max-width: 72rem;
    margin: 5rem auto 0;
    padding: 3rem 1.5rem;
    text-align: center;
    color: var(--muted-foreground);
}
.roadmap-hint {
    font-size: 0.875rem;
}
.roadmap-cta {
    display: inline-block;
    margin-top: 1.5rem;
    padding: 0.75rem 1.5rem;
    border-radius: 0.375rem;
    background: #2563eb;
    color: #fff;
    text-decoration: none;
    transition: background 0.2s;
}
.roadmap-cta:hover {
    background: #1d4ed8;
}
.roadmap-page.mobile .roadmap-header {
    padding: 2rem 1rem;
}
.roadmap-page.mobile .roadmap-header h1 {
    font-size: 1.75rem;
}
.roadmap-page.mobile .roadmap-header p {
    font-size: 0.875rem;
}
.roadmap-page.mobile .roadmap-label-title {
    font-size: 0.875rem;
    max-width: 12rem;
}
.roadmap-page.mobile .roadmap-tooltip {
    padding: 0.75rem;
}
.roadmap-page.mobile .roadmap-tooltip-topics {
    font-size: 0.75rem;
}
"#;
