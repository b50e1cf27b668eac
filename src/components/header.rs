use yew::prelude::*;
use yew_hooks::use_window_scroll;
use yew_router::prelude::*;

use crate::config::{BRAND_NAME, MOBILE_MEDIA_MAX_PX};
use crate::theme::ThemeToggle;
use crate::Route;

/// Scroll offset after which the header gets its solid background.
const SCROLLED_THRESHOLD: f64 = 24.0;

const HEADER_CSS: &str = r#"
    .site-header {
        position: sticky;
        top: 0;
        z-index: 30;
        backdrop-filter: blur(8px);
        border-bottom: 1px solid rgba(148, 163, 184, 0.2);
        transition: background 0.2s ease;
    }
    .site-header.scrolled {
        background: var(--header-scrolled);
    }
    .header-content {
        max-width: 1200px;
        margin: 0 auto;
        height: 64px;
        padding: 0 1.5rem;
        display: flex;
        align-items: center;
        justify-content: space-between;
    }
    .brand {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        font-weight: 800;
        font-size: 1.25rem;
        color: #38bdf8;
        text-decoration: none;
    }
    .brand-mark {
        width: 36px;
        height: 20px;
    }
    .nav-links {
        display: flex;
        gap: 0.25rem;
    }
    .nav-link {
        padding: 0.5rem 0.75rem;
        border-radius: 6px;
        font-size: 0.9rem;
        font-weight: 500;
        color: var(--muted-foreground);
        text-decoration: none;
    }
    .nav-link:hover, .nav-link.active {
        color: #38bdf8;
        background: rgba(56, 189, 248, 0.1);
    }
    .header-actions {
        display: flex;
        align-items: center;
        gap: 0.5rem;
    }
    .signin-button {
        padding: 0.5rem 1rem;
        border-radius: 8px;
        color: white;
        font-weight: 600;
        text-decoration: none;
        background: linear-gradient(90deg, #0ea5e9, #06b6d4);
        box-shadow: 0 0 18px rgba(56, 189, 248, 0.35);
    }
    .burger-menu {
        display: none;
        flex-direction: column;
        gap: 4px;
        background: none;
        border: none;
        cursor: pointer;
        padding: 0.5rem;
    }
    .burger-menu span {
        width: 22px;
        height: 2px;
        background: var(--foreground);
    }
"#;

/// Burger menu layout, only below the mobile breakpoint.
const HEADER_MOBILE_CSS: &str = r#"
    .burger-menu {
        display: flex;
    }
    .nav-links {
        display: none;
        position: absolute;
        top: 64px;
        left: 0;
        right: 0;
        flex-direction: column;
        padding: 1rem 1.5rem;
        background: var(--background);
        border-bottom: 1px solid rgba(148, 163, 184, 0.2);
    }
    .nav-links.open {
        display: flex;
    }
    .signin-button {
        display: none;
    }
"#;

fn mobile_css() -> String {
    format!("@media (max-width: {}px) {{{}}}", MOBILE_MEDIA_MAX_PX, HEADER_MOBILE_CSS)
}

fn nav_items() -> [(Route, &'static str); 5] {
    [
        (Route::Home, "Home"),
        (Route::Roadmaps, "Explore Roadmaps"),
        (Route::Assessment, "Career Assessment"),
        (Route::Community, "Community"),
        (Route::Contact, "Contact"),
    ]
}

/// A nav item is active on its own route; "Explore Roadmaps" also stays
/// lit on every roadmap detail page.
pub fn is_active(item: &Route, current: Option<&Route>) -> bool {
    match (item, current) {
        (Route::Roadmaps, Some(Route::RoadmapDetail { .. })) => true,
        (item, Some(current)) => item == current,
        (_, None) => false,
    }
}

#[function_component(BrandMark)]
pub fn brand_mark() -> Html {
    html! {
        <svg class="brand-mark" aria-hidden="true" viewBox="0 0 48 24">
            <path d="M12 12c0-4 3-7 7-7 3 0 5 2 7 4s4 4 7 4 7-3 7-7"
                fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" />
            <path d="M36 12c0 4-3 7-7 7-3 0-5-2-7-4s-4-4-7-4-7 3-7 7"
                fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" />
        </svg>
    }
}

#[function_component(SiteHeader)]
pub fn site_header() -> Html {
    let current = use_route::<Route>();
    let (_, scroll_y) = use_window_scroll();
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let scrolled = scroll_y > SCROLLED_THRESHOLD;

    html! {
        <header class={classes!("site-header", scrolled.then(|| "scrolled"))}>
            <style>{HEADER_CSS}{mobile_css()}</style>
            <div class="header-content">
                <Link<Route> to={Route::Home} classes="brand">
                    <BrandMark />
                    <span>{ BRAND_NAME }</span>
                </Link<Route>>

                <nav class={classes!("nav-links", (*menu_open).then(|| "open"))}>
                    {
                        nav_items().into_iter().map(|(route, label)| {
                            let active = is_active(&route, current.as_ref());
                            html! {
                                <div onclick={close_menu.clone()}>
                                    <Link<Route>
                                        to={route}
                                        classes={classes!("nav-link", active.then(|| "active"))}
                                    >
                                        { label }
                                    </Link<Route>>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </nav>

                <div class="header-actions">
                    <Link<Route> to={Route::SignIn} classes="signin-button">
                        {"Sign In"}
                    </Link<Route>>
                    <ThemeToggle />
                    <button class="burger-menu" aria-label="Menu" onclick={toggle_menu}>
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MOBILE_BREAKPOINT_PX;
    use crate::roadmap::profile::LayoutProfile;

    #[test]
    fn roadmaps_link_stays_active_on_detail_pages() {
        let detail = Route::RoadmapDetail { track: "java".to_string() };
        assert!(is_active(&Route::Roadmaps, Some(&detail)));
        assert!(is_active(&Route::Roadmaps, Some(&Route::Roadmaps)));
        assert!(!is_active(&Route::Home, Some(&detail)));
    }

    #[test]
    fn only_the_current_route_is_active() {
        let active: Vec<_> = nav_items()
            .into_iter()
            .filter(|(route, _)| is_active(route, Some(&Route::Contact)))
            .map(|(_, label)| label)
            .collect();
        assert_eq!(active, vec!["Contact"]);
        assert!(nav_items().iter().all(|(route, _)| !is_active(route, None)));
    }

    #[test]
    fn burger_menu_switches_with_the_roadmap_profile() {
        assert!(mobile_css().starts_with("@media (max-width: 767.98px) {"));
        assert_eq!(LayoutProfile::for_width(MOBILE_MEDIA_MAX_PX), LayoutProfile::Mobile);
        assert_eq!(LayoutProfile::for_width(MOBILE_BREAKPOINT_PX), LayoutProfile::Desktop);
        assert!(MOBILE_BREAKPOINT_PX - MOBILE_MEDIA_MAX_PX < 1.0);
    }
}
