//! Light/dark theme preference.
//!
//! Read once when `ThemeProvider` mounts, changed only through
//! `ThemeContext::set`, and persisted to local storage on every change.

use log::{debug, warn};
use web_sys::window;
use yew::prelude::*;

use crate::config::THEME_STORAGE_KEY;

const DARK_CLASS: &str = "dark";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// A valid stored value wins; otherwise the OS color scheme decides.
pub fn resolve_theme(stored: Option<&str>, prefers_dark: bool) -> Theme {
    match stored.and_then(Theme::parse) {
        Some(theme) => theme,
        None if prefers_dark => Theme::Dark,
        None => Theme::Light,
    }
}

fn stored_theme() -> Option<String> {
    window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok())
        .flatten()
}

fn prefers_dark() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok())
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false)
}

pub fn load_theme() -> Theme {
    let theme = resolve_theme(stored_theme().as_deref(), prefers_dark());
    debug!("initial theme: {}", theme.as_str());
    theme
}

/// Toggles the `dark` class on the document element and persists the choice.
pub fn apply_theme(theme: Theme) {
    let Some(window) = window() else { return };

    if let Some(root) = window.document().and_then(|d| d.document_element()) {
        let classes = root.class_list();
        let result = match theme {
            Theme::Dark => classes.add_1(DARK_CLASS),
            Theme::Light => classes.remove_1(DARK_CLASS),
        };
        if result.is_err() {
            warn!("could not update theme class");
        }
    }

    if let Ok(Some(storage)) = window.local_storage() {
        if storage.set_item(THEME_STORAGE_KEY, theme.as_str()).is_err() {
            warn!("could not persist theme");
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    pub theme: Theme,
    setter: Callback<Theme>,
}

impl ThemeContext {
    pub fn set(&self, theme: Theme) {
        self.setter.emit(theme);
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    pub children: Children,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let theme = use_state(load_theme);

    use_effect_with_deps(
        move |theme| {
            apply_theme(*theme);
            || ()
        },
        *theme,
    );

    let context = ThemeContext {
        theme: *theme,
        setter: {
            let theme = theme.clone();
            Callback::from(move |next: Theme| theme.set(next))
        },
    };

    html! {
        <ContextProvider<ThemeContext> context={context}>
            { for props.children.iter() }
        </ContextProvider<ThemeContext>>
    }
}

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let context = use_context::<ThemeContext>();
    let Some(context) = context else {
        return html! {};
    };

    let onclick = {
        let context = context.clone();
        Callback::from(move |_: MouseEvent| context.set(context.theme.toggled()))
    };

    html! {
        <button class="theme-toggle" aria-label="Toggle theme" onclick={onclick}>
            { if context.theme == Theme::Dark { "☀" } else { "☾" } }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_value_wins_over_os_preference() {
        assert_eq!(resolve_theme(Some("light"), true), Theme::Light);
        assert_eq!(resolve_theme(Some("dark"), false), Theme::Dark);
    }

    #[test]
    fn falls_back_to_os_preference() {
        assert_eq!(resolve_theme(None, true), Theme::Dark);
        assert_eq!(resolve_theme(None, false), Theme::Light);
        assert_eq!(resolve_theme(Some("sepia"), true), Theme::Dark);
        assert_eq!(resolve_theme(Some(""), false), Theme::Light);
    }

    #[test]
    fn stored_strings_round_trip() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::parse(theme.as_str()), Some(theme));
            assert_eq!(theme.toggled().toggled(), theme);
        }
        assert_eq!(Theme::parse("Dark"), None);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Element, HtmlElement};

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn applying_a_theme_persists_and_sets_class() {
        apply_theme(Theme::Dark);
        assert_eq!(stored_theme().as_deref(), Some("dark"));
        let root = window().unwrap().document().unwrap().document_element().unwrap();
        assert!(root.class_list().contains(DARK_CLASS));

        apply_theme(Theme::Light);
        assert_eq!(stored_theme().as_deref(), Some("light"));
        assert!(!root.class_list().contains(DARK_CLASS));
        assert_eq!(load_theme(), Theme::Light);
    }

    #[function_component(ThemedToggle)]
    fn themed_toggle() -> Html {
        html! {
            <ThemeProvider>
                <ThemeToggle />
            </ThemeProvider>
        }
    }

    fn mount_root() -> Element {
        let document = window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        root
    }

    fn toggle_button(root: &Element) -> HtmlElement {
        root.query_selector(".theme-toggle").unwrap().unwrap().dyn_into().unwrap()
    }

    #[wasm_bindgen_test]
    async fn toggle_button_flips_the_theme() {
        apply_theme(Theme::Light);
        let root = mount_root();
        let app = yew::Renderer::<ThemedToggle>::with_root(root.clone()).render();
        TimeoutFuture::new(50).await;
        assert_eq!(toggle_button(&root).text_content().as_deref(), Some("☾"));

        toggle_button(&root).click();
        TimeoutFuture::new(50).await;

        assert_eq!(stored_theme().as_deref(), Some("dark"));
        let html = window().unwrap().document().unwrap().document_element().unwrap();
        assert!(html.class_list().contains(DARK_CLASS));
        assert_eq!(toggle_button(&root).text_content().as_deref(), Some("☀"));

        app.destroy();
        apply_theme(Theme::Light);
    }

    #[wasm_bindgen_test]
    async fn toggle_renders_nothing_without_a_provider() {
        let root = mount_root();
        let app = yew::Renderer::<ThemeToggle>::with_root(root.clone()).render();
        TimeoutFuture::new(50).await;
        assert!(root.query_selector(".theme-toggle").unwrap().is_none());
        app.destroy();
    }
}
