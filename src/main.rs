use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod theme;
mod roadmap;
mod components {
    pub mod auth_shell;
    pub mod background;
    pub mod footer;
    pub mod header;
    pub mod reveal;
}
mod pages {
    pub mod assessment;
    pub mod auth;
    pub mod community;
    pub mod contact;
    pub mod home;
    pub mod not_found;
    pub mod roadmaps;
}

use components::{
    background::BackgroundDots,
    footer::SiteFooter,
    header::SiteHeader,
};
use pages::{
    assessment::Assessment,
    auth::{SignIn, SignUp},
    community::Community,
    contact::Contact,
    home::Home,
    not_found::NotFound,
    roadmaps::{RoadmapDetail, Roadmaps},
};
use theme::ThemeProvider;

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/roadmaps")]
    Roadmaps,
    #[at("/roadmaps/:track")]
    RoadmapDetail { track: String },
    #[at("/assessment")]
    Assessment,
    #[at("/contact")]
    Contact,
    #[at("/community")]
    Community,
    #[at("/signin")]
    SignIn,
    #[at("/signup")]
    SignUp,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Roadmaps => {
            info!("Rendering Roadmaps page");
            html! { <Roadmaps /> }
        }
        Route::RoadmapDetail { track } => {
            info!("Rendering roadmap for {}", track);
            html! { <RoadmapDetail slug={track} /> }
        }
        Route::Assessment => {
            info!("Rendering Assessment page");
            html! { <Assessment /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        }
        Route::Community => {
            info!("Rendering Community page");
            html! { <Community /> }
        }
        Route::SignIn => {
            info!("Rendering Sign In page");
            html! { <SignIn /> }
        }
        Route::SignUp => {
            info!("Rendering Sign Up page");
            html! { <SignUp /> }
        }
        Route::NotFound => {
            info!("Rendering Not Found page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    // `main` stays unpositioned: roadmap landmarks are placed in document
    // coordinates.
    html! {
        <ThemeProvider>
            <BrowserRouter>
                <BackgroundDots />
                <SiteHeader />
                <main>
                    <Switch<Route> render={switch} />
                </main>
                <SiteFooter />
            </BrowserRouter>
        </ThemeProvider>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    // Only fails if a logger is already installed
    let _ = console_log::init_with_level(config::log_level());

    info!("Starting {}", config::BRAND_NAME);
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_pages_route_by_slug() {
        assert_eq!(
            Route::recognize("/roadmaps/data-science"),
            Some(Route::RoadmapDetail { track: "data-science".to_string() })
        );
        assert_eq!(Route::RoadmapDetail { track: "aws".to_string() }.to_path(), "/roadmaps/aws");
    }

    #[test]
    fn static_pages_have_fixed_paths() {
        let expected = [
            (Route::Home, "/"),
            (Route::Roadmaps, "/roadmaps"),
            (Route::Assessment, "/assessment"),
            (Route::Contact, "/contact"),
            (Route::Community, "/community"),
            (Route::SignIn, "/signin"),
            (Route::SignUp, "/signup"),
        ];
        for (route, path) in expected {
            assert_eq!(route.to_path(), path);
        }
        assert_eq!(Route::recognize("/assessment"), Some(Route::Assessment));
        assert_eq!(Route::recognize("/signup"), Some(Route::SignUp));
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        assert_eq!(Route::recognize("/nowhere"), Some(Route::NotFound));
        assert_eq!(Route::not_found_route(), Some(Route::NotFound));
    }
}
