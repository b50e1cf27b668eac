use yew::prelude::*;
use yew_hooks::use_title;
use yew_router::prelude::*;

use crate::config::BRAND_NAME;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    use_title(format!("Page not found – {}", BRAND_NAME));

    html! {
        <div class="not-found">
            <style>
                {r#"
                .not-found {
                    min-height: 60vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    padding: 4rem 1.5rem;
                }
                .not-found h1 {
                    font-size: 4rem;
                    margin: 0;
                    color: #38bdf8;
                }
                .not-found p {
                    color: var(--muted-foreground);
                    margin: 1rem 0 2rem;
                }
                .not-found a {
                    color: #38bdf8;
                }
                "#}
            </style>
            <h1>{"404"}</h1>
            <p>{"Oops! This page took a wrong turn off the roadmap."}</p>
            <Link<Route> to={Route::Home}>{"Return to Home"}</Link<Route>>
        </div>
    }
}
