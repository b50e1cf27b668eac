use yew::prelude::*;
use yew_hooks::use_title;
use yew_router::prelude::*;

use crate::config::BRAND_NAME;
use crate::pages::not_found::NotFound;
use crate::roadmap::tracks::{find_track, TRACKS};
use crate::roadmap::RoadmapView;
use crate::Route;

#[function_component(Roadmaps)]
pub fn roadmaps() -> Html {
    use_title(format!("Explore Roadmaps – {}", BRAND_NAME));

    html! {
        <div class="roadmap-index">
            <style>
                {r#"
                .roadmap-index {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 5rem 1.5rem;
                }
                .roadmap-index h1 {
                    text-align: center;
                    font-size: 2.25rem;
                    margin-bottom: 1rem;
                }
                .roadmap-index-intro {
                    text-align: center;
                    max-width: 42rem;
                    margin: 0 auto 3rem;
                    color: var(--muted-foreground);
                }
                .roadmap-cards {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 2rem;
                }
                .roadmap-card {
                    display: flex;
                    flex-direction: column;
                    padding: 1.5rem;
                    border-radius: 16px;
                    background: var(--card);
                    border: 1px solid rgba(148, 163, 184, 0.3);
                    transition: box-shadow 0.2s ease, transform 0.2s ease;
                }
                .roadmap-card:hover {
                    transform: translateY(-2px);
                    box-shadow: 0 10px 30px rgba(56, 189, 248, 0.15);
                }
                .roadmap-card h2 {
                    font-size: 1.25rem;
                    margin: 0 0 0.75rem;
                }
                .roadmap-card p {
                    flex: 1;
                    font-size: 0.9rem;
                    color: var(--muted-foreground);
                }
                .roadmap-card-meta {
                    font-size: 0.8rem;
                    color: #0ea5e9;
                    margin-bottom: 1rem;
                }
                .roadmap-card-link {
                    align-self: flex-start;
                    padding: 0.5rem 1rem;
                    border-radius: 8px;
                    font-size: 0.9rem;
                    font-weight: 500;
                    color: white;
                    background: #0284c7;
                    text-decoration: none;
                }
                "#}
            </style>
            <h1>{"🚀 Explore Roadmaps"}</h1>
            <p class="roadmap-index-intro">
                {"Choose a roadmap to start your learning journey. Each roadmap is designed step-by-step to take you from beginner to advanced."}
            </p>
            <div class="roadmap-cards">
                {
                    TRACKS.iter().map(|track| html! {
                        <div class="roadmap-card" key={track.slug}>
                            <h2>{ track.title }</h2>
                            <p>{ track.blurb }</p>
                            <div class="roadmap-card-meta">
                                { format!("{} milestones", track.sections.len()) }
                            </div>
                            <Link<Route>
                                to={Route::RoadmapDetail { track: track.slug.to_string() }}
                                classes="roadmap-card-link"
                            >
                                {"Start Learning →"}
                            </Link<Route>>
                        </div>
                    }).collect::<Html>()
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct RoadmapDetailProps {
    pub slug: String,
}

#[function_component(RoadmapDetail)]
pub fn roadmap_detail(props: &RoadmapDetailProps) -> Html {
    let track = find_track(&props.slug);
    let title = match track {
        Some(track) => format!("{} Roadmap – {}", track.title, BRAND_NAME),
        None => format!("Page not found – {}", BRAND_NAME),
    };
    use_title(title);

    match track {
        Some(track) => html! { <RoadmapView track={track} /> },
        None => html! { <NotFound /> },
    }
}
