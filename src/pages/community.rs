use yew::prelude::*;
use yew_hooks::use_title;
use yew_router::prelude::*;

use crate::components::reveal::Reveal;
use crate::config::BRAND_NAME;
use crate::Route;

struct Offering {
    anchor: &'static str,
    title: &'static str,
    blurb: &'static str,
    link_text: &'static str,
}

const OFFERINGS: &[Offering] = &[
    Offering {
        anchor: "groups",
        title: "Study Groups",
        blurb: "Find or create cohorts for specific roadmaps. Keep each other accountable and share resources.",
        link_text: "Explore study groups →",
    },
    Offering {
        anchor: "mentorship",
        title: "Mentorship",
        blurb: "Connect with experienced professionals for guidance on careers, portfolios, and interview prep.",
        link_text: "See mentorship options →",
    },
    Offering {
        anchor: "events",
        title: "Challenges & Events",
        blurb: "Weekly coding challenges, live workshops, and AMAs to practice and learn from the community.",
        link_text: "View upcoming events →",
    },
];

/// `(anchor, heading, intro, [(item, details)])`
type Listing = (&'static str, &'static str, &'static str, [(&'static str, &'static str); 3]);

const LISTINGS: &[Listing] = &[
    (
        "groups",
        "Study Groups",
        "Popular groups based on current roadmaps and skills.",
        [
            ("Frontend Foundations", "HTML • CSS • JavaScript • React"),
            ("Data Analyst Track", "SQL • Python • Visualization"),
            ("System Design Prep", "Scalability • Architecture • Tradeoffs"),
        ],
    ),
    (
        "mentorship",
        "Mentorship",
        "One-on-one guidance for accelerating your growth.",
        [
            ("Career Strategy", "Roadmaps • Role targeting • Job search"),
            ("Project Feedback", "Code reviews • Portfolio • Demos"),
            ("Interview Coaching", "DSA • System design • Behavioral"),
        ],
    ),
    (
        "events",
        "Challenges & Events",
        "Join weekly activities to practice and network.",
        [
            ("Frontend Friday", "Build a UI from a prompt in 90 minutes"),
            ("SQL Saturday", "Solve real analytics problems"),
            ("Mock Interview Night", "Practice technical and behavioral rounds"),
        ],
    ),
];

#[function_component(Community)]
pub fn community() -> Html {
    use_title(format!("Community – {}", BRAND_NAME));

    html! {
        <div class="community-page">
            <style>
                {r#"
                .community-page section {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 3rem 1.5rem;
                }
                .community-page h1 {
                    font-size: clamp(2.25rem, 5vw, 3rem);
                    font-weight: 800;
                    color: #38bdf8;
                    text-shadow: 0 0 18px rgba(56, 189, 248, 0.45);
                }
                .community-intro, .listing-intro, .listing-details {
                    color: var(--muted-foreground);
                }
                .community-intro {
                    max-width: 42rem;
                }
                .offering-grid, .listing-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 1.5rem;
                    margin-top: 2rem;
                    padding: 0;
                    list-style: none;
                }
                .offering, .listing-item {
                    height: 100%;
                    box-sizing: border-box;
                    padding: 1.5rem;
                    border-radius: 12px;
                    border: 1px solid rgba(148, 163, 184, 0.3);
                    background: var(--card);
                }
                .offering p {
                    font-size: 0.9rem;
                    color: var(--muted-foreground);
                }
                .offering a {
                    color: #38bdf8;
                    text-decoration: none;
                }
                .listing-item {
                    padding: 1rem;
                }
                .listing-details {
                    font-size: 0.75rem;
                    margin-top: 0.25rem;
                }
                .community-cta {
                    text-align: center;
                    padding: 1.5rem;
                    border-radius: 12px;
                    border: 1px solid rgba(56, 189, 248, 0.4);
                    background: rgba(56, 189, 248, 0.1);
                }
                .community-cta a {
                    display: inline-block;
                    margin-top: 1rem;
                    padding: 0.5rem 1rem;
                    border-radius: 6px;
                    color: white;
                    background: #0ea5e9;
                    text-decoration: none;
                }
                "#}
            </style>

            <section>
                <h1>{"Community"}</h1>
                <p class="community-intro">
                    {"Learn together, grow faster. Join study groups, get mentorship, participate in challenges, and connect with peers."}
                </p>
                <div class="offering-grid">
                    {
                        OFFERINGS.iter().enumerate().map(|(i, o)| html! {
                            <Reveal delay={i as u32 * 90}>
                                <article class="offering">
                                    <h2>{ o.title }</h2>
                                    <p>{ o.blurb }</p>
                                    <a href={format!("#{}", o.anchor)}>{ o.link_text }</a>
                                </article>
                            </Reveal>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            {
                LISTINGS.iter().map(|(anchor, heading, intro, items)| html! {
                    <section id={*anchor}>
                        <h3>{ *heading }</h3>
                        <p class="listing-intro">{ *intro }</p>
                        <ul class="listing-grid">
                            {
                                items.iter().map(|(item, details)| html! {
                                    <li class="listing-item">
                                        <div>{ *item }</div>
                                        <div class="listing-details">{ *details }</div>
                                    </li>
                                }).collect::<Html>()
                            }
                        </ul>
                    </section>
                }).collect::<Html>()
            }

            <section>
                <div class="community-cta">
                    <h3>{"Ready to get involved?"}</h3>
                    <p>{"Start with a free assessment and find the best groups and mentors for your goals."}</p>
                    <Link<Route> to={Route::Assessment}>{"Take the Career Assessment"}</Link<Route>>
                </div>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_offering_links_to_a_listing() {
        for offering in OFFERINGS {
            assert!(
                LISTINGS.iter().any(|(anchor, ..)| *anchor == offering.anchor),
                "{} has no section",
                offering.anchor
            );
        }
    }
}
