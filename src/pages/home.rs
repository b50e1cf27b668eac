use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;
use yew_hooks::{use_raf, use_title};
use yew_router::prelude::*;

use crate::components::background::ParticlesBackground;
use crate::components::reveal::Reveal;
use crate::config::BRAND_NAME;
use crate::Route;

/// Parallax units for a pointer at `client` along an axis of length `size`.
/// Zero at the center, ±5 at the edges.
pub fn parallax_offset(client: f64, size: f64) -> f64 {
    if !(size > 0.0) {
        return 0.0;
    }
    (client - size / 2.0) / size * 10.0
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let container = use_node_ref();

    {
        let container = container.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = match web_sys::window() {
                    Some(window) => {
                        let callback = Closure::<dyn Fn(MouseEvent)>::new({
                            let window = window.clone();
                            move |e: MouseEvent| {
                                let Some(el) = container.cast::<HtmlElement>() else { return };
                                let width = window.inner_width().ok().and_then(|w| w.as_f64()).unwrap_or(0.0);
                                let height = window.inner_height().ok().and_then(|h| h.as_f64()).unwrap_or(0.0);
                                let style = el.style();
                                let _ = style.set_property(
                                    "--parallax-x",
                                    &parallax_offset(e.client_x() as f64, width).to_string(),
                                );
                                let _ = style.set_property(
                                    "--parallax-y",
                                    &parallax_offset(e.client_y() as f64, height).to_string(),
                                );
                            }
                        });
                        let _ = window.add_event_listener_with_callback("mousemove", callback.as_ref().unchecked_ref());
                        Box::new(move || {
                            let _ = window.remove_event_listener_with_callback("mousemove", callback.as_ref().unchecked_ref());
                        })
                    }
                    None => Box::new(|| ()),
                };
                move || destructor()
            },
            (),
        );
    }

    html! {
        <section class="hero">
            <ParticlesBackground />
            <div class="hero-content" ref={container}>
                <h1 class="hero-title">
                    { format!("{} – Elevate your skills, amplify your career.", BRAND_NAME) }
                </h1>
                <p class="hero-subtitle">
                    {"Discover your path. Build your skills. Land your dream role with AI-powered guidance."}
                </p>
                <div class="hero-ctas">
                    <Link<Route> to={Route::Assessment} classes="cta-primary">
                        {"Start Free Career Assessment"}
                    </Link<Route>>
                    <Link<Route> to={Route::Roadmaps} classes="cta-secondary">
                        {"Explore Skill Roadmaps"}
                    </Link<Route>>
                </div>
            </div>
        </section>
    }
}

pub struct Stat {
    pub label: &'static str,
    pub value: u64,
    pub suffix: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { label: "Careers Transformed", value: 25_000, suffix: "+" },
    Stat { label: "Skill Roadmaps", value: 120, suffix: "+" },
    Stat { label: "Success Rate", value: 92, suffix: "%" },
];

const COUNT_UP_MILLIS: u32 = 1400;

pub fn ease_out_cubic(p: f64) -> f64 {
    let p = p.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

pub fn count_up_value(target: u64, progress: f64) -> u64 {
    (target as f64 * ease_out_cubic(progress)).round() as u64
}

/// `25000` -> `"25,000"`.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[derive(Properties, PartialEq)]
struct CounterCardProps {
    label: &'static str,
    value: u64,
    suffix: &'static str,
}

#[function_component(CounterCard)]
fn counter_card(props: &CounterCardProps) -> Html {
    let progress = use_raf(COUNT_UP_MILLIS, 0);
    let current = count_up_value(props.value, progress);

    html! {
        <div class="stat-card">
            <div class="stat-value">{ format!("{} {}", format_count(current), props.suffix) }</div>
            <div class="stat-label">{ props.label }</div>
        </div>
    }
}

#[function_component(StatsCounters)]
pub fn stats_counters() -> Html {
    html! {
        <section class="section stats-grid">
            {
                STATS.iter().enumerate().map(|(i, s)| html! {
                    <Reveal delay={i as u32 * 120}>
                        <CounterCard label={s.label} value={s.value} suffix={s.suffix} />
                    </Reveal>
                }).collect::<Html>()
            }
        </section>
    }
}

const FEATURES: &[(&str, &str, &str)] = &[
    (
        "🤖",
        "AI-Powered Assessment",
        "Advanced machine learning algorithms analyze your skills, interests, and market trends to provide precise career recommendations.",
    ),
    (
        "🛤️",
        "Dynamic Skill Roadmaps",
        "Interactive learning paths that adapt to your progress and current market demands. Never follow outdated curricula again.",
    ),
    (
        "💼",
        "Real-Time Job Market",
        "Live job market analysis with salary insights, demand forecasts, and geographic opportunities for your target roles.",
    ),
    (
        "🎯",
        "Hands-On Practice",
        "Interactive coding environments, project-based learning, and real-world scenarios to build practical skills.",
    ),
    (
        "👥",
        "Community Learning",
        "Connect with peers, join study groups, participate in coding challenges, and learn from industry mentors.",
    ),
    (
        "📈",
        "Progress Tracking",
        "Comprehensive analytics dashboard showing your skill development, achievement milestones, and career readiness score.",
    ),
];

#[function_component(WhyChoose)]
pub fn why_choose() -> Html {
    html! {
        <section class="section">
            <Reveal>
                <h2 class="section-title">
                    {"Why Choose "}<span class="accent">{ BRAND_NAME }</span>{"?"}
                </h2>
                <p class="section-subtitle">
                    {"Cutting-edge AI technology meets personalized career guidance"}
                </p>
            </Reveal>
            <div class="card-grid">
                {
                    FEATURES.iter().enumerate().map(|(i, (emoji, title, desc))| html! {
                        <Reveal delay={i as u32 * 90}>
                            <div class="feature-card">
                                <div class="feature-emoji">{ *emoji }</div>
                                <h3>{ *title }</h3>
                                <p>{ *desc }</p>
                            </div>
                        </Reveal>
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}

struct Testimonial {
    quote: &'static str,
    name: &'static str,
    role: &'static str,
}

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Ascendify's AI assessment identified my hidden potential in data science. Within 6 months, I transitioned from accounting to a data analyst role with a 40% salary increase!",
        name: "Priya Sharma",
        role: "Accountant → Data Analyst",
    },
    Testimonial {
        quote: "The personalized roadmap and hands-on projects helped me master full-stack development. Now I'm working at a top tech company in Bangalore!",
        name: "Rahul Patel",
        role: "Student → Full Stack Developer",
    },
    Testimonial {
        quote: "From manual testing to automation engineering in 8 months. The AI mentor guided me through every step of my career transformation.",
        name: "Anjali Singh",
        role: "Manual Tester → Automation Engineer",
    },
];

fn initial(name: &str) -> String {
    name.chars().next().map(|c| c.to_uppercase().collect()).unwrap_or_default()
}

#[function_component(SuccessStories)]
pub fn success_stories() -> Html {
    html! {
        <section class="section">
            <Reveal>
                <h2 class="section-title">{"Success Stories"}</h2>
                <p class="section-subtitle">{"Real people, real career transformations"}</p>
            </Reveal>
            <div class="card-grid three">
                {
                    TESTIMONIALS.iter().enumerate().map(|(i, t)| html! {
                        <Reveal delay={i as u32 * 120}>
                            <article class="testimonial">
                                <p>{ t.quote }</p>
                                <div class="testimonial-author">
                                    <div class="avatar">{ initial(t.name) }</div>
                                    <div>
                                        <div class="author-name">{ t.name }</div>
                                        <div class="author-role">{ t.role }</div>
                                    </div>
                                </div>
                            </article>
                        </Reveal>
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    use_title(format!("{} – Elevate your skills", BRAND_NAME));

    html! {
        <div class="home">
            <style>
                {r#"
                .hero {
                    position: relative;
                    overflow: hidden;
                }
                .hero-content {
                    min-height: 80vh;
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 6rem 1.5rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                }
                .hero-title {
                    max-width: 56rem;
                    font-size: clamp(2.25rem, 5vw, 3.75rem);
                    font-weight: 800;
                    line-height: 1.15;
                    color: #38bdf8;
                    text-shadow: 0 0 18px rgba(56, 189, 248, 0.45);
                    transform: translate3d(calc(var(--parallax-x, 0) * 1px), calc(var(--parallax-y, 0) * 1px), 0);
                }
                .hero-subtitle {
                    margin-top: 1.25rem;
                    max-width: 42rem;
                    font-size: 1.1rem;
                    color: var(--muted-foreground);
                }
                .hero-ctas {
                    margin-top: 2rem;
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 0.75rem;
                }
                .cta-primary, .cta-secondary {
                    padding: 1rem 2rem;
                    border-radius: 999px;
                    font-weight: 600;
                    text-decoration: none;
                    border: 2px solid rgba(56, 189, 248, 0.6);
                }
                .cta-primary {
                    color: white;
                    background: linear-gradient(90deg, #0ea5e9, #06b6d4);
                    box-shadow: 0 0 18px rgba(56, 189, 248, 0.35);
                }
                .cta-secondary {
                    color: #38bdf8;
                }
                .section {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 5rem 1.5rem;
                }
                .stats-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 1.5rem;
                    padding-top: 4rem;
                    padding-bottom: 4rem;
                }
                .stat-card, .feature-card, .testimonial {
                    height: 100%;
                    box-sizing: border-box;
                    padding: 1.5rem;
                    border-radius: 12px;
                    background: var(--card);
                    border: 1px solid rgba(148, 163, 184, 0.3);
                }
                .stat-card {
                    text-align: center;
                }
                .stat-value {
                    font-size: 3rem;
                    font-weight: 800;
                    background: linear-gradient(90deg, #67e8f9, #38bdf8, #d946ef);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }
                .stat-label {
                    margin-top: 0.5rem;
                    font-size: 0.9rem;
                    color: var(--muted-foreground);
                }
                .section-title {
                    text-align: center;
                    font-size: clamp(1.9rem, 4vw, 2.5rem);
                    font-weight: 800;
                }
                .accent {
                    color: #38bdf8;
                }
                .section-subtitle {
                    text-align: center;
                    max-width: 42rem;
                    margin: 0.75rem auto 0;
                    color: var(--muted-foreground);
                }
                .card-grid {
                    margin-top: 2.5rem;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 1.5rem;
                }
                .feature-emoji {
                    font-size: 2rem;
                }
                .feature-card p, .testimonial p {
                    font-size: 0.9rem;
                    line-height: 1.6;
                    color: var(--muted-foreground);
                }
                .testimonial-author {
                    margin-top: 1.5rem;
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }
                .avatar {
                    width: 40px;
                    height: 40px;
                    border-radius: 50%;
                    display: grid;
                    place-items: center;
                    font-weight: 700;
                    color: var(--background);
                    background: linear-gradient(90deg, #22d3ee, #d946ef);
                }
                .author-name {
                    font-weight: 600;
                }
                .author-role {
                    font-size: 0.75rem;
                    color: var(--muted-foreground);
                }
                "#}
            </style>
            <Hero />
            <StatsCounters />
            <WhyChoose />
            <SuccessStories />
        </div>
    }
}
