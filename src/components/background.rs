use web_sys::js_sys::Math;
use yew::prelude::*;
use yew_hooks::use_window_scroll;

/// Vertical shift of the dot grid for a given scroll offset.
pub fn parallax_shift(scroll_y: f64, speed: f64) -> f64 {
    -scroll_y * speed
}

#[derive(Properties, PartialEq)]
pub struct BackgroundDotsProps {
    #[prop_or(0.25)]
    pub speed: f64,
}

/// Fixed dot grid behind every page, drifting with the scroll.
#[function_component(BackgroundDots)]
pub fn background_dots(props: &BackgroundDotsProps) -> Html {
    let (_, scroll_y) = use_window_scroll();
    let shift = parallax_shift(scroll_y, props.speed);

    html! {
        <div class="background-dots" aria-hidden="true">
            <style>
                {r#"
                .background-dots {
                    position: fixed;
                    inset: 0;
                    z-index: -10;
                    overflow: hidden;
                    pointer-events: none;
                    background: var(--page-base);
                }
                .dot-grid {
                    position: absolute;
                    inset: 0 0 -50% 0;
                    background-image: radial-gradient(circle at center, rgba(56, 189, 248, 0.45) 1px, transparent 1px);
                    background-size: 14px 24px;
                    animation: bg-rise 40s linear infinite;
                }
                .dot-vignette {
                    position: absolute;
                    inset: 0;
                    background: radial-gradient(70% 60% at 50% 20%, var(--vignette), transparent 60%);
                }
                @keyframes bg-rise {
                    from { background-position: 0 0; }
                    to { background-position: 0 -480px; }
                }
                "#}
            </style>
            <div class="dot-grid" style={format!("transform: translate3d(0, {}px, 0);", shift)}></div>
            <div class="dot-vignette"></div>
        </div>
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    /// Percent of the container width.
    pub left: f64,
    /// Percent of the container height.
    pub top: f64,
    pub size: f64,
    pub opacity: f64,
    pub duration: f64,
    pub delay: f64,
}

impl Particle {
    /// Maps six uniform samples in [0, 1) onto the particle ranges.
    pub fn from_samples(s: [f64; 6]) -> Self {
        Particle {
            left: s[0] * 100.0,
            top: s[1] * 100.0,
            size: s[2] * 3.0 + 1.0,
            opacity: s[3] * 0.7 + 0.3,
            duration: s[4] * 15.0 + 10.0,
            delay: s[5] * 15.0,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; width: {:.2}px; height: {:.2}px; opacity: {:.2}; \
             animation: ascend-particle {:.2}s linear {:.2}s infinite;",
            self.left, self.top, self.size, self.size, self.opacity, self.duration, self.delay
        )
    }
}

fn random_particles(count: usize) -> Vec<Particle> {
    (0..count)
        .map(|_| Particle::from_samples([(); 6].map(|_| Math::random())))
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct ParticlesProps {
    #[prop_or(70)]
    pub count: usize,
}

#[function_component(ParticlesBackground)]
pub fn particles_background(props: &ParticlesProps) -> Html {
    let particles = use_memo(|count| random_particles(*count), props.count);

    html! {
        <div class="particles" aria-hidden="true">
            <style>
                {r#"
                .particles {
                    position: absolute;
                    inset: 0;
                    z-index: -1;
                    overflow: hidden;
                    pointer-events: none;
                }
                .particle {
                    position: absolute;
                    border-radius: 50%;
                    background-color: rgba(0, 191, 255, 0.7);
                    box-shadow: 0 0 8px rgba(0, 191, 255, 0.8), 0 0 15px rgba(138, 43, 226, 0.5);
                }
                @keyframes ascend-particle {
                    0% { transform: translateY(100vh) scale(0.5); opacity: 0; }
                    20% { opacity: 0.7; }
                    80% { opacity: 0.5; }
                    100% { transform: translateY(-50vh) scale(1); opacity: 0; }
                }
                "#}
            </style>
            {
                particles.iter().map(|p| html! {
                    <div class="particle" style={p.style()}></div>
                }).collect::<Html>()
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_map_onto_particle_ranges() {
        let low = Particle::from_samples([0.0; 6]);
        assert_eq!(low, Particle { left: 0.0, top: 0.0, size: 1.0, opacity: 0.3, duration: 10.0, delay: 0.0 });

        let high = Particle::from_samples([0.999_999; 6]);
        assert!(high.size < 4.0 && high.size > 3.99);
        assert!(high.opacity < 1.0);
        assert!(high.duration < 25.0);
        assert!(high.delay < 15.0);
        assert!(high.left < 100.0 && high.top < 100.0);
    }

    #[test]
    fn style_carries_the_animation() {
        let p = Particle::from_samples([0.5; 6]);
        let style = p.style();
        assert!(style.contains("left: 50.00%"));
        assert!(style.contains("width: 2.50px; height: 2.50px"));
        assert!(style.contains("ascend-particle 17.50s linear 7.50s infinite"));
    }

    #[test]
    fn dots_move_up_as_the_page_scrolls() {
        assert_eq!(parallax_shift(0.0, 0.25), 0.0);
        assert_eq!(parallax_shift(400.0, 0.25), -100.0);
    }
}
