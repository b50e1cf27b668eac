use std::fmt;
use std::rc::Rc;

use log::{info, warn};
use serde::Serialize;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_hooks::use_title;

use crate::config::BRAND_NAME;

pub const FIRST_STEP: u8 = 1;
pub const LAST_STEP: u8 = 5;

pub const SKILL_OPTIONS: &[&str] = &[
    "Cloud Computing",
    "AI / Machine Learning",
    "Data Science",
    "Full Stack Development (Java)",
    "Full Stack Development (DotNet)",
];

/// Offered when the chosen skill has no focus areas of its own.
const GENERAL_TAGS: &[&str] = &["General"];

pub fn tags_for_skill(skill: Option<&str>) -> &'static [&'static str] {
    match skill {
        Some("AI / Machine Learning") => &["TensorFlow", "PyTorch", "Scikit-Learn", "Pandas", "NLP", "Computer Vision"],
        Some("Cloud Computing") => &["AWS", "Azure", "GCP", "CI/CD", "Kubernetes", "Terraform"],
        Some("Data Science") => &["Pandas", "NumPy", "Matplotlib", "Seaborn", "SQL", "Statistics"],
        Some("Full Stack Development (Java)") => &["Spring Boot", "Hibernate", "REST APIs", "Docker", "PostgreSQL", "Microservices"],
        Some("Full Stack Development (DotNet)") => &[".NET Core", "Entity Framework", "REST APIs", "Azure", "SQL Server", "Microservices"],
        _ => GENERAL_TAGS,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Experience {
    Basic,
    Medium,
    Advanced,
}

impl Experience {
    pub const ALL: [Experience; 3] = [Experience::Basic, Experience::Medium, Experience::Advanced];
}

impl fmt::Display for Experience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Experience::Basic => "Basic",
            Experience::Medium => "Medium",
            Experience::Advanced => "Advanced",
        };
        f.write_str(label)
    }
}

pub enum FormAction {
    SetName(String),
    SetSkill(String),
    SetExperience(Experience),
    ToggleTag(&'static str),
    Next,
    Back,
    Submit,
    Reset,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AssessmentForm {
    pub step: u8,
    pub name: String,
    pub skill: Option<&'static str>,
    pub experience: Option<Experience>,
    pub tags: Vec<&'static str>,
    pub submitted: bool,
}

impl Default for AssessmentForm {
    fn default() -> Self {
        AssessmentForm {
            step: FIRST_STEP,
            name: String::new(),
            skill: None,
            experience: None,
            tags: Vec::new(),
            submitted: false,
        }
    }
}

#[derive(Serialize)]
pub struct AssessmentSummary<'a> {
    pub name: &'a str,
    pub skill: Option<&'a str>,
    pub experience: Option<Experience>,
    pub tags: &'a [&'static str],
}

impl AssessmentForm {
    /// Whether the current step has what it needs to move on.
    pub fn can_next(&self) -> bool {
        match self.step {
            1 => !self.name.trim().is_empty(),
            2 => self.skill.is_some(),
            3 => self.experience.is_some(),
            _ => true,
        }
    }

    pub fn can_back(&self) -> bool {
        self.step > FIRST_STEP
    }

    pub fn next(&mut self) {
        if self.can_next() {
            self.step = (self.step + 1).min(LAST_STEP);
        }
    }

    pub fn prev(&mut self) {
        self.step = self.step.saturating_sub(1).max(FIRST_STEP);
    }

    pub fn available_tags(&self) -> &'static [&'static str] {
        tags_for_skill(self.skill)
    }

    /// Unknown skills clear the selection. Tags that don't belong to the new
    /// skill are dropped.
    pub fn set_skill(&mut self, skill: &str) {
        self.skill = SKILL_OPTIONS.iter().copied().find(|s| *s == skill);
        let available = self.available_tags();
        self.tags.retain(|t| available.contains(t));
    }

    pub fn toggle_tag(&mut self, tag: &'static str) {
        if let Some(pos) = self.tags.iter().position(|t| *t == tag) {
            self.tags.remove(pos);
        } else if self.available_tags().contains(&tag) {
            self.tags.push(tag);
        }
    }

    /// Width of the progress bar in percent.
    pub fn progress_percent(&self) -> f64 {
        f64::from(self.step - FIRST_STEP) / f64::from(LAST_STEP - FIRST_STEP) * 100.0
    }

    pub fn summary(&self) -> AssessmentSummary<'_> {
        AssessmentSummary {
            name: self.name.trim(),
            skill: self.skill,
            experience: self.experience,
            tags: &self.tags,
        }
    }

    pub fn apply(&mut self, action: FormAction) {
        match action {
            FormAction::SetName(name) => self.name = name,
            FormAction::SetSkill(skill) => self.set_skill(&skill),
            FormAction::SetExperience(level) => self.experience = Some(level),
            FormAction::ToggleTag(tag) => self.toggle_tag(tag),
            FormAction::Next => self.next(),
            FormAction::Back => self.prev(),
            FormAction::Submit => {
                if self.step == LAST_STEP {
                    self.submitted = true;
                }
            }
            FormAction::Reset => *self = AssessmentForm::default(),
        }
    }
}

impl Reducible for AssessmentForm {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        next.into()
    }
}

fn or_dash(value: Option<String>) -> String {
    value.filter(|v| !v.is_empty()).unwrap_or_else(|| "—".to_string())
}

#[derive(Properties, PartialEq)]
pub struct AssessmentModalProps {
    pub on_close: Callback<()>,
}

#[function_component(AssessmentModal)]
pub fn assessment_modal(props: &AssessmentModalProps) -> Html {
    let form = use_reducer(AssessmentForm::default);

    let close = {
        let form = form.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            form.dispatch(FormAction::Reset);
            on_close.emit(());
        })
    };

    let on_next = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| form.dispatch(FormAction::Next))
    };

    let on_back = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| form.dispatch(FormAction::Back))
    };

    let on_submit = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            match serde_json::to_string(&form.summary()) {
                Ok(json) => info!("assessment submitted: {}", json),
                Err(e) => warn!("could not serialize assessment: {}", e),
            }
            form.dispatch(FormAction::Submit);
        })
    };

    let body = if form.submitted {
        html! {
            <div class="assessment-step thank-you">
                <div class="thank-you-title">{"Thank you!"}</div>
                <p>{"Your career assessment has been submitted."}</p>
                <button class="primary" onclick={close.clone()}>{"Close"}</button>
            </div>
        }
    } else {
        match form.step {
            1 => {
                let oninput = {
                    let form = form.clone();
                    Callback::from(move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        form.dispatch(FormAction::SetName(input.value()));
                    })
                };
                html! {
                    <div class="assessment-step">
                        <h3>{"What should we call you?"}</h3>
                        <label for="assessment-name">{"Name"}</label>
                        <input
                            id="assessment-name"
                            type="text"
                            placeholder="Jane Doe"
                            value={form.name.clone()}
                            oninput={oninput}
                        />
                    </div>
                }
            }
            2 => {
                let onchange = {
                    let form = form.clone();
                    Callback::from(move |e: Event| {
                        let select: HtmlSelectElement = e.target_unchecked_into();
                        form.dispatch(FormAction::SetSkill(select.value()));
                    })
                };
                html! {
                    <div class="assessment-step">
                        <h3>{"Choose your main skill"}</h3>
                        <label for="assessment-skill">{"Skill"}</label>
                        <select id="assessment-skill" onchange={onchange}>
                            <option value="" selected={form.skill.is_none()} disabled={true}>{"Select a skill"}</option>
                            {
                                SKILL_OPTIONS.iter().map(|opt| html! {
                                    <option value={*opt} selected={form.skill == Some(*opt)}>{ *opt }</option>
                                }).collect::<Html>()
                            }
                        </select>
                    </div>
                }
            }
            3 => html! {
                <div class="assessment-step">
                    <h3>{"Select your experience level"}</h3>
                    <div class="experience-options">
                        {
                            Experience::ALL.iter().map(|level| {
                                let level = *level;
                                let onclick = {
                                    let form = form.clone();
                                    Callback::from(move |_: MouseEvent| form.dispatch(FormAction::SetExperience(level)))
                                };
                                let active = form.experience == Some(level);
                                html! {
                                    <label class={classes!("experience-option", active.then(|| "active"))}>
                                        <input type="radio" name="experience" checked={active} onclick={onclick} />
                                        <span>{ level.to_string() }</span>
                                    </label>
                                }
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            },
            4 => html! {
                <div class="assessment-step">
                    <h3>{"Choose your focus areas"}</h3>
                    <div class="assessment-hint">
                        {
                            match form.skill {
                                Some(skill) => format!("Based on {}", skill),
                                None => "Select a skill first (previous step).".to_string(),
                            }
                        }
                    </div>
                    <div class="tag-list">
                        {
                            form.available_tags().iter().map(|tag| {
                                let tag = *tag;
                                let onclick = {
                                    let form = form.clone();
                                    Callback::from(move |_: MouseEvent| form.dispatch(FormAction::ToggleTag(tag)))
                                };
                                let active = form.tags.contains(&tag);
                                html! {
                                    <button type="button" class={classes!("tag", active.then(|| "active"))} onclick={onclick}>
                                        { tag }
                                    </button>
                                }
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            },
            _ => html! {
                <div class="assessment-step">
                    <h3>{"Review & Submit"}</h3>
                    <div class="review">
                        <div><strong>{"Name: "}</strong>{ or_dash(Some(form.name.trim().to_string())) }</div>
                        <div><strong>{"Skill: "}</strong>{ or_dash(form.skill.map(str::to_string)) }</div>
                        <div><strong>{"Experience: "}</strong>{ or_dash(form.experience.map(|e| e.to_string())) }</div>
                        <div><strong>{"Tags: "}</strong>{ or_dash(Some(form.tags.join(", "))) }</div>
                    </div>
                </div>
            },
        }
    };

    html! {
        <div class="modal-backdrop">
            <div class="modal" role="dialog" aria-modal="true">
                <button class="modal-close" aria-label="Close" onclick={close.clone()}>{"×"}</button>
                <h2>{"Career Assessment"}</h2>

                <div class="stepper">
                    {
                        (FIRST_STEP..=LAST_STEP).map(|i| html! {
                            <div class={classes!("step-dot", (i <= form.step).then(|| "reached"))}>{ i.to_string() }</div>
                        }).collect::<Html>()
                    }
                </div>
                <div class="progress-track">
                    <div class="progress-fill" style={format!("width: {}%;", form.progress_percent())}></div>
                </div>

                { body }

                if !form.submitted {
                    <div class="modal-actions">
                        <button class="secondary" onclick={on_back} disabled={!form.can_back()}>{"Back"}</button>
                        if form.step < LAST_STEP {
                            <button class="primary" onclick={on_next} disabled={!form.can_next()}>{"Next"}</button>
                        } else {
                            <button class="primary" onclick={on_submit}>{"Submit"}</button>
                        }
                    </div>
                }
            </div>
        </div>
    }
}

#[function_component(Assessment)]
pub fn assessment() -> Html {
    use_title(format!("Career Assessment – {}", BRAND_NAME));
    let open = use_state(|| false);

    let on_open = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(true))
    };
    let on_close = {
        let open = open.clone();
        Callback::from(move |_: ()| open.set(false))
    };

    html! {
        <div class="assessment-page">
            <style>
                {r#"
                .assessment-page {
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 6rem 1.5rem;
                    text-align: center;
                }
                .assessment-page h1 {
                    font-size: clamp(2rem, 4vw, 3rem);
                    color: #38bdf8;
                }
                .assessment-page > p {
                    color: var(--muted-foreground);
                    max-width: 40rem;
                    margin: 1rem auto 2rem;
                }
                .assessment-start, .modal .primary {
                    padding: 0.75rem 1.5rem;
                    border: none;
                    border-radius: 8px;
                    font-weight: 600;
                    color: white;
                    background: #2563eb;
                    cursor: pointer;
                }
                .modal .primary:disabled {
                    opacity: 0.5;
                    cursor: not-allowed;
                }
                .modal .secondary {
                    padding: 0.75rem 1.5rem;
                    border-radius: 8px;
                    background: transparent;
                    color: var(--foreground);
                    border: 1px solid rgba(148, 163, 184, 0.5);
                    cursor: pointer;
                }
                .modal-backdrop {
                    position: fixed;
                    inset: 0;
                    z-index: 50;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                    background: rgba(2, 6, 23, 0.6);
                }
                .modal {
                    position: relative;
                    width: 100%;
                    max-width: 36rem;
                    padding: 2rem;
                    border-radius: 16px;
                    text-align: left;
                    background: var(--card);
                    color: var(--foreground);
                }
                .modal h2 {
                    text-align: center;
                    margin-top: 0;
                }
                .modal-close {
                    position: absolute;
                    top: 0.75rem;
                    right: 1rem;
                    border: none;
                    background: none;
                    font-size: 1.5rem;
                    color: var(--muted-foreground);
                    cursor: pointer;
                }
                .stepper {
                    display: flex;
                    justify-content: space-between;
                }
                .step-dot {
                    width: 28px;
                    height: 28px;
                    border-radius: 50%;
                    display: grid;
                    place-items: center;
                    font-size: 0.75rem;
                    border: 1px solid rgba(148, 163, 184, 0.5);
                }
                .step-dot.reached {
                    background: #2563eb;
                    border-color: #2563eb;
                    color: white;
                }
                .progress-track {
                    margin-top: 0.75rem;
                    height: 4px;
                    border-radius: 2px;
                    overflow: hidden;
                    background: rgba(148, 163, 184, 0.3);
                }
                .progress-fill {
                    height: 100%;
                    background: #2563eb;
                    transition: width 0.3s ease;
                }
                .assessment-step {
                    min-height: 220px;
                    padding-top: 1.5rem;
                }
                .assessment-step h3 {
                    text-align: center;
                }
                .assessment-step input[type="text"], .assessment-step select {
                    width: 100%;
                    box-sizing: border-box;
                    margin-top: 0.5rem;
                    padding: 0.6rem 0.75rem;
                    border-radius: 8px;
                    border: 1px solid rgba(148, 163, 184, 0.5);
                    background: transparent;
                    color: var(--foreground);
                }
                .experience-options {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(140px, 1fr));
                    gap: 0.75rem;
                }
                .experience-option {
                    display: flex;
                    gap: 0.5rem;
                    padding: 0.75rem;
                    border-radius: 8px;
                    border: 1px solid rgba(148, 163, 184, 0.5);
                    cursor: pointer;
                }
                .experience-option.active {
                    border-color: #2563eb;
                    background: rgba(37, 99, 235, 0.1);
                }
                .assessment-hint {
                    text-align: center;
                    font-size: 0.75rem;
                    color: var(--muted-foreground);
                }
                .tag-list {
                    margin-top: 0.75rem;
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 0.5rem;
                }
                .tag {
                    padding: 0.35rem 0.75rem;
                    border-radius: 999px;
                    border: 1px solid rgba(148, 163, 184, 0.5);
                    background: transparent;
                    color: var(--foreground);
                    cursor: pointer;
                }
                .tag.active {
                    background: #2563eb;
                    border-color: #2563eb;
                    color: white;
                }
                .review {
                    padding: 1rem;
                    border-radius: 8px;
                    border: 1px solid rgba(148, 163, 184, 0.5);
                    line-height: 1.8;
                    font-size: 0.9rem;
                }
                .modal-actions {
                    margin-top: 1.5rem;
                    display: flex;
                    justify-content: space-between;
                }
                .thank-you {
                    text-align: center;
                }
                .thank-you-title {
                    font-size: 1.5rem;
                    font-weight: 600;
                    color: #2563eb;
                }
                "#}
            </style>
            <h1>{"Career Assessment"}</h1>
            <p>
                {"Answer five quick questions about your goals and experience, and we'll point you to the roadmap that fits."}
            </p>
            <button class="assessment-start" onclick={on_open}>{"Start Free Career Assessment"}</button>
            if *open {
                <AssessmentModal on_close={on_close} />
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_step(step: u8) -> AssessmentForm {
        let mut form = AssessmentForm::default();
        form.name = "Jane".to_string();
        form.set_skill("Data Science");
        form.experience = Some(Experience::Medium);
        form.step = step;
        form
    }

    #[test]
    fn blank_name_blocks_the_first_step() {
        let mut form = AssessmentForm::default();
        assert!(!form.can_next());
        form.apply(FormAction::SetName("   ".to_string()));
        assert!(!form.can_next());
        form.next();
        assert_eq!(form.step, 1);

        form.apply(FormAction::SetName("Jane".to_string()));
        form.next();
        assert_eq!(form.step, 2);
    }

    #[test]
    fn each_step_requires_its_answer() {
        let mut form = AssessmentForm { step: 2, name: "Jane".to_string(), ..AssessmentForm::default() };
        assert!(!form.can_next());
        form.apply(FormAction::SetSkill("Cloud Computing".to_string()));
        assert!(form.can_next());

        form.next();
        assert_eq!(form.step, 3);
        assert!(!form.can_next());
        form.apply(FormAction::SetExperience(Experience::Basic));
        form.next();

        // Focus areas are optional
        assert_eq!(form.step, 4);
        assert!(form.can_next());
    }

    #[test]
    fn steps_stay_within_bounds() {
        let mut form = at_step(1);
        assert!(!form.can_back());
        form.prev();
        assert_eq!(form.step, 1);

        let mut form = at_step(5);
        form.next();
        assert_eq!(form.step, 5);
        form.prev();
        assert_eq!(form.step, 4);
    }

    #[test]
    fn progress_bar_tracks_the_step() {
        let widths: Vec<f64> = (1..=5).map(|s| at_step(s).progress_percent()).collect();
        assert_eq!(widths, vec![0.0, 25.0, 50.0, 75.0, 100.0]);
    }

    #[test]
    fn changing_skill_drops_foreign_tags() {
        let mut form = at_step(4);
        form.toggle_tag("Pandas");
        form.toggle_tag("SQL");
        assert_eq!(form.tags, vec!["Pandas", "SQL"]);

        // Pandas is shared with the ML track, SQL is not
        form.set_skill("AI / Machine Learning");
        assert_eq!(form.tags, vec!["Pandas"]);

        form.set_skill("Underwater Basket Weaving");
        assert_eq!(form.skill, None);
        assert!(form.tags.is_empty());
        assert_eq!(form.available_tags(), &["General"]);
    }

    #[test]
    fn tags_toggle_and_ignore_unknown_values() {
        let mut form = at_step(4);
        form.toggle_tag("NumPy");
        form.toggle_tag("Kubernetes");
        assert_eq!(form.tags, vec!["NumPy"]);
        form.toggle_tag("NumPy");
        assert!(form.tags.is_empty());
    }

    #[test]
    fn submit_only_from_review_and_reset_clears_everything() {
        let mut form = at_step(4);
        form.apply(FormAction::Submit);
        assert!(!form.submitted);

        form.apply(FormAction::Next);
        form.apply(FormAction::Submit);
        assert!(form.submitted);

        form.apply(FormAction::Reset);
        assert_eq!(form, AssessmentForm::default());
    }

    #[test]
    fn summary_serializes_to_json() {
        let mut form = at_step(5);
        form.name = "  Jane Doe ".to_string();
        form.toggle_tag("SQL");
        let json = serde_json::to_value(form.summary()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Jane Doe",
                "skill": "Data Science",
                "experience": "Medium",
                "tags": ["SQL"],
            })
        );
    }

    #[test]
    fn every_skill_offers_six_focus_areas() {
        for skill in SKILL_OPTIONS {
            assert_eq!(tags_for_skill(Some(*skill)).len(), 6, "{skill}");
        }
        assert_eq!(tags_for_skill(None), GENERAL_TAGS);
    }
}
