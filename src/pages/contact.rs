use yew::prelude::*;
use yew_hooks::use_title;

use crate::config::{BRAND_NAME, SUPPORT_EMAIL};

#[function_component(Contact)]
pub fn contact() -> Html {
    use_title(format!("Contact – {}", BRAND_NAME));

    html! {
        <div class="contact-page">
            <style>
                {r#"
                .contact-page {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 5rem 1.5rem;
                }
                .contact-page h1 {
                    font-size: 2rem;
                }
                .contact-page p {
                    color: var(--muted-foreground);
                }
                .contact-email {
                    display: inline-block;
                    margin-top: 1.5rem;
                    color: #38bdf8;
                    font-weight: 600;
                }
                "#}
            </style>
            <h1>{"Contact"}</h1>
            <p>
                { format!("Get in touch with {}. Questions about roadmaps, the assessment or partnerships are all welcome.", BRAND_NAME) }
            </p>
            <a class="contact-email" href={format!("mailto:{}", SUPPORT_EMAIL)}>{ SUPPORT_EMAIL }</a>
        </div>
    }
}
