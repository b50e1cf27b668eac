use gloo_console::log;
use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_hooks::use_title;
use yew_router::prelude::*;

use crate::components::auth_shell::AuthShell;
use crate::config::BRAND_NAME;
use crate::Route;

const NOTICE_MILLIS: u32 = 4_000;

pub const ACCOUNTS_UNAVAILABLE: &str =
    "Accounts aren't available yet. Take the free career assessment in the meantime!";

/// Shows the "not available yet" notice for a few seconds after a submit.
#[hook]
fn use_auth_notice(form: &'static str) -> (bool, Callback<SubmitEvent>) {
    let visible = use_state_eq(|| false);
    let timer = use_mut_ref(|| None::<Timeout>);

    let onsubmit = {
        let visible = visible.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            log!(format!("{} submitted while accounts are disabled", form));
            visible.set(true);

            let hide = {
                let visible = visible.clone();
                Timeout::new(NOTICE_MILLIS, move || visible.set(false))
            };
            // Replacing the handle cancels any pending hide
            *timer.borrow_mut() = Some(hide);
        })
    };

    (*visible, onsubmit)
}

fn text_input(id: &'static str, label: &'static str, kind: &'static str, value: &UseStateHandle<String>) -> Html {
    let oninput = {
        let value = value.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            value.set(input.value());
        })
    };

    html! {
        <>
            <label for={id}>{ label }</label>
            <input id={id} type={kind} required={true} value={(**value).clone()} oninput={oninput} />
        </>
    }
}

#[function_component(SignIn)]
pub fn sign_in() -> Html {
    use_title(format!("Sign In – {}", BRAND_NAME));
    let email = use_state(String::new);
    let password = use_state(String::new);
    let (notice, onsubmit) = use_auth_notice("sign-in");

    let footer = html! {
        <>
            {"New here? "}
            <Link<Route> to={Route::SignUp}>{"Create an account"}</Link<Route>>
        </>
    };

    html! {
        <AuthShell title="Welcome back" footer={footer}>
            <form onsubmit={onsubmit}>
                { text_input("signin-email", "Email", "email", &email) }
                { text_input("signin-password", "Password", "password", &password) }
                <button type="submit">{"Sign In"}</button>
            </form>
            if notice {
                <div class="auth-notice" role="status">{ ACCOUNTS_UNAVAILABLE }</div>
            }
        </AuthShell>
    }
}

#[function_component(SignUp)]
pub fn sign_up() -> Html {
    use_title(format!("Sign Up – {}", BRAND_NAME));
    let name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let (notice, onsubmit) = use_auth_notice("sign-up");

    let footer = html! {
        <>
            {"Already have an account? "}
            <Link<Route> to={Route::SignIn}>{"Sign in"}</Link<Route>>
        </>
    };

    html! {
        <AuthShell title="Create your account" footer={footer}>
            <form onsubmit={onsubmit}>
                { text_input("signup-name", "Name", "text", &name) }
                { text_input("signup-email", "Email", "email", &email) }
                { text_input("signup-password", "Password", "password", &password) }
                <button type="submit">{"Sign Up"}</button>
            </form>
            if notice {
                <div class="auth-notice" role="status">{ ACCOUNTS_UNAVAILABLE }</div>
            }
        </AuthShell>
    }
}
