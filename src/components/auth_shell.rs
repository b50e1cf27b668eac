use yew::prelude::*;

use super::header::BrandMark;

#[derive(Properties, PartialEq)]
pub struct AuthShellProps {
    pub title: AttrValue,
    pub children: Children,
    #[prop_or_default]
    pub footer: Html,
}

/// Centered card shared by the sign-in and sign-up screens.
#[function_component(AuthShell)]
pub fn auth_shell(props: &AuthShellProps) -> Html {
    html! {
        <div class="auth-shell">
            <style>
                {r#"
                .auth-shell {
                    min-height: calc(100vh - 4rem);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 3rem 1rem;
                }
                .auth-card {
                    width: 100%;
                    max-width: 28rem;
                    padding: 2rem;
                    border-radius: 16px;
                    background: var(--card);
                    border: 1px solid rgba(148, 163, 184, 0.3);
                    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.15);
                }
                .auth-card .brand-mark {
                    display: block;
                    margin: 0 auto;
                    width: 40px;
                    height: 24px;
                    color: #0ea5e9;
                }
                .auth-card h1 {
                    text-align: center;
                    font-size: 1.5rem;
                    margin: 1rem 0 1.5rem;
                }
                .auth-card label {
                    display: block;
                    font-size: 0.85rem;
                    margin-bottom: 0.35rem;
                }
                .auth-card input {
                    width: 100%;
                    box-sizing: border-box;
                    padding: 0.6rem 0.75rem;
                    margin-bottom: 1rem;
                    border-radius: 8px;
                    border: 1px solid rgba(148, 163, 184, 0.5);
                    background: transparent;
                    color: var(--foreground);
                }
                .auth-card button[type="submit"] {
                    width: 100%;
                    padding: 0.7rem;
                    border: none;
                    border-radius: 8px;
                    color: white;
                    font-weight: 600;
                    cursor: pointer;
                    background: linear-gradient(90deg, #0ea5e9, #06b6d4);
                }
                .auth-notice {
                    margin-top: 1rem;
                    padding: 0.75rem;
                    border-radius: 8px;
                    font-size: 0.9rem;
                    background: rgba(56, 189, 248, 0.1);
                    color: #0ea5e9;
                }
                .auth-separator {
                    border: none;
                    border-top: 1px solid rgba(148, 163, 184, 0.3);
                    margin: 1.5rem 0;
                }
                .auth-footer {
                    text-align: center;
                    font-size: 0.9rem;
                    color: var(--muted-foreground);
                }
                "#}
            </style>
            <div class="auth-card">
                <BrandMark />
                <h1>{ props.title.clone() }</h1>
                { for props.children.iter() }
                <hr class="auth-separator" />
                <div class="auth-footer">{ props.footer.clone() }</div>
            </div>
        </div>
    }
}
