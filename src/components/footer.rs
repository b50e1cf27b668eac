use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use super::header::BrandMark;
use crate::config::BRAND_NAME;
use crate::Route;

pub fn copyright_line(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, BRAND_NAME)
}

#[function_component(SiteFooter)]
pub fn site_footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                .site-footer {
                    background: #0b1020;
                    color: rgba(255, 255, 255, 0.9);
                    border-top: 1px solid rgba(148, 163, 184, 0.2);
                }
                .footer-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 3rem 1.5rem;
                }
                .footer-brand {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-weight: 800;
                    font-size: 1.25rem;
                    color: #38bdf8;
                }
                .footer-blurb {
                    margin-top: 0.75rem;
                    max-width: 36rem;
                    font-size: 0.9rem;
                    color: rgba(255, 255, 255, 0.7);
                }
                .footer-columns {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
                    gap: 2rem;
                    margin-top: 2.5rem;
                }
                .footer-columns h4 {
                    margin: 0 0 0.75rem;
                    font-size: 1rem;
                }
                .footer-columns ul {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                }
                .footer-columns li {
                    margin-bottom: 0.5rem;
                }
                .footer-columns a {
                    color: rgba(255, 255, 255, 0.7);
                    text-decoration: none;
                    font-size: 0.9rem;
                }
                .footer-columns a:hover {
                    color: white;
                }
                .footer-bottom {
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    padding: 1rem 1.5rem;
                    max-width: 1200px;
                    margin: 0 auto;
                    font-size: 0.75rem;
                    color: rgba(255, 255, 255, 0.6);
                }
                "#}
            </style>
            <div class="footer-content">
                <div class="footer-brand">
                    <BrandMark />
                    { BRAND_NAME }
                </div>
                <p class="footer-blurb">
                    {"Elevating careers through AI-powered skill development and personalized guidance."}
                </p>
                <div class="footer-columns">
                    <div>
                        <h4>{"Learning"}</h4>
                        <ul>
                            <li><Link<Route> to={Route::Roadmaps}>{"Skill Roadmaps"}</Link<Route>></li>
                            <li><Link<Route> to={Route::Assessment}>{"Career Assessment"}</Link<Route>></li>
                        </ul>
                    </div>
                    <div>
                        <h4>{"Community"}</h4>
                        <ul>
                            <li><Link<Route> to={Route::Community}>{"Study Groups"}</Link<Route>></li>
                            <li><Link<Route> to={Route::Community}>{"Mentorship"}</Link<Route>></li>
                        </ul>
                    </div>
                    <div>
                        <h4>{"Support"}</h4>
                        <ul>
                            <li><Link<Route> to={Route::Contact}>{"Contact Us"}</Link<Route>></li>
                            <li><a href="#">{"Help Center"}</a></li>
                            <li><a href="#">{"FAQ"}</a></li>
                        </ul>
                    </div>
                    <div>
                        <h4>{"Company"}</h4>
                        <ul>
                            <li><a href="#">{"About Us"}</a></li>
                            <li><a href="#">{"Careers"}</a></li>
                            <li><a href="#">{"Privacy Policy"}</a></li>
                            <li><a href="#">{"Terms of Service"}</a></li>
                        </ul>
                    </div>
                </div>
            </div>
            <div class="footer-bottom">
                { copyright_line(year) }
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_names_the_year_and_brand() {
        assert_eq!(copyright_line(2025), "© 2025 Ascendify. All rights reserved.");
    }
}
