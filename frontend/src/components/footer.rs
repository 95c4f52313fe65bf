use chrono::{Datelike, Local};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;

pub fn copyright(year: i32) -> String {
    format!("© {} Co-Create Inc.", year)
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub on_terms: Callback<()>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let open_terms = {
        let on_terms = props.on_terms.clone();
        Callback::from(move |_: MouseEvent| on_terms.emit(()))
    };

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div class="footer-brand">
                    <span class="footer-logo">{"co-create"}</span>
                    <span class="footer-tagline">{"Share the creator. Split the cost."}</span>
                </div>
                <div class="footer-columns">
                    <div class="footer-column">
                        <span class="footer-heading">{"Social"}</span>
                        <a href={config::INSTAGRAM_URL} target="_blank" rel="noopener noreferrer">{"Instagram"}</a>
                    </div>
                    <div class="footer-column">
                        <span class="footer-heading">{"Contact"}</span>
                        <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a>
                    </div>
                    <div class="footer-column">
                        <span class="footer-heading">{"Legal"}</span>
                        <button class="footer-link" onclick={open_terms}>{"Terms of Service"}</button>
                    </div>
                </div>
            </div>
            <div class="footer-bottom">
                <span>{"Made in Canada"}</span>
                <span>{copyright(Local::now().year())}</span>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_names_the_year() {
        assert_eq!(copyright(2026), "© 2026 Co-Create Inc.");
    }
}
