use web_sys::{window, MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::checkout::use_checkout;
use crate::config;
use crate::Route;

/// Which marketing audience the page addresses.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Page {
    Brand,
    Creator,
}

const HEADER_OFFSET: f64 = 80.0;

fn scroll_to(top: f64) {
    if let Some(window) = window() {
        let mut options = ScrollToOptions::new();
        options.top(top).behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Smooth-scrolls so the section lands just below the fixed navbar.
pub fn scroll_to_section(id: &str) {
    let Some(window) = window() else { return };
    let Some(element) = window.document().and_then(|d| d.get_element_by_id(id)) else {
        return;
    };
    let top = element.get_bounding_client_rect().top();
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    scroll_to(top + scroll_y - HEADER_OFFSET);
}

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub page: Page,
    pub on_apply: Callback<()>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let navigator = use_navigator();
    let (loading, checkout) = use_checkout(config::CHECKOUT_DELAY_MS);
    let is_creator = props.page == Page::Creator;

    let go_to = |route: Route| {
        let navigator = navigator.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if let Some(navigator) = &navigator {
                navigator.push(&route);
            }
            scroll_to(0.0);
        })
    };

    let section_link = |id: &'static str| {
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_section(id);
        })
    };

    let on_logo = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to(0.0);
    });

    let on_action = {
        let on_apply = props.on_apply.clone();
        Callback::from(move |e: MouseEvent| {
            if is_creator {
                e.prevent_default();
                on_apply.emit(());
            } else {
                checkout.emit(e);
            }
        })
    };

    html! {
        <nav class={classes!("top-nav", is_creator.then(|| "creator"))}>
            <div class="nav-content">
                <a href="#" onclick={on_logo} class="nav-logo" aria-label="Slice Home">
                    <span class="logo-text">{"SL"}<span class="accent">{"/"}</span>{"CE"}</span>
                    if is_creator {
                        <span class="creator-tag">{"Creator"}</span>
                    }
                </a>

                <div class="nav-links">
                    if is_creator {
                        <button class="nav-link" onclick={go_to(Route::Home)}>{"For Brands"}</button>
                    } else {
                        <a href="#how-it-works" class="nav-link" onclick={section_link("how-it-works")}>{"How it Works"}</a>
                        <a href="#faq" class="nav-link" onclick={section_link("faq")}>{"FAQ"}</a>
                    }
                </div>

                <div class="nav-right">
                    if is_creator {
                        <button class="nav-switch" onclick={go_to(Route::Home)}>{"← Back to Brands"}</button>
                    } else {
                        <button class="nav-switch" onclick={go_to(Route::Creators)}>{"Are you a creator? →"}</button>
                    }
                    <button class="nav-cta" onclick={on_action} disabled={loading}>
                        if loading {
                            <span class="spinner"></span>
                        } else if is_creator {
                            {"Join Slice"}
                        } else {
                            {"Book Slot"}
                        }
                    </button>
                </div>
            </div>
        </nav>
    }
}
