use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod app_state;
mod config;
mod error;
mod styles;
mod api {
    pub mod formspree;
    pub mod gemini;
}
mod components {
    pub mod apply_modal;
    pub mod carousel;
    pub mod chatbot;
    pub mod checkout;
    pub mod faq;
    pub mod footer;
    pub mod live_drop;
    pub mod navbar;
    pub mod terms_modal;
    pub mod typewriter;
}
mod pages {
    pub mod brand_landing;
    pub mod creator_landing;
}
mod storefront {
    pub mod actions;
    pub mod directory;
    pub mod enrich;
    pub mod metadata;
    pub mod models;
    pub mod page;
    pub mod product_image;
    pub mod slug;
}

use app_state::{AppAction, AppState};
use components::{
    apply_modal::ApplyModal,
    chatbot::ChatBot,
    footer::Footer,
    navbar::{Navbar, Page},
    terms_modal::TermsModal,
};
use pages::{brand_landing::BrandLanding, creator_landing::CreatorLanding};
use storefront::page::Storefront;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/creators")]
    Creators,
    #[at("/creators/storefront.html")]
    StorefrontPreview,
    #[at("/:slug")]
    Storefront { slug: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Marketing routes get the shared chrome; everything else is a storefront.
    fn page(&self) -> Option<Page> {
        match self {
            Route::Home => Some(Page::Brand),
            Route::Creators => Some(Page::Creator),
            _ => None,
        }
    }
}

fn switch(route: Route, on_apply: Callback<()>) -> Html {
    match route {
        Route::Home => {
            info!("Rendering Brand page");
            html! { <BrandLanding /> }
        }
        Route::Creators => {
            info!("Rendering Creator page");
            html! { <CreatorLanding on_apply={on_apply} /> }
        }
        Route::StorefrontPreview => {
            info!("Rendering Storefront preview");
            html! { <Storefront /> }
        }
        Route::Storefront { slug } => {
            info!("Rendering Storefront page for /{}", slug);
            html! { <Storefront /> }
        }
        // Nested paths such as /ada/index.html still resolve to a creator.
        Route::NotFound => {
            info!("Rendering Storefront page for unmatched path");
            html! { <Storefront /> }
        }
    }
}

#[function_component(Shell)]
fn shell() -> Html {
    let route = use_route::<Route>().unwrap_or(Route::NotFound);
    let state = use_reducer(AppState::default);
    let page = route.page();

    {
        let state = state.dispatcher();
        use_effect_with_deps(
            move |_| {
                state.dispatch(AppAction::PageChanged);
                || ()
            },
            page,
        );
    }

    let on_apply = {
        let state = state.dispatcher();
        Callback::from(move |_: ()| state.dispatch(AppAction::OpenApply))
    };
    let close_apply = {
        let state = state.dispatcher();
        Callback::from(move |_: ()| state.dispatch(AppAction::CloseApply))
    };
    let open_terms = {
        let state = state.dispatcher();
        Callback::from(move |_: ()| state.dispatch(AppAction::OpenTerms))
    };
    let close_terms = {
        let state = state.dispatcher();
        Callback::from(move |_: ()| state.dispatch(AppAction::CloseTerms))
    };
    let toggle_chat = {
        let state = state.dispatcher();
        Callback::from(move |_: ()| state.dispatch(AppAction::ToggleChat))
    };

    let render = {
        let on_apply = on_apply.clone();
        Callback::from(move |route: Route| switch(route, on_apply.clone()))
    };

    let Some(page) = page else {
        return html! { <Switch<Route> render={render} /> };
    };

    html! {
        <div class={classes!("site", (page == Page::Creator).then(|| "creator"))}>
            <style>{styles::SITE_CSS}</style>
            <Navbar page={page} on_apply={on_apply} />
            <main class="site-main">
                <Switch<Route> render={render} />
            </main>
            <Footer on_terms={open_terms} />
            <TermsModal open={state.terms_open} on_close={close_terms} />
            <ApplyModal open={state.apply_open} on_close={close_apply} />
            <ChatBot open={state.chat_open} on_toggle={toggle_chat} />
        </div>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Shell />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { Level::Debug } else { Level::Info };
    console_log::init_with_level(level).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
