use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{error, info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, AbortController, MouseEvent};
use yew::prelude::*;

use crate::config;
use crate::error::StorefrontError;
use crate::storefront::actions::{self, CopyFeedback, CopyFeedbackAction, ShareData};
use crate::storefront::directory;
use crate::storefront::enrich::{self, ProfileView, ProfileViewAction};
use crate::storefront::models::{partition_products, CreatorProfile, Product, SocialKind, Theme};
use crate::storefront::product_image::ProductImage;
use crate::storefront::slug::resolve_slug;

#[derive(Clone, PartialEq)]
enum PageState {
    Loading,
    Loaded(Rc<CreatorProfile>),
    Failed(StorefrontError),
}

fn current_slug() -> Option<String> {
    let location = window()?.location();
    let path = location.pathname().unwrap_or_default();
    let query = location.search().unwrap_or_default();
    resolve_slug(&path, &query)
}

/// Entry point for `/:slug`. Resolves the slug, loads the directory once
/// and renders either the storefront or a full-page error.
#[function_component(Storefront)]
pub fn storefront() -> Html {
    let state = use_state(|| PageState::Loading);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let controller = AbortController::new().ok();
                let signal = controller.as_ref().map(|c| c.signal());

                let slug = current_slug().or_else(|| {
                    config::dev_fallback_slug().map(|slug| {
                        info!("No slug found, using '{}' for dev testing", slug);
                        slug.to_string()
                    })
                });

                match slug {
                    None => state.set(PageState::Failed(StorefrontError::NoSlug)),
                    Some(slug) => {
                        spawn_local(async move {
                            let result = directory::load_creator(&slug, signal.as_ref()).await;
                            if signal.as_ref().map_or(false, |s| s.aborted()) {
                                return;
                            }
                            match result {
                                Ok(profile) => state.set(PageState::Loaded(Rc::new(profile))),
                                Err(e) => {
                                    error!("Storefront failed to load: {}", e);
                                    state.set(PageState::Failed(e));
                                }
                            }
                        });
                    }
                }

                move || {
                    if let Some(controller) = controller {
                        controller.abort();
                    }
                }
            },
            (),
        );
    }

    html! {
        <>
            <style>{STOREFRONT_CSS}</style>
            {
                match &*state {
                    PageState::Loading => html! { <LoadingState /> },
                    PageState::Failed(err) => html! { <ErrorState error={err.clone()} /> },
                    PageState::Loaded(profile) => html! { <StorefrontView profile={profile.clone()} /> },
                }
            }
        </>
    }
}

#[function_component(LoadingState)]
fn loading_state() -> Html {
    html! {
        <div class="sf-fullscreen">
            <div class="sf-loading">
                <div class="sf-spinner"></div>
                <span>{"Loading Storefront..."}</span>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ErrorStateProps {
    error: StorefrontError,
}

#[function_component(ErrorState)]
fn error_state(props: &ErrorStateProps) -> Html {
    let kind = error_kind(&props.error);
    html! {
        <div class={classes!("sf-fullscreen", "sf-error", kind)}>
            <div>
                <h1>{props.error.title()}</h1>
                <p>{props.error.to_string()}</p>
                <a href="/" class="sf-home-link">{"Return Home"}</a>
            </div>
        </div>
    }
}

pub fn error_kind(error: &StorefrontError) -> &'static str {
    if error.is_fetch_failure() {
        "fetch-failed"
    } else {
        "not-found"
    }
}

pub fn grid_class(promoted: usize) -> &'static str {
    if promoted == 1 {
        "sf-grid sf-grid-1"
    } else {
        "sf-grid sf-grid-2"
    }
}

/// With exactly three cards the last one sits centred on its own row.
pub fn card_is_centered(promoted: usize, index: usize) -> bool {
    promoted == 3 && index == 2
}

#[derive(Properties, PartialEq)]
pub struct StorefrontViewProps {
    pub profile: Rc<CreatorProfile>,
}

#[function_component(StorefrontView)]
pub fn storefront_view(props: &StorefrontViewProps) -> Html {
    let profile = props.profile.clone();
    let view = {
        let profile = profile.clone();
        use_reducer(move || ProfileView::from_profile(&profile))
    };
    let feedback = use_reducer(CopyFeedback::default);
    let copy_ticket = use_mut_ref(|| 0u32);
    let archive_open = use_state(|| false);

    // Optional header refresh from the creator's Instagram preview.
    {
        let view = view.clone();
        use_effect_with_deps(
            move |profile: &Rc<CreatorProfile>| {
                let controller = AbortController::new().ok();
                if profile.socials.get(enrich::ENRICH_FROM).is_some() {
                    let signal = controller.as_ref().map(|c| c.signal());
                    let profile = profile.clone();
                    spawn_local(async move {
                        let result = enrich::fetch_candidate(&profile, signal.as_ref()).await;
                        if signal.as_ref().map_or(false, |s| s.aborted()) {
                            return;
                        }
                        match result {
                            Ok(Some(candidate)) => view.dispatch(ProfileViewAction::Enrich(candidate)),
                            Ok(None) => {}
                            Err(e) => error!("Failed to fetch profile metadata: {}", e),
                        }
                    });
                }
                move || {
                    if let Some(controller) = controller {
                        controller.abort();
                    }
                }
            },
            profile.clone(),
        );
    }

    let (promoted, retired) = partition_products(&profile.products);

    let copy_link = {
        let view = view.clone();
        let feedback = feedback.clone();
        let copy_ticket = copy_ticket.clone();
        Callback::from(move |_: ()| {
            let url = actions::share_url(&view.name);
            let feedback = feedback.clone();
            let ticket = {
                let mut counter = copy_ticket.borrow_mut();
                *counter = counter.wrapping_add(1);
                *counter
            };
            spawn_local(async move {
                match actions::write_clipboard(&url).await {
                    Ok(()) => {
                        feedback.dispatch(CopyFeedbackAction::Copied(ticket));
                        Timeout::new(config::COPY_FEEDBACK_MS, move || {
                            feedback.dispatch(CopyFeedbackAction::Expired(ticket));
                        })
                        .forget();
                    }
                    Err(e) => warn!("Clipboard write failed: {:?}", e),
                }
            });
        })
    };

    let on_copy = {
        let copy_link = copy_link.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            copy_link.emit(());
        })
    };

    let on_share = {
        let copy_link = copy_link.clone();
        let name = profile.name.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if !actions::can_share() {
                copy_link.emit(());
                return;
            }
            let href = window()
                .and_then(|w| w.location().href().ok())
                .unwrap_or_default();
            let data = ShareData::for_creator(&name, &href);
            spawn_local(async move {
                if let Err(e) = actions::native_share(&data).await {
                    error!("Error sharing: {:?}", e);
                }
            });
        })
    };

    let toggle_archive = {
        let archive_open = archive_open.clone();
        Callback::from(move |_: MouseEvent| archive_open.set(!*archive_open))
    };

    let on_avatar_error = {
        let view = view.clone();
        Callback::from(move |url: String| view.dispatch(ProfileViewAction::AvatarFailed(url)))
    };

    let theme_class = match profile.theme {
        Theme::Dark => "sf-page theme-dark",
        Theme::Light => "sf-page theme-light",
    };

    html! {
        <div class={theme_class}>
            <nav class="sf-nav">
                <a href={config::SHARE_BASE_URL} class="sf-logo">{"SL"}<span class="accent">{"/"}</span>{"CE"}</a>
                <div class="sf-nav-actions">
                    <button
                        class={classes!("sf-copy", feedback.visible.then(|| "copied"))}
                        onclick={on_copy}
                    >
                        if feedback.visible {
                            <span>{"Copied!"}</span>
                        } else {
                            <span class="sf-copy-label">{"Copy Link"}</span>
                        }
                    </button>
                    <button class="sf-share" onclick={on_share} aria-label="Share">{"⇪"}</button>
                </div>
            </nav>

            <main class="sf-main">
                <ProfileHeader
                    view={(*view).clone()}
                    handle={profile.handle.clone()}
                    tiktok={profile.socials.get(SocialKind::TikTok).map(str::to_string)}
                    instagram={profile.socials.get(SocialKind::Instagram).map(str::to_string)}
                    youtube={profile.socials.get(SocialKind::YouTube).map(str::to_string)}
                    on_avatar_error={on_avatar_error}
                />

                <section class="sf-live">
                    <div class={grid_class(promoted.len())}>
                        { for promoted.iter().enumerate().map(|(index, product)| html! {
                            <PromotedCard
                                key={product.id.clone()}
                                product={product.clone()}
                                centered={card_is_centered(promoted.len(), index)}
                            />
                        }) }
                    </div>
                </section>

                if !retired.is_empty() {
                    <section class="sf-archive">
                        <button class="sf-archive-toggle" onclick={toggle_archive}>
                            <h2>{"Past Favorites"}</h2>
                            <span class={classes!("sf-arrow", (*archive_open).then(|| "open"))}>{"→"}</span>
                        </button>
                        <div class={classes!("sf-archive-body", (*archive_open).then(|| "open"))}>
                            <div class="sf-archive-grid">
                                { for retired.iter().map(|product| html! {
                                    <a
                                        key={product.id.clone()}
                                        href={product.product_url.clone()}
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="sf-archive-item"
                                    >
                                        <ProductImage
                                            src={product.image.clone()}
                                            product_url={product.product_url.clone()}
                                            alt={product.product_name.clone()}
                                            class={classes!("sf-archive-img")}
                                        />
                                    </a>
                                }) }
                            </div>
                            <p class="sf-archive-note">{"Archive loaded from Slice99 Vault"}</p>
                        </div>
                    </section>
                }
            </main>

            <footer class="sf-footer">
                <span>{"Powered by "}<a href={config::SHARE_BASE_URL}>{"Slice99"}</a></span>
            </footer>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ProfileHeaderProps {
    view: ProfileView,
    handle: String,
    tiktok: Option<String>,
    instagram: Option<String>,
    youtube: Option<String>,
    on_avatar_error: Callback<String>,
}

#[function_component(ProfileHeader)]
fn profile_header(props: &ProfileHeaderProps) -> Html {
    let avatar = match &props.view.avatar {
        Some(url) => {
            let onerror = {
                let on_avatar_error = props.on_avatar_error.clone();
                let url = url.clone();
                Callback::from(move |_: Event| on_avatar_error.emit(url.clone()))
            };
            html! { <img src={url.clone()} alt={props.view.name.clone()} class="sf-avatar-img" onerror={onerror} /> }
        }
        None => html! {
            <div class="sf-avatar-initials"><span>{props.view.initials()}</span></div>
        },
    };

    html! {
        <header class="sf-header">
            <div class="sf-avatar">
                <div class="sf-avatar-ring">{avatar}</div>
                <div class="sf-badge">{"Featured Creator"}</div>
            </div>
            <h1>{&props.view.name}</h1>
            <a href={props.tiktok.clone().unwrap_or_default()} target="_blank" rel="noopener noreferrer" class="sf-handle">
                {&props.handle}
            </a>
            if let Some(bio) = props.view.bio.as_deref().filter(|b| !b.trim().is_empty()) {
                <p class="sf-bio">{bio}</p>
            } else {
                <p class="sf-bio">
                    {"Shop the products featured in my latest video. I’ve partnered with "}
                    <a href={config::SHARE_BASE_URL} target="_blank" rel="noopener noreferrer">{"Slice99"}</a>
                    {" to make it easy for you to find and support these brands directly."}
                </p>
            }
            if props.instagram.is_some() || props.youtube.is_some() {
                <div class="sf-socials">
                    if let Some(instagram) = &props.instagram {
                        <a href={instagram.clone()} target="_blank" rel="noopener noreferrer">{"Instagram"}</a>
                    }
                    if let Some(youtube) = &props.youtube {
                        <a href={youtube.clone()} target="_blank" rel="noopener noreferrer">{"YouTube"}</a>
                    }
                </div>
            }
        </header>
    }
}

#[derive(Properties, PartialEq)]
struct PromotedCardProps {
    product: Product,
    centered: bool,
}

#[function_component(PromotedCard)]
fn promoted_card(props: &PromotedCardProps) -> Html {
    let product = &props.product;
    html! {
        <article class={classes!("sf-card", props.centered.then(|| "centered"))}>
            <div class="sf-card-image">
                <ProductImage
                    src={product.image.clone()}
                    product_url={product.product_url.clone()}
                    alt={product.product_name.clone()}
                    class={classes!("sf-card-img")}
                    eager={true}
                />
                <div class="sf-card-gradient"></div>
                if !product.price.trim().is_empty() {
                    <div class="sf-price">{&product.price}</div>
                }
            </div>
            <div class="sf-card-content">
                <p class="sf-brand">{&product.brand_name}</p>
                <h3>{&product.product_name}</h3>
                <a href={product.product_url.clone()} target="_blank" rel="noopener noreferrer" class="sf-shop">
                    {"Shop Now"}
                </a>
            </div>
        </article>
    }
}

const STOREFRONT_CSS: &str = r#"
.sf-page { min-height: 100vh; font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif; }
.sf-page.theme-light { background: #fafaf9; color: #18181b; }
.sf-page.theme-dark { background: #18181b; color: #fff; }
.sf-fullscreen { display: flex; min-height: 100vh; width: 100%; align-items: center; justify-content: center; background: #fafaf9; color: #71717a; padding: 1rem; text-align: center; }
.sf-loading { display: flex; flex-direction: column; align-items: center; gap: 0.5rem; font-size: 0.75rem; text-transform: uppercase; letter-spacing: 0.2em; }
.sf-spinner { width: 2rem; height: 2rem; border-radius: 50%; border: 2px solid #d4d4d8; border-top-color: #52525b; animation: sf-spin 1s linear infinite; }
@keyframes sf-spin { to { transform: rotate(360deg); } }
.sf-error h1 { font-size: 1.25rem; font-weight: 700; margin-bottom: 0.5rem; }
.sf-error p { max-width: 20rem; margin: 0 auto; }
.sf-home-link { display: inline-block; margin-top: 1rem; font-size: 0.875rem; font-weight: 700; color: #ea580c; }
.sf-nav { position: fixed; top: 0; left: 0; right: 0; z-index: 50; height: 4rem; padding: 0 1rem; display: flex; align-items: center; justify-content: space-between; backdrop-filter: blur(12px); border-bottom: 1px solid rgba(255,255,255,0.1); }
.sf-logo { font-size: 1.25rem; font-weight: 900; letter-spacing: -0.05em; text-transform: uppercase; color: inherit; text-decoration: none; }
.accent { color: #ea580c; }
.sf-nav-actions { display: flex; gap: 0.5rem; align-items: center; }
.sf-copy { padding: 0.375rem 0.75rem; border-radius: 999px; border: none; font-size: 0.75rem; font-weight: 700; text-transform: uppercase; background: rgba(0,0,0,0.05); color: inherit; cursor: pointer; }
.theme-dark .sf-copy { background: rgba(255,255,255,0.1); }
.sf-copy.copied { background: #22c55e; color: #fff; }
.sf-share { padding: 0.5rem; border: none; border-radius: 999px; background: transparent; color: inherit; cursor: pointer; font-size: 1.1rem; }
.sf-main { max-width: 480px; margin: 0 auto; padding: 5rem 1rem 0; }
.sf-header { display: flex; flex-direction: column; align-items: center; text-align: center; margin-bottom: 4rem; }
.sf-avatar { position: relative; margin-bottom: 1rem; }
.sf-avatar-ring { width: 6rem; height: 6rem; border-radius: 50%; padding: 0.25rem; background: linear-gradient(45deg, #f97316, #ec4899); display: flex; align-items: center; justify-content: center; }
.sf-avatar-img { width: 100%; height: 100%; border-radius: 50%; object-fit: cover; border: 2px solid #fff; }
.sf-avatar-initials { width: 100%; height: 100%; border-radius: 50%; background: #27272a; border: 2px solid #fff; display: flex; align-items: center; justify-content: center; color: #fff; font-size: 1.5rem; font-weight: 700; letter-spacing: 0.1em; }
.sf-badge { position: absolute; bottom: -0.5rem; left: 50%; transform: translateX(-50%); background: #000; color: #fff; font-size: 10px; font-weight: 700; padding: 0.125rem 0.5rem; border-radius: 999px; text-transform: uppercase; white-space: nowrap; }
.sf-header h1 { font-size: 1.5rem; font-weight: 700; margin-bottom: 0.25rem; }
.sf-handle { font-size: 0.875rem; color: #71717a; margin-bottom: 0.75rem; text-decoration: none; }
.sf-bio { font-size: 0.875rem; color: #52525b; max-width: 20rem; line-height: 1.6; }
.sf-bio a { font-weight: 700; color: #27272a; }
.sf-socials { display: flex; gap: 1rem; margin-top: 1rem; }
.sf-socials a { color: #a1a1aa; font-size: 0.875rem; }
.sf-live { margin-bottom: 2.5rem; }
.sf-grid { display: grid; gap: 1rem; }
.sf-grid-1 { grid-template-columns: 1fr; }
.sf-grid-2 { grid-template-columns: 1fr 1fr; }
.sf-card { position: relative; overflow: hidden; border-radius: 1rem; border: 1px solid rgba(255,255,255,0.4); background: rgba(255,255,255,0.6); }
.sf-card.centered { grid-column: span 2; justify-self: center; width: calc(50% - 0.5rem); }
.sf-card-image { aspect-ratio: 4 / 5; background: #f4f4f5; overflow: hidden; position: relative; }
.sf-card-img, .sf-archive-img { width: 100%; height: 100%; object-fit: cover; }
.sf-card-gradient { position: absolute; inset: auto 0 0 0; height: 50%; background: linear-gradient(to top, rgba(0,0,0,0.6), transparent); }
.sf-price { position: absolute; top: 0.75rem; right: 0.75rem; background: rgba(255,255,255,0.3); backdrop-filter: blur(24px); color: #18181b; font-size: 0.75rem; font-weight: 700; padding: 0.25rem 0.5rem; border-radius: 2px; }
.sf-card-content { position: absolute; bottom: 0; left: 0; right: 0; padding: 1rem; color: #fff; }
.sf-brand { font-size: 10px; font-weight: 700; text-transform: uppercase; opacity: 0.8; margin-bottom: 0.25rem; }
.sf-card-content h3 { font-size: 1rem; font-weight: 700; margin-bottom: 0.75rem; }
.sf-shop { display: flex; align-items: center; justify-content: center; min-height: 48px; background: #ea580c; color: #fff; font-weight: 700; font-size: 0.875rem; border-radius: 0.75rem; text-decoration: none; }
.product-placeholder { width: 100%; height: 100%; display: flex; align-items: center; justify-content: center; background: #f4f4f5; color: #d4d4d8; }
.placeholder-mark { font-weight: 900; font-size: 0.75rem; text-transform: uppercase; opacity: 0.5; user-select: none; }
.placeholder-mark .accent { color: #fb923c; }
.sf-archive { border-top: 1px solid rgba(228,228,231,0.5); padding-top: 1.5rem; }
.sf-archive-toggle { width: 100%; display: flex; align-items: center; justify-content: space-between; padding: 0.5rem 0; background: none; border: none; cursor: pointer; color: #71717a; }
.sf-archive-toggle h2 { font-size: 1.125rem; font-weight: 700; margin: 0; }
.sf-arrow { transition: transform 0.3s; }
.sf-arrow.open { transform: rotate(90deg); }
.sf-archive-body { display: grid; grid-template-rows: 0fr; opacity: 0; overflow: hidden; transition: all 0.5s ease-in-out; }
.sf-archive-body > * { min-height: 0; }
.sf-archive-body.open { grid-template-rows: 1fr; opacity: 1; margin-top: 1.5rem; }
.sf-archive-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 0.75rem; }
.sf-archive-item { display: block; position: relative; aspect-ratio: 1; background: #f4f4f5; border-radius: 0.5rem; overflow: hidden; }
.sf-archive-note { text-align: center; font-size: 0.75rem; color: #a1a1aa; margin-top: 1.5rem; }
.sf-footer { padding: 2rem 0; margin-top: 1.5rem; display: flex; justify-content: center; border-top: 1px solid #f4f4f5; font-size: 10px; font-family: monospace; letter-spacing: 0.2em; text-transform: uppercase; color: #9ca3af; }
.sf-footer a { color: inherit; }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_page_kind_follows_the_failure() {
        assert_eq!(error_kind(&StorefrontError::Status(500)), "fetch-failed");
        assert_eq!(error_kind(&StorefrontError::Network("offline".into())), "fetch-failed");
        assert_eq!(error_kind(&StorefrontError::Decode("eof".into())), "fetch-failed");
        assert_eq!(error_kind(&StorefrontError::NotFound("zed".into())), "not-found");
        assert_eq!(error_kind(&StorefrontError::NoSlug), "not-found");
    }

    #[test]
    fn single_product_uses_one_column() {
        assert_eq!(grid_class(1), "sf-grid sf-grid-1");
        assert_eq!(grid_class(0), "sf-grid sf-grid-2");
        assert_eq!(grid_class(4), "sf-grid sf-grid-2");
    }

    #[test]
    fn only_third_of_three_is_centered() {
        assert!(card_is_centered(3, 2));
        assert!(!card_is_centered(3, 1));
        assert!(!card_is_centered(4, 2));
    }
}
