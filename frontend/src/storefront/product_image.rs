use log::{debug, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::AbortController;
use yew::prelude::*;

use crate::error::LookupError;
use crate::storefront::metadata;

#[derive(Clone, Debug, PartialEq)]
pub enum ImageSource {
    Direct(String),
    Lookup(String),
    Placeholder,
}

/// Direct image first, then a preview lookup of the product page.
pub fn initial_source(image: Option<&str>, product_url: &str) -> ImageSource {
    if let Some(image) = image.filter(|i| !i.trim().is_empty()) {
        return ImageSource::Direct(image.to_string());
    }
    if !product_url.trim().is_empty() {
        return ImageSource::Lookup(product_url.to_string());
    }
    ImageSource::Placeholder
}

#[derive(Clone, Debug, PartialEq)]
pub enum ImageState {
    Resolving,
    Showing(String),
    Placeholder,
}

impl ImageState {
    pub fn from_source(source: &ImageSource) -> Self {
        match source {
            ImageSource::Direct(url) => ImageState::Showing(url.clone()),
            ImageSource::Lookup(_) => ImageState::Resolving,
            ImageSource::Placeholder => ImageState::Placeholder,
        }
    }

    pub fn from_lookup(result: Result<Option<String>, LookupError>) -> Self {
        match result {
            Ok(Some(url)) => ImageState::Showing(url),
            Ok(None) => ImageState::Placeholder,
            Err(e) => {
                warn!("Product image lookup failed: {}", e);
                ImageState::Placeholder
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ProductImageProps {
    #[prop_or_default]
    pub src: Option<String>,
    pub product_url: String,
    pub alt: String,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub eager: bool,
}

#[function_component(PlaceholderMark)]
pub fn placeholder_mark() -> Html {
    html! {
        <div class="product-placeholder">
            <span class="placeholder-mark">{"SL"}<span class="accent">{"/"}</span>{"CE"}</span>
        </div>
    }
}

#[function_component(ProductImage)]
pub fn product_image(props: &ProductImageProps) -> Html {
    let state = use_state(|| ImageState::from_source(&initial_source(props.src.as_deref(), &props.product_url)));

    {
        let state = state.clone();
        use_effect_with_deps(
            move |(src, product_url)| {
                let source = initial_source(src.as_deref(), product_url);
                state.set(ImageState::from_source(&source));

                let controller = AbortController::new().ok();
                if let ImageSource::Lookup(target) = source {
                    let signal = controller.as_ref().map(|c| c.signal());
                    spawn_local(async move {
                        let result = metadata::lookup_image(&target, signal.as_ref()).await;
                        if signal.as_ref().map_or(false, |s| s.aborted()) {
                            debug!("Image lookup for {} dropped after teardown", target);
                            return;
                        }
                        state.set(ImageState::from_lookup(result));
                    });
                }

                move || {
                    if let Some(controller) = controller {
                        controller.abort();
                    }
                }
            },
            (props.src.clone(), props.product_url.clone()),
        );
    }

    match &*state {
        ImageState::Showing(url) => {
            let onerror = {
                let state = state.clone();
                let url = url.clone();
                Callback::from(move |_: Event| {
                    warn!("Product image failed to load: {}", url);
                    state.set(ImageState::Placeholder);
                })
            };
            html! {
                <img
                    src={url.clone()}
                    alt={props.alt.clone()}
                    class={props.class.clone()}
                    loading={if props.eager { "eager" } else { "lazy" }}
                    onerror={onerror}
                />
            }
        }
        ImageState::Resolving | ImageState::Placeholder => html! { <PlaceholderMark /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_image_wins() {
        assert_eq!(
            initial_source(Some("https://img.example/a.jpg"), "https://shop.example/a"),
            ImageSource::Direct("https://img.example/a.jpg".to_string())
        );
    }

    #[test]
    fn missing_image_triggers_lookup() {
        assert_eq!(
            initial_source(None, "https://shop.example/a"),
            ImageSource::Lookup("https://shop.example/a".to_string())
        );
        assert_eq!(
            initial_source(Some(""), "https://shop.example/a"),
            ImageSource::Lookup("https://shop.example/a".to_string())
        );
    }

    #[test]
    fn nothing_to_show_is_placeholder() {
        assert_eq!(initial_source(None, ""), ImageSource::Placeholder);
        assert_eq!(ImageState::from_source(&ImageSource::Placeholder), ImageState::Placeholder);
    }

    #[test]
    fn failed_lookup_settles_on_placeholder() {
        assert_eq!(
            ImageState::from_lookup(Err(LookupError::Status(500))),
            ImageState::Placeholder
        );
        assert_eq!(ImageState::from_lookup(Ok(None)), ImageState::Placeholder);
        assert_eq!(
            ImageState::from_lookup(Ok(Some("https://img.example/og.jpg".to_string()))),
            ImageState::Showing("https://img.example/og.jpg".to_string())
        );
    }

    #[test]
    fn lookup_never_shows_a_url_while_resolving() {
        let source = initial_source(None, "https://shop.example/a");
        assert_eq!(ImageState::from_source(&source), ImageState::Resolving);
    }
}
