use gloo_timers::callback::Timeout;
use log::info;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = window)]
    fn open(url: &str, target: &str, features: &str);
}

pub fn open_checkout() {
    info!("Opening hosted checkout");
    open(config::CHECKOUT_URL, "_blank", "");
}

/// Click handler that shows a spinner for `delay_ms`, then opens checkout in
/// a new tab. Returns the loading flag with the handler.
#[hook]
pub fn use_checkout(delay_ms: u32) -> (bool, Callback<MouseEvent>) {
    let loading = use_state(|| false);

    let onclick = {
        let loading = loading.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if *loading {
                return;
            }
            loading.set(true);
            let loading = loading.clone();
            Timeout::new(delay_ms, move || {
                loading.set(false);
                open_checkout();
            })
            .forget();
        })
    };

    (*loading, onclick)
}
