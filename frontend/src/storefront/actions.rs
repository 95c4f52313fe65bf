use std::rc::Rc;

use js_sys::{Function, Promise, Reflect};
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use yew::Reducible;

use crate::config;

/// `https://slice99.com/<name>`, the address creators hand out.
pub fn share_url(display_name: &str) -> String {
    format!("{}/{}", config::SHARE_BASE_URL, display_name.trim().to_lowercase())
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ShareData {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl ShareData {
    pub fn for_creator(name: &str, url: &str) -> Self {
        Self {
            title: format!("{}'s Storefront | Slice99", name),
            text: format!("Check out {}'s latest viral finds!", name),
            url: url.to_string(),
        }
    }
}

/// "Copied!" badge state. Each copy gets a ticket; only the timer holding
/// the latest ticket may hide the badge again.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CopyFeedback {
    pub visible: bool,
    ticket: u32,
}

pub enum CopyFeedbackAction {
    Copied(u32),
    Expired(u32),
}

impl Reducible for CopyFeedback {
    type Action = CopyFeedbackAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            CopyFeedbackAction::Copied(ticket) => Rc::new(Self { visible: true, ticket }),
            CopyFeedbackAction::Expired(ticket) if ticket == self.ticket && self.visible => {
                Rc::new(Self { visible: false, ticket })
            }
            CopyFeedbackAction::Expired(_) => self,
        }
    }
}

fn navigator() -> Result<web_sys::Navigator, JsValue> {
    web_sys::window()
        .map(|w| w.navigator())
        .ok_or_else(|| JsValue::from_str("no window"))
}

// web-sys gates Clipboard and Navigator::share behind unstable cfgs, so go
// through Reflect instead.
async fn call_promise(target: &JsValue, method: &str, arg: &JsValue) -> Result<JsValue, JsValue> {
    let function = Reflect::get(target, &JsValue::from_str(method))?.dyn_into::<Function>()?;
    let promise = function.call1(target, arg)?.dyn_into::<Promise>()?;
    JsFuture::from(promise).await
}

pub async fn write_clipboard(text: &str) -> Result<(), JsValue> {
    let clipboard = Reflect::get(&navigator()?.into(), &JsValue::from_str("clipboard"))?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(JsValue::from_str("clipboard unavailable"));
    }
    call_promise(&clipboard, "writeText", &JsValue::from_str(text)).await?;
    Ok(())
}

pub fn can_share() -> bool {
    navigator()
        .and_then(|nav| Reflect::has(&nav, &JsValue::from_str("share")))
        .unwrap_or(false)
}

pub async fn native_share(data: &ShareData) -> Result<(), JsValue> {
    let payload = serde_wasm_bindgen::to_value(data)?;
    call_promise(&navigator()?.into(), "share", &payload).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_url_lowercases_display_name() {
        assert_eq!(share_url("Ada"), "https://slice99.com/ada");
        assert_eq!(share_url(" Ada "), share_url("ada"));
    }

    #[test]
    fn copying_twice_writes_the_same_link() {
        assert_eq!(share_url("Ada"), share_url("Ada"));
    }

    #[test]
    fn feedback_clears_after_latest_timer_only() {
        let state = Rc::new(CopyFeedback::default());
        let first = state.reduce(CopyFeedbackAction::Copied(1));
        let second = first.reduce(CopyFeedbackAction::Copied(2));
        assert!(second.visible);

        // The first copy's timer fires while the second is still showing.
        let after_stale = second.reduce(CopyFeedbackAction::Expired(1));
        assert!(after_stale.visible);

        let after_latest = after_stale.reduce(CopyFeedbackAction::Expired(2));
        assert!(!after_latest.visible);
    }

    #[test]
    fn feedback_expiry_is_idempotent() {
        let state = Rc::new(CopyFeedback::default()).reduce(CopyFeedbackAction::Copied(7));
        let cleared = state.reduce(CopyFeedbackAction::Expired(7));
        let again = cleared.clone().reduce(CopyFeedbackAction::Expired(7));
        assert_eq!(*cleared, *again);
        assert!(!again.visible);
    }

    #[test]
    fn share_payload_names_the_creator() {
        let data = ShareData::for_creator("Ada", "https://slice99.com/ada");
        assert_eq!(data.title, "Ada's Storefront | Slice99");
        assert_eq!(data.text, "Check out Ada's latest viral finds!");
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["url"], "https://slice99.com/ada");
    }
}
