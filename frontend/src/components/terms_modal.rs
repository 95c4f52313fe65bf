use gloo_timers::callback::Timeout;
use web_sys::{HtmlElement, KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

#[derive(Properties, PartialEq)]
pub struct TermsModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

fn set_body_overflow(value: &str) {
    if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.style().set_property("overflow", value);
    }
}

#[function_component(TermsModal)]
pub fn terms_modal(props: &TermsModalProps) -> Html {
    let modal_ref = use_node_ref();

    {
        let on_close = props.on_close.clone();
        let open = props.open;
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if open && e.key() == "Escape" {
                on_close.emit(());
            }
        });
    }

    // Lock page scroll while open and move focus into the dialog.
    {
        let modal_ref = modal_ref.clone();
        use_effect_with_deps(
            move |open: &bool| {
                let focus = if *open {
                    set_body_overflow("hidden");
                    Some(Timeout::new(50, move || {
                        if let Some(el) = modal_ref.cast::<HtmlElement>() {
                            let _ = el.focus();
                        }
                    }))
                } else {
                    set_body_overflow("unset");
                    None
                };
                move || {
                    drop(focus);
                    set_body_overflow("unset");
                }
            },
            props.open,
        );
    }

    if !props.open {
        return html! {};
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="modal-root" role="dialog" aria-modal="true" aria-labelledby="terms-title">
            <div class="modal-backdrop" onclick={close.clone()} aria-hidden="true"></div>
            <div class="modal-panel terms-panel" ref={modal_ref} tabindex="-1">
                <div class="modal-header">
                    <h2 id="terms-title">{"Terms of Service"}</h2>
                    <button class="modal-close" onclick={close.clone()} aria-label="Close modal">{"×"}</button>
                </div>
                <div class="modal-content">
                    <section>
                        <h3>{"1. Introduction"}</h3>
                        <p>{"By purchasing a slot with Co-Create (\"we\", \"us\"), you agree to the following terms. We provide a service that pools resources from multiple brands to commission user-generated content (UGC) from creators."}</p>
                    </section>
                    <section>
                        <h3>{"2. Services & Deliverables"}</h3>
                        <p>{"We guarantee that the selected creator will produce and post one (1) video to their social media feed featuring your product alongside other brands. You will receive the raw video file for your own advertising use. While we guarantee the post will be made, we do not guarantee specific engagement numbers (views, likes, comments) or sales conversions."}</p>
                    </section>
                    <section>
                        <h3>{"3. Shipping & Products"}</h3>
                        <ul>
                            <li>{"You are responsible for shipping your product to our consolidation hub in Kitchener, ON, at your own expense."}</li>
                            <li>{"Products must be received by the deadline provided in your confirmation email. Late shipments may result in forfeiting your slot without refund."}</li>
                            <li>{"Products sent to creators are considered non-returnable gifts. We do not facilitate product returns."}</li>
                        </ul>
                    </section>
                    <section>
                        <h3>{"4. Payments & Refunds"}</h3>
                        <p>{"All payments are final. Because we commit funds to creators immediately upon filling a pool, we cannot offer refunds once a slot is purchased. If a scheduled creator becomes unavailable, we reserve the right to substitute with a creator of equal or greater engagement metrics."}</p>
                    </section>
                    <section>
                        <h3>{"5. Usage Rights"}</h3>
                        <p>{"You are granted a non-exclusive, perpetual, worldwide license to use the produced video content for digital advertising and social media purposes. The creator retains moral rights and original copyright of the raw footage."}</p>
                    </section>
                    <section>
                        <h3>{"6. Liability"}</h3>
                        <p>{"Co-Create is not liable for any lost, damaged, or stolen inventory during shipping. Our maximum liability for any claim related to our services is limited to the amount paid for the slot ($99 CAD)."}</p>
                    </section>
                    <div class="terms-updated">{"Last Updated: November 2024"}</div>
                </div>
                <div class="modal-footer">
                    <button class="modal-primary" onclick={close}>{"I Understand"}</button>
                </div>
            </div>
        </div>
    }
}
