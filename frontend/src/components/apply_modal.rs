use log::error;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, MouseEvent, SubmitEvent};
use yew::prelude::*;

use crate::api::formspree::{self, Application, Field, CATEGORIES, SUBMIT_FAILED_MESSAGE};

#[derive(Clone, Debug, PartialEq)]
enum FormStatus {
    Editing,
    Submitting,
    Received,
    Failed,
}

#[derive(Properties, PartialEq)]
pub struct ApplyModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

/// Roster application for creators, posted to the hosted form endpoint.
#[function_component(ApplyModal)]
pub fn apply_modal(props: &ApplyModalProps) -> Html {
    let form = use_state(Application::default);
    let status = use_state(|| FormStatus::Editing);

    if !props.open {
        return html! {};
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let onsubmit = {
        let form = form.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *status == FormStatus::Submitting {
                return;
            }
            status.set(FormStatus::Submitting);
            let form = form.clone();
            let status = status.clone();
            spawn_local(async move {
                match formspree::submit_application(&form).await {
                    Ok(()) => {
                        form.set(Application::default());
                        status.set(FormStatus::Received);
                    }
                    Err(e) => {
                        error!("Application submit failed: {}", e);
                        status.set(FormStatus::Failed);
                    }
                }
            });
        })
    };

    // Text inputs write straight into one field of the application.
    let text_input = |id: &'static str,
                      label: &'static str,
                      kind: &'static str,
                      placeholder: &'static str,
                      required: bool,
                      field: Field| {
        let form = form.clone();
        let value = form.get(field).to_string();
        let oninput = Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set(field, input.value());
            form.set(next);
        });
        html! {
            <div class="field">
                <label for={id}>{label}</label>
                <input type={kind} name={id} id={id} required={required} placeholder={placeholder} value={value} oninput={oninput} />
            </div>
        }
    };

    let radio_group = |name: &'static str,
                       question: &'static str,
                       options: [(&'static str, &'static str); 2],
                       field: Field| {
        let selected = form.get(field).to_string();
        html! {
            <div class="radio-group">
                <p>{question}</p>
                <div class="radio-row">
                    { for options.iter().map(|(value, label)| {
                        let form = form.clone();
                        let value = *value;
                        let onchange = Callback::from(move |_: Event| {
                            let mut next = (*form).clone();
                            next.set(field, value.to_string());
                            form.set(next);
                        });
                        html! {
                            <label class="radio">
                                <input type="radio" name={name} value={value} required=true
                                    checked={selected == value} onchange={onchange} />
                                <span>{*label}</span>
                            </label>
                        }
                    }) }
                </div>
            </div>
        }
    };

    let body = if *status == FormStatus::Received {
        html! {
            <div class="apply-success">
                <div class="success-mark">{"✓"}</div>
                <h3>{"Application Received"}</h3>
                <p>{"We review applications every Friday. We'll be in touch if it's a fit."}</p>
                <button class="apply-close-btn" onclick={close.clone()}>{"Close"}</button>
            </div>
        }
    } else {
        let submitting = *status == FormStatus::Submitting;
        html! {
            <form class="apply-form" onsubmit={onsubmit}>
                if *status == FormStatus::Failed {
                    <div class="apply-error">{SUBMIT_FAILED_MESSAGE}</div>
                }

                <div class="apply-section">
                    <h4>{"01 // The Vitals"}</h4>
                    <div class="field-row">
                        {text_input("name", "Full Name", "text", "Jane Doe", true, Field::Name)}
                        {text_input("email", "Email Address", "email", "jane@example.com", true, Field::Email)}
                    </div>
                    {text_input("social", "Primary Social Handle (Full Link)", "text", "tiktok.com/@yourname", true, Field::Social)}
                    {text_input("location", "Location (City & Province)", "text", "Toronto, ON", true, Field::Location)}
                </div>

                <div class="apply-section">
                    <h4>{"02 // The Vibe"}</h4>
                    <p class="hint">{"Which Haul Categories fit your content style? (Select all that apply)"}</p>
                    <div class="category-grid">
                        { for CATEGORIES.iter().map(|category| {
                            let checked = form.categories.iter().any(|c| c == category);
                            let onchange = {
                                let form = form.clone();
                                Callback::from(move |_: Event| {
                                    let mut next = (*form).clone();
                                    next.toggle_category(category);
                                    form.set(next);
                                })
                            };
                            html! {
                                <label class="category" key={*category}>
                                    <input type="checkbox" name="categories" value={*category} checked={checked} onchange={onchange} />
                                    <span>{*category}</span>
                                </label>
                            }
                        }) }
                    </div>
                </div>

                <div class="apply-section">
                    <h4>{"03 // The Capability"}</h4>
                    {text_input("video_link", "Link to your best 'Haul' or 'Showcase' video", "text", "tiktok.com/video/...", true, Field::VideoLink)}
                    <p class="hint small">{"Show us a video where you talk about a product. We want to see your lighting and hear your voice."}</p>
                </div>

                <div class="apply-section">
                    <h4>{"04 // The Deal Breakers"}</h4>
                    {radio_group(
                        "rate_acceptance",
                        "The Slice Model pays a flat rate of $200 CAD + 4 Free Products per drop. Do you accept this rate?",
                        [("Yes", "Yes, I'm in."), ("No", "No, my rates are higher.")],
                        Field::RateAcceptance,
                    )}
                    {radio_group(
                        "usage_rights",
                        "Brands get usage rights to run the video as ads. Are you cool with that?",
                        [("Yes", "Yes."), ("No", "No.")],
                        Field::UsageRights,
                    )}
                </div>

                <div class="apply-section divided">
                    {text_input("dream_brand", "One brand you really want to work with right now?", "text", "e.g. Nike, Glossier, etc.", false, Field::DreamBrand)}
                </div>

                <button type="submit" class="apply-submit" disabled={submitting}>
                    {if submitting { "Submitting..." } else { "Submit Application" }}
                </button>
            </form>
        }
    };

    html! {
        <div class="modal-root apply-root" role="dialog" aria-modal="true" aria-labelledby="apply-title">
            <div class="modal-backdrop dark" onclick={close.clone()}></div>
            <div class="modal-panel apply-panel">
                <div class="modal-header dark">
                    <h3 id="apply-title">{"Apply to Roster"}</h3>
                    <button class="modal-close" onclick={close} aria-label="Close">{"×"}</button>
                </div>
                {body}
            </div>
        </div>
    }
}
