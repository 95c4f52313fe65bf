use std::rc::Rc;

use log::{error, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlElement, HtmlInputElement, MouseEvent, ScrollBehavior, ScrollIntoViewOptions, SubmitEvent};
use yew::prelude::*;

use crate::api::gemini::{self, ChatError, ChatSession};
use crate::config;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Role {
    User,
    Model,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatLog {
    pub messages: Vec<ChatMessage>,
    pub loading: bool,
}

pub enum ChatAction {
    Greet,
    Unavailable,
    Sent(String),
    Replied(Result<String, ChatError>),
}

impl ChatLog {
    fn push(&mut self, role: Role, text: &str) {
        self.messages.push(ChatMessage { role, text: text.to_string() });
    }
}

impl Reducible for ChatLog {
    type Action = ChatAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ChatAction::Greet | ChatAction::Unavailable if !self.messages.is_empty() => return self,
            ChatAction::Greet => next.push(Role::Model, gemini::GREETING),
            ChatAction::Unavailable => next.push(
                Role::Model,
                &format!("Chat is unavailable right now. Email {} and we'll help.", config::CONTACT_EMAIL),
            ),
            ChatAction::Sent(text) => {
                next.push(Role::User, &text);
                next.loading = true;
            }
            ChatAction::Replied(result) => {
                let text = match result {
                    Ok(reply) => reply,
                    Err(ChatError::EmptyReply) => gemini::EMPTY_REPLY_TEXT.to_string(),
                    Err(_) => gemini::FAILURE_TEXT.to_string(),
                };
                next.push(Role::Model, &text);
                next.loading = false;
            }
        }
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct ChatBotProps {
    pub open: bool,
    pub on_toggle: Callback<()>,
}

#[function_component(ChatBot)]
pub fn chat_bot(props: &ChatBotProps) -> Html {
    let log = use_reducer(ChatLog::default);
    let input = use_state(String::new);
    let session = use_mut_ref(|| None::<ChatSession>);
    let end_ref = use_node_ref();

    // The session is created the first time the window opens.
    {
        let log = log.clone();
        let session = session.clone();
        use_effect_with_deps(
            move |open: &bool| {
                if *open && session.borrow().is_none() {
                    match ChatSession::from_config() {
                        Ok(created) => {
                            *session.borrow_mut() = Some(created);
                            log.dispatch(ChatAction::Greet);
                        }
                        Err(e) => {
                            error!("Failed to initialize chat: {}", e);
                            log.dispatch(ChatAction::Unavailable);
                        }
                    }
                }
                || ()
            },
            props.open,
        );
    }

    {
        let end_ref = end_ref.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(end) = end_ref.cast::<HtmlElement>() {
                    let mut options = ScrollIntoViewOptions::new();
                    options.behavior(ScrollBehavior::Smooth);
                    end.scroll_into_view_with_scroll_into_view_options(&options);
                }
                || ()
            },
            (log.messages.len(), log.loading),
        );
    }

    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(()))
    };

    let oninput = {
        let input = input.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            input.set(target.value());
        })
    };

    let onsubmit = {
        let input = input.clone();
        let log = log.clone();
        let session = session.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let message = (*input).clone();
            if message.trim().is_empty() || log.loading {
                return;
            }
            let Some(prepared) = session.borrow().as_ref().map(|s| s.prepare(&message)) else {
                warn!("Chat message dropped, no session");
                return;
            };
            input.set(String::new());
            log.dispatch(ChatAction::Sent(message.clone()));

            let log = log.clone();
            let session = session.clone();
            spawn_local(async move {
                let result = gemini::generate(prepared).await;
                match &result {
                    Ok(reply) => {
                        if let Some(session) = session.borrow_mut().as_mut() {
                            session.record(&message, reply);
                        }
                    }
                    Err(e) => error!("Chat Error: {}", e),
                }
                log.dispatch(ChatAction::Replied(result));
            });
        })
    };

    let can_send = !log.loading && !input.trim().is_empty();

    html! {
        <>
            <button
                class={classes!("chat-toggle", props.open.then(|| "open"))}
                onclick={toggle}
                aria-label="Toggle Support Chat"
            >
                {if props.open { "×" } else { "💬" }}
            </button>

            if props.open {
                <div class="chat-window">
                    <div class="chat-header">
                        <div class="chat-icon">{"✦"}</div>
                        <div>
                            <h3>{"Co-Create Assistant"}</h3>
                            <p>{"Powered by Gemini"}</p>
                        </div>
                    </div>

                    <div class="chat-messages">
                        { for log.messages.iter().enumerate().map(|(idx, msg)| {
                            let side = match msg.role {
                                Role::User => "user",
                                Role::Model => "model",
                            };
                            html! {
                                <div key={idx} class={classes!("chat-row", side)}>
                                    <div class="chat-bubble">{&msg.text}</div>
                                </div>
                            }
                        }) }
                        if log.loading {
                            <div class="chat-row model">
                                <div class="chat-bubble thinking">
                                    <span class="spinner"></span>
                                    <span>{"Thinking..."}</span>
                                </div>
                            </div>
                        }
                        <div ref={end_ref}></div>
                    </div>

                    <form class="chat-input" onsubmit={onsubmit}>
                        <input
                            type="text"
                            value={(*input).clone()}
                            oninput={oninput}
                            placeholder="Ask about slots, shipping, etc..."
                        />
                        <button type="submit" disabled={!can_send}>{"➤"}</button>
                    </form>
                </div>
            }
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_is_added_once() {
        let log = Rc::new(ChatLog::default())
            .reduce(ChatAction::Greet)
            .reduce(ChatAction::Greet);
        assert_eq!(log.messages.len(), 1);
        assert_eq!(log.messages[0].role, Role::Model);
    }

    #[test]
    fn sending_sets_loading_until_reply() {
        let log = Rc::new(ChatLog::default()).reduce(ChatAction::Sent("How much?".into()));
        assert!(log.loading);
        assert_eq!(log.messages[0].role, Role::User);

        let log = log.reduce(ChatAction::Replied(Ok("$99 per slot.".into())));
        assert!(!log.loading);
        assert_eq!(log.messages[1].text, "$99 per slot.");
    }

    #[test]
    fn failures_map_to_fixed_replies() {
        let log = Rc::new(ChatLog::default())
            .reduce(ChatAction::Sent("a".into()))
            .reduce(ChatAction::Replied(Err(ChatError::EmptyReply)))
            .reduce(ChatAction::Sent("b".into()))
            .reduce(ChatAction::Replied(Err(ChatError::Status(503))));
        assert_eq!(log.messages[1].text, "I'm sorry, I couldn't generate a response.");
        assert_eq!(log.messages[3].text, "Sorry, something went wrong. Please try emailing us instead.");
    }
}
