use std::rc::Rc;

use yew::Reducible;

/// Overlay state shared by the marketing pages. Owned by the shell and
/// handed down as props.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub terms_open: bool,
    pub apply_open: bool,
    pub chat_open: bool,
}

pub enum AppAction {
    OpenTerms,
    CloseTerms,
    OpenApply,
    CloseApply,
    ToggleChat,
    /// Page switches start from a clean slate, except for the chat widget.
    PageChanged,
}

impl Reducible for AppState {
    type Action = AppAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            AppAction::OpenTerms => next.terms_open = true,
            AppAction::CloseTerms => next.terms_open = false,
            AppAction::OpenApply => next.apply_open = true,
            AppAction::CloseApply => next.apply_open = false,
            AppAction::ToggleChat => next.chat_open = !next.chat_open,
            AppAction::PageChanged => {
                next.terms_open = false;
                next.apply_open = false;
            }
        }
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modals_open_and_close_independently() {
        let state = Rc::new(AppState::default())
            .reduce(AppAction::OpenTerms)
            .reduce(AppAction::OpenApply);
        assert!(state.terms_open && state.apply_open);

        let state = state.reduce(AppAction::CloseTerms);
        assert!(!state.terms_open);
        assert!(state.apply_open);
    }

    #[test]
    fn chat_toggles() {
        let state = Rc::new(AppState::default()).reduce(AppAction::ToggleChat);
        assert!(state.chat_open);
        assert!(!state.reduce(AppAction::ToggleChat).chat_open);
    }

    #[test]
    fn page_change_closes_modals_but_keeps_chat() {
        let state = Rc::new(AppState::default())
            .reduce(AppAction::OpenApply)
            .reduce(AppAction::ToggleChat)
            .reduce(AppAction::PageChanged);
        assert!(!state.apply_open);
        assert!(state.chat_open);
    }

    #[test]
    fn redundant_action_keeps_same_state() {
        let state = Rc::new(AppState::default());
        let next = state.clone().reduce(AppAction::CloseTerms);
        assert!(Rc::ptr_eq(&state, &next));
    }
}
