use gloo_timers::callback::Timeout;
use yew::prelude::*;

const TYPE_MS: u32 = 150;
const DELETE_MS: u32 = 50;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Typewriter {
    pub shown: usize,
    pub deleting: bool,
    /// Wait before the next tick.
    pub delay: u32,
}

impl Default for Typewriter {
    fn default() -> Self {
        Self { shown: 0, deleting: false, delay: TYPE_MS }
    }
}

impl Typewriter {
    /// Advances one character. Holds for `pause` once the text is complete,
    /// then erases it and starts over.
    pub fn tick(self, len: usize, pause: u32) -> Self {
        if len == 0 {
            return Self::default();
        }
        if self.deleting {
            let shown = self.shown.saturating_sub(1);
            if shown == 0 {
                Self { shown, deleting: false, delay: TYPE_MS }
            } else {
                Self { shown, deleting: true, delay: DELETE_MS }
            }
        } else {
            let shown = (self.shown + 1).min(len);
            if shown == len {
                Self { shown, deleting: true, delay: pause }
            } else {
                Self { shown, deleting: false, delay: TYPE_MS }
            }
        }
    }

    pub fn visible(&self, text: &str) -> String {
        text.chars().take(self.shown).collect()
    }
}

#[derive(Properties, PartialEq)]
pub struct TypewriterTextProps {
    pub text: AttrValue,
    #[prop_or(2_000)]
    pub pause_ms: u32,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(TypewriterText)]
pub fn typewriter_text(props: &TypewriterTextProps) -> Html {
    let state = use_state(Typewriter::default);
    let len = props.text.chars().count();

    {
        let deps = *state;
        let state = state.clone();
        let pause = props.pause_ms;
        use_effect_with_deps(
            move |current: &Typewriter| {
                let current = *current;
                let timeout = Timeout::new(current.delay, move || state.set(current.tick(len, pause)));
                move || drop(timeout)
            },
            deps,
        );
    }

    html! {
        <span class={classes!("typewriter", props.class.clone())}>
            {state.visible(&props.text)}
            <span class="typewriter-cursor">{"_"}</span>
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn types_then_pauses_then_erases() {
        let mut tw = Typewriter::default();
        for _ in 0..3 {
            tw = tw.tick(3, 5_000);
        }
        assert_eq!(tw.visible("abc"), "abc");
        assert!(tw.deleting);
        assert_eq!(tw.delay, 5_000);

        tw = tw.tick(3, 5_000);
        assert_eq!(tw.visible("abc"), "ab");
        assert_eq!(tw.delay, DELETE_MS);
    }

    #[test]
    fn restarts_after_erasing() {
        let mut tw = Typewriter { shown: 1, deleting: true, delay: DELETE_MS };
        tw = tw.tick(3, 5_000);
        assert_eq!(tw.shown, 0);
        assert!(!tw.deleting);
        assert_eq!(tw.delay, TYPE_MS);
    }

    #[test]
    fn counts_characters_not_bytes() {
        let tw = Typewriter { shown: 2, deleting: false, delay: TYPE_MS };
        assert_eq!(tw.visible("é\nw"), "é\n");
    }
}
