use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Debug, PartialEq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

/// "01.", "02.", ...
pub fn faq_number(index: usize) -> String {
    format!("{:02}.", index + 1)
}

#[derive(Properties, PartialEq)]
pub struct FaqItemProps {
    pub index: usize,
    pub question: AttrValue,
    pub answer: AttrValue,
    #[prop_or_default]
    pub creator: bool,
}

#[function_component(FaqItem)]
pub fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", (*is_open).then(|| "open"), props.creator.then(|| "creator"))}>
            <button class="faq-question" onclick={toggle} aria-expanded={is_open.to_string()}>
                <h4>
                    <span class="faq-number">{faq_number(props.index)}</span>
                    {&props.question}
                </h4>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                <p>{&props.answer}</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqListProps {
    pub items: &'static [Faq],
    #[prop_or_default]
    pub creator: bool,
}

#[function_component(FaqList)]
pub fn faq_list(props: &FaqListProps) -> Html {
    html! {
        <div class="faq-list">
            { for props.items.iter().enumerate().map(|(index, faq)| html! {
                <FaqItem
                    key={index}
                    index={index}
                    question={faq.question}
                    answer={faq.answer}
                    creator={props.creator}
                />
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_zero_padded() {
        assert_eq!(faq_number(0), "01.");
        assert_eq!(faq_number(9), "10.");
    }
}
