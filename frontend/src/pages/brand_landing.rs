use chrono::{Local, NaiveDate};
use yew::prelude::*;

use crate::components::carousel::DeliverablesCarousel;
use crate::components::checkout::use_checkout;
use crate::components::faq::{Faq, FaqList};
use crate::components::live_drop::LiveDrop;
use crate::config;

/// "November Drop"
pub fn month_drop_label(today: NaiveDate) -> String {
    today.format("%B Drop").to_string()
}

pub const MARQUEE_CATEGORIES: &[&str] = &[
    "Fashion",
    "Beauty",
    "Home Goods",
    "Wellness",
    "Tech",
    "Food & Bev",
    "Pet Care",
    "Lifestyle",
];

struct Step {
    number: &'static str,
    title: &'static str,
    desc: &'static str,
    icon: &'static str,
}

const STEPS: &[Step] = &[
    Step {
        number: "01",
        title: "Book",
        desc: "Secure your slot for $99. We vet and hire the creator for you, avoiding expensive mistakes and awkward DMs.",
        icon: "✓",
    },
    Step {
        number: "02",
        title: "Ship",
        desc: "Send your product to our consolidation hub in Canada. We pack the haul and ship it to the creator.",
        icon: "📦",
    },
    Step {
        number: "03",
        title: "Watch",
        desc: "Receive your video file and watch the creator post it to their feed within 14 days.",
        icon: "📱",
    },
];

#[derive(Debug, PartialEq)]
pub struct ComparisonRow {
    pub label: &'static str,
    pub bad: &'static str,
    pub good: &'static str,
}

const COMPARISON: &[ComparisonRow] = &[
    ComparisonRow { label: "Cost", bad: "$2,000 - $5,000+", good: "$99 Flat Rate" },
    ComparisonRow { label: "Effort", bad: "Cold DMing & Negotiations", good: "Instant Booking" },
    ComparisonRow { label: "Logistics", bad: "Individual Shipping", good: "Consolidated Hub" },
    ComparisonRow { label: "Outcome", bad: "No Guarantee", good: "Guaranteed Post" },
];

const BRAND_FAQ: &[Faq] = &[
    Faq {
        question: "How is this only $99?",
        answer: "We use a \"Pooling\" model. Instead of one brand paying $1,000+ for a high-tier creator, we pool 3-5 non-competing products into a single curated \"Discovery Box.\" This allows you to split the cost of production while still receiving a premium, professional video asset.",
    },
    Faq {
        question: "Who is the creator?",
        answer: "Once a batch is filled, we match the pool with a vetted creator from our network who aligns with your product’s category (e.g., Wellness, Tech, or Lifestyle). All creators are vetted for high engagement, authentic followers, and a proven track record of high-quality content.",
    },
    Faq {
        question: "Do I have any creative control?",
        answer: "Yes. While we handle the heavy lifting to keep your costs low, you will provide a \"Product Brief\" during checkout. This allows you to list up to three mandatory \"Must-Haves\" (e.g., \"Show the texture,\" or \"Mention it’s eco-friendly\") that the creator is required to include in their video.",
    },
    Faq {
        question: "Do I get the video file?",
        answer: "Absolutely. You receive the high-resolution raw video file with full usage rights. This means you can repost it on your own organic channels or use it as a \"TikTok-first\" creative in your paid ad campaigns.",
    },
    Faq {
        question: "What if my product doesn't fit?",
        answer: "We curate themed 'Discovery Boxes' so products fit naturally alongside each other. If your product is exceptionally large (e.g., furniture) or requires specific legal disclosures, please contact us at Email Support before booking your slot.",
    },
];

#[derive(Properties, PartialEq)]
pub struct ComparisonTableProps {
    pub theirs: &'static str,
    pub rows: &'static [ComparisonRow],
}

#[function_component(ComparisonTable)]
pub fn comparison_table(props: &ComparisonTableProps) -> Html {
    html! {
        <div class="comparison">
            <div class="comparison-head">
                <div class="muted">{"Comparison"}</div>
                <div>{props.theirs}</div>
                <div class="accent">{"Slice"}</div>
            </div>
            { for props.rows.iter().map(|row| html! {
                <div class="comparison-row" key={row.label}>
                    <div class="comparison-label">{row.label}</div>
                    <div class="comparison-bad">{row.bad}</div>
                    <div class="comparison-good"><span class="check">{"✓"}</span>{row.good}</div>
                </div>
            }) }
        </div>
    }
}

#[function_component(Marquee)]
pub fn marquee() -> Html {
    html! {
        <div class="marquee">
            <div class="marquee-track">
                { for (0..2).map(|copy| html! {
                    <div class="marquee-group" key={copy}>
                        { for MARQUEE_CATEGORIES.iter().map(|name| html! { <span>{*name}</span> }) }
                    </div>
                }) }
            </div>
        </div>
    }
}

#[function_component(BrandLanding)]
pub fn brand_landing() -> Html {
    let (loading, claim) = use_checkout(config::CHECKOUT_DELAY_MS);
    let drop_label = use_memo(|_| month_drop_label(Local::now().date_naive()), ());

    html! {
        <>
            <div class="hero">
                <div class="hero-inner">
                    <div class="hero-pill">
                        <span class="ping"></span>
                        {format!("Open for Booking: {}", drop_label)}
                    </div>
                    <h1>
                        <span class="hero-line">{"Get your product on TikTok."}</span>
                        <span class="hero-line accent-line">{"Guaranteed. For $99."}</span>
                    </h1>
                    <p class="hero-sub">{"We pool non-competing brands to split the cost of a UGC-style Haul."}</p>
                    <div class="hero-actions">
                        <button class="hero-cta" onclick={claim} disabled={loading}>
                            if loading {
                                <span class="spinner"></span>
                            } else {
                                {"Claim Slot ($99)"}
                            }
                        </button>
                        <span class="hero-trust">{"Trusted by 50+ Canadian Brands"}</span>
                    </div>
                </div>

                <div id="live-drop" class="hero-drop">
                    <LiveDrop />
                </div>

                <div class="hero-marquee">
                    <p>{"Powering the next generation of brands"}</p>
                    <Marquee />
                </div>
            </div>

            <section id="how-it-works" class="section muted-bg">
                <div class="section-inner">
                    <div class="section-heading">
                        <h2>{"How It Works"}</h2>
                        <p>{"The easiest way to get authentic UGC for your brand without the headache."}</p>
                    </div>
                    <div class="steps">
                        { for STEPS.iter().map(|step| html! {
                            <div class="step-card" key={step.number}>
                                <div class="step-top">
                                    <span class="step-number">{format!("Step {}", step.number)}</span>
                                    <span class="step-icon">{step.icon}</span>
                                </div>
                                <h3>{step.title}</h3>
                                <p>{step.desc}</p>
                            </div>
                        }) }
                    </div>
                    <DeliverablesCarousel />
                </div>
            </section>

            <section class="section">
                <div class="section-inner">
                    <div class="did-you-know">
                        <span class="bulb">{"💡"}</span>
                        <div>
                            <h3>{"Did You Know?"}</h3>
                            <p>{"Haul videos with multiple brands actually perform better than single-product reviews. Viewers watch longer to see \"what else is in the box.\" By grouping up, you get more watch time."}</p>
                        </div>
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="section-inner">
                    <ComparisonTable theirs="Traditional Agency" rows={COMPARISON} />
                </div>
            </section>

            <section id="faq" class="section">
                <div class="section-inner narrow">
                    <div class="section-heading">
                        <h2>{"Frequently Asked Questions"}</h2>
                        <p>{"Everything you need to know about the Slice process."}</p>
                    </div>
                    <FaqList items={BRAND_FAQ} />
                    <p class="faq-more">
                        {"Can't find what you're looking for? "}
                        <a href="mailto:support@slice99.com">{"Email Support"}</a>
                    </p>
                </div>
            </section>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drop_label_uses_full_month_name() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        assert_eq!(month_drop_label(date), "October Drop");
    }

    #[test]
    fn three_steps_and_five_questions() {
        assert_eq!(STEPS.len(), 3);
        assert_eq!(BRAND_FAQ.len(), 5);
        assert_eq!(COMPARISON[0].good, "$99 Flat Rate");
    }
}
