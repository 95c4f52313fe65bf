use std::collections::VecDeque;
use std::rc::Rc;

use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::use_interval;

use crate::components::faq::{Faq, FaqList};
use crate::components::typewriter::TypewriterText;
use crate::pages::brand_landing::{ComparisonRow, ComparisonTable, Marquee};

const PAYOUT_CENTS: u64 = 15_000;
const BALANCE_RESET_CENTS: u64 = 1_000_000;
const FEED_LEN: usize = 6;
const FEED_TICK_MS: u32 = 1_500;
const PAYOUT_SOURCES: &[&str] = &["Slice Payout", "Slice Payout", "Bonus Payment"];

#[derive(Clone, Debug, PartialEq)]
pub struct Payout {
    pub id: u64,
    pub time: &'static str,
    pub amount_cents: u64,
    pub source: &'static str,
}

/// The fake wallet on the phone mockup.
#[derive(Clone, Debug, PartialEq)]
pub struct PayoutFeed {
    pub entries: VecDeque<Payout>,
    pub balance_cents: u64,
    next_id: u64,
}

impl Default for PayoutFeed {
    fn default() -> Self {
        let seed = [(1, "Now"), (2, "2m ago"), (3, "1h ago")];
        Self {
            entries: seed
                .iter()
                .map(|&(id, time)| Payout { id, time, amount_cents: PAYOUT_CENTS, source: "Slice Payout" })
                .collect(),
            balance_cents: 45_000,
            next_id: 4,
        }
    }
}

pub enum PayoutAction {
    Tick { source: &'static str },
}

impl Reducible for PayoutFeed {
    type Action = PayoutAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let PayoutAction::Tick { source } = action;
        let mut next = (*self).clone();
        next.entries.push_front(Payout {
            id: next.next_id,
            time: "Just now",
            amount_cents: PAYOUT_CENTS,
            source,
        });
        next.entries.truncate(FEED_LEN);
        next.next_id += 1;
        next.balance_cents = if next.balance_cents >= BALANCE_RESET_CENTS {
            PAYOUT_CENTS
        } else {
            next.balance_cents + PAYOUT_CENTS
        };
        Rc::new(next)
    }
}

/// `$1,234.50`
pub fn format_money(cents: u64) -> String {
    let dollars = (cents / 100).to_string();
    let mut grouped = String::new();
    for (i, ch) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${}.{:02}", grouped, cents % 100)
}

fn random_source() -> &'static str {
    let idx = (js_sys::Math::random() * PAYOUT_SOURCES.len() as f64) as usize;
    PAYOUT_SOURCES[idx.min(PAYOUT_SOURCES.len() - 1)]
}

#[function_component(PhonePayoutVisual)]
fn phone_payout_visual() -> Html {
    let feed = use_reducer(PayoutFeed::default);

    {
        let feed = feed.clone();
        use_interval(
            move || feed.dispatch(PayoutAction::Tick { source: random_source() }),
            FEED_TICK_MS,
        );
    }

    html! {
        <div class="phone">
            <div class="phone-notch"></div>
            <div class="phone-screen">
                <div class="phone-status">{"9:41"}</div>
                <div class="wallet">
                    <div class="wallet-label">{"Total Balance"}</div>
                    <div class="wallet-balance" key={feed.balance_cents}>{format_money(feed.balance_cents)}</div>
                    <div class="wallet-actions">
                        <div class="wallet-primary">{"Withdraw"}</div>
                        <div class="wallet-secondary">{"Details"}</div>
                    </div>
                </div>
                <div class="feed">
                    <div class="feed-title"><span>{"Live Activity"}</span><span class="ping green"></span></div>
                    { for feed.entries.iter().map(|payout| html! {
                        <div class="feed-item" key={payout.id}>
                            <div class="feed-icon">{"$"}</div>
                            <div class="feed-text">
                                <div class="feed-source">{payout.source}</div>
                                <div class="feed-sub">{"Payment Received"}</div>
                            </div>
                            <div class="feed-amount">
                                <div>{format!("+{}", format_money(payout.amount_cents))}</div>
                                <div class="feed-time">{payout.time}</div>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </div>
    }
}

struct Step {
    number: &'static str,
    title: &'static str,
    desc: &'static str,
}

const STEPS: &[Step] = &[
    Step {
        number: "01",
        title: "Receive",
        desc: "Get a consolidated box of cool products (yours to keep) delivered to your door every month.",
    },
    Step {
        number: "02",
        title: "Film",
        desc: "Shoot a single 60-second unboxing haul featuring the products. No complex scripts. Just authentic reactions.",
    },
    Step {
        number: "03",
        title: "Earn",
        desc: "Get paid a flat rate within 48 hours of upload. No chasing invoices. No net-60 terms.",
    },
];

const COMPARISON: &[ComparisonRow] = &[
    ComparisonRow { label: "Consistency", bad: "Sporadic / One-off", good: "Monthly Cadence" },
    ComparisonRow { label: "Payment", bad: "Net-30 or Net-60", good: "48 Hours" },
    ComparisonRow { label: "Compensation", bad: "Often 'Gifted Only'", good: "Cash + Product" },
    ComparisonRow { label: "Admin Work", bad: "Endless DMs & Contracts", good: "Zero Admin" },
];

const CREATOR_FAQ: &[Faq] = &[
    Faq {
        question: "Is there a cost to join?",
        answer: "No. You never pay us. We operate as an agency where we charge the brands and pay you for your content creation services.",
    },
    Faq {
        question: "Do I have to post to my feed?",
        answer: "Yes. That is the core value for the brands. We look for creators who are proud to share their finds with their audience.",
    },
    Faq {
        question: "What kind of products?",
        answer: "We work with small Canadian businesses. Typical categories include Home Goods, Wellness, Tech Accessories, and Snacks/Beverages.",
    },
    Faq {
        question: "How do I get paid?",
        answer: "We pay via E-transfer (for Canadian creators) or PayPal. Payments are processed within 48 hours of us verifying your upload.",
    },
    Faq {
        question: "Can I opt out of a box?",
        answer: "Yes. If you're busy one month, you can pause your subscription. You only get paid for the boxes you accept.",
    },
];

#[derive(Properties, PartialEq)]
pub struct CreatorLandingProps {
    pub on_apply: Callback<()>,
}

#[function_component(CreatorLanding)]
pub fn creator_landing(props: &CreatorLandingProps) -> Html {
    let on_join = {
        let on_apply = props.on_apply.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_apply.emit(());
        })
    };

    html! {
        <>
            <div class="hero creator">
                <div class="hero-inner">
                    <div class="hero-pill dark">{"Currently onboarding: Micro & Nano Creators (1k - 50k)"}</div>
                    <h1 class="typewriter-heading">
                        <TypewriterText text={"Make more money\nwith UGC"} pause_ms={5_000} />
                    </h1>
                    <div class="hero-actions">
                        <button class="hero-cta creator" onclick={on_join}>{"Join Slice"}</button>
                        <p class="hero-micro">{"Receive a monthly box. Film one video. Get paid."}</p>
                    </div>
                </div>

                <div class="browser-window">
                    <div class="browser-bar">
                        <span class="dot red"></span>
                        <span class="dot yellow"></span>
                        <span class="dot green"></span>
                    </div>
                    <div class="browser-body">
                        <PhonePayoutVisual />
                    </div>
                </div>
                <div class="browser-caption">{"No invoices. Just payments."}</div>

                <div class="hero-marquee">
                    <Marquee />
                </div>
            </div>

            <section id="how-it-works" class="section muted-bg">
                <div class="section-inner">
                    <div class="section-heading">
                        <h2>{"Why Creators Love Slice"}</h2>
                        <p>{"Predictable income. Zero negotiation."}</p>
                    </div>
                    <div class="steps">
                        { for STEPS.iter().map(|step| html! {
                            <div class="step-card creator" key={step.number}>
                                <span class="step-number">{format!("Step {}", step.number)}</span>
                                <h3>{step.title}</h3>
                                <p>{step.desc}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="section-inner">
                    <ComparisonTable theirs="Brand Deals" rows={COMPARISON} />
                </div>
            </section>

            <section id="faq" class="section">
                <div class="section-inner narrow">
                    <div class="section-heading">
                        <h2>{"Creator FAQ"}</h2>
                    </div>
                    <FaqList items={CREATOR_FAQ} creator={true} />
                </div>
            </section>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tick(feed: Rc<PayoutFeed>) -> Rc<PayoutFeed> {
        feed.reduce(PayoutAction::Tick { source: "Bonus Payment" })
    }

    #[test]
    fn newest_payout_comes_first() {
        let feed = tick(Rc::new(PayoutFeed::default()));
        assert_eq!(feed.entries.len(), 4);
        assert_eq!(feed.entries[0].source, "Bonus Payment");
        assert_eq!(feed.entries[0].time, "Just now");
        assert_eq!(feed.balance_cents, 60_000);
    }

    #[test]
    fn feed_keeps_six_entries() {
        let mut feed = Rc::new(PayoutFeed::default());
        for _ in 0..10 {
            feed = tick(feed);
        }
        assert_eq!(feed.entries.len(), FEED_LEN);
        assert_eq!(feed.entries[0].id, 13);
    }

    #[test]
    fn balance_resets_after_ten_thousand() {
        let mut feed = PayoutFeed::default();
        feed.balance_cents = BALANCE_RESET_CENTS;
        let feed = tick(Rc::new(feed));
        assert_eq!(feed.balance_cents, PAYOUT_CENTS);
    }

    #[test]
    fn money_is_grouped_by_thousands() {
        assert_eq!(format_money(45_000), "$450.00");
        assert_eq!(format_money(123_456_78), "$123,456.78");
        assert_eq!(format_money(5), "$0.05");
    }
}
