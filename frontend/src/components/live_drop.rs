use chrono::{Datelike, Duration, Local, NaiveDate};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::checkout::use_checkout;
use crate::config;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SlotStatus {
    Reserved,
    Open,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Slot {
    pub id: u32,
    pub status: SlotStatus,
    pub price: u32,
}

pub const WEEKLY_SLOTS: [Slot; 4] = [
    Slot { id: 1, status: SlotStatus::Reserved, price: 99 },
    Slot { id: 2, status: SlotStatus::Open, price: 99 },
    Slot { id: 3, status: SlotStatus::Open, price: 99 },
    Slot { id: 4, status: SlotStatus::Open, price: 99 },
];

/// The coming dispatch day. A Friday is its own dispatch day.
pub fn next_friday(today: NaiveDate) -> NaiveDate {
    let weekday = today.weekday().num_days_from_sunday() as i64;
    let days_until = (5 - weekday + 7) % 7;
    today + Duration::days(days_until)
}

pub fn dispatch_label(today: NaiveDate) -> String {
    next_friday(today).format("%b %-d").to_string()
}

pub fn action_label(selected: Option<u32>) -> String {
    match selected {
        Some(id) => format!("Confirm Slot {}", id),
        None => "Claim Slot ($99)".to_string(),
    }
}

#[function_component(LiveDrop)]
pub fn live_drop() -> Html {
    let selected = use_state(|| None::<u32>);
    let (loading, checkout) = use_checkout(config::SLOT_CHECKOUT_DELAY_MS);
    let dispatch = use_memo(|_| dispatch_label(Local::now().date_naive()), ());

    let on_confirm = {
        let selected = selected.clone();
        Callback::from(move |e: MouseEvent| {
            if selected.is_none() {
                e.prevent_default();
                return;
            }
            checkout.emit(e);
        })
    };

    html! {
        <div class="live-drop">
            <div class="drop-header">
                <div class="drop-badge">
                    <span class="ping"></span>
                    {"🟢 Boarding Now"}
                </div>
                <h3>{"The Weekly Mix (Generic)"}</h3>
                <p>{format!("Next Dispatch: Friday, {}", dispatch)}</p>
            </div>

            <div class="drop-body">
                <div class="slot-grid">
                    { for WEEKLY_SLOTS.iter().map(|slot| {
                        let reserved = slot.status == SlotStatus::Reserved;
                        let is_selected = *selected == Some(slot.id);
                        let onclick = {
                            let selected = selected.clone();
                            let id = slot.id;
                            Callback::from(move |_: MouseEvent| selected.set(Some(id)))
                        };
                        let aria = if reserved {
                            format!("Slot {}, Sold", slot.id)
                        } else {
                            format!("Slot {}, Open, price ${}", slot.id, slot.price)
                        };
                        html! {
                            <button
                                key={slot.id}
                                class={classes!("slot", reserved.then(|| "sold"), is_selected.then(|| "selected"))}
                                disabled={reserved || loading}
                                aria-label={aria}
                                onclick={onclick}
                            >
                                <div class="slot-top">
                                    <span class="slot-state">{if reserved { "Filled" } else { "Available" }}</span>
                                    if reserved {
                                        <span class="slot-lock">{"🔒"}</span>
                                    } else {
                                        <span class={classes!("slot-radio", is_selected.then(|| "checked"))}></span>
                                    }
                                </div>
                                <div class="slot-name">{format!("Slot {}", slot.id)}</div>
                                <div class="slot-price">
                                    {if reserved { "Reserved".to_string() } else { format!("${} Flat Rate", slot.price) }}
                                </div>
                            </button>
                        }
                    }) }
                </div>

                <div class="drop-actions">
                    <span class="drop-availability">
                        {if selected.is_some() { "Slot Selected" } else { "Limited Availability" }}
                    </span>
                    <button
                        class="drop-confirm"
                        disabled={loading || selected.is_none()}
                        onclick={on_confirm}
                    >
                        if loading {
                            <span class="spinner"></span>{" Processing"}
                        } else {
                            {action_label(*selected)}{" →"}
                        }
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn friday_dispatches_same_day() {
        // 2025-11-14 is a Friday.
        assert_eq!(next_friday(date(2025, 11, 14)), date(2025, 11, 14));
    }

    #[test]
    fn saturday_waits_almost_a_week() {
        assert_eq!(next_friday(date(2025, 11, 15)), date(2025, 11, 21));
        assert_eq!(next_friday(date(2025, 11, 10)), date(2025, 11, 14));
    }

    #[test]
    fn label_crosses_month_boundary() {
        assert_eq!(dispatch_label(date(2025, 11, 29)), "Dec 5");
    }

    #[test]
    fn one_slot_is_reserved() {
        let reserved = WEEKLY_SLOTS.iter().filter(|s| s.status == SlotStatus::Reserved).count();
        assert_eq!(reserved, 1);
        assert_eq!(action_label(Some(3)), "Confirm Slot 3");
        assert_eq!(action_label(None), "Claim Slot ($99)");
    }
}
