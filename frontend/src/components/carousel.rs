use web_sys::MouseEvent;
use yew::prelude::*;

pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (current + 1) % len
}

pub fn prev_index(current: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (current + len - 1) % len
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Visual {
    Video,
    Post,
    LinkInBio,
    Assets,
}

struct Slide {
    label: &'static str,
    title: &'static str,
    badge: &'static str,
    copy: &'static str,
    visual: Visual,
}

const SLIDES: &[Slide] = &[
    Slide {
        label: "Final Video",
        title: "TikTok-Ready Content",
        badge: "9:16 Vertical",
        copy: "The creator shoots a high-quality, vertical video featuring all products in the haul.",
        visual: Visual::Video,
    },
    Slide {
        label: "Distribution",
        title: "Guaranteed Eyes on Your Brand",
        badge: "Creator Posted",
        copy: "The creator posts the video to their feed, putting your brand in front of thousands of potential shoppers.",
        visual: Visual::Post,
    },
    Slide {
        label: "Traffic",
        title: "Shoppable Link-in-Bio",
        badge: "Click Tracking Included",
        copy: "We build a dedicated \"Shop the Haul\" landing page for every video. Viewers can click straight to your website to shop.",
        visual: Visual::LinkInBio,
    },
    Slide {
        label: "Ownership",
        title: "Ad-Ready Assets",
        badge: "100% Usage Rights",
        copy: "You own the raw video file forever. Run it as a Meta Ad, embed it on your website, or use it in email campaigns without extra licensing fees.",
        visual: Visual::Assets,
    },
];

fn render_visual(visual: Visual) -> Html {
    match visual {
        Visual::Video => html! {
            <div class="mock-phone">
                <div class="mock-status"><span>{"9:41"}</span></div>
                <video
                    class="mock-video"
                    autoplay=true
                    muted=true
                    playsinline=true
                    poster="https://images.unsplash.com/photo-1556905055-8f358a7a47b2?q=80&w=800&auto=format&fit=crop"
                >
                    <source src="https://videos.pexels.com/video-files/4450209/4450209-hd_720_1280_25fps.mp4" type="video/mp4" />
                </video>
                <div class="mock-caption">
                    <strong>{"@SarahFinds"}</strong>
                    <p>{"Unboxing this month's discovery box! So many cool finds inside 📦 ✨ #haul #unboxing"}</p>
                </div>
            </div>
        },
        Visual::Post => html! {
            <div class="mock-post">
                <div class="mock-post-header">
                    <img src="https://i.pravatar.cc/100?img=5" alt="" />
                    <div>
                        <strong>{"SarahFinds"}</strong>
                        <span>{"Toronto, Canada"}</span>
                    </div>
                </div>
                <div class="mock-post-image"><span class="mock-views">{"12.5k Views"}</span></div>
                <div class="mock-post-footer">
                    <strong>{"842 likes"}</strong>
                    <p><strong>{"SarahFinds"}</strong>{" obsessed with these new goodies..."}</p>
                </div>
                <div class="mock-tooltip">{"Link in Bio"}</div>
            </div>
        },
        Visual::LinkInBio => html! {
            <div class="mock-phone mock-links">
                <div class="mock-status"><span>{"9:41"}</span></div>
                <img class="mock-avatar" src="https://i.pravatar.cc/100?img=5" alt="" />
                <strong>{"@SarahFinds Picks"}</strong>
                <div class="mock-link">{"Shop Brand A "}<span>{"Skincare"}</span></div>
                <div class="mock-link">{"Shop Brand B "}<span>{"Candle"}</span></div>
                <div class="mock-link">{"Shop Brand C "}<span>{"Snacks"}</span></div>
                <div class="mock-clicks">{"124 Clicks Today"}</div>
            </div>
        },
        Visual::Assets => html! {
            <div class="mock-assets">
                <div class="mock-file">
                    <div>
                        <strong>{"final_haul_video.mp4"}</strong>
                        <span>{"48.2 MB • H.264"}</span>
                    </div>
                    <span class="mock-download">{"↓"}</span>
                </div>
                <div class="mock-ad">
                    <span class="mock-sponsored">{"Sponsored"}</span>
                    <div class="mock-ad-body"></div>
                    <div class="mock-ad-cta">{"Shop Now"}</div>
                </div>
            </div>
        },
    }
}

/// What a brand receives, one slide per deliverable.
#[function_component(DeliverablesCarousel)]
pub fn deliverables_carousel() -> Html {
    let current = use_state(|| 0usize);
    let slide = &SLIDES[*current % SLIDES.len()];

    let on_prev = {
        let current = current.clone();
        Callback::from(move |_: MouseEvent| current.set(prev_index(*current, SLIDES.len())))
    };
    let on_next = {
        let current = current.clone();
        Callback::from(move |_: MouseEvent| current.set(next_index(*current, SLIDES.len())))
    };

    html! {
        <div class="carousel">
            <div class="carousel-bar">
                <span>{format!("Preview: {}", slide.label)}</span>
            </div>
            <div class="carousel-body">
                <button class="carousel-arrow prev" onclick={on_prev} aria-label="Previous slide">{"‹"}</button>
                <button class="carousel-arrow next" onclick={on_next} aria-label="Next slide">{"›"}</button>
                <div class="carousel-visual" key={*current}>
                    {render_visual(slide.visual)}
                </div>
                <div class="carousel-text">
                    <div class="carousel-badge">{slide.badge}</div>
                    <h3>{slide.title}</h3>
                    <p>{slide.copy}</p>
                    <div class="carousel-dots">
                        { for (0..SLIDES.len()).map(|idx| {
                            let setter = current.clone();
                            let onclick = Callback::from(move |_: MouseEvent| setter.set(idx));
                            html! {
                                <button
                                    key={idx}
                                    class={classes!("carousel-dot", (idx == *current).then(|| "active"))}
                                    aria-label={format!("Go to slide {}", idx + 1)}
                                    onclick={onclick}
                                />
                            }
                        }) }
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_wrap_both_ways() {
        assert_eq!(next_index(3, 4), 0);
        assert_eq!(prev_index(0, 4), 3);
        assert_eq!(next_index(1, 4), 2);
        assert_eq!(prev_index(2, 4), 1);
    }

    #[test]
    fn empty_carousel_stays_at_zero() {
        assert_eq!(next_index(0, 0), 0);
        assert_eq!(prev_index(0, 0), 0);
    }

    #[test]
    fn four_deliverables() {
        assert_eq!(SLIDES.len(), 4);
        assert_eq!(SLIDES[3].badge, "100% Usage Rights");
    }
}
