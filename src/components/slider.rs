//! Gift Slider Component
//!
//! Horizontally scrolling strip of gift ideas with left/right arrows.
//! The strip is re-measured and rewound whenever the viewport width changes.

use std::rc::Rc;

use dioxus::prelude::*;
use giftshop_core::{SliderConfig, SliderState};
use giftshop_ui::{Button, ButtonVariant};

use crate::context::use_viewport;

/// Slides of the strip: caption and picture
const SLIDES: [(&str, &str); 4] = [
    ("Live", "assets/home/slider/slide-live.png"),
    ("Create", "assets/home/slider/slide-create.png"),
    ("Love", "assets/home/slider/slide-love.png"),
    ("Dream", "assets/home/slider/slide-dream.png"),
];

#[component]
pub fn GiftSlider() -> Element {
    let viewport = use_viewport();
    let config = SliderConfig::default();
    let mut slider = use_signal(SliderState::default);
    let mut window: Signal<Option<Rc<MountedData>>> = use_signal(|| None);
    let mut strip: Signal<Option<Rc<MountedData>>> = use_signal(|| None);

    // Runs on mount and again on every width change
    use_effect(move || {
        let width = (viewport.width)();
        let (Some(window), Some(strip)) = (window(), strip()) else {
            return;
        };
        spawn(async move {
            let (Ok(view), Ok(content)) = (window.get_client_rect().await, strip.get_scroll_size().await)
            else {
                return;
            };
            let measured = SliderState::measure(&config, content.width, view.width());
            tracing::debug!(
                viewport = width,
                overflow = measured.overflow(),
                step = measured.step(),
                "Slider measured"
            );
            slider.set(measured);
        });
    });

    let state = slider();

    rsx! {
        section { class: "slider",
            h2 { class: "h2 slider__title", "Become unstoppable" }

            div {
                class: "slider__window",
                onmounted: move |evt| window.set(Some(evt.data())),
                div {
                    class: "slider__items",
                    style: "{state.style()}",
                    onmounted: move |evt| strip.set(Some(evt.data())),
                    for (caption, picture) in SLIDES {
                        div { key: "{caption}", class: "slider__item",
                            span { class: "slider__caption", "{caption}" }
                            img { class: "slider__picture", src: "{picture}", alt: "{caption}" }
                        }
                    }
                }
            }

            div { class: "slider__controls",
                Button {
                    variant: ButtonVariant::Arrow,
                    disabled: state.at_start(),
                    label: "Scroll left".to_string(),
                    class: "slider__left".to_string(),
                    onclick: move |_: ()| slider.write().scroll_left(),
                    "\u{2190}"
                }
                Button {
                    variant: ButtonVariant::Arrow,
                    disabled: state.at_end(),
                    label: "Scroll right".to_string(),
                    class: "slider__right".to_string(),
                    onclick: move |_: ()| slider.write().scroll_right(),
                    "\u{2192}"
                }
            }
        }
    }
}
