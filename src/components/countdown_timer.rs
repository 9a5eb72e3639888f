//! Countdown Timer Component
//!
//! Days, hours, minutes and seconds until the configured target, ticking
//! once per second. Stops at zero.

use chrono::Utc;
use dioxus::prelude::*;

use crate::context::get_settings;

#[component]
pub fn CountdownTimer() -> Element {
    let countdown = use_hook(|| get_settings().countdown);
    let mut parts = use_signal(|| countdown.remaining(Utc::now()));

    use_effect(move || {
        spawn(async move {
            while !countdown.is_finished(Utc::now()) {
                tokio::time::sleep(std::time::Duration::from_secs(1)).await;
                parts.set(countdown.remaining(Utc::now()));
            }
            tracing::info!(target_time = %countdown.target(), "Countdown finished");
        });
    });

    let current = parts();
    let slots = [
        (current.days, "days"),
        (current.hours, "hours"),
        (current.minutes, "minutes"),
        (current.seconds, "seconds"),
    ];

    rsx! {
        div { class: "countdown",
            for (value, unit) in slots {
                div { key: "{unit}", class: "countdown__slot",
                    span { class: "countdown__value", "{value}" }
                    span { class: "countdown__unit", "{unit}" }
                }
            }
        }
    }
}
