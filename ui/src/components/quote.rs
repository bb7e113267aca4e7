use dioxus::prelude::*;

use crate::core::config::{QUOTE_ROTATION_MS, QUOTE_TYPING_TICK_MS};
use crate::core::quotes::QuoteRotation;
use crate::hooks::use_scheduled_task;

/// Rotating quote with a typewriter reveal. Both timers stop on unmount.
#[component]
pub fn QuoteTicker() -> Element {
    let rotation = use_signal(QuoteRotation::random);
    let typing = use_scheduled_task();
    let rotating = use_scheduled_task();

    use_hook(move || {
        typing.schedule_repeating(QUOTE_TYPING_TICK_MS, move || {
            let mut rotation = rotation;
            if rotation.peek().is_typing() {
                rotation.write().type_next();
            }
        });
        rotating.schedule_repeating(QUOTE_ROTATION_MS, move || {
            let mut rotation = rotation;
            rotation.write().advance();
        });
    });

    let state = rotation();
    let quote = state.current();
    let text = state.visible_text();

    rsx! {
        figure { class: "quote-ticker", aria_label: "{quote.display_text()}",
            blockquote { class: "quote-ticker__text",
                "{text}"
                if state.is_typing() {
                    span { class: "quote-ticker__caret", aria_hidden: "true", "|" }
                }
            }
        }
    }
}
