use gloo_events::{EventListener, EventListenerOptions};
use yew::prelude::*;

/// Suppress the browser context menu while `disabled` is true.
#[hook]
pub fn use_context_menu(disabled: bool) {
    use_effect_with(disabled, |disabled| {
        let listener = disabled
            .then(web_sys::window)
            .flatten()
            .map(|window| {
                EventListener::new_with_options(
                    &window,
                    "contextmenu",
                    EventListenerOptions::enable_prevent_default(),
                    |event| event.prevent_default(),
                )
            });

        move || drop(listener)
    });
}
