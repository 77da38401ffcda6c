use gloo_console::error;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Vertical scroll offset of the page, 0 outside a browser.
pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Hands a `mailto:` (or any) link to the browser's default handler.
pub fn hand_off(href: &str) {
    let Some(window) = web_sys::window() else {
        error!("No window available for handoff");
        return;
    };
    if let Err(e) = window.location().set_href(href) {
        error!("Failed to open link:", e);
    }
}

/// True while the page is scrolled further than `threshold` pixels.
#[hook]
pub fn use_scrolled(threshold: f64) -> bool {
    let scrolled = use_state_eq(|| false);
    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |threshold| {
                let threshold = *threshold;
                let update = move || scrolled.set(scroll_y() > threshold);
                // Initial call
                update();
                let callback = Closure::<dyn Fn()>::new(update);
                if let Some(window) = web_sys::window() {
                    if let Err(e) = window
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                    {
                        error!("Failed to watch scroll position:", e);
                    }
                }
                move || {
                    if let Some(window) = web_sys::window() {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            threshold,
        );
    }
    *scrolled
}
