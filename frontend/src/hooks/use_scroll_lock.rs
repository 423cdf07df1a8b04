use web_sys::window;
use yew::prelude::*;

use crate::services::logging::Logger;

const LOCKED: &str = "hidden";
const UNLOCKED: &str = "unset";

/// Disables document scrolling while `locked` is true.
///
/// The body overflow is written back to `unset` whenever `locked` changes and
/// when the owning component unmounts. The lock is not counted: one modal
/// closing releases it even if another one is still open.
#[hook]
pub fn use_scroll_lock(locked: bool) {
    use_effect_with(locked, |locked| {
        set_body_overflow(if *locked { LOCKED } else { UNLOCKED });
        || set_body_overflow(UNLOCKED)
    });
}

fn set_body_overflow(value: &str) {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        Logger::warn_with_component("scroll-lock", "No document body, scroll lock skipped");
        return;
    };

    match body.style().set_property("overflow", value) {
        Ok(()) => Logger::debug_with_component("scroll-lock", &format!("body overflow -> {}", value)),
        Err(e) => Logger::error_with_component(
            "scroll-lock",
            &format!("Failed to set body overflow to {}: {:?}", value, e),
        ),
    }
}
