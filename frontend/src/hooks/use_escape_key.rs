use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{window, KeyboardEvent};
use yew::prelude::*;

use crate::services::logging::Logger;

const ESCAPE_KEY: &str = "Escape";

/// Emits `on_escape` for every Escape keydown on the document while `active`.
///
/// The listener lives inside the effect, so it is removed as soon as `active`
/// turns false or the component unmounts.
#[hook]
pub fn use_escape_key(active: bool, on_escape: Callback<()>) {
    use_effect_with((active, on_escape), |(active, on_escape)| {
        let listener = if *active {
            attach_listener(on_escape.clone())
        } else {
            None
        };

        move || {
            if listener.is_some() {
                Logger::debug_with_component("escape-key", "keydown listener detached");
            }
            drop(listener);
        }
    });
}

fn attach_listener(on_escape: Callback<()>) -> Option<EventListener> {
    let Some(document) = window().and_then(|w| w.document()) else {
        Logger::warn_with_component("escape-key", "No document, Escape listener not attached");
        return None;
    };

    Logger::debug_with_component("escape-key", "keydown listener attached");
    Some(EventListener::new(&document, "keydown", move |event| {
        let is_escape = event
            .dyn_ref::<KeyboardEvent>()
            .map(|e| e.key() == ESCAPE_KEY)
            .unwrap_or(false);
        if is_escape {
            on_escape.emit(());
        }
    }))
}
