use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use super::app::use_app_context;
use crate::state::SequenceDetector;

/// Window-level keydown watcher for the Konami Code. Renders nothing.
#[function_component(KonamiListener)]
pub fn konami_listener() -> Html {
    let ctx = use_app_context();
    let id = ctx.config.triggers.konami;

    use_effect_with(ctx.tracker.clone(), move |tracker| {
        let tracker = tracker.clone();
        let window = web_sys::window();
        let mut detector = SequenceDetector::konami();
        let keydown_cb = Closure::wrap(Box::new(move |e: KeyboardEvent| {
            if detector.push(&e.key()) {
                tracker.record(id);
            }
        }) as Box<dyn FnMut(KeyboardEvent)>);
        if let Some(win) = &window {
            let _ = win
                .add_event_listener_with_callback("keydown", keydown_cb.as_ref().unchecked_ref());
        }
        move || {
            if let Some(win) = window {
                let _ = win.remove_event_listener_with_callback(
                    "keydown",
                    keydown_cb.as_ref().unchecked_ref(),
                );
            }
            drop(keydown_cb);
        }
    });

    html! {}
}
