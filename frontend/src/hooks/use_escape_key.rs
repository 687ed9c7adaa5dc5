use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

const ESCAPE_KEY: &str = "Escape";

pub fn is_escape(key: &str) -> bool {
    key == ESCAPE_KEY || key == "Esc"
}

/// Emit `on_escape` whenever Escape is pressed anywhere in the document.
///
/// The listener only exists while `enabled` is true and is removed on
/// unmount.
#[hook]
pub fn use_escape_key(enabled: bool, on_escape: Callback<()>) {
    use_effect_with(enabled, move |enabled| {
        let listener = enabled.then(|| {
            EventListener::new(&gloo::utils::document(), "keydown", move |event| {
                if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                    if is_escape(&event.key()) {
                        on_escape.emit(());
                    }
                }
            })
        });
        move || drop(listener)
    });
}
