use yew::prelude::*;

/// Path of the page the app was loaded on, `/` when it can't be read
#[hook]
pub fn use_current_path() -> AttrValue {
    let path = use_memo((), |_| {
        gloo::utils::window()
            .location()
            .pathname()
            .unwrap_or_else(|_| "/".to_string())
    });
    AttrValue::from((*path).clone())
}
