use shared::{Action, Language};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::store::use_store;

#[function_component(LanguageSwitcher)]
pub fn language_switcher() -> Html {
    let store = use_store();
    let current = store.preferences.language;

    let on_change = {
        let store = store.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(language) = Language::from_code(&select.value()) {
                store.dispatch(Action::SetLanguage(language));
            }
        })
    };

    html! {
        <select class="language-switcher" aria-label="Language" onchange={on_change}>
            {for Language::ALL.into_iter().map(|language| html! {
                <option value={language.code()} selected={language == current}>
                    {language.label()}
                </option>
            })}
        </select>
    }
}
