use shared::{Action, ModalKind};
use web_sys::MouseEvent;
use yew::prelude::*;

use super::language_switcher::LanguageSwitcher;
use super::navigation::Navigation;
use crate::store::use_store;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    #[prop_or_default]
    pub current_path: AttrValue,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let store = use_store();
    let mobile_menu_open = use_state(|| false);

    let on_forgot_password = {
        let store = store.clone();
        Callback::from(move |_: MouseEvent| {
            store.dispatch(Action::OpenModal(ModalKind::reset_password()));
        })
    };

    let on_toggle_menu = {
        let mobile_menu_open = mobile_menu_open.clone();
        Callback::from(move |_: MouseEvent| mobile_menu_open.set(!*mobile_menu_open))
    };

    html! {
        <header class="header">
            <div class="container">
                <a class="header-logo" href="/">{"Bookti"}</a>
                <Navigation current_path={props.current_path.clone()} />
                <div class="header-right">
                    <LanguageSwitcher />
                    <button type="button" class="btn btn-link" onclick={on_forgot_password}>
                        {"Forgot password?"}
                    </button>
                    <button
                        type="button"
                        class="header-burger"
                        aria-label="Menu"
                        aria-expanded={(*mobile_menu_open).to_string()}
                        onclick={on_toggle_menu}
                    >
                        {"☰"}
                    </button>
                </div>
            </div>
            {if *mobile_menu_open {
                html! { <Navigation mobile=true current_path={props.current_path.clone()} /> }
            } else {
                html! {}
            }}
        </header>
    }
}
