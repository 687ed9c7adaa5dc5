use std::ops::Deref;
use std::rc::Rc;

use shared::{Action, RootState};
use yew::prelude::*;

use crate::services::{logging::Logger, persistence};

/// Reducer container around [`RootState`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Store {
    state: RootState,
}

impl Store {
    pub fn new(state: RootState) -> Self {
        Self { state }
    }
}

impl Deref for Store {
    type Target = RootState;

    fn deref(&self) -> &RootState {
        &self.state
    }
}

impl Reducible for Store {
    type Action = Action;

    fn reduce(self: Rc<Self>, action: Action) -> Rc<Self> {
        Rc::new(Store::new(self.state.clone().apply(action)))
    }
}

/// Handle components receive from context; dispatching on it is the only way
/// to change application state
pub type StoreHandle = UseReducerHandle<Store>;

#[derive(Properties, PartialEq)]
pub struct StoreProviderProps {
    #[prop_or_default]
    pub children: Html,
}

/// Owns the store, rehydrates it on mount and writes persisted slices back on
/// every change.
#[function_component(StoreProvider)]
pub fn store_provider(props: &StoreProviderProps) -> Html {
    let store = use_reducer(|| Store::new(RootState::init(persistence::load())));

    use_effect_with(store.preferences.clone(), {
        let store = store.clone();
        move |preferences| {
            persistence::save(&store.persisted());
            if let Some(root) = gloo::utils::document().document_element() {
                if let Err(e) = root.set_attribute("lang", preferences.language.code()) {
                    Logger::warn_with_component("store", &format!("Failed to set lang: {:?}", e));
                }
            }
            || ()
        }
    });

    html! {
        <ContextProvider<StoreHandle> context={store}>
            {props.children.clone()}
        </ContextProvider<StoreHandle>>
    }
}

/// The store provided by the nearest [`StoreProvider`].
#[hook]
pub fn use_store() -> StoreHandle {
    use_context::<StoreHandle>().expect("use_store called outside of StoreProvider")
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ModalKind;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_reduce_applies_actions() {
        let store = Rc::new(Store::default());
        let store = store.reduce(Action::OpenModal(ModalKind::reset_password()));
        assert!(store.modal.is_open());

        let store = store.reduce(Action::CloseModal);
        assert!(!store.modal.is_open());
    }

    #[wasm_bindgen_test]
    fn test_deref_exposes_root_state() {
        let store = Store::new(RootState::default());
        assert_eq!(store.notice, None);
    }
}
