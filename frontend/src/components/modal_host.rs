use shared::{dismiss_action, DismissTrigger, ModalKind};
use web_sys::MouseEvent;
use yew::prelude::*;

use super::reset_password_modal::ResetPasswordModal;
use crate::hooks::use_escape_key;
use crate::services::logging::Logger;
use crate::store::use_store;

#[derive(Properties, PartialEq)]
pub struct ModalHostProps {
    /// Notified after a dismiss gesture closed the modal
    #[prop_or_default]
    pub on_dismiss: Callback<DismissTrigger>,
}

/// Single mount point for every modal in the app.
///
/// Renders nothing while the modal slot is closed. The backdrop, the close
/// button and Escape each close it once; clicks inside the body don't.
/// Each open mounts a fresh modal, so reopening always starts from the props
/// it was opened with.
#[function_component(ModalHost)]
pub fn modal_host(props: &ModalHostProps) -> Html {
    let store = use_store();
    let is_open = store.modal.is_open();

    let on_dismiss = {
        let store = store.clone();
        let notify = props.on_dismiss.clone();
        Callback::from(move |trigger: DismissTrigger| {
            if let Some(action) = dismiss_action(trigger) {
                Logger::debug_with_component("modal-host", &format!("Dismissed via {:?}", trigger));
                store.dispatch(action);
                notify.emit(trigger);
            }
        })
    };

    use_escape_key(is_open, on_dismiss.reform(|_| DismissTrigger::EscapeKey));

    let (Some(kind), Some(id)) = (store.modal.current(), store.modal.open_id()) else {
        return html! {};
    };

    let on_backdrop_click = on_dismiss.reform(|e: MouseEvent| {
        e.stop_propagation();
        DismissTrigger::Backdrop
    });

    let on_content_click = on_dismiss.reform(|e: MouseEvent| {
        e.stop_propagation();
        DismissTrigger::Content
    });

    let on_close_click = on_dismiss.reform(|e: MouseEvent| {
        e.stop_propagation();
        DismissTrigger::CloseButton
    });

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div
                class="modal-content"
                role="dialog"
                aria-modal="true"
                data-modal={kind.key()}
                onclick={on_content_click}
            >
                <button type="button" class="modal-close" aria-label="Close" onclick={on_close_click}>
                    {"X"}
                </button>
                {render_modal(kind, id)}
            </div>
        </div>
    }
}

fn render_modal(kind: &ModalKind, id: u64) -> Html {
    match kind {
        ModalKind::ResetPassword(props) => html! {
            <ResetPasswordModal
                key={id}
                modal_id={id}
                initial_email={props.initial_email.clone()}
            />
        },
    }
}
