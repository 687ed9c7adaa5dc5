use shared::{submit_reset_password, validate_email, EmailError, LoginForm, SubmitOutcome};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::store::use_store;

const COMPONENT: &str = "reset-password";

#[derive(Properties, PartialEq)]
pub struct ResetPasswordModalProps {
    /// Id the store opened this modal under
    pub modal_id: u64,
    #[prop_or_default]
    pub initial_email: AttrValue,
}

#[function_component(ResetPasswordModal)]
pub fn reset_password_modal(props: &ResetPasswordModalProps) -> Html {
    let store = use_store();
    let api_client = use_context::<ApiClient>().unwrap_or_default();

    let email = use_state(|| props.initial_email.to_string());
    let email_error = use_state(|| Option::<EmailError>::None);
    let is_submitting = use_state(|| false);

    // Once an error is showing, re-check on every keystroke so it clears as
    // soon as the input is fixed
    let on_email_input = {
        let email = email.clone();
        let email_error = email_error.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            if email_error.is_some() {
                email_error.set(validate_email(&value).err());
            }
            email.set(value);
        })
    };

    let on_submit = {
        let email = email.clone();
        let email_error = email_error.clone();
        let is_submitting = is_submitting.clone();
        let store = store.clone();
        let modal_id = props.modal_id;

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_submitting {
                return;
            }

            let mut form = LoginForm::new((*email).clone());
            if let Err(error) = form.validate() {
                email_error.set(Some(error));
                return;
            }

            email_error.set(None);
            is_submitting.set(true);

            let email = email.clone();
            let email_error = email_error.clone();
            let is_submitting = is_submitting.clone();
            let store = store.clone();
            let api_client = api_client.clone();

            spawn_local(async move {
                let outcome = submit_reset_password(&mut form, &api_client).await;

                match &outcome {
                    SubmitOutcome::Rejected(error) => {
                        email_error.set(Some(*error));
                    }
                    SubmitOutcome::Sent { response, .. } => {
                        Logger::info_with_component(COMPONENT, &format!("Response: {}", response));
                    }
                    SubmitOutcome::Failed { error, .. } => {
                        Logger::error_with_component(COMPONENT, &format!("Error: {}", error));
                    }
                }

                email.set(form.email);
                is_submitting.set(false);
                for action in outcome.actions(modal_id) {
                    store.dispatch(action);
                }
            });
        })
    };

    html! {
        <div class="reset-password">
            <h3 class="reset-password-title">{"Forgot your password?"}</h3>
            <span class="reset-password-text">
                {"Enter the email you signed up with and we'll send you a link to reset your password."}
            </span>
            <form class="reset-password-form" onsubmit={on_submit} novalidate=true>
                <input
                    class="reset-password-input"
                    type="email"
                    name="email"
                    placeholder="Email"
                    value={(*email).clone()}
                    oninput={on_email_input}
                    disabled={*is_submitting}
                    autofocus=true
                />
                {if let Some(error) = *email_error {
                    html! {
                        <span class="reset-password-error">{error.to_string()}</span>
                    }
                } else {
                    html! {}
                }}
                <div class="reset-password-button">
                    <button type="submit" class="btn btn-primary" disabled={*is_submitting}>
                        {if *is_submitting {
                            "Sending..."
                        } else {
                            "Send reset link"
                        }}
                    </button>
                </div>
            </form>
        </div>
    }
}
