use gloo::timers::callback::Timeout;
use shared::{Action, NoticeLevel};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::store::use_store;

const AUTO_DISMISS_MS: u32 = 6000;

/// Outcome banner for the last user action; dismisses itself after a few
/// seconds
#[function_component(NoticeBanner)]
pub fn notice_banner() -> Html {
    let store = use_store();
    let notice = store.notice.clone();

    use_effect_with(notice.clone(), {
        let store = store.clone();
        move |notice| {
            let timeout = notice.is_some().then(|| {
                Timeout::new(AUTO_DISMISS_MS, move || store.dispatch(Action::DismissNotice))
            });
            move || drop(timeout)
        }
    });

    let Some(notice) = notice else {
        return html! {};
    };

    let on_dismiss = {
        let store = store.clone();
        Callback::from(move |_: MouseEvent| store.dispatch(Action::DismissNotice))
    };

    let level_class = match notice.level {
        NoticeLevel::Success => "success",
        NoticeLevel::Error => "error",
    };
    let role = match notice.level {
        NoticeLevel::Success => "status",
        NoticeLevel::Error => "alert",
    };

    html! {
        <div class={classes!("notice", level_class)} role={role}>
            <span class="notice-message">{notice.message}</span>
            <button type="button" class="notice-dismiss" aria-label="Dismiss" onclick={on_dismiss}>
                {"X"}
            </button>
        </div>
    }
}
