use yew::prelude::*;

use crate::hooks::use_notifications::{Notice, NoticeKind};

#[derive(Properties, PartialEq)]
pub struct NoticeToastProps {
    pub notice: Option<Notice>,
}

/// Transient banner for operation outcomes; auto-cleared by the
/// notifications hook.
#[function_component(NoticeToast)]
pub fn notice_toast(props: &NoticeToastProps) -> Html {
    let Some(notice) = &props.notice else {
        return html! {};
    };

    let class = match notice.kind {
        NoticeKind::Success => "toast toast-success",
        NoticeKind::Failure => "toast toast-failure",
    };

    html! {
        <div class={class} role="status">
            {&notice.message}
        </div>
    }
}
