use gloo::timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// How long a toast stays on screen.
const NOTICE_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

/// A transient user-facing notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Failure,
            message: message.into(),
        }
    }
}

pub struct UseNotificationsResult {
    pub current: Option<Notice>,
    pub notify: Callback<Notice>,
}

/// Toast state with auto-clear. A new notice replaces the current one and
/// restarts nothing; the earliest pending timer wins, which matches the
/// short-lived nature of these messages.
#[hook]
pub fn use_notifications() -> UseNotificationsResult {
    let current = use_state(|| Option::<Notice>::None);

    let notify = {
        let current = current.clone();
        use_callback((), move |notice: Notice, _| {
            current.set(Some(notice));

            let current = current.clone();
            spawn_local(async move {
                TimeoutFuture::new(NOTICE_MS).await;
                current.set(None);
            });
        })
    };

    UseNotificationsResult {
        current: (*current).clone(),
        notify,
    }
}
