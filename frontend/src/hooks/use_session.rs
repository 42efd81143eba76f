use shared::{Credentials, RegisterRequest};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_notifications::Notice;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::services::session_store;

const COMPONENT: &str = "use_session";

/// Identity of the authenticated user.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionUser {
    pub id: String,
    pub email: String,
}

/// Authentication state. Only `token` survives a reload; the rest is
/// rebuilt by the refresh action.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub is_auth: bool,
    pub is_refreshing: bool,
    pub token: Option<String>,
    pub user: Option<SessionUser>,
    pub error: Option<String>,
}

#[derive(Clone, PartialEq)]
pub struct UseSessionActions {
    pub register: Callback<RegisterRequest>,
    pub login: Callback<Credentials>,
    pub logout: Callback<()>,
    pub refresh: Callback<()>,
}

pub struct UseSessionResult {
    pub state: SessionState,
    pub actions: UseSessionActions,
}

/// Session container: register, login, logout, refresh.
///
/// `on_balance` receives the authoritative balance the auth endpoints
/// return; `on_logged_out` lets the caller clear finance state. Both keep
/// this hook from reaching into state it does not own.
#[hook]
pub fn use_session(
    api_client: &ApiClient,
    notify: &Callback<Notice>,
    on_balance: &Callback<f64>,
    on_logged_out: &Callback<()>,
) -> UseSessionResult {
    let is_auth = use_state(|| false);
    let is_refreshing = use_state(|| false);
    let token = use_state(session_store::load_token);
    let user = use_state(|| Option::<SessionUser>::None);
    let error = use_state(|| Option::<String>::None);

    let register = {
        let api_client = api_client.clone();
        let notify = notify.clone();
        let on_balance = on_balance.clone();
        let user = user.clone();
        let error = error.clone();

        use_callback(api_client.clone(), move |request: RegisterRequest, _| {
            let api_client = api_client.clone();
            let notify = notify.clone();
            let on_balance = on_balance.clone();
            let user = user.clone();
            let error = error.clone();

            spawn_local(async move {
                match api_client.register(&request).await {
                    Ok(response) => {
                        user.set(Some(SessionUser {
                            id: response.data.id,
                            email: response.data.email,
                        }));
                        error.set(None);
                        on_balance.emit(response.data.balance);
                        notify.emit(Notice::success("Registration successful."));
                    }
                    Err(message) => {
                        if message == "Email in use" {
                            notify.emit(Notice::failure(
                                "The provided email is already in use.",
                            ));
                        } else {
                            notify.emit(Notice::failure("Registration failed."));
                        }
                        error.set(Some(message));
                    }
                }
            });
        })
    };

    let login = {
        let api_client = api_client.clone();
        let notify = notify.clone();
        let on_balance = on_balance.clone();
        let is_auth = is_auth.clone();
        let token = token.clone();
        let user = user.clone();
        let error = error.clone();

        use_callback(api_client.clone(), move |credentials: Credentials, _| {
            let api_client = api_client.clone();
            let notify = notify.clone();
            let on_balance = on_balance.clone();
            let is_auth = is_auth.clone();
            let token = token.clone();
            let user = user.clone();
            let error = error.clone();

            spawn_local(async move {
                match api_client.login(&credentials).await {
                    Ok(response) => {
                        if let Some(granted) = response.data.token.as_deref() {
                            session_store::save_token(granted);
                        }
                        token.set(response.data.token.clone());
                        user.set(Some(SessionUser {
                            id: response.data.id,
                            email: response.data.email,
                        }));
                        is_auth.set(true);
                        error.set(None);
                        on_balance.emit(response.data.balance);
                        notify.emit(Notice::success("Logged in successfully."));
                    }
                    Err(message) => {
                        notify.emit(Notice::failure("Invalid email or password."));
                        error.set(Some(message));
                    }
                }
            });
        })
    };

    let logout = {
        let api_client = api_client.clone();
        let notify = notify.clone();
        let on_logged_out = on_logged_out.clone();
        let is_auth = is_auth.clone();
        let is_refreshing = is_refreshing.clone();
        let token = token.clone();
        let user = user.clone();
        let error = error.clone();

        use_callback(api_client.clone(), move |_, _| {
            let api_client = api_client.clone();
            let notify = notify.clone();
            let on_logged_out = on_logged_out.clone();
            let is_auth = is_auth.clone();
            let is_refreshing = is_refreshing.clone();
            let token = token.clone();
            let user = user.clone();
            let error = error.clone();

            // Snapshot the credential at dispatch time.
            let api_client = api_client.with_token((*token).clone());

            spawn_local(async move {
                match api_client.logout().await {
                    Ok(()) => {
                        session_store::clear_token();
                        is_auth.set(false);
                        is_refreshing.set(false);
                        token.set(None);
                        user.set(None);
                        error.set(None);
                        on_logged_out.emit(());
                        notify.emit(Notice::success("Logged out successfully."));
                    }
                    Err(message) => {
                        notify.emit(Notice::failure(message.clone()));
                        error.set(Some(message));
                    }
                }
            });
        })
    };

    let refresh = {
        let api_client = api_client.clone();
        let on_balance = on_balance.clone();
        let is_auth = is_auth.clone();
        let is_refreshing = is_refreshing.clone();
        let token = token.clone();
        let user = user.clone();
        let error = error.clone();

        use_callback(api_client.clone(), move |_, _| {
            // Without a persisted credential there is nothing to refresh.
            let Some(persisted) = (*token).clone() else {
                return;
            };

            let api_client = api_client.with_token(Some(persisted));
            let on_balance = on_balance.clone();
            let is_auth = is_auth.clone();
            let is_refreshing = is_refreshing.clone();
            let token = token.clone();
            let user = user.clone();
            let error = error.clone();

            spawn_local(async move {
                is_refreshing.set(true);

                match api_client.refresh_user().await {
                    Ok(response) => {
                        if let Some(granted) = response.data.token.as_deref() {
                            session_store::save_token(granted);
                            token.set(response.data.token.clone());
                        }
                        user.set(Some(SessionUser {
                            id: response.data.id,
                            email: response.data.email,
                        }));
                        is_auth.set(true);
                        error.set(None);
                        on_balance.emit(response.data.balance);
                        Logger::info_with_component(
                            COMPONENT,
                            "Session restored from stored credential",
                        );
                    }
                    Err(message) => {
                        // Expired credentials land here on startup; not a toast.
                        Logger::warn_with_component(COMPONENT, &message);
                    }
                }

                is_refreshing.set(false);
            });
        })
    };

    let state = SessionState {
        is_auth: *is_auth,
        is_refreshing: *is_refreshing,
        token: (*token).clone(),
        user: (*user).clone(),
        error: (*error).clone(),
    };

    let actions = UseSessionActions {
        register,
        login,
        logout,
        refresh,
    };

    UseSessionResult { state, actions }
}
