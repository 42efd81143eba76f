mod components;
mod hooks;
mod services;

use yew::prelude::*;

use components::forms::{LoginForm, RegisterForm};
use components::modals::{AddTransactionModal, EditTransactionModal, LogoutModal};
use components::{CurrencyTab, Header, HomeTab, Loader, Navigation, NoticeToast, StatisticsTab, Tab};
use hooks::use_finance::use_finance;
use hooks::use_modal::{use_modal, ModalState};
use hooks::use_notifications::use_notifications;
use hooks::use_session::use_session;
use services::api::ApiClient;
use services::session_store;

#[function_component(App)]
fn app() -> Html {
    let notifications = use_notifications();
    let active_tab = use_state(|| Tab::Home);
    let show_register = use_state(|| false);

    // Token mirror, so transaction requests carry the current credential.
    // use_session owns the authoritative copy and this effect follows it.
    let token = use_state(session_store::load_token);

    let base_client = ApiClient::new();
    let authed_client = base_client.with_token((*token).clone());

    let finance = use_finance(&authed_client, &notifications.notify);
    let session = use_session(
        &base_client,
        &notifications.notify,
        &finance.actions.set_balance,
        &finance.actions.reset,
    );
    let modal = use_modal();

    {
        let token = token.clone();
        use_effect_with(session.state.token.clone(), move |session_token| {
            if *token != *session_token {
                token.set(session_token.clone());
            }
        });
    }

    // Restore the session from the persisted token on startup.
    {
        let refresh = session.actions.refresh.clone();
        use_effect_with((), move |_| {
            refresh.emit(());
        });
    }

    // Load transactions once the session and the token mirror agree.
    {
        let fetch = finance.actions.fetch.clone();
        let user_id = session.state.user.as_ref().map(|user| user.id.clone());
        use_effect_with(
            (session.state.is_auth, user_id, (*token).clone()),
            move |(is_auth, user_id, token)| {
                if *is_auth && token.is_some() {
                    if let Some(id) = user_id {
                        fetch.emit(id.clone());
                    }
                }
            },
        );
    }

    let on_tab_select = {
        let active_tab = active_tab.clone();
        Callback::from(move |tab: Tab| {
            active_tab.set(tab);
        })
    };

    let on_add_click = {
        let open = modal.open.clone();
        Callback::from(move |_| {
            open.emit(ModalState::AddTransaction);
        })
    };

    let on_edit_click = {
        let open = modal.open.clone();
        Callback::from(move |id: String| {
            open.emit(ModalState::EditTransaction(id));
        })
    };

    let on_logout_click = {
        let open = modal.open.clone();
        Callback::from(move |_| {
            open.emit(ModalState::Logout);
        })
    };

    let on_logout_confirm = {
        let logout = session.actions.logout.clone();
        let close = modal.close.clone();
        Callback::from(move |_| {
            logout.emit(());
            close.emit(());
        })
    };

    let on_switch_to_register = {
        let show_register = show_register.clone();
        Callback::from(move |_| {
            show_register.set(true);
        })
    };

    let on_switch_to_login = {
        let show_register = show_register.clone();
        Callback::from(move |_| {
            show_register.set(false);
        })
    };

    let modal_html = match &modal.state {
        ModalState::None => html! {},
        ModalState::AddTransaction => html! {
            <AddTransactionModal
                is_open={true}
                on_submit={finance.actions.add.clone()}
                on_close={modal.close.clone()}
            />
        },
        ModalState::EditTransaction(id) => {
            match finance.state.data.iter().find(|t| t.id == *id) {
                Some(transaction) => html! {
                    <EditTransactionModal
                        transaction={transaction.clone()}
                        on_submit={finance.actions.update.clone()}
                        on_close={modal.close.clone()}
                    />
                },
                // The row was deleted while the modal was opening.
                None => html! {},
            }
        }
        ModalState::Logout => html! {
            <LogoutModal
                on_confirm={on_logout_confirm}
                on_close={modal.close.clone()}
            />
        },
    };

    let body = if session.state.is_refreshing {
        html! { <Loader /> }
    } else if session.state.is_auth {
        html! {
            <>
                <Header
                    email={session.state.user.as_ref().map(|user| user.email.clone())}
                    on_logout_click={on_logout_click}
                />
                <Navigation active={*active_tab} on_select={on_tab_select} />
                {
                    match *active_tab {
                        Tab::Home => html! {
                            <HomeTab
                                transactions={finance.state.data.clone()}
                                total_balance={finance.state.total_balance}
                                loading={finance.state.loading}
                                on_add={on_add_click}
                                on_edit={on_edit_click}
                                on_delete={finance.actions.delete.clone()}
                            />
                        },
                        Tab::Statistics => html! {
                            <StatisticsTab transactions={finance.state.data.clone()} />
                        },
                        Tab::Currency => html! { <CurrencyTab /> },
                    }
                }
                { modal_html }
            </>
        }
    } else if *show_register {
        html! {
            <RegisterForm
                on_submit={session.actions.register.clone()}
                on_switch_to_login={on_switch_to_login}
            />
        }
    } else {
        html! {
            <LoginForm
                on_submit={session.actions.login.clone()}
                on_switch_to_register={on_switch_to_register}
            />
        }
    };

    html! {
        <div class="app">
            { body }
            <NoticeToast notice={notifications.current.clone()} />
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
