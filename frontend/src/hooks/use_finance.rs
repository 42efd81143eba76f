use shared::{NewTransactionRequest, Transaction, UpdateTransactionRequest};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_notifications::Notice;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

const COMPONENT: &str = "use_finance";

/// Transaction list and balance as mirrored from the backend.
///
/// `total_balance` is only ever adopted from server responses, never
/// recomputed from `data`.
#[derive(Debug, Clone, PartialEq)]
pub struct FinanceState {
    pub total_balance: f64,
    pub data: Vec<Transaction>,
    pub error: Option<String>,
    pub loading: bool,
}

#[derive(Clone, PartialEq)]
pub struct UseFinanceActions {
    /// Fetch the transaction list for a user id.
    pub fetch: Callback<String>,
    pub add: Callback<NewTransactionRequest>,
    pub update: Callback<UpdateTransactionRequest>,
    pub delete: Callback<String>,
    /// Adopt a balance reported by an auth endpoint.
    pub set_balance: Callback<f64>,
    /// Clear everything on logout.
    pub reset: Callback<()>,
}

pub struct UseFinanceResult {
    pub state: FinanceState,
    pub actions: UseFinanceActions,
}

/// Finance container. `api_client` must already carry the caller's
/// credential snapshot.
#[hook]
pub fn use_finance(api_client: &ApiClient, notify: &Callback<Notice>) -> UseFinanceResult {
    let total_balance = use_state(|| 0.0f64);
    let data = use_state(Vec::<Transaction>::new);
    let error = use_state(|| Option::<String>::None);
    let loading = use_state(|| false);

    let fetch = {
        let api_client = api_client.clone();
        let notify = notify.clone();
        let data = data.clone();
        let error = error.clone();
        let loading = loading.clone();

        use_callback(api_client.clone(), move |user_id: String, _| {
            let api_client = api_client.clone();
            let notify = notify.clone();
            let data = data.clone();
            let error = error.clone();
            let loading = loading.clone();

            spawn_local(async move {
                loading.set(true);

                match api_client.fetch_transactions(&user_id).await {
                    Ok(response) => {
                        error.set(None);
                        data.set(response.data);
                    }
                    Err(message) => {
                        Logger::error_with_component(COMPONENT, &message);
                        notify.emit(Notice::failure(message.clone()));
                        error.set(Some(message));
                    }
                }

                loading.set(false);
            });
        })
    };

    let add = {
        let api_client = api_client.clone();
        let notify = notify.clone();
        let total_balance = total_balance.clone();
        let data = data.clone();
        let error = error.clone();

        use_callback(api_client.clone(), move |request: NewTransactionRequest, _| {
            let api_client = api_client.clone();
            let notify = notify.clone();
            let total_balance = total_balance.clone();
            let data = data.clone();
            let error = error.clone();

            spawn_local(async move {
                match api_client.add_transaction(&request).await {
                    Ok(response) => {
                        let mut next = (*data).clone();
                        next.push(response.data);
                        data.set(next);
                        total_balance.set(response.user_balance);
                        error.set(None);
                        notify.emit(Notice::success("Transaction added successfully."));
                    }
                    Err(message) => {
                        Logger::error_with_component(COMPONENT, &message);
                        notify.emit(Notice::failure(message.clone()));
                        error.set(Some(message));
                    }
                }
            });
        })
    };

    let update = {
        let api_client = api_client.clone();
        let notify = notify.clone();
        let total_balance = total_balance.clone();
        let data = data.clone();
        let error = error.clone();

        use_callback(
            api_client.clone(),
            move |request: UpdateTransactionRequest, _| {
                let api_client = api_client.clone();
                let notify = notify.clone();
                let total_balance = total_balance.clone();
                let data = data.clone();
                let error = error.clone();

                spawn_local(async move {
                    match api_client.update_transaction(&request).await {
                        Ok(response) => {
                            let mut next = (*data).clone();
                            if let Some(slot) =
                                next.iter_mut().find(|tx| tx.id == response.data.id)
                            {
                                *slot = response.data;
                            }
                            data.set(next);
                            total_balance.set(response.user_balance);
                            error.set(None);
                            notify.emit(Notice::success("Transaction updated successfully."));
                        }
                        Err(message) => {
                            Logger::error_with_component(COMPONENT, &message);
                            notify.emit(Notice::failure(message.clone()));
                            error.set(Some(message));
                        }
                    }
                });
            },
        )
    };

    let delete = {
        let api_client = api_client.clone();
        let notify = notify.clone();
        let total_balance = total_balance.clone();
        let data = data.clone();
        let error = error.clone();

        use_callback(api_client.clone(), move |id: String, _| {
            let api_client = api_client.clone();
            let notify = notify.clone();
            let total_balance = total_balance.clone();
            let data = data.clone();
            let error = error.clone();

            spawn_local(async move {
                match api_client.delete_transaction(&id).await {
                    Ok(response) => {
                        let mut next = (*data).clone();
                        next.retain(|tx| tx.id != response.data.id);
                        data.set(next);
                        total_balance.set(response.user_balance);
                        error.set(None);
                        notify.emit(Notice::success("Transaction deleted successfully."));
                    }
                    Err(message) => {
                        Logger::error_with_component(COMPONENT, &message);
                        notify.emit(Notice::failure(message.clone()));
                        error.set(Some(message));
                    }
                }
            });
        })
    };

    let set_balance = {
        let total_balance = total_balance.clone();
        use_callback((), move |balance: f64, _| {
            total_balance.set(balance);
        })
    };

    let reset = {
        let total_balance = total_balance.clone();
        let data = data.clone();
        let error = error.clone();
        use_callback((), move |_, _| {
            total_balance.set(0.0);
            data.set(Vec::new());
            error.set(None);
        })
    };

    let state = FinanceState {
        total_balance: *total_balance,
        data: (*data).clone(),
        error: (*error).clone(),
        loading: *loading,
    };

    let actions = UseFinanceActions {
        fetch,
        add,
        update,
        delete,
        set_balance,
        reset,
    };

    UseFinanceResult { state, actions }
}
