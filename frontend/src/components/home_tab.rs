use shared::Transaction;
use yew::prelude::*;

use crate::components::balance::Balance;
use crate::components::transactions::{AddTransactionButton, Pagination, TransactionTable};
use crate::services::stats::{self, PAGE_SIZE};

#[derive(Properties, PartialEq)]
pub struct HomeTabProps {
    pub transactions: Vec<Transaction>,
    pub total_balance: f64,
    pub loading: bool,
    pub on_add: Callback<()>,
    pub on_edit: Callback<String>,
    pub on_delete: Callback<String>,
}

/// Paginated transaction table with balance card and add button. The page
/// offset is view-local state and never leaves this component.
#[function_component(HomeTab)]
pub fn home_tab(props: &HomeTabProps) -> Html {
    let current_page = use_state(|| 1usize);

    let page = stats::paginate(&props.transactions, Some(*current_page), PAGE_SIZE);
    // The engine clamps out-of-range requests; mirror that for highlighting.
    let effective = (*current_page).clamp(1, page.pages.max(1));

    let on_select_page = {
        let current_page = current_page.clone();
        Callback::from(move |selected: usize| {
            current_page.set(selected);
        })
    };

    html! {
        <div class="home-tab">
            <Balance total_balance={props.total_balance} />
            <TransactionTable
                transactions={page.items.to_vec()}
                loading={props.loading}
                on_edit={props.on_edit.clone()}
                on_delete={props.on_delete.clone()}
            />
            <Pagination
                pages={page.pages}
                current={effective}
                on_select={on_select_page}
            />
            <AddTransactionButton on_click={props.on_add.clone()} />
        </div>
    }
}
