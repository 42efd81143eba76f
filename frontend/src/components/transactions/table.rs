use shared::Transaction;
use yew::prelude::*;

use crate::services::stats::format_short_date;

#[derive(Properties, PartialEq)]
pub struct TransactionTableProps {
    /// Rows for the current page only.
    pub transactions: Vec<Transaction>,
    pub loading: bool,
    pub on_edit: Callback<String>,
    pub on_delete: Callback<String>,
}

#[function_component(TransactionTable)]
pub fn transaction_table(props: &TransactionTableProps) -> Html {
    html! {
        <section class="transactions-section">
            {if props.loading {
                html! { <div class="loading">{"Loading transactions..."}</div> }
            } else if props.transactions.is_empty() {
                html! { <div class="empty">{"No transactions yet."}</div> }
            } else {
                html! {
                    <div class="table-container">
                        <table class="transactions-table">
                            <thead>
                                <tr>
                                    <th>{"Date"}</th>
                                    <th>{"Type"}</th>
                                    <th>{"Category"}</th>
                                    <th>{"Comment"}</th>
                                    <th>{"Sum"}</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {for props.transactions.iter().map(|transaction| {
                                    let id = transaction.id.clone();
                                    let on_edit = {
                                        let on_edit = props.on_edit.clone();
                                        let id = id.clone();
                                        Callback::from(move |_| on_edit.emit(id.clone()))
                                    };
                                    let on_delete = {
                                        let on_delete = props.on_delete.clone();
                                        let id = id.clone();
                                        Callback::from(move |_| on_delete.emit(id.clone()))
                                    };
                                    let sum_class = match transaction.transaction_type {
                                        shared::TransactionType::Income => "sum income",
                                        shared::TransactionType::Expense => "sum expense",
                                    };

                                    html! {
                                        <tr key={transaction.id.clone()}>
                                            <td class="date">{format_short_date(&transaction.date)}</td>
                                            <td class="type">{transaction.transaction_type.sign()}</td>
                                            <td class="category">
                                                {transaction.category.clone().unwrap_or_else(|| "Income".to_string())}
                                            </td>
                                            <td class="comment">{transaction.comment.clone().unwrap_or_default()}</td>
                                            <td class={sum_class}>{format!("{:.2}", transaction.amount)}</td>
                                            <td class="actions">
                                                <button type="button" class="edit" onclick={on_edit}>{"Edit"}</button>
                                                <button type="button" class="delete" onclick={on_delete}>{"Delete"}</button>
                                            </td>
                                        </tr>
                                    }
                                })}
                            </tbody>
                        </table>
                    </div>
                }
            }}
        </section>
    }
}
