use shared::{Transaction, TransactionType, UpdateTransactionRequest};
use web_sys::{HtmlInputElement, HtmlSelectElement, MouseEvent};
use yew::prelude::*;

use crate::services::stats::CATEGORY_COLORS;

#[derive(Properties, PartialEq)]
pub struct EditTransactionModalProps {
    pub transaction: Transaction,
    pub on_submit: Callback<UpdateTransactionRequest>,
    pub on_close: Callback<()>,
}

#[function_component(EditTransactionModal)]
pub fn edit_transaction_modal(props: &EditTransactionModalProps) -> Html {
    let seed = props.transaction.clone();
    let is_expense = use_state(|| seed.transaction_type == TransactionType::Expense);
    let category = use_state(|| seed.category.clone().unwrap_or_default());
    let amount = use_state(|| format!("{:.2}", seed.amount));
    let date = use_state(|| seed.date.clone());
    let comment = use_state(|| seed.comment.clone().unwrap_or_default());
    let error_message = use_state(|| Option::<String>::None);

    // Re-seed the form when a different transaction is picked for editing.
    use_effect_with(props.transaction.clone(), {
        let is_expense = is_expense.clone();
        let category = category.clone();
        let amount = amount.clone();
        let date = date.clone();
        let comment = comment.clone();
        let error_message = error_message.clone();
        move |transaction| {
            is_expense.set(transaction.transaction_type == TransactionType::Expense);
            category.set(transaction.category.clone().unwrap_or_default());
            amount.set(format!("{:.2}", transaction.amount));
            date.set(transaction.date.clone());
            comment.set(transaction.comment.clone().unwrap_or_default());
            error_message.set(None);
            || ()
        }
    });

    let on_type_toggle = {
        let is_expense = is_expense.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            is_expense.set(!input.checked());
        })
    };

    let on_category_change = {
        let category = category.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            category.set(select.value());
        })
    };

    let on_amount_change = {
        let amount = amount.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            amount.set(input.value());
        })
    };

    let on_date_change = {
        let date = date.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            date.set(input.value());
        })
    };

    let on_comment_change = {
        let comment = comment.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            comment.set(input.value());
        })
    };

    let on_submit = {
        let transaction_id = props.transaction.id.clone();
        let is_expense = is_expense.clone();
        let category = category.clone();
        let amount = amount.clone();
        let date = date.clone();
        let comment = comment.clone();
        let error_message = error_message.clone();
        let submit = props.on_submit.clone();
        let on_close = props.on_close.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let parsed_amount = match amount.trim().parse::<f64>() {
                Ok(value) if value > 0.0 => value,
                _ => {
                    error_message.set(Some("Please enter a positive amount".to_string()));
                    return;
                }
            };

            let date_value = date.trim().to_string();
            if date_value.len() != 10 || date_value.matches('.').count() != 2 {
                error_message.set(Some("Please enter the date as dd.mm.yyyy".to_string()));
                return;
            }

            let transaction_type = if *is_expense {
                TransactionType::Expense
            } else {
                TransactionType::Income
            };

            let category_value = if *is_expense {
                let picked = (*category).clone();
                if picked.is_empty() {
                    error_message.set(Some("Please pick a category".to_string()));
                    return;
                }
                Some(picked)
            } else {
                None
            };

            let comment_value = comment.trim().to_string();
            submit.emit(UpdateTransactionRequest {
                transaction_id: transaction_id.clone(),
                date: date_value,
                transaction_type,
                category: category_value,
                comment: (!comment_value.is_empty()).then_some(comment_value),
                amount: parsed_amount,
            });
            on_close.emit(());
        })
    };

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_cancel_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    html! {
        <div class="transaction-modal-backdrop" onclick={on_backdrop_click}>
            <div class="transaction-modal" onclick={on_modal_click}>
                <h3 class="transaction-modal-title">{ "Edit transaction" }</h3>
                <form class="transaction-form" onsubmit={on_submit}>
                    <label class="transaction-type-switch">
                        <span class={classes!((!*is_expense).then_some("active"))}>{ "Income" }</span>
                        <input
                            type="checkbox"
                            checked={!*is_expense}
                            onchange={on_type_toggle}
                        />
                        <span class={classes!((*is_expense).then_some("active"))}>{ "Expense" }</span>
                    </label>

                    if *is_expense {
                        <select class="transaction-category" onchange={on_category_change}>
                            <option value="" selected={category.is_empty()}>
                                { "Select a category" }
                            </option>
                            { for CATEGORY_COLORS.iter().map(|(name, _)| html! {
                                <option
                                    value={*name}
                                    selected={category.as_str() == *name}
                                >
                                    { *name }
                                </option>
                            }) }
                        </select>
                    }

                    <input
                        class="transaction-amount"
                        type="text"
                        placeholder="0.00"
                        value={(*amount).clone()}
                        onchange={on_amount_change}
                    />
                    <input
                        class="transaction-date"
                        type="text"
                        placeholder="dd.mm.yyyy"
                        value={(*date).clone()}
                        onchange={on_date_change}
                    />
                    <input
                        class="transaction-comment"
                        type="text"
                        placeholder="Comment"
                        value={(*comment).clone()}
                        onchange={on_comment_change}
                    />

                    if let Some(message) = error_message.as_ref() {
                        <p class="transaction-form-error">{ message.clone() }</p>
                    }

                    <div class="transaction-modal-buttons">
                        <button type="submit" class="btn btn-primary">{ "Save" }</button>
                        <button
                            type="button"
                            class="btn btn-secondary"
                            onclick={on_cancel_click}
                        >
                            { "Cancel" }
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
