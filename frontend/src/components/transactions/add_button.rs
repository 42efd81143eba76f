use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AddTransactionButtonProps {
    pub on_click: Callback<()>,
}

/// Floating action button opening the add-transaction modal.
#[function_component(AddTransactionButton)]
pub fn add_transaction_button(props: &AddTransactionButtonProps) -> Html {
    let on_click = {
        let on_click = props.on_click.clone();
        Callback::from(move |_: MouseEvent| on_click.emit(()))
    };

    html! {
        <button type="button" class="add-transaction-button" onclick={on_click}>
            {"+"}
        </button>
    }
}
