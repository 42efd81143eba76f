use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BalanceProps {
    pub total_balance: f64,
}

#[function_component(Balance)]
pub fn balance(props: &BalanceProps) -> Html {
    html! {
        <div class="balance-card">
            <span class="balance-label">{"Your balance"}</span>
            <span class="balance-amount">{format!("₴ {:.2}", props.total_balance)}</span>
        </div>
    }
}
