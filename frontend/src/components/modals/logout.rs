use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LogoutModalProps {
    pub on_confirm: Callback<()>,
    pub on_close: Callback<()>,
}

#[function_component(LogoutModal)]
pub fn logout_modal(props: &LogoutModalProps) -> Html {
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

    let on_confirm_click = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| {
            on_confirm.emit(());
        })
    };

    let on_cancel_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    html! {
        <div class="logout-modal-backdrop" onclick={on_backdrop_click}>
            <div class="logout-modal" onclick={on_modal_click}>
                <p class="logout-question">{ "Are you sure you want to log out?" }</p>
                <div class="logout-modal-buttons">
                    <button type="button" class="btn btn-primary" onclick={on_confirm_click}>
                        { "Logout" }
                    </button>
                    <button type="button" class="btn btn-secondary" onclick={on_cancel_click}>
                        { "Cancel" }
                    </button>
                </div>
            </div>
        </div>
    }
}
