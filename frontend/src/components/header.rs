use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    /// Email of the signed-in user, if any.
    pub email: Option<String>,
    pub on_logout_click: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let on_exit = {
        let on_logout_click = props.on_logout_click.clone();
        Callback::from(move |_: MouseEvent| {
            on_logout_click.emit(());
        })
    };

    html! {
        <header class="header">
            <div class="header-inner">
                <div class="logo">
                    <span class="logo-mark">{"💰"}</span>
                    <span class="app-name">{"Penny Tracker"}</span>
                </div>
                <div class="header-right">
                    {if let Some(email) = &props.email {
                        html! { <span class="user-email">{email}</span> }
                    } else {
                        html! {}
                    }}
                    <button type="button" class="exit-button" onclick={on_exit}>
                        {"Exit"}
                    </button>
                </div>
            </div>
        </header>
    }
}
