use shared::Credentials;
use web_sys::{HtmlInputElement, MouseEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoginFormProps {
    pub on_submit: Callback<Credentials>,
    pub on_switch_to_register: Callback<()>,
}

#[function_component(LoginForm)]
pub fn login_form(props: &LoginFormProps) -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error_message = use_state(|| Option::<String>::None);

    let on_email_change = {
        let email = email.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        let error_message = error_message.clone();
        let submit = props.on_submit.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let email_value = email.trim().to_string();
            if email_value.is_empty() || !email_value.contains('@') {
                error_message.set(Some("Please enter a valid email".to_string()));
                return;
            }
            let password_value = (*password).clone();
            if !(6..=12).contains(&password_value.len()) {
                error_message.set(Some("Password must be 6 to 12 characters".to_string()));
                return;
            }

            error_message.set(None);
            submit.emit(Credentials {
                email: email_value,
                password: password_value,
            });
        })
    };

    let on_register_click = {
        let on_switch = props.on_switch_to_register.clone();
        Callback::from(move |_: MouseEvent| {
            on_switch.emit(());
        })
    };

    html! {
        <form class="auth-form" onsubmit={on_submit}>
            <h2 class="auth-title">{ "Penny Tracker" }</h2>
            <input
                class="auth-input"
                type="email"
                placeholder="E-mail"
                value={(*email).clone()}
                onchange={on_email_change}
            />
            <input
                class="auth-input"
                type="password"
                placeholder="Password"
                value={(*password).clone()}
                onchange={on_password_change}
            />

            if let Some(message) = error_message.as_ref() {
                <p class="auth-error">{ message.clone() }</p>
            }

            <button type="submit" class="btn btn-primary">{ "Log in" }</button>
            <button type="button" class="btn btn-secondary" onclick={on_register_click}>
                { "Register" }
            </button>
        </form>
    }
}
