use shared::RegisterRequest;
use web_sys::{HtmlInputElement, MouseEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RegisterFormProps {
    pub on_submit: Callback<RegisterRequest>,
    pub on_switch_to_login: Callback<()>,
}

#[function_component(RegisterForm)]
pub fn register_form(props: &RegisterFormProps) -> Html {
    let username = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let confirm_password = use_state(String::new);
    let error_message = use_state(|| Option::<String>::None);

    let on_username_change = {
        let username = username.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            username.set(input.value());
        })
    };

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

    let on_confirm_change = {
        let confirm_password = confirm_password.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            confirm_password.set(input.value());
        })
    };

    let on_submit = {
        let username = username.clone();
        let email = email.clone();
        let password = password.clone();
        let confirm_password = confirm_password.clone();
        let error_message = error_message.clone();
        let submit = props.on_submit.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let username_value = username.trim().to_string();
            if username_value.is_empty() || username_value.len() > 12 {
                error_message.set(Some("Name must be 1 to 12 characters".to_string()));
                return;
            }
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
            if password_value != *confirm_password {
                error_message.set(Some("Passwords do not match".to_string()));
                return;
            }

            error_message.set(None);
            submit.emit(RegisterRequest {
                username: username_value,
                email: email_value,
                password: password_value,
            });
        })
    };

    let on_login_click = {
        let on_switch = props.on_switch_to_login.clone();
        Callback::from(move |_: MouseEvent| {
            on_switch.emit(());
        })
    };

    html! {
        <form class="auth-form" onsubmit={on_submit}>
            <h2 class="auth-title">{ "Penny Tracker" }</h2>
            <input
                class="auth-input"
                type="text"
                placeholder="First name"
                value={(*username).clone()}
                onchange={on_username_change}
            />
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
            <input
                class="auth-input"
                type="password"
                placeholder="Confirm password"
                value={(*confirm_password).clone()}
                onchange={on_confirm_change}
            />

            if let Some(message) = error_message.as_ref() {
                <p class="auth-error">{ message.clone() }</p>
            }

            <button type="submit" class="btn btn-primary">{ "Register" }</button>
            <button type="button" class="btn btn-secondary" onclick={on_login_click}>
                { "Log in" }
            </button>
        </form>
    }
}
