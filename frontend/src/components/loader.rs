use yew::prelude::*;

#[function_component(Loader)]
pub fn loader() -> Html {
    html! {
        <div class="loader-overlay">
            <div class="loader-spinner" />
        </div>
    }
}
