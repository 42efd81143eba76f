use yew::prelude::*;

/// Dashboard tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    Statistics,
    Currency,
}

impl Tab {
    fn label(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Statistics => "Statistics",
            Tab::Currency => "Currency",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NavigationProps {
    pub active: Tab,
    pub on_select: Callback<Tab>,
}

#[function_component(Navigation)]
pub fn navigation(props: &NavigationProps) -> Html {
    html! {
        <nav class="navigation">
            {for [Tab::Home, Tab::Statistics, Tab::Currency].iter().map(|tab| {
                let tab = *tab;
                let class = if tab == props.active { "nav-item active" } else { "nav-item" };
                let on_select = props.on_select.clone();

                html! {
                    <button
                        type="button"
                        class={class}
                        onclick={Callback::from(move |_| on_select.emit(tab))}
                    >
                        {tab.label()}
                    </button>
                }
            })}
        </nav>
    }
}
