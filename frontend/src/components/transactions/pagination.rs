use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    /// Total page count; the control renders nothing for fewer than two.
    pub pages: usize,
    /// Effective 1-based page.
    pub current: usize,
    pub on_select: Callback<usize>,
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    if props.pages < 2 {
        return html! {};
    }

    html! {
        <div class="pagination">
            {for (1..=props.pages).map(|page| {
                let class = if page == props.current { "page-button active" } else { "page-button" };
                let on_select = props.on_select.clone();

                html! {
                    <button
                        type="button"
                        class={class}
                        onclick={Callback::from(move |_| on_select.emit(page))}
                    >
                        {page}
                    </button>
                }
            })}
        </div>
    }
}
