use shared::Transaction;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::components::statistics::chart::StatisticsChart;
use crate::services::stats;

#[derive(Properties, PartialEq)]
pub struct StatisticsTabProps {
    pub transactions: Vec<Transaction>,
}

/// Per-period expense breakdown with category colors and income/expense totals.
#[function_component(StatisticsTab)]
pub fn statistics_tab(props: &StatisticsTabProps) -> Html {
    let selected_month = use_state(|| None::<String>);
    let selected_year = use_state(|| None::<String>);

    let years = stats::distinct_years(&props.transactions);
    let months = stats::months_for_year(&props.transactions, selected_year.as_deref());

    let month_code = selected_month
        .as_deref()
        .and_then(stats::month_name_to_code);
    let filtered = stats::filter_by_period(
        &props.transactions,
        month_code,
        selected_year.as_deref(),
    );
    let breakdown = stats::expense_by_category(&filtered);
    let colors = stats::category_colors(&filtered);
    let totals = stats::category_totals(&filtered);

    let on_month_change = {
        let selected_month = selected_month.clone();
        Callback::from(move |event: Event| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            let value = select.value();
            selected_month.set(if value.is_empty() { None } else { Some(value) });
        })
    };

    let on_year_change = {
        let selected_month = selected_month.clone();
        let selected_year = selected_year.clone();
        Callback::from(move |event: Event| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            let value = select.value();
            // The month list depends on the year, so a stale pick is dropped.
            selected_month.set(None);
            selected_year.set(if value.is_empty() { None } else { Some(value) });
        })
    };

    html! {
        <div class="statistics-tab">
            <h2 class="statistics-title">{ "Statistics" }</h2>
            <StatisticsChart breakdown={breakdown.clone()} />
            <div class="statistics-filters">
                <select class="statistics-select" onchange={on_month_change}>
                    <option value="" selected={selected_month.is_none()}>{ "All months" }</option>
                    { for months.iter().map(|name| html! {
                        <option
                            value={*name}
                            selected={selected_month.as_deref() == Some(*name)}
                        >
                            { *name }
                        </option>
                    }) }
                </select>
                <select class="statistics-select" onchange={on_year_change}>
                    <option value="" selected={selected_year.is_none()}>{ "All years" }</option>
                    { for years.iter().map(|year| html! {
                        <option
                            value={year.clone()}
                            selected={selected_year.as_deref() == Some(year.as_str())}
                        >
                            { year.clone() }
                        </option>
                    }) }
                </select>
            </div>
            <ul class="statistics-breakdown">
                { for breakdown.iter().map(|(category, sum)| {
                    let color = colors.get(category).copied().unwrap_or("rgba(150,150,150,1)");
                    html! {
                        <li class="statistics-row" key={category.clone()}>
                            <span
                                class="statistics-swatch"
                                style={format!("background-color: {color}")}
                            />
                            <span class="statistics-category">{ category.clone() }</span>
                            <span class="statistics-sum">{ format!("{sum:.2}") }</span>
                        </li>
                    }
                }) }
            </ul>
            <div class="statistics-totals">
                <p class="statistics-total statistics-total--expense">
                    <span>{ "Expenses:" }</span>
                    <span>{ format!("{:.2}", totals.expense) }</span>
                </p>
                <p class="statistics-total statistics-total--income">
                    <span>{ "Income:" }</span>
                    <span>{ format!("{:.2}", totals.income) }</span>
                </p>
            </div>
        </div>
    }
}
