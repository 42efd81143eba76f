use shared::CurrencyRate;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::currency;
use crate::services::logging::Logger;

const COMPONENT: &str = "CurrencyTab";
const CURRENCY_CODES: [&str; 2] = ["usd", "eur"];

/// Exchange rate table for USD and EUR, served from the hourly cache.
#[function_component(CurrencyTab)]
pub fn currency_tab() -> Html {
    let rates = use_state(Vec::<(String, CurrencyRate)>::new);
    let failed = use_state(|| false);

    {
        let rates = rates.clone();
        let failed = failed.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let mut loaded = Vec::with_capacity(CURRENCY_CODES.len());
                for code in CURRENCY_CODES {
                    match currency::rates_for(code).await {
                        // NBP answers with a single rate per table request.
                        Ok(fetched) => {
                            if let Some(rate) = fetched.into_iter().next() {
                                loaded.push((code.to_uppercase(), rate));
                            }
                        }
                        Err(message) => {
                            Logger::warn_with_component(COMPONENT, &message);
                            failed.set(true);
                        }
                    }
                }
                rates.set(loaded);
            });
        });
    }

    html! {
        <div class="currency-tab">
            <table class="currency-table">
                <thead>
                    <tr>
                        <th>{ "Currency" }</th>
                        <th>{ "Purchase" }</th>
                        <th>{ "Sale" }</th>
                    </tr>
                </thead>
                <tbody>
                    { for rates.iter().map(|(code, rate)| html! {
                        <tr key={code.clone()}>
                            <td>{ code.clone() }</td>
                            <td>{ format!("{:.2}", rate.buy) }</td>
                            <td>{ format!("{:.2}", rate.sale) }</td>
                        </tr>
                    }) }
                </tbody>
            </table>
            if *failed && rates.is_empty() {
                <p class="currency-error">{ "Exchange rates are unavailable right now." }</p>
            }
        </div>
    }
}
