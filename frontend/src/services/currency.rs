use gloo::net::http::Request;
use serde::{Deserialize, Serialize};
use shared::{CurrencyRate, NbpResponse};

const NBP_BASE_URL: &str = "https://api.nbp.pl/api/exchangerates/rates/c";
const CACHE_KEY_PREFIX: &str = "currencyRates";

/// Cached rates older than this are refetched.
pub const CACHE_TTL_MS: f64 = 60.0 * 60.0 * 1000.0;

/// Rates for one currency code together with the time they were fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedRates {
    pub rates: Vec<CurrencyRate>,
    /// Milliseconds since the epoch at fetch time.
    pub fetched_at: f64,
}

/// Whether a cache entry fetched at `fetched_at` is still usable at `now`.
pub fn is_fresh(fetched_at: f64, now: f64, ttl_ms: f64) -> bool {
    now - fetched_at < ttl_ms
}

/// Single call to the NBP rate service; no retry.
pub async fn fetch_currency(code: &str) -> Result<Vec<CurrencyRate>, String> {
    let url = format!("{}/{}/last/?format=json", NBP_BASE_URL, code.to_lowercase());

    match Request::get(&url).send().await {
        Ok(response) => {
            if response.ok() {
                match response.json::<NbpResponse>().await {
                    Ok(body) => Ok(body.rates.into_iter().map(CurrencyRate::from).collect()),
                    Err(e) => Err(format!("Failed to parse rates: {}", e)),
                }
            } else {
                Err(format!(
                    "Network response was not ok: {}",
                    response.status_text()
                ))
            }
        }
        Err(e) => Err(format!("Network error: {}", e)),
    }
}

/// Rates for `code`, served from the local-storage cache while the entry
/// is within [`CACHE_TTL_MS`], refetched and re-cached otherwise.
pub async fn rates_for(code: &str) -> Result<Vec<CurrencyRate>, String> {
    let now = js_sys::Date::now();
    if let Some(cached) = load_cached(code) {
        if is_fresh(cached.fetched_at, now, CACHE_TTL_MS) {
            return Ok(cached.rates);
        }
    }

    let rates = fetch_currency(code).await?;
    store_cached(
        code,
        &CachedRates {
            rates: rates.clone(),
            fetched_at: now,
        },
    );
    Ok(rates)
}

fn cache_key(code: &str) -> String {
    format!("{}::{}", CACHE_KEY_PREFIX, code.to_lowercase())
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

fn load_cached(code: &str) -> Option<CachedRates> {
    let raw = storage()?.get_item(&cache_key(code)).ok()??;
    serde_json::from_str(&raw).ok()
}

fn store_cached(code: &str, cached: &CachedRates) {
    if let Some(storage) = storage() {
        if let Ok(raw) = serde_json::to_string(cached) {
            let _ = storage.set_item(&cache_key(code), &raw);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_fresh_within_ttl() {
        assert!(is_fresh(0.0, CACHE_TTL_MS - 1.0, CACHE_TTL_MS));
        assert!(!is_fresh(0.0, CACHE_TTL_MS, CACHE_TTL_MS));
        assert!(!is_fresh(0.0, CACHE_TTL_MS + 1.0, CACHE_TTL_MS));
    }

    #[test]
    fn test_cached_rates_round_trip() {
        let cached = CachedRates {
            rates: vec![CurrencyRate { buy: 4.12, sale: 4.02 }],
            fetched_at: 1_700_000_000_000.0,
        };
        let raw = serde_json::to_string(&cached).unwrap();
        let restored: CachedRates = serde_json::from_str(&raw).unwrap();
        assert_eq!(restored, cached);
    }

    #[test]
    fn test_cache_key_per_code() {
        assert_eq!(cache_key("USD"), "currencyRates::usd");
        assert_ne!(cache_key("USD"), cache_key("EUR"));
    }
}
