//! The HTTP boundary: compare/coach POSTs and the static catalog GET.
//!
//! Endpoints are same-origin relative paths; in deployment the relay
//! serves them, in development the dev server proxies them.

/// Compare endpoint, relayed to the analysis backend.
pub const COMPARE_URL: &str = "/compare";
/// Coach endpoint, relayed to the analysis backend.
pub const COACH_URL: &str = "/coach";
/// Static game-data catalog staged next to the app assets.
pub const CHAMPION_JSON_URL: &str = "/lol/15.22.1/data/en_US/champion.json";

/// Phase error text for a non-success response: the service's body
/// when it sent one, otherwise a synthesized status line.
#[must_use]
pub fn error_text(what: &str, status: u16, body: &str) -> String {
    if body.trim().is_empty() {
        format!("{what} request failed with status {status}")
    } else {
        body.to_string()
    }
}

#[cfg(target_arch = "wasm32")]
mod fetch {
    use gloo_net::http::Request;
    use riftcoach_core::{
        ChampionCatalog, CoachRequest, CoachResponse, CompareRequest, ComparisonReport,
    };
    use serde::Serialize;
    use serde::de::DeserializeOwned;

    use super::{CHAMPION_JSON_URL, COACH_URL, COMPARE_URL, error_text};

    async fn post_json<B, T>(url: &str, what: &str, body: &B) -> Result<T, String>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let response = Request::post(url)
            .json(body)
            .map_err(|err| format!("{what} request could not be encoded: {err}"))?
            .send()
            .await
            .map_err(|err| format!("{what} request failed: {err}"))?;

        if !response.ok() {
            let body = response.text().await.unwrap_or_default();
            return Err(error_text(what, response.status(), &body));
        }
        response
            .json::<T>()
            .await
            .map_err(|err| format!("{what} response was not valid JSON: {err}"))
    }

    /// Run the compare phase. The error string becomes the phase's
    /// failure text as-is.
    pub async fn post_compare(request: &CompareRequest) -> Result<ComparisonReport, String> {
        post_json(COMPARE_URL, "Compare", request).await
    }

    /// Run the coach phase against a full comparison report.
    pub async fn post_coach(request: &CoachRequest) -> Result<String, String> {
        let response: CoachResponse = post_json(COACH_URL, "Coach", request).await?;
        Ok(response.coach_text)
    }

    /// Fetch the champion catalog once at boot. Every failure path
    /// degrades to an empty catalog; icons fall back to plain tiles
    /// and no wizard step is blocked.
    pub async fn fetch_champion_catalog() -> ChampionCatalog {
        if let Ok(response) = Request::get(CHAMPION_JSON_URL).send().await
            && response.ok()
            && let Ok(text) = response.text().await
            && let Ok(catalog) = ChampionCatalog::from_json(&text)
        {
            return catalog;
        }
        log::warn!("champion catalog unavailable; champion tiles will have no icons");
        ChampionCatalog::default()
    }
}

#[cfg(target_arch = "wasm32")]
pub use fetch::{fetch_champion_catalog, post_coach, post_compare};
