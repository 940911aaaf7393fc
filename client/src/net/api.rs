//! REST helpers for the academic backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning empty data since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! The departments lookup is fire-and-forget: failures are logged and the
//! caller sees an empty list. There is no retry and no user-visible error.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::Department;

#[cfg(any(test, feature = "hydrate"))]
fn departments_endpoint() -> String {
    format!("{}/api/departments/", crate::config::API_BASE_URL)
}

#[cfg(any(test, feature = "hydrate"))]
fn departments_failed_message(status: u16) -> String {
    format!("departments request failed: {status}")
}

/// Fetch department records from `{API_BASE_URL}/api/departments/`.
/// Returns an empty list on any failure or on the server.
pub async fn fetch_departments() -> Vec<Department> {
    #[cfg(feature = "hydrate")]
    {
        let url = departments_endpoint();
        let resp = match gloo_net::http::Request::get(&url).send().await {
            Ok(resp) => resp,
            Err(e) => {
                log::error!("departments request error: {e}");
                return Vec::new();
            }
        };
        if !resp.ok() {
            log::error!("{}", departments_failed_message(resp.status()));
            return Vec::new();
        }
        match resp.json::<Vec<Department>>().await {
            Ok(departments) => departments,
            Err(e) => {
                log::error!("departments response decode error: {e}");
                Vec::new()
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Vec::new()
    }
}
