//! HTTP helpers for fetching documents from the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): returns an error without touching the network; the
//! content page only loads documents after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Network errors, non-2xx statuses, and undecodable bodies all collapse into
//! an `Err(String)` so the caller can log and keep whatever it already shows.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
fn document_request_failed_message(status: u16) -> String {
    format!("document request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn document_decode_failed_message(identifier: &str, err: &str) -> String {
    format!("document {identifier} is not readable text: {err}")
}

/// Fetch the raw text of the document at `identifier` (a URL path such as
/// `/markdown/introduction.md`).
///
/// # Errors
///
/// Returns an error string if the request cannot be sent, the server answers
/// with a non-2xx status, or the body is not valid text.
pub async fn fetch_document(identifier: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(identifier)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(document_request_failed_message(resp.status()));
        }
        resp.text()
            .await
            .map_err(|e| document_decode_failed_message(identifier, &e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = identifier;
        Err("not available on server".to_owned())
    }
}
