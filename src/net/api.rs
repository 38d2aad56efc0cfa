//! REST API helpers for communicating with the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so login and submission
//! failures degrade to inline messages without crashing hydration.

#![allow(clippy::unused_async)]

use super::types::UserRecord;

/// Exchange admin credentials for a session token via
/// `POST /api/register-admin`.
///
/// # Errors
///
/// Returns an error string on transport failure or any non-2xx response;
/// the caller treats both as invalid credentials.
pub async fn register_admin(username: &str, password: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = super::types::LoginRequest { username, password };
        let resp = gloo_net::http::Request::post("/api/register-admin")
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("login rejected: {}", resp.status()));
        }
        let body: super::types::TokenResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err("not available on server".to_owned())
    }
}

/// Fetch the submissions snapshot from `/api/users` with a bearer token.
///
/// # Errors
///
/// Returns an error string on transport failure, a non-2xx response, or an
/// unparseable body. The dashboard logs the error and keeps an empty list.
pub async fn fetch_users(token: &str) -> Result<Vec<UserRecord>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/users")
            .header("Authorization", &format!("Bearer {token}"))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("users fetch failed: {}", resp.status()));
        }
        resp.json::<Vec<UserRecord>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err("not available on server".to_owned())
    }
}

/// Post a submission as multipart form data to `/api/submit`.
///
/// Text fields are sent under `name` and `socialMediaHandle`; every
/// selected file goes under the shared `images` field. The browser sets
/// the multipart boundary itself, so no content-type header is added.
///
/// # Errors
///
/// Returns an error string if the form body cannot be built, the request
/// fails in transport, the response is non-2xx, or the body is not the
/// expected JSON shape.
#[cfg(feature = "hydrate")]
pub async fn submit_entry(
    name: &str,
    social_media_handle: &str,
    files: &[web_sys::File],
) -> Result<super::types::SubmitResponse, String> {
    let form = web_sys::FormData::new().map_err(|_| "could not build form data".to_owned())?;
    form.append_with_str("name", name)
        .map_err(|_| "could not build form data".to_owned())?;
    form.append_with_str("socialMediaHandle", social_media_handle)
        .map_err(|_| "could not build form data".to_owned())?;
    for file in files {
        form.append_with_blob_and_filename("images", file, &file.name())
            .map_err(|_| "could not build form data".to_owned())?;
    }

    let resp = gloo_net::http::Request::post("/api/submit")
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("submit failed: {}", resp.status()));
    }
    resp.json::<super::types::SubmitResponse>()
        .await
        .map_err(|e| e.to_string())
}
