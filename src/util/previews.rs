//! Object-URL helpers for client-side image previews.
//!
//! Previews are blob URLs minted per selected file and revoked when the
//! form resets. Server URLs returned after upload are plain `https` URLs
//! and must never be revoked.

#[cfg(test)]
#[path = "previews_test.rs"]
mod previews_test;

/// Whether `url` is a locally minted blob URL rather than a server URL.
pub fn is_blob_url(url: &str) -> bool {
    url.starts_with("blob:")
}

/// Mint a preview URL for a selected file.
#[cfg(feature = "hydrate")]
pub fn preview_url(file: &web_sys::File) -> Option<String> {
    web_sys::Url::create_object_url_with_blob(file).ok()
}

/// Revoke previously minted blob URLs; anything else is left alone.
#[cfg(feature = "hydrate")]
pub fn revoke_all(urls: &[String]) {
    for url in urls {
        if is_blob_url(url) {
            let _ = web_sys::Url::revoke_object_url(url);
        }
    }
}
