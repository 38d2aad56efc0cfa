//! Wire-schema DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads (camelCase keys, a
//! Mongo-style `_id` document identifier) so serde round-trips stay
//! lossless for both the REST snapshot and feed messages.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A stored image reference returned by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    /// Public URL of the stored image.
    pub url: String,
}

/// One user submission, as returned by `/api/users` and pushed over the
/// live feed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Backend document identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Submitted display name.
    pub name: String,
    /// Submitted social-media handle, stored without the leading `@`.
    pub social_media_handle: String,
    /// Stored images for this submission, in upload order.
    #[serde(default)]
    pub images: Vec<ImageRef>,
}

/// Body of a 2xx `/api/submit` response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SubmitResponse {
    /// Stored image URLs; absent when the backend accepted the request but
    /// did not store the upload.
    pub images: Option<Vec<ImageRef>>,
}

/// Body of a successful `/api/register-admin` response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    /// Opaque session token presented on subsequent authenticated calls.
    pub token: String,
}

/// JSON body sent to `/api/register-admin`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}
