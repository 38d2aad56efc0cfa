//! Card component for one user submission on the admin dashboard.

use leptos::prelude::*;

use crate::net::types::UserRecord;

/// A submission card: name, handle, and thumbnails linking to the stored
/// images.
#[component]
pub fn UserCard(user: UserRecord) -> impl IntoView {
    let handle = format!("@{}", user.social_media_handle);

    view! {
        <div class="user-card">
            <h3>{user.name}</h3>
            <p class="user-card__handle">{handle}</p>
            <div class="user-card__images">
                {user
                    .images
                    .into_iter()
                    .map(|image| {
                        let href = image.url.clone();
                        view! {
                            <a href=href target="_blank" rel="noopener noreferrer">
                                <img class="user-card__thumb" src=image.url/>
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
