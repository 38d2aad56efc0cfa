//! Admin dashboard: login, submissions list, and the live feed.

use leptos::prelude::*;

use crate::components::user_card::UserCard;
use crate::state::admin::{AdminState, Phase};

/// Admin page — swaps between the login form and the dashboard based on
/// the authentication phase.
///
/// Login performs one token exchange, one snapshot fetch, and opens the
/// live feed exactly once. The feed handle is closed on logout and again
/// on view teardown so the connection never outlives the page.
#[component]
pub fn AdminPage() -> impl IntoView {
    let admin = RwSignal::new(AdminState::default());
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    let feed = RwSignal::new(None::<crate::net::feed::FeedHandle>);

    #[cfg(feature = "hydrate")]
    on_cleanup(move || {
        if let Some(handle) = feed.get_untracked() {
            handle.close();
        }
    });

    let on_login = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();

                let user_value = username.get_untracked();
                let pass_value = password.get_untracked();

                leptos::task::spawn_local(async move {
                    let session = crate::util::session::browser_session();
                    match crate::net::api::register_admin(&user_value, &pass_value).await {
                        Ok(token) => {
                            session.begin(&token);
                            admin.update(|a| a.login_succeeded());

                            // One snapshot fetch per login. A failure only
                            // logs; the dashboard shows its empty-list
                            // message instead.
                            let bearer = session.token().unwrap_or_default();
                            match crate::net::api::fetch_users(&bearer).await {
                                Ok(users) => admin.update(|a| a.hydrate_users(users)),
                                Err(e) => leptos::logging::warn!("users fetch failed: {e}"),
                            }

                            feed.set(Some(crate::net::feed::spawn_feed(admin)));
                        }
                        Err(e) => {
                            leptos::logging::warn!("login failed: {e}");
                            admin.update(|a| a.login_failed());
                        }
                    }
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
            }
        }
    };

    let on_logout = move |_| {
        username.set(String::new());
        password.set(String::new());
        admin.update(|a| a.logout());

        #[cfg(feature = "hydrate")]
        {
            if let Some(handle) = feed.get_untracked() {
                handle.close();
            }
            feed.set(None);
            crate::util::session::browser_session().end();
        }
    };

    view! {
        <div class="admin-container">
            {move || match admin.get().phase {
                Phase::Unauthenticated => {
                    view! {
                        <div class="login-container">
                            <h2>"Admin Login"</h2>
                            <form on:submit=on_login>
                                <div class="form-group">
                                    <label for="username">"Username:"</label>
                                    <input
                                        type="text"
                                        id="username"
                                        name="username"
                                        required
                                        prop:value=move || username.get()
                                        on:input=move |ev| username.set(event_target_value(&ev))
                                    />
                                </div>

                                <div class="form-group">
                                    <label for="password">"Password:"</label>
                                    <input
                                        type="password"
                                        id="password"
                                        name="password"
                                        required
                                        prop:value=move || password.get()
                                        on:input=move |ev| password.set(event_target_value(&ev))
                                    />
                                </div>

                                <Show when=move || !admin.get().error.is_empty()>
                                    <p class="error">{move || admin.get().error}</p>
                                </Show>

                                <button type="submit" class="submit-btn">"Login"</button>
                            </form>
                        </div>
                    }
                        .into_any()
                }
                Phase::Authenticated => {
                    view! {
                        <div class="dashboard-container">
                            <h1>"User Submissions Dashboard"</h1>
                            <button class="logout-btn" on:click=on_logout>
                                "Logout"
                            </button>

                            <div class="users-grid">
                                {move || {
                                    let users = admin.get().users;
                                    if users.is_empty() {
                                        view! { <p>"No user submissions found."</p> }.into_any()
                                    } else {
                                        view! {
                                            <div class="users-grid__cards">
                                                {users
                                                    .into_iter()
                                                    .map(|user| view! { <UserCard user=user/> })
                                                    .collect::<Vec<_>>()}
                                            </div>
                                        }
                                            .into_any()
                                    }
                                }}
                            </div>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
