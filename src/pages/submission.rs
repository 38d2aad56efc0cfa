//! Public submission form: name, social-media handle, and image uploads.

use leptos::prelude::*;

use crate::state::form::FormState;

/// Submission page — cumulative image picker with local previews and a
/// single in-flight multipart submit.
#[component]
pub fn SubmissionPage() -> impl IntoView {
    let form = RwSignal::new(FormState::default());

    // Selected file blobs are browser objects and live outside FormState
    // so the state model stays testable off-wasm. Previews are appended in
    // lock-step with this list.
    #[cfg(feature = "hydrate")]
    let selected = RwSignal::new_local(Vec::<web_sys::File>::new());

    let on_file_change = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::Event| {
                use wasm_bindgen::JsCast;

                let Some(input) = ev
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                else {
                    return;
                };
                let Some(files) = input.files() else {
                    return;
                };

                let mut batch = Vec::new();
                let mut urls = Vec::new();
                for i in 0..files.length() {
                    let Some(file) = files.get(i) else {
                        continue;
                    };
                    let Some(url) = crate::util::previews::preview_url(&file) else {
                        continue;
                    };
                    batch.push(file);
                    urls.push(url);
                }

                selected.update(|s| s.extend(batch));
                form.update(|f| f.append_previews(urls));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::Event| {}
        }
    };

    let on_submit = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();

                let mut started = false;
                form.update(|f| started = f.begin_submit());
                if !started {
                    return;
                }

                let name = form.with_untracked(|f| f.name.clone());
                let handle = form.with_untracked(|f| f.social_media_handle.clone());
                let files = selected.get_untracked();

                leptos::task::spawn_local(async move {
                    match crate::net::api::submit_entry(&name, &handle, &files).await {
                        Ok(resp) => match resp.images {
                            Some(images) => {
                                let old = form.with_untracked(|f| f.previews.clone());
                                crate::util::previews::revoke_all(&old);
                                selected.update(Vec::clear);
                                form.update(|f| {
                                    f.complete(images.into_iter().map(|i| i.url).collect());
                                });
                            }
                            None => form.update(|f| f.fail("Failed to upload images.")),
                        },
                        Err(e) => {
                            leptos::logging::warn!("submit failed: {e}");
                            form.update(|f| f.fail("Failed to submit form. Please try again."));
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

    view! {
        <div class="form-container">
            <h2>"User Submission Form"</h2>

            <a href="/admin">
                <button class="admin-link-btn">"Admin View"</button>
            </a>

            <form class="submission-form" on:submit=on_submit>
                <div class="form-group">
                    <label for="name">"Name:"</label>
                    <input
                        type="text"
                        id="name"
                        name="name"
                        required
                        prop:value=move || form.get().name
                        on:input=move |ev| {
                            form.update(|f| f.name = event_target_value(&ev));
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="socialMediaHandle">"Social Media Handle:"</label>
                    <input
                        type="text"
                        id="socialMediaHandle"
                        name="socialMediaHandle"
                        required
                        prop:value=move || form.get().social_media_handle
                        on:input=move |ev| {
                            form.update(|f| f.social_media_handle = event_target_value(&ev));
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="images">"Upload Images:"</label>
                    <input
                        type="file"
                        id="images"
                        name="images"
                        multiple
                        accept="image/*"
                        required
                        on:change=on_file_change
                    />
                </div>

                <div class="selected-images-list">
                    <h3>"Selected Images:"</h3>
                    <ul>
                        {move || {
                            form.get()
                                .previews
                                .into_iter()
                                .map(|url| view! { <li><img src=url/></li> })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </div>

                <button
                    type="submit"
                    class="submit-btn"
                    disabled=move || form.get().submitting
                >
                    {move || if form.get().submitting { "Submitting..." } else { "Submit" }}
                </button>

                <Show when=move || !form.get().message.is_empty()>
                    <p class="submission-message">{move || form.get().message}</p>
                </Show>
            </form>
        </div>
    }
}
