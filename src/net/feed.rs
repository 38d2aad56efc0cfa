//! Live submission feed over the push channel.
//!
//! The feed is opened once per login and appends exactly one record per
//! inbound message. There is no reconnection: closure or transport errors
//! are logged and the dashboard keeps whatever it already holds.
//! `FeedHandle::close` tears the connection down and is invoked on both
//! logout and view teardown.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use crate::net::types::UserRecord;

/// Build the push-channel URL for the page's origin.
///
/// Secure pages get `wss`, everything else `ws`; the channel lives at the
/// host root rather than under `/api`.
pub fn socket_url(href: &str, host: &str) -> String {
    let proto = if href.starts_with("https") { "wss" } else { "ws" };
    format!("{proto}://{host}/")
}

/// Parse one inbound feed message into a record.
///
/// Returns `None` for anything that does not deserialize as a user
/// record; callers log and skip those messages.
pub fn parse_user_record(text: &str) -> Option<UserRecord> {
    serde_json::from_str(text).ok()
}

/// Handle to an open feed connection.
///
/// `close` signals the receive loop to drop the socket; dropping the last
/// clone of the handle has the same effect. Owners still call `close`
/// explicitly on logout and teardown so shutdown is immediate.
#[cfg(feature = "hydrate")]
#[derive(Clone, Debug)]
pub struct FeedHandle {
    close: futures::channel::mpsc::UnboundedSender<()>,
}

#[cfg(feature = "hydrate")]
impl FeedHandle {
    /// Ask the receive loop to shut the connection down.
    pub fn close(&self) {
        let _ = self.close.unbounded_send(());
    }
}

/// Open the push channel and spawn its receive loop as a local task.
///
/// Each delivered record is appended to the tail of `admin`'s list,
/// independent of the snapshot fetch.
#[cfg(feature = "hydrate")]
pub fn spawn_feed(
    admin: leptos::prelude::RwSignal<crate::state::admin::AdminState>,
) -> FeedHandle {
    use futures::channel::mpsc;

    let (tx, rx) = mpsc::unbounded::<()>();
    leptos::task::spawn_local(feed_loop(admin, rx));
    FeedHandle { close: tx }
}

/// Receive loop: runs until the socket closes, errors, or the handle asks
/// for shutdown.
#[cfg(feature = "hydrate")]
async fn feed_loop(
    admin: leptos::prelude::RwSignal<crate::state::admin::AdminState>,
    mut close_rx: futures::channel::mpsc::UnboundedReceiver<()>,
) {
    use futures::StreamExt;
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;
    use leptos::prelude::Update;

    let href = web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default();
    let host = web_sys::window()
        .and_then(|w| w.location().host().ok())
        .unwrap_or_else(|| "localhost:3000".to_owned());
    let url = socket_url(&href, &host);

    let ws = match WebSocket::open(&url) {
        Ok(ws) => ws,
        Err(e) => {
            leptos::logging::warn!("feed open failed: {e}");
            return;
        }
    };

    // The write half is never used but must stay alive for the duration
    // of the connection; dropping both halves closes the socket.
    let (_write, read) = ws.split();
    let mut read = read.fuse();

    loop {
        futures::select! {
            _ = close_rx.next() => {
                leptos::logging::log!("feed closed by client");
                break;
            }
            msg = read.next() => match msg {
                Some(Ok(Message::Text(text))) => {
                    if let Some(user) = parse_user_record(&text) {
                        admin.update(|a| a.push_user(user));
                    } else {
                        leptos::logging::warn!("feed message ignored: {text}");
                    }
                }
                Some(Ok(Message::Bytes(_))) => {}
                Some(Err(e)) => {
                    leptos::logging::warn!("feed error: {e}");
                    break;
                }
                None => {
                    leptos::logging::log!("feed connection closed");
                    break;
                }
            },
        }
    }
}
