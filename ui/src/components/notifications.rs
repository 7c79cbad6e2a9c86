use dioxus::prelude::*;

/// Kind of transient notice shown in the tray.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A notification currently on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub title: Option<String>,
    pub lines: Vec<String>,
}

/// Requests components send to the notification coroutine.
#[derive(Debug, Clone)]
pub enum NoticeRequest {
    Success { title: String, lines: Vec<String> },
    Error { body: String },
    Dismiss { id: u64 },
}

/// How long a notice stays up before dismissing itself.
#[allow(dead_code)] // read in WASM builds
const AUTO_DISMISS_MS: u32 = 5_000;

/// Handle for posting notices from any component.
pub fn use_notifier() -> Coroutine<NoticeRequest> {
    use_coroutine_handle::<NoticeRequest>()
}

/// Start the notification coroutine. Call once at the app root, after the
/// notice list context is provided.
pub fn use_notice_coroutine() {
    let mut notices = use_context::<Signal<Vec<Notice>>>();

    use_coroutine(move |mut rx: UnboundedReceiver<NoticeRequest>| async move {
        use futures::stream::FuturesUnordered;
        use futures::StreamExt;

        let mut timers = FuturesUnordered::new();
        let mut next_id: u64 = 0;

        loop {
            futures::select! {
                request = rx.next() => {
                    let Some(request) = request else { break };
                    match request {
                        NoticeRequest::Success { title, lines } => {
                            next_id += 1;
                            notices.write().push(Notice {
                                id: next_id,
                                kind: NoticeKind::Success,
                                title: Some(title),
                                lines,
                            });
                            timers.push(dismiss_after(next_id));
                        }
                        NoticeRequest::Error { body } => {
                            next_id += 1;
                            notices.write().push(Notice {
                                id: next_id,
                                kind: NoticeKind::Error,
                                title: None,
                                lines: vec![body],
                            });
                            timers.push(dismiss_after(next_id));
                        }
                        NoticeRequest::Dismiss { id } => {
                            notices.write().retain(|n| n.id != id);
                        }
                    }
                }
                id = timers.select_next_some() => {
                    notices.write().retain(|n| n.id != id);
                }
            }
        }
    });
}

async fn dismiss_after(id: u64) -> u64 {
    #[cfg(target_family = "wasm")]
    {
        gloo_timers::future::TimeoutFuture::new(AUTO_DISMISS_MS).await;
    }
    #[cfg(not(target_family = "wasm"))]
    {
        // No timer off the web; notices stay until dismissed by hand.
        futures::future::pending::<()>().await;
    }
    id
}

/// Fixed overlay rendering the active notices. Clicking a notice
/// dismisses it early.
#[component]
pub fn NotificationTray() -> Element {
    let notices = use_context::<Signal<Vec<Notice>>>();
    let notifier = use_notifier();
    let current = notices.read().clone();

    rsx! {
        div { class: "notice-tray",
            {current.into_iter().map(|notice| {
                let class_name = match notice.kind {
                    NoticeKind::Success => "notice notice-success",
                    NoticeKind::Error => "notice notice-error",
                };
                let id = notice.id;
                rsx! {
                    div {
                        key: "{id}",
                        class: "{class_name}",
                        onclick: move |_| notifier.send(NoticeRequest::Dismiss { id }),
                        if let Some(title) = notice.title.as_ref() {
                            h4 { "{title}" }
                        }
                        for line in notice.lines.iter() {
                            p { "{line}" }
                        }
                    }
                }
            })}
        }
    }
}
